//! Sample inputs shaped like the cocos2d BridgeSupport export.

/// `NSObject` <- `CCNode` <- `CCSprite`, plus an unrelated `CCLayer`.
pub const HIERARCHY: &str = r#"{
    'NSObject': {'subclass': None, 'protocols': ['NSObject']},
    'CCNode': {'subclass': 'NSObject', 'protocols': []},
    'CCSprite': {'subclass': 'CCNode', 'protocols': ['CCRGBAProtocol', 'CCTextureProtocol']},
    'CCLayer': {'subclass': 'CCNode', 'protocols': ['CCStandardTouchDelegate']},
}
"#;

/// Methods covering every marshaled category plus a few that can't be bound.
pub const BRIDGESUPPORT: &str = r#"<?xml version="1.0" standalone="yes"?>
<signatures version="1.0">
  <class name="CCNode">
    <method selector="setX:y:">
      <arg index="0" type="f" declared_type="float"/>
      <arg index="1" type="f" declared_type="float"/>
      <retval type="v" declared_type="void"/>
    </method>
    <method selector="setTag:">
      <arg index="0" type="i" declared_type="NSInteger"/>
    </method>
    <method selector="tag">
      <retval type="i" declared_type="NSInteger"/>
    </method>
    <method selector="visible">
      <retval type="B" declared_type="BOOL"/>
    </method>
    <method selector="setPosition:">
      <arg index="0" type="{CGPoint=ff}" declared_type="CGPoint"/>
    </method>
    <method selector="cleanup"/>
  </class>
  <class name="CCSprite">
    <method selector="initWithFile:">
      <arg index="0" type="@" declared_type="NSString*"/>
      <retval type="@" declared_type="id"/>
    </method>
    <method selector="setOpacity:">
      <arg index="0" type="C" declared_type="GLubyte"/>
    </method>
    <method selector="runAction:">
      <arg index="0" type="@" declared_type="CCAction*"/>
      <retval type="@" declared_type="CCAction*"/>
    </method>
  </class>
  <class name="CCLayer">
    <method selector="setIsTouchEnabled:">
      <arg index="0" type="B" declared_type="BOOL"/>
    </method>
  </class>
</signatures>
"#;
