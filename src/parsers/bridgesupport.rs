//! BridgeSupport metadata loader.
//!
//! Only the parts of the document that describe Objective-C classes are
//! read:
//!
//! ```xml
//! <signatures version="1.0">
//!   <class name="CCNode">
//!     <method selector="setPosition:">
//!       <arg index="0" type="{CGPoint=ff}" declared_type="CGPoint"/>
//!     </method>
//!   </class>
//! </signatures>
//! ```
//!
//! Functions, constants, structs and the like are skipped, as are `arg` and
//! `retval` elements nested below another `arg` (block signatures).

use crate::core::{ClassMetadata, Metadata, MethodSignature, Selector, TypeRef};
use crate::errors::{BindgenError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const ROOT: &str = "signatures";

#[derive(Debug)]
struct MethodBuilder {
    selector: String,
    args: Vec<TypeRef>,
    retval: Option<TypeRef>,
}

#[derive(Debug)]
struct ClassBuilder {
    name: String,
    methods: Vec<MethodSignature>,
}

/// Streams the document and builds [`Metadata`] as elements close.
#[derive(Debug, Default)]
struct SignatureCollector {
    stack: Vec<String>,
    class: Option<ClassBuilder>,
    method: Option<MethodBuilder>,
    metadata: Metadata,
    saw_root: bool,
}

impl SignatureCollector {
    fn parent(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    fn open(&mut self, element: &BytesStart<'_>) -> Result<String> {
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();

        match (self.parent(), name.as_str()) {
            (None, ROOT) if !self.saw_root => self.saw_root = true,
            (None, other) => {
                return Err(BindgenError::structure(format!(
                    "expected <{}> root element, found <{}>",
                    ROOT, other
                )))
            }
            (Some(ROOT), "class") => {
                self.class = Some(ClassBuilder {
                    name: required_attr(element, "name")?,
                    methods: Vec::new(),
                });
            }
            (Some("class"), "method") if self.class.is_some() => {
                self.method = Some(MethodBuilder {
                    selector: required_attr(element, "selector")?,
                    args: Vec::new(),
                    retval: None,
                });
            }
            (Some("method"), "arg") => {
                if let Some(method) = self.method.as_mut() {
                    method.args.push(type_ref(element)?);
                }
            }
            (Some("method"), "retval") => {
                if let Some(method) = self.method.as_mut() {
                    if method.retval.is_some() {
                        return Err(BindgenError::structure(format!(
                            "method '{}' has more than one <retval>",
                            method.selector
                        )));
                    }
                    method.retval = Some(type_ref(element)?);
                }
            }
            _ => {}
        }

        Ok(name)
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.stack.pop();

        match (self.parent(), name) {
            (Some("class"), "method") => {
                if let (Some(method), Some(class)) = (self.method.take(), self.class.as_mut()) {
                    let selector = Selector::parse(&method.selector)?;
                    let signature =
                        MethodSignature::new(&class.name, selector, method.args, method.retval)?;
                    class.methods.push(signature);
                }
            }
            (Some(ROOT), "class") => {
                if let Some(class) = self.class.take() {
                    self.metadata.insert(ClassMetadata {
                        name: class.name,
                        methods: class.methods,
                    })?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Metadata> {
        if !self.saw_root {
            return Err(BindgenError::structure(format!(
                "document has no <{}> element",
                ROOT
            )));
        }
        if let Some(open) = self.stack.last() {
            return Err(BindgenError::structure(format!(
                "document ends inside <{}>",
                open
            )));
        }
        Ok(self.metadata)
    }
}

fn required_attr(element: &BytesStart<'_>, key: &str) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| BindgenError::structure(format!("bad attribute: {}", e)))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| BindgenError::structure(format!("bad attribute value: {}", e)))?;
            return Ok(value.into_owned());
        }
    }

    Err(BindgenError::structure(format!(
        "<{}> is missing the '{}' attribute",
        String::from_utf8_lossy(element.name().as_ref()),
        key
    )))
}

fn type_ref(element: &BytesStart<'_>) -> Result<TypeRef> {
    Ok(TypeRef::new(
        required_attr(element, "type")?,
        required_attr(element, "declared_type")?,
    ))
}

/// Parse a BridgeSupport document into per-class method signatures.
///
/// Fails on malformed XML, a root other than `<signatures>`, missing
/// attributes, a repeated class, or a selector whose arity disagrees with
/// its `<arg>` list.
pub fn parse_bridgesupport(input: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut collector = SignatureCollector::default();

    loop {
        let position = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = collector.open(e)?;
                collector.stack.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                let name = collector.open(e)?;
                collector.stack.push(name.clone());
                collector.close(&name)?;
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                collector.close(&name)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                let (line, column) = line_and_column(input, position);
                return Err(BindgenError::syntax(format!("XML error: {}", e), line, column));
            }
        }
    }

    collector.finish()
}

fn line_and_column(input: &str, offset: usize) -> (usize, usize) {
    let prefix = &input.as_bytes()[..offset.min(input.len())];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = prefix.iter().rev().take_while(|&&b| b != b'\n').count() + 1;
    (line, column)
}
