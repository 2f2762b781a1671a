use jsbindgen::codegen::{Banner, Naming};
use jsbindgen::commands::{run_generate, GenerateConfig};
use jsbindgen::errors::BindgenError;
use jsbindgen::io::RealFileSystem;
use jsbindgen::RootExclusion;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn config(output_dir: &Path, classes: &[&str]) -> GenerateConfig {
    GenerateConfig {
        bridgesupport: data("cocos2d.bridgesupport"),
        hierarchy: data("hierarchy.txt"),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        output_dir: output_dir.to_path_buf(),
        naming: Naming::default(),
        exclusion: RootExclusion::default(),
        banner: Banner::new("jsbindgen", "2012-03-01"),
        dry_run: false,
    }
}

fn generated_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_requested_classes_and_ancestors() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_generate(
        &RealFileSystem::new(),
        &config(temp_dir.path(), &["CCSprite", "CCLayerColor"]),
    )
    .unwrap();

    assert_eq!(
        generated_files(temp_dir.path()),
        vec![
            "js_bindings_CCLayer.h",
            "js_bindings_CCLayer.mm",
            "js_bindings_CCLayerColor.h",
            "js_bindings_CCLayerColor.mm",
            "js_bindings_CCNode.h",
            "js_bindings_CCNode.mm",
            "js_bindings_CCSprite.h",
            "js_bindings_CCSprite.mm",
        ]
    );
    assert_eq!(report.excluded, vec!["NSObject"]);
    assert_eq!(report.bound_method_count(), 15);
    assert_eq!(report.rejected_method_count(), 4);
}

#[test]
fn test_parent_chain_is_reflected_in_output() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(
        &RealFileSystem::new(),
        &config(temp_dir.path(), &["CCLayerColor"]),
    )
    .unwrap();

    let header = fs::read_to_string(temp_dir.path().join("js_bindings_CCLayerColor.h")).unwrap();
    assert!(header.contains("#import \"js_bindings_CCLayer.h\""));
    assert!(header.contains("@interface JSPROXY_CCLayerColor : JSPROXY_CCLayer\n"));

    let node = fs::read_to_string(temp_dir.path().join("js_bindings_CCNode.mm")).unwrap();
    assert!(node.contains("JS_InitClass(cx, globalObj, JSPROXY_NSObject_object, JSPROXY_CCNode_class,"));
    assert!(!temp_dir.path().join("js_bindings_NSObject.h").exists());
}

#[test]
fn test_unsupported_methods_are_left_out() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_generate(&RealFileSystem::new(), &config(temp_dir.path(), &["CCNode"])).unwrap();

    let node = fs::read_to_string(temp_dir.path().join("js_bindings_CCNode.mm")).unwrap();
    for skipped in ["setPosition", "JSPROXY_CCNode_position", "runAction"] {
        assert!(!node.contains(skipped), "{skipped} should not be bound");
    }
    assert!(node.contains("JS_FN(\"setScaleXscaleY\", JSPROXY_CCNode_setScaleX_scaleY_,"));
    assert!(node.contains("\t[real setScaleX:(float)arg0 scaleY:(float)arg1];\n"));
    assert!(node.contains("JS_SET_RVAL(cx, vp, INT_TO_JSVAL(ret_val));"));
    assert!(node.contains("JS_SET_RVAL(cx, vp, DOUBLE_TO_JSVAL(ret_val));"));

    let skipped: Vec<_> = report.classes[0]
        .rejected
        .iter()
        .map(|r| r.selector().as_str())
        .collect();
    assert_eq!(skipped, vec!["setPosition:", "position", "runAction:"]);
}

#[test]
fn test_trampoline_asserts_argument_count() {
    let temp_dir = TempDir::new().unwrap();
    run_generate(&RealFileSystem::new(), &config(temp_dir.path(), &["CCNode"])).unwrap();

    let node = fs::read_to_string(temp_dir.path().join("js_bindings_CCNode.mm")).unwrap();
    let start = node.find("JSBool JSPROXY_CCNode_setScaleX_scaleY_(").unwrap();
    let body = &node[start..];
    let body = &body[..body.find("\n}\n").unwrap()];
    assert!(body.contains("NSCAssert( argc == 2, @\"Invalid number of arguments\" );"));
    assert_eq!(body.matches("JS_ValueToNumber(").count(), 2);
    assert!(!body.contains("ret_val"));
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let header = temp_dir.path().join("js_bindings_CCNode.h");
    fs::write(&header, "stale").unwrap();

    run_generate(&RealFileSystem::new(), &config(temp_dir.path(), &["CCNode"])).unwrap();
    assert!(fs::read_to_string(&header).unwrap().contains("AUTOGENERATED FILE"));
}

#[test]
fn test_output_dir_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("gen/bindings");
    run_generate(&RealFileSystem::new(), &config(&out, &["CCAction"])).unwrap();
    assert_eq!(
        generated_files(&out),
        vec!["js_bindings_CCAction.h", "js_bindings_CCAction.mm"]
    );
}

#[test]
fn test_unknown_class_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let err = run_generate(
        &RealFileSystem::new(),
        &config(temp_dir.path(), &["CCNode", "CCMenu"]),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BindgenError>(),
        Some(BindgenError::ClassNotFound(class)) if class == "CCMenu"
    ));
    assert!(generated_files(temp_dir.path()).is_empty());
}

#[test]
fn test_missing_input_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config(temp_dir.path(), &["CCNode"]);
    config.hierarchy = temp_dir.path().join("nope.txt");

    let err = run_generate(&RealFileSystem::new(), &config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("nope.txt"), "{message}");
}
