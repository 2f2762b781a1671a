use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn jsbindgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsbindgen"))
}

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = jsbindgen().current_dir(temp_dir.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "{stderr}");
    assert_eq!(file_count(temp_dir.path()), 0);
}

#[test]
fn test_generates_into_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("-o")
        .arg(&out)
        .arg("CCSprite")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(out.join("js_bindings_CCSprite.h").exists());
    assert!(out.join("js_bindings_CCSprite.mm").exists());
    assert!(out.join("js_bindings_CCNode.mm").exists());
    assert!(!out.join("js_bindings_NSObject.h").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CCSprite : CCNode (4 bound, 0 skipped)"), "{stdout}");
    assert!(stdout.contains("skipped setPosition:"), "{stdout}");

    let header = fs::read_to_string(out.join("js_bindings_CCSprite.h")).unwrap();
    assert!(header.contains("* Generated by jsbindgen on "));
}

#[test]
fn test_progress_and_warnings_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .args(["-b"])
        .arg(data("cocos2d.bridgesupport"))
        .arg("--hierarchy")
        .arg(data("hierarchy.txt"))
        .arg("--quiet")
        .arg("CCNode")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Removing NSObject"));

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("CCNode")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NOT OK: runAction:"), "{stderr}");
    assert!(stderr.contains("Removing NSObject from bindings..."), "{stderr}");
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("--dry-run")
        .arg("CCLayer")
        .assert()
        .success();

    assert_eq!(file_count(temp_dir.path()), 0);
}

#[test]
fn test_unknown_flag_fails_fast() {
    let temp_dir = TempDir::new().unwrap();

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("--frobnicate")
        .arg("CCNode")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--frobnicate"), "{stderr}");
    assert_eq!(file_count(temp_dir.path()), 0);
}

#[test]
fn test_unknown_class_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("CCMenu")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Class 'CCMenu' not found in metadata"), "{stderr}");
    assert_eq!(file_count(temp_dir.path()), 0);
}

#[test]
fn test_config_file_controls_naming() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".jsbindgen.toml"),
        "bindings_prefix = \"jsb_\"\nproxy_prefix = \"JSB_\"\noutput_dir = \"generated\"\n",
    )
    .unwrap();

    jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("CCAction")
        .assert()
        .success();

    let header = fs::read_to_string(temp_dir.path().join("generated/jsb_CCAction.h")).unwrap();
    assert!(header.contains("@interface JSB_CCAction : JSB_NSObject\n"));
}

#[test]
fn test_explicit_bad_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "proxy_prefx = \"X_\"\n").unwrap();

    let output = jsbindgen()
        .current_dir(temp_dir.path())
        .arg("-c")
        .arg(&config)
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("CCAction")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "{stderr}");
}

#[test]
fn test_init_config_writes_default_file() {
    let temp_dir = TempDir::new().unwrap();

    jsbindgen()
        .current_dir(temp_dir.path())
        .arg("--init-config")
        .assert()
        .success();
    assert!(temp_dir.path().join(".jsbindgen.toml").exists());

    jsbindgen()
        .current_dir(temp_dir.path())
        .arg("--init-config")
        .assert()
        .failure();

    jsbindgen()
        .current_dir(temp_dir.path())
        .args(["--init-config", "--force"])
        .assert()
        .success();
}

#[test]
fn test_ancestor_config_output_dir_is_relative_to_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".jsbindgen.toml"),
        "output_dir = \"generated\"\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("src/scripts");
    fs::create_dir_all(&nested).unwrap();

    jsbindgen()
        .current_dir(&nested)
        .arg("-b")
        .arg(data("cocos2d.bridgesupport"))
        .arg("-j")
        .arg(data("hierarchy.txt"))
        .arg("CCAction")
        .assert()
        .success();

    assert!(temp_dir.path().join("generated/js_bindings_CCAction.h").exists());
    assert!(!nested.join("generated").exists());
}
