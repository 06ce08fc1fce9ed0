// CLI harness integration tests.
use std::process::Command;

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_autotask-file-convert");
    Command::new(exe)
}

fn parse_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("valid json")
}

#[test]
fn nodes_lists_both_ids() {
    let out = cmd().arg("nodes").output().expect("nodes");
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).expect("utf8");
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["svg_to_image", "image_to_icon"]);
}

#[test]
fn manifest_prints_json() {
    let out = cmd().arg("manifest").output().expect("manifest");
    assert!(out.status.success());
    let manifest = parse_json(&out.stdout);
    assert_eq!(manifest["name"], "File Format Converter");
    assert_eq!(manifest["nodes"][1]["id"], "image_to_icon");

    let icon_inputs = manifest["nodes"][1]["inputs"].as_object().expect("inputs map");
    assert_eq!(
        icon_inputs.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["image_file", "output_dir", "format", "sizes", "bundle"]
    );
    assert_eq!(icon_inputs["format"]["options"], serde_json::json!(["ICO", "ICNS"]));
    assert_eq!(icon_inputs["bundle"]["default"], false);
}

#[test]
fn run_converts_svg_with_custom_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    let svg = temp.path().join("dot.svg");
    std::fs::write(
        &svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><circle cx="5" cy="5" r="4"/></svg>"#,
    )
    .expect("write svg");

    let inputs = serde_json::json!({
        "svg_file": svg,
        "width": 32,
        "height": 32,
        "output_dir": temp.path(),
        "format": "JPG",
    });
    let out = cmd()
        .args([
            "--config",
            r#"{"jpegQuality":60,"loadSystemFonts":false}"#,
            "run",
            "svg_to_image",
            "--inputs",
            &inputs.to_string(),
        ])
        .output()
        .expect("run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let outputs = parse_json(&out.stdout);
    let path = outputs["output_file"].as_str().expect("output_file");
    assert!(path.ends_with("dot.jpg"));
    assert_eq!(image::image_dimensions(path).expect("dimensions"), (32, 32));
}

#[test]
fn run_failure_exits_nonzero_with_message() {
    let out = cmd()
        .args(["run", "image_to_icon", "--inputs", r#"{"image_file":"/missing.png","output_dir":"/tmp","format":"ICO"}"#])
        .output()
        .expect("run");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Image to ICO conversion failed: Input file not found: /missing.png"));
}
