use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("vegnbio-branding").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

fn write_bundle(dir: &Path) {
    fs::create_dir_all(dir.join("icons")).unwrap();
    fs::write(dir.join("favicon.png"), b"not decoded").unwrap();
    fs::write(dir.join("favicon.ico"), b"not decoded").unwrap();
    image::RgbaImage::new(192, 192)
        .save(dir.join("icons").join("Icon-192.png"))
        .unwrap();
    image::RgbaImage::new(512, 512)
        .save(dir.join("icons").join("Icon-512.png"))
        .unwrap();
}

#[test]
fn show_prints_builtin_descriptor() {
    let output = cmd().arg("show").assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["appName"], "Veg'N Bio");
    assert_eq!(json["icons"]["web"], "Icon-512.png");
    assert_eq!(json["manifest"]["theme_color"], "#4CAF50");
}

#[test]
fn show_output_loads_back_as_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("branding.json");
    let output = cmd().arg("show").assert().success().get_output().stdout.clone();
    fs::write(&path, output).unwrap();

    let loaded = vegnbio_branding::persist::load_descriptor(&path).unwrap();
    assert_eq!(&loaded, vegnbio_branding::branding());
}

#[test]
fn validate_accepts_complete_bundle() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    cmd()
        .args(["validate", "--assets"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Veg'N Bio 1.0.0: branding is valid"));
}

#[test]
fn validate_fails_on_missing_icons() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("favicon.png"), b"icon").unwrap();

    cmd()
        .args(["validate", "--assets"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "error: icons.web \"Icon-512.png\" does not exist in the asset bundle",
        ));
}

#[test]
fn validate_rejects_malformed_descriptor_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("branding.json");
    let mut json = serde_json::to_value(vegnbio_branding::branding()).unwrap();
    json["colors"]["primary"] = "green".into();
    fs::write(&path, json.to_string()).unwrap();

    cmd()
        .args(["validate", "--descriptor"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color \"green\""));
}

#[test]
fn manifest_is_written_with_header_sizes() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    let out = dir.path().join("build").join("manifest.json");

    cmd()
        .args(["manifest", "--assets"])
        .arg(dir.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["display"], "standalone");
    assert_eq!(json["icons"][0]["src"], "icons/Icon-192.png");
    assert_eq!(json["icons"][1]["sizes"], "512x512");
    assert_eq!(json["icons"][3]["purpose"], "maskable");
}

#[test]
fn manifest_refuses_invalid_bundle() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["manifest", "--stdout", "--assets"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to generate a manifest"));
}

#[test]
fn manifest_uses_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    fs::write(&settings, r#"{ "icon_base": "/assets/", "lang": "fr-FR" }"#).unwrap();

    let output = cmd()
        .args(["manifest", "--stdout", "--settings"])
        .arg(&settings)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["lang"], "fr-FR");
    assert_eq!(json["icons"][0]["src"], "/assets/Icon-192.png");
}

#[test]
fn head_prints_tags_and_css() {
    cmd()
        .args(["head", "--css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Veg'N Bio</title>"))
        .stdout(predicate::str::contains("--color-accent: #81C784;"));
}
