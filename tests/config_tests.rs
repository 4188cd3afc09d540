// Configuration loading and engine selection tests

use std::io::Write;
use verinews_client::speech::EngineSelection;
use verinews_client::Config;

#[test]
fn load_parses_a_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("client.toml");

    let mut file = std::fs::File::create(&path).expect("create config");
    write!(
        file,
        r#"
[service]
name = "test-client"

[api]
base_url = "http://analysis.internal/api/v1"
timeout_secs = 5
default_language = "hi"

[speech]
engine = "scripted"
script_path = "scripts/demo.json"
"#
    )
    .expect("write config");

    let cfg = Config::load(path.to_str().expect("utf-8 path")).expect("config should load");

    assert_eq!(cfg.service.name, "test-client");
    assert_eq!(cfg.api.base_url, "http://analysis.internal/api/v1");
    assert_eq!(cfg.api.timeout_secs, 5);
    assert_eq!(cfg.api.default_language, "hi");

    match cfg.speech.engine_selection().expect("selection") {
        EngineSelection::Script(p) => assert_eq!(p.to_str(), Some("scripts/demo.json")),
        other => panic!("expected scripted selection, got {:?}", other),
    }
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("client.toml");

    std::fs::write(&path, "[service]\nname = \"partial\"\n").expect("write config");

    let cfg = Config::load(path.to_str().expect("utf-8 path")).expect("config should load");

    assert_eq!(cfg.service.name, "partial");
    assert_eq!(cfg.api.default_language, "en");
    assert_eq!(cfg.api.timeout_secs, 30);
    assert!(matches!(
        cfg.speech.engine_selection().expect("selection"),
        EngineSelection::System
    ));
}

#[test]
fn load_or_default_survives_a_missing_file() {
    let cfg = Config::load_or_default("definitely/not/here");

    assert_eq!(cfg.service.name, "verinews-client");
    assert_eq!(cfg.api.base_url, "http://localhost:8000/api/v1");
}

#[test]
fn scripted_engine_without_a_script_is_rejected() {
    let mut cfg = Config::default();
    cfg.speech.engine = "scripted".to_string();

    assert!(cfg.speech.engine_selection().is_err());
}

#[test]
fn unknown_engine_is_rejected() {
    let mut cfg = Config::default();
    cfg.speech.engine = "telepathy".to_string();

    assert!(cfg.speech.engine_selection().is_err());
}
