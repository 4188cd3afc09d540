// Tests for the scripted capture engine and its script file format

use std::io::Write;
use verinews_client::speech::{
    EngineNotice, EngineSelection, RecognitionEngine, RecognitionEngineFactory, ScriptedEngine,
};

#[tokio::test]
async fn script_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{ "spans": [{{ "text": "hello", "final": false }}] }},
            {{ "delay_ms": 10, "spans": [{{ "text": "hello world", "final": true }}] }}
        ]"#
    )
    .expect("write script");

    let mut engine = ScriptedEngine::from_file(file.path()).expect("script should parse");

    assert!(engine.is_available());
    assert_eq!(engine.name(), "scripted");

    let mut notices = engine.start("en-US").await.expect("start");

    assert!(matches!(notices.recv().await, Some(EngineNotice::Started)));

    match notices.recv().await {
        Some(EngineNotice::Batch(spans)) => {
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].text, "hello");
            assert!(!spans[0].is_final);
        }
        other => panic!("expected a batch, got {:?}", other),
    }

    match notices.recv().await {
        Some(EngineNotice::Batch(spans)) => {
            assert_eq!(spans[0].text, "hello world");
            assert!(spans[0].is_final);
        }
        other => panic!("expected a batch, got {:?}", other),
    }

    assert!(matches!(notices.recv().await, Some(EngineNotice::Ended)));
    assert!(notices.recv().await.is_none());
}

#[tokio::test]
async fn invalid_script_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "not json").expect("write");

    assert!(ScriptedEngine::from_file(file.path()).is_err());
}

#[tokio::test]
async fn missing_script_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    assert!(ScriptedEngine::from_file(&dir.path().join("nope.json")).is_err());
}

#[tokio::test]
async fn stop_when_idle_is_a_noop() {
    let mut engine = ScriptedEngine::new(Vec::new());

    engine.stop().await.expect("idle stop should succeed");
}

#[test]
fn factory_builds_engines_by_selection() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "[]").expect("write");

    let scripted = RecognitionEngineFactory::create(EngineSelection::Script(
        file.path().to_path_buf(),
    ))
    .expect("scripted engine");
    assert!(scripted.is_available());

    // No system speech service is bound on any current host
    let system = RecognitionEngineFactory::create(EngineSelection::System).expect("system engine");
    assert!(!system.is_available());
}

#[tokio::test]
async fn empty_script_starts_and_ends() {
    let mut engine = ScriptedEngine::new(Vec::new());

    let mut notices = engine.start("en-US").await.expect("start");

    assert!(matches!(notices.recv().await, Some(EngineNotice::Started)));
    assert!(matches!(notices.recv().await, Some(EngineNotice::Ended)));
    assert!(notices.recv().await.is_none());
}
