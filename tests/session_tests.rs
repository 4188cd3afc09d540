// Integration tests for the transcription session state machine
//
// A scripted engine stands in for the platform recognizer, so every test
// drives the session with deterministic batches of recognized spans.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use verinews_client::speech::{
    RecognizedSpan, ScriptStep, ScriptedEngine, SessionEvent, SystemEngine, TranscriptionSession,
    ERR_NOT_SUPPORTED,
};

fn session_with(steps: Vec<ScriptStep>) -> TranscriptionSession {
    TranscriptionSession::new(Box::new(ScriptedEngine::new(steps)))
}

async fn drain(mut rx: mpsc::Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

fn results(events: &[SessionEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Result(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn interims(events: &[SessionEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Interim(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn final_spans_accumulate_space_joined_in_order() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::fin("one")]),
        ScriptStep::batch(vec![RecognizedSpan::fin("two")]),
        ScriptStep::batch(vec![RecognizedSpan::fin("three")]),
    ]);

    let events = drain(session.start("en-US").await).await;

    assert_eq!(
        results(&events),
        vec!["one ", "one two ", "one two three "]
    );
    assert!(events.contains(&SessionEvent::Ended("one two three ".to_string())));
}

#[tokio::test]
async fn each_result_carries_the_full_transcript_so_far() {
    // Two final batches "one" then "two": the second result is "one two "
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::fin("one")]),
        ScriptStep::batch(vec![RecognizedSpan::fin("two")]),
    ]);

    let events = drain(session.start("en-US").await).await;

    assert_eq!(results(&events)[1], "one two ");
}

#[tokio::test]
async fn interim_fragment_is_rebuilt_per_batch() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![
            RecognizedSpan::interim("hel"),
            RecognizedSpan::interim("lo"),
        ]),
        ScriptStep::batch(vec![RecognizedSpan::interim("world")]),
    ]);

    let events = drain(session.start("en-US").await).await;

    // Within a batch non-final spans concatenate; across batches the
    // fragment is cleared, not appended.
    assert_eq!(interims(&events), vec!["hel", "hello", "world"]);
}

#[tokio::test]
async fn interim_then_final_scenario() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::interim("hello")]),
        ScriptStep::batch(vec![RecognizedSpan::fin("hello world")]),
    ]);

    let mut rx = session.start("en-US").await;

    assert_eq!(rx.recv().await, Some(SessionEvent::Started));
    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Interim("hello".to_string()))
    );

    // No final span yet, so the accumulated transcript is still empty
    assert_eq!(session.transcript().await, "");

    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Result("hello world ".to_string()))
    );
    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Ended("hello world ".to_string()))
    );
}

#[tokio::test]
async fn span_order_within_a_batch_is_preserved() {
    let mut session = session_with(vec![ScriptStep::batch(vec![
        RecognizedSpan::fin("one"),
        RecognizedSpan::interim("tw"),
    ])]);

    let events = drain(session.start("en-US").await).await;

    let positions: Vec<&SessionEvent> = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::Result(_) | SessionEvent::Interim(_)))
        .collect();

    assert_eq!(positions[0], &SessionEvent::Result("one ".to_string()));
    assert_eq!(positions[1], &SessionEvent::Interim("tw".to_string()));
}

#[tokio::test]
async fn capture_error_is_terminal() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::fin("one")]),
        ScriptStep::error("audio-capture"),
        ScriptStep::batch(vec![RecognizedSpan::fin("never delivered")]),
    ]);

    let events = drain(session.start("en-US").await).await;

    assert_eq!(
        events.last(),
        Some(&SessionEvent::Error("audio-capture".to_string()))
    );
    assert_eq!(results(&events), vec!["one "]);
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::Ended(_))));
    assert!(!session.is_listening());
}

#[tokio::test]
async fn unsupported_capability_reports_error_and_nothing_else() {
    let mut session = TranscriptionSession::new(Box::new(SystemEngine::probe()));

    assert!(!session.is_supported());

    let events = drain(session.start("en-US").await).await;

    assert_eq!(
        events,
        vec![SessionEvent::Error(ERR_NOT_SUPPORTED.to_string())]
    );
}

#[tokio::test]
async fn stop_without_active_run_is_a_noop() {
    let mut session = session_with(vec![ScriptStep::batch(vec![RecognizedSpan::fin("one")])]);

    session.stop().await.expect("idle stop should succeed");

    assert!(!session.is_listening());
    assert_eq!(session.transcript().await, "");
}

#[tokio::test]
async fn stop_requests_graceful_end_with_accumulated_transcript() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::fin("one")]),
        ScriptStep {
            delay_ms: 30_000,
            spans: vec![RecognizedSpan::fin("two")],
            error: None,
        },
    ]);

    let mut rx = session.start("en-US").await;

    assert_eq!(rx.recv().await, Some(SessionEvent::Started));
    assert_eq!(
        rx.recv().await,
        Some(SessionEvent::Result("one ".to_string()))
    );

    session.stop().await.expect("stop should succeed");

    let ended = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("end notice should arrive promptly");

    assert_eq!(ended, Some(SessionEvent::Ended("one ".to_string())));
    assert!(!session.is_listening());
}

#[tokio::test]
async fn restart_resets_the_transcript() {
    let mut session = session_with(vec![ScriptStep::batch(vec![RecognizedSpan::fin("first")])]);

    let events = drain(session.start("en-US").await).await;
    assert!(events.contains(&SessionEvent::Ended("first ".to_string())));
    assert_eq!(session.transcript().await, "first ");

    // The script replays from the beginning; a stale transcript would make
    // the second run produce "first first "
    let events = drain(session.start("en-US").await).await;
    assert_eq!(results(&events), vec!["first "]);
}

#[tokio::test]
async fn start_while_listening_cancels_the_previous_run() {
    let mut session = session_with(vec![
        ScriptStep::batch(vec![RecognizedSpan::fin("one")]),
        ScriptStep {
            delay_ms: 30_000,
            spans: vec![RecognizedSpan::fin("two")],
            error: None,
        },
    ]);

    let mut old_rx = session.start("en-US").await;

    assert_eq!(old_rx.recv().await, Some(SessionEvent::Started));
    assert_eq!(
        old_rx.recv().await,
        Some(SessionEvent::Result("one ".to_string()))
    );

    let mut new_rx = session.start("en-US").await;

    // The old run's pump is gone: its channel closes without an end event
    let leftover = timeout(Duration::from_secs(5), old_rx.recv())
        .await
        .expect("old channel should close promptly");
    assert_eq!(leftover, None);

    // The new run replays the script with a fresh transcript
    assert_eq!(new_rx.recv().await, Some(SessionEvent::Started));
    assert_eq!(
        new_rx.recv().await,
        Some(SessionEvent::Result("one ".to_string()))
    );

    session.stop().await.expect("stop should succeed");

    let ended = timeout(Duration::from_secs(5), new_rx.recv())
        .await
        .expect("end notice should arrive promptly");
    assert_eq!(ended, Some(SessionEvent::Ended("one ".to_string())));
}
