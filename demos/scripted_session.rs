// Scripted Session Example: transcription lifecycle without a microphone
//
// This example demonstrates the full session pipeline:
// 1. A scripted engine plays a recognition script (interim + final spans)
// 2. The session accumulates the transcript and emits typed events
// 3. We display interim updates in place and the final transcript at the end
//
// No network or audio hardware is needed.
//
// Usage: cargo run --example scripted_session

use anyhow::Result;
use tokio::time::{sleep, Duration};
use tracing::info;
use verinews_client::speech::{
    start_speech_recognition, stop_speech_recognition, RecognizedSpan, ScriptStep, ScriptedEngine,
    SessionEvent, TranscriptionSession,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting scripted transcription session");

    let script = vec![
        ScriptStep {
            delay_ms: 300,
            spans: vec![RecognizedSpan::interim("breaking")],
            error: None,
        },
        ScriptStep {
            delay_ms: 200,
            spans: vec![RecognizedSpan::interim("breaking news")],
            error: None,
        },
        ScriptStep {
            delay_ms: 400,
            spans: vec![RecognizedSpan::fin("breaking news scientists discover")],
            error: None,
        },
        ScriptStep {
            delay_ms: 400,
            spans: vec![RecognizedSpan::fin("a cure for the common cold")],
            error: None,
        },
    ];

    let engine = Box::new(ScriptedEngine::new(script));
    let mut session = TranscriptionSession::new(engine);

    // Resolves "hi" to the hi-IN locale tag before starting capture
    let mut events = start_speech_recognition(&mut session, Some("hi")).await;

    while let Some(event) = events.recv().await {
        match event {
            SessionEvent::Started => info!("Capture started"),
            SessionEvent::Interim(text) => {
                print!("\r{}", text);
                std::io::Write::flush(&mut std::io::stdout()).ok();
            }
            SessionEvent::Result(text) => {
                println!("\nTranscript so far: {:?}", text);
            }
            SessionEvent::Error(code) => {
                info!("Capture error: {}", code);
                break;
            }
            SessionEvent::Ended(text) => {
                info!("Session ended with transcript: {:?}", text);
                break;
            }
        }
    }

    // A second start on the same session resets the transcript; stop it
    // mid-run to show the graceful end path.
    info!("Restarting session to demonstrate reset");

    let mut events = start_speech_recognition(&mut session, None).await;

    // Let the first interim land, then request a stop
    sleep(Duration::from_millis(400)).await;
    stop_speech_recognition(&mut session).await?;

    while let Some(event) = events.recv().await {
        if let SessionEvent::Ended(text) = event {
            info!("Second run ended early with transcript: {:?}", text);
            break;
        }
    }

    Ok(())
}
