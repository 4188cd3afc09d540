use super::engine::{EngineNotice, RecognitionEngine};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Error code emitted when the host offers no speech capture capability
pub const ERR_NOT_SUPPORTED: &str = "not-supported";

/// Event emitted by a transcription session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Capture has begun
    Started,
    /// Latest unconfirmed fragment; replaced on every update
    Interim(String),
    /// Full transcript accumulated so far, after a new final span
    Result(String),
    /// Capture error; terminal for the session
    Error(String),
    /// Session ended, with the transcript accumulated up to that point
    Ended(String),
}

/// A transcription session that manages speech capture lifecycle,
/// interim/final transcript accumulation, and event emission
///
/// The capture engine is injected, so tests can drive the session with a
/// scripted engine instead of a real recognizer. At most one capture run is
/// active per session object; starting while a run is active cancels it and
/// resets the transcript.
pub struct TranscriptionSession {
    /// Unique session identifier
    session_id: String,

    /// Injected capture engine
    engine: Box<dyn RecognitionEngine>,

    /// Whether capture is currently active
    is_listening: Arc<AtomicBool>,

    /// Accumulated final transcript, space-joined
    transcript: Arc<Mutex<String>>,

    /// When the current capture run started
    started_at: Option<DateTime<Utc>>,

    /// Handle for the notice pump task
    pump_handle: Option<JoinHandle<()>>,
}

impl TranscriptionSession {
    /// Create a session around a capture engine
    pub fn new(engine: Box<dyn RecognitionEngine>) -> Self {
        Self {
            session_id: format!("speech-{}", uuid::Uuid::new_v4()),
            engine,
            is_listening: Arc::new(AtomicBool::new(false)),
            transcript: Arc::new(Mutex::new(String::new())),
            started_at: None,
            pump_handle: None,
        }
    }

    /// Start capturing with the given locale tag
    ///
    /// Never fails: when the host has no capture capability the returned
    /// channel yields a single `Error(ERR_NOT_SUPPORTED)` and closes, and no
    /// `Started`/`Result`/`Ended` events fire. Starting while a run is active
    /// cancels the previous run outright and resets the transcript.
    pub async fn start(&mut self, locale: &str) -> mpsc::Receiver<SessionEvent> {
        let (tx, rx) = mpsc::channel(64);

        if !self.engine.is_available() {
            warn!("Speech capture is not supported on this host");
            let _ = tx.try_send(SessionEvent::Error(ERR_NOT_SUPPORTED.to_string()));
            return rx;
        }

        if self.is_listening.swap(false, Ordering::SeqCst) {
            if let Err(e) = self.engine.stop().await {
                warn!("Failed to stop previous capture run: {}", e);
            }
        }

        // The old pump must be gone before shared state is reset, so none of
        // its events can land after the new run begins.
        if let Some(handle) = self.pump_handle.take() {
            handle.abort();
        }

        {
            let mut transcript = self.transcript.lock().await;
            transcript.clear();
        }

        let notices = match self.engine.start(locale).await {
            Ok(notices) => notices,
            Err(e) => {
                error!("Failed to start speech capture: {}", e);
                let _ = tx.try_send(SessionEvent::Error(e.to_string()));
                return rx;
            }
        };

        self.started_at = Some(Utc::now());

        info!(
            "Session {} capturing via {} engine (locale: {})",
            self.session_id,
            self.engine.name(),
            locale
        );

        let listening = Arc::clone(&self.is_listening);
        let transcript = Arc::clone(&self.transcript);
        let session_id = self.session_id.clone();

        self.pump_handle = Some(tokio::spawn(pump_notices(
            notices, tx, listening, transcript, session_id,
        )));

        rx
    }

    /// Request a graceful stop
    ///
    /// Idempotent: a no-op when no run is active or capture is unsupported.
    /// The engine's end notice still arrives asynchronously and produces an
    /// `Ended` event on the channel returned by `start`.
    pub async fn stop(&mut self) -> Result<()> {
        if !self.engine.is_available() || !self.is_listening.load(Ordering::SeqCst) {
            return Ok(());
        }

        info!("Stopping session {}", self.session_id);

        self.engine.stop().await
    }

    /// Whether the host offers a speech capture capability
    pub fn is_supported(&self) -> bool {
        self.engine.is_available()
    }

    /// Whether capture is currently active
    pub fn is_listening(&self) -> bool {
        self.is_listening.load(Ordering::SeqCst)
    }

    /// Transcript accumulated by the current (or last) run
    pub async fn transcript(&self) -> String {
        self.transcript.lock().await.clone()
    }

    /// Unique session identifier
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// When the current capture run started
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}

/// Drive engine notices into session events
///
/// Runs once per capture run. Final spans accumulate into the transcript with
/// a single trailing space each; the interim fragment is rebuilt from scratch
/// on every batch. Span order within a batch is preserved. An error notice is
/// terminal: no result events follow it.
async fn pump_notices(
    mut notices: mpsc::Receiver<EngineNotice>,
    events: mpsc::Sender<SessionEvent>,
    listening: Arc<AtomicBool>,
    transcript: Arc<Mutex<String>>,
    session_id: String,
) {
    let mut final_transcript = String::new();
    let mut interim_transcript = String::new();

    while let Some(notice) = notices.recv().await {
        match notice {
            EngineNotice::Started => {
                listening.store(true, Ordering::SeqCst);
                info!("Speech recognition started (session {})", session_id);

                if events.send(SessionEvent::Started).await.is_err() {
                    return;
                }
            }
            EngineNotice::Batch(spans) => {
                interim_transcript.clear();

                for span in spans {
                    if span.is_final {
                        final_transcript.push_str(&span.text);
                        final_transcript.push(' ');

                        {
                            let mut shared = transcript.lock().await;
                            shared.clone_from(&final_transcript);
                        }

                        if events
                            .send(SessionEvent::Result(final_transcript.clone()))
                            .await
                            .is_err()
                        {
                            return;
                        }
                    } else {
                        interim_transcript.push_str(&span.text);

                        if events
                            .send(SessionEvent::Interim(interim_transcript.clone()))
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                }
            }
            EngineNotice::Error(code) => {
                listening.store(false, Ordering::SeqCst);
                error!("Speech recognition error (session {}): {}", session_id, code);

                let _ = events.send(SessionEvent::Error(code)).await;
                return;
            }
            EngineNotice::Ended => {
                listening.store(false, Ordering::SeqCst);
                info!(
                    "Speech recognition ended (session {}): {:?}",
                    session_id, final_transcript
                );

                let _ = events.send(SessionEvent::Ended(final_transcript)).await;
                return;
            }
        }
    }

    // Engine channel closed without an end notice; treat as a natural end.
    if listening.swap(false, Ordering::SeqCst) {
        let _ = events.send(SessionEvent::Ended(final_transcript)).await;
    }
}
