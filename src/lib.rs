pub mod api;
pub mod config;
pub mod report;
pub mod speech;

pub use api::{AnalysisReport, ApiClient, RiskLevel, Verdict};
pub use config::Config;
pub use report::render_report;
pub use speech::{
    resolve_locale, start_speech_recognition, stop_speech_recognition, EngineNotice,
    EngineSelection, RecognitionEngine, RecognitionEngineFactory, RecognizedSpan, ScriptStep,
    ScriptedEngine, SessionEvent, TranscriptionSession, DEFAULT_LOCALE, ERR_NOT_SUPPORTED,
};
