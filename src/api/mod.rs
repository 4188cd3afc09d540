pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    Analysis, AnalysisReport, ClaimCheck, ClaimVerdict, FactCheck, LinguisticFeatures, RiskLevel,
    Sentiment, Verdict, Verification,
};
