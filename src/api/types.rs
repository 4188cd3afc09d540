use serde::{Deserialize, Serialize};

/// Risk level assigned by the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Human-readable headline for this risk level
    pub fn headline(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk - Likely Misinformation",
            RiskLevel::Medium => "Medium Risk - Verify Sources",
            RiskLevel::Low => "Low Risk - Appears Credible",
            RiskLevel::Unknown => "Analysis Inconclusive",
        }
    }
}

/// Web-verification verdict for a claim or the overall submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    #[default]
    #[serde(other)]
    Uncertain,
}

/// Full payload returned by the analysis service
///
/// Every field is optional or defaulted: the service's output shape is not
/// under this client's control, so missing or extra fields must not fail
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub analysis: Analysis,

    #[serde(default)]
    pub fact_check: FactCheck,

    /// Retrieval-augmented web verification, when the service ran it
    #[serde(default)]
    pub verification: Option<Verification>,

    /// Overall confidence (0.0 to 1.0)
    #[serde(default)]
    pub confidence_score: f64,

    /// OCR output, present for image submissions
    #[serde(default)]
    pub extracted_text: Option<String>,
}

impl AnalysisReport {
    pub fn risk_level(&self) -> RiskLevel {
        self.analysis.risk_level
    }

    /// Fake-news risk, preferring the calibrated verification figure
    pub fn fake_risk(&self) -> f64 {
        self.verification
            .as_ref()
            .and_then(|v| v.fake_risk)
            .or(self.analysis.fake_news_probability)
            .unwrap_or(0.0)
    }

    /// Number of claims found, preferring the verification count
    pub fn claims_found(&self) -> u32 {
        self.verification
            .as_ref()
            .and_then(|v| v.claims_found)
            .or(self.fact_check.claims_found)
            .unwrap_or(0)
    }

    /// Source credibility, preferring the verification figure
    pub fn source_credibility(&self) -> f64 {
        self.verification
            .as_ref()
            .and_then(|v| v.overall_credibility)
            .or(self.fact_check.overall_credibility)
            .unwrap_or(0.0)
    }

    pub fn sentiment_label(&self) -> &str {
        self.analysis
            .sentiment
            .as_ref()
            .map(|s| s.label.as_str())
            .unwrap_or("Neutral")
    }
}

/// Linguistic and statistical analysis of the submitted text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub fake_news_probability: Option<f64>,

    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    #[serde(default)]
    pub linguistic_features: Option<LinguisticFeatures>,

    #[serde(default)]
    pub confidence_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub score: f64,
}

/// Keyword-level features extracted from the text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinguisticFeatures {
    #[serde(default)]
    pub urgency_score: u32,

    #[serde(default)]
    pub emotional_score: u32,

    #[serde(default)]
    pub vague_references: u32,

    #[serde(default)]
    pub has_clickbait: bool,
}

/// Pattern-based fact check against known misinformation markers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactCheck {
    #[serde(default)]
    pub claims_found: Option<u32>,

    #[serde(default)]
    pub overall_credibility: Option<f64>,

    #[serde(default)]
    pub verification_results: Vec<ClaimCheck>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimCheck {
    #[serde(default)]
    pub claim: Option<String>,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub matched_patterns: Vec<String>,
}

/// Retrieval-augmented verification (web search + LLM evaluation)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    /// "ok" when verification ran; "skipped" or "error" otherwise
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub verdict: Option<Verdict>,

    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub reasoning: Option<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub per_claim: Vec<ClaimVerdict>,

    #[serde(default)]
    pub fake_risk: Option<f64>,

    #[serde(default)]
    pub claims_found: Option<u32>,

    #[serde(default)]
    pub overall_credibility: Option<f64>,

    /// Why verification was skipped or failed
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimVerdict {
    #[serde(default)]
    pub claim: Option<String>,

    #[serde(default)]
    pub verdict: Option<Verdict>,
}
