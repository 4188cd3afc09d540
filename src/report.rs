//! Terminal rendering of analysis reports
//!
//! Pure formatting over [`AnalysisReport`]. The service's output shape is not
//! guaranteed, so every section falls back to a default rather than failing.

use crate::api::{AnalysisReport, RiskLevel, Verdict};
use std::fmt::Write;

fn verdict_label(verdict: Option<Verdict>) -> &'static str {
    match verdict.unwrap_or_default() {
        Verdict::True => "TRUE",
        Verdict::False => "FALSE",
        Verdict::Uncertain => "UNCERTAIN",
    }
}

/// Render a report as a multi-line terminal string
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let risk = report.risk_level();

    let _ = writeln!(out, "=== Analysis Results ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", risk.headline());
    let _ = writeln!(
        out,
        "Overall confidence: {:.1}%",
        report.confidence_score * 100.0
    );

    if let Some(extracted) = report
        .extracted_text
        .as_deref()
        .filter(|t| !t.is_empty())
    {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Extracted text (from image) ---");
        let _ = writeln!(out, "{}", extracted);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Key metrics ---");
    let _ = writeln!(out, "Fake news risk:     {:.1}%", report.fake_risk() * 100.0);
    let _ = writeln!(out, "Sentiment:          {}", report.sentiment_label());
    let _ = writeln!(out, "Claims found:       {}", report.claims_found());
    let _ = writeln!(
        out,
        "Source credibility: {:.1}%",
        report.source_credibility() * 100.0
    );

    if let Some(verification) = &report.verification {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Web verification ---");

        if verification.status == "ok" {
            let _ = writeln!(
                out,
                "Verdict: {} ({:.1}% confidence)",
                verdict_label(verification.verdict),
                verification.confidence * 100.0
            );

            if let Some(reasoning) = &verification.reasoning {
                let _ = writeln!(out, "Reasoning: {}", reasoning);
            }

            if !verification.sources.is_empty() {
                let _ = writeln!(out, "Sources:");
                for url in verification.sources.iter().take(3) {
                    let _ = writeln!(out, "  - {}", url);
                }
                if verification.sources.len() > 3 {
                    let _ = writeln!(
                        out,
                        "  (+{} more sources)",
                        verification.sources.len() - 3
                    );
                }
            }

            if !verification.per_claim.is_empty() {
                let _ = writeln!(out, "Claims checked:");
                for (i, pc) in verification.per_claim.iter().take(5).enumerate() {
                    let _ = writeln!(
                        out,
                        "  #{} [{}] {}",
                        i + 1,
                        verdict_label(pc.verdict),
                        pc.claim.as_deref().unwrap_or("")
                    );
                }
            }
        } else {
            let _ = writeln!(out, "Verification {}", verification.status);
            if let Some(reason) = &verification.reason {
                let _ = writeln!(out, "Reason: {}", reason);
            }
        }
    }

    if !report.fact_check.verification_results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Claim analysis ---");
        for (i, result) in report.fact_check.verification_results.iter().enumerate() {
            let status = if result.verified {
                "verified"
            } else {
                "unverified"
            };
            let _ = writeln!(
                out,
                "  #{} [{}] {}",
                i + 1,
                status,
                result.claim.as_deref().unwrap_or("N/A")
            );
            if !result.matched_patterns.is_empty() {
                let _ = writeln!(out, "      patterns: {}", result.matched_patterns.join(", "));
            }
        }
    }

    if let Some(features) = &report.analysis.linguistic_features {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Linguistic analysis ---");
        let _ = writeln!(out, "Urgency score:    {}", features.urgency_score);
        let _ = writeln!(out, "Emotional score:  {}", features.emotional_score);
        let _ = writeln!(out, "Vague references: {}", features.vague_references);
        let _ = writeln!(
            out,
            "Clickbait:        {}",
            if features.has_clickbait { "Yes" } else { "No" }
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Recommendations ---");
    for line in recommendations(risk) {
        let _ = writeln!(out, "  - {}", line);
    }

    out
}

fn recommendations(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::High => &[
            "Do not share this content",
            "Verify with trusted news sources",
            "Report if it violates platform policies",
        ],
        RiskLevel::Medium => &[
            "Verify before sharing",
            "Check multiple sources",
            "Look for official statements",
        ],
        RiskLevel::Low => &[
            "Content appears credible",
            "Still recommend source verification",
            "Share responsibly",
        ],
        RiskLevel::Unknown => &["Analysis inconclusive; verify with trusted sources"],
    }
}
