//! Pull structured metrics out of a free-form question.
//!
//! "ROAS: 2.5, spend $12,000 against a goal of $40,000" becomes a
//! [`MetricInput`] with `roas`, `spend` and `monthly_goal` set. A question with
//! no recognisable metric is passed through whole as free text.

use once_cell::sync::Lazy;
use regex::Regex;

use amschel_core::{DecisionOutput, MetricInput};

use crate::classifier::analyze_metrics;

const NUMBER: &str = r"(\d[\d,]*(?:\.\d+)?)";

fn metric_pattern(label: &str, currency: bool) -> Regex {
    let dollar = if currency { r"\$?" } else { "" };
    let pattern = format!(r"(?i)\b{label}\b[:=\s]*(?:(?:is|of|at)\s+)?{dollar}{NUMBER}");
    Regex::new(&pattern).expect("Failed to compile metric pattern")
}

static ROAS_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("roas", false));
static CAC_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("cac", true));
static CPC_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("cpc", true));
static CTR_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("ctr", false));
static SPEND_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("spend", true));
static GOAL_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("goal", true));
static QUARTERLY_BUDGET_PATTERN: Lazy<Regex> =
    Lazy::new(|| metric_pattern(r"quarterly\s+budget", true));
static IMPRESSIONS_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("impressions", false));
static CONVERSIONS_PATTERN: Lazy<Regex> = Lazy::new(|| metric_pattern("conversions", false));

fn capture(pattern: &Regex, text: &str) -> Option<f64> {
    let raw = pattern.captures(text)?.get(1)?.as_str().replace(',', "");
    raw.parse::<f64>().ok()
}

/// Extract every recognisable metric from `text`.
///
/// Only the first occurrence of each label is used. When nothing numeric is
/// found, `free_text` carries the original question instead.
pub fn extract_metrics(text: &str) -> MetricInput {
    let metrics = MetricInput {
        roas: capture(&ROAS_PATTERN, text),
        cac: capture(&CAC_PATTERN, text),
        cpc: capture(&CPC_PATTERN, text),
        ctr: capture(&CTR_PATTERN, text),
        spend: capture(&SPEND_PATTERN, text),
        impressions: capture(&IMPRESSIONS_PATTERN, text),
        conversions: capture(&CONVERSIONS_PATTERN, text),
        quarterly_budget: capture(&QUARTERLY_BUDGET_PATTERN, text),
        monthly_goal: capture(&GOAL_PATTERN, text),
        free_text: None,
    };

    if metrics.has_numeric_metric() {
        tracing::debug!(?metrics, "extracted structured metrics");
        metrics
    } else {
        MetricInput::new().with_free_text(text)
    }
}

/// Extract metrics from a question and classify them.
pub fn analyze_question(text: &str) -> DecisionOutput {
    analyze_metrics(&extract_metrics(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use amschel_core::Confidence;

    #[test]
    fn extracts_labelled_values_case_insensitively() {
        let m = extract_metrics("ROAS: 2.5 and CAC $45.10");
        assert_eq!(m.roas, Some(2.5));
        assert_eq!(m.cac, Some(45.10));
        assert_eq!(m.free_text, None);
    }

    #[test]
    fn strips_thousands_separators() {
        let m = extract_metrics("spend $12,500 vs monthly goal: $40,000");
        assert_eq!(m.spend, Some(12_500.0));
        assert_eq!(m.monthly_goal, Some(40_000.0));
    }

    #[test]
    fn extracts_funnel_and_click_metrics() {
        let m = extract_metrics("ctr 0.8% cpc $2.10, impressions 50,000 conversions 120");
        assert_eq!(m.ctr, Some(0.8));
        assert_eq!(m.cpc, Some(2.10));
        assert_eq!(m.impressions, Some(50_000.0));
        assert_eq!(m.conversions, Some(120.0));
    }

    #[test]
    fn extracts_quarterly_budget() {
        let m = extract_metrics("Quarterly budget of $90,000");
        assert_eq!(m.quarterly_budget, Some(90_000.0));
    }

    #[test]
    fn label_without_number_is_free_text() {
        let m = extract_metrics("we need to reduce spend next month");
        assert_eq!(m.spend, None);
        assert_eq!(m.free_text.as_deref(), Some("we need to reduce spend next month"));
    }

    #[test]
    fn labels_inside_words_are_ignored() {
        let m = extract_metrics("our goalkeeper sponsorship 3");
        assert_eq!(m.monthly_goal, None);
        assert!(m.free_text.is_some());
    }

    #[test]
    fn analyze_question_runs_extracted_metrics_through_classifier() {
        let out = analyze_question("Our ROAS is 6.1 this week");
        assert_eq!(out.decision, "Scale this campaign aggressively");
        assert_eq!(out.confidence, Confidence::High);

        let out = analyze_question("spend at $9,000 with a goal of $10,000");
        assert_eq!(out.decision, "Reallocate budget to top performers");

        let out = analyze_question("spend $500 with a goal of $0");
        assert_eq!(out.decision, "Reallocate budget to top performers");
    }

    #[test]
    fn analyze_question_without_metrics_uses_keywords() {
        let out = analyze_question("Competitors are undercutting our prices");
        assert_eq!(out.decision, "Differentiate through unique value proposition");
    }
}
