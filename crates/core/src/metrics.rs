//! Campaign metrics as submitted by a caller.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Loosely-typed bag of campaign metrics.
///
/// Every field is optional and unvalidated; any subset may be present. Keys use
/// camelCase on the wire so payloads produced by the web front end deserialize
/// as-is. Numeric fields accept numbers or numeric strings; any other value
/// (`null`, `"abc"`, objects) reads as absent instead of failing the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricInput {
    /// Return on ad spend (revenue / spend).
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub roas: Option<f64>,

    /// Customer acquisition cost.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub cac: Option<f64>,

    /// Cost per click.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub cpc: Option<f64>,

    /// Click-through rate, in percent (2.5 means 2.5%).
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub ctr: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub spend: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub impressions: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub conversions: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub quarterly_budget: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub monthly_goal: Option<f64>,

    /// Unstructured question or context, scanned for keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Number(n) => Some(n),
        LooseNumber::Text(s) => s.trim().parse::<f64>().ok(),
        LooseNumber::Other(_) => None,
    })
}

macro_rules! metric_accessors {
    ($($field:ident => $with:ident),* $(,)?) => {
        impl MetricInput {
            $(
                pub fn $with(mut self, value: f64) -> Self {
                    self.$field = Some(value);
                    self
                }

                /// Returns the value only when present and finite.
                pub fn $field(&self) -> Option<f64> {
                    self.$field.filter(|v| v.is_finite())
                }
            )*
        }
    };
}

metric_accessors!(
    roas => with_roas,
    cac => with_cac,
    cpc => with_cpc,
    ctr => with_ctr,
    spend => with_spend,
    impressions => with_impressions,
    conversions => with_conversions,
    quarterly_budget => with_quarterly_budget,
    monthly_goal => with_monthly_goal,
);

impl MetricInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    /// Free text, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.free_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// True when at least one numeric field holds a usable (finite) value.
    pub fn has_numeric_metric(&self) -> bool {
        [
            self.roas(),
            self.cac(),
            self.cpc(),
            self.ctr(),
            self.spend(),
            self.impressions(),
            self.conversions(),
            self.quarterly_budget(),
            self.monthly_goal(),
        ]
        .iter()
        .any(Option::is_some)
    }
}
