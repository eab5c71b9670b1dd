//! Canned responses for free-text marketing questions.

use serde::{Deserialize, Serialize};

use amschel_core::{Confidence, DecisionOutput};

/// Situation recognised in a free-text question.
///
/// Variants are listed in match priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    BudgetCut,
    ProductLaunch,
    Competition,
    Seasonal,
    Decline,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::BudgetCut,
        Topic::ProductLaunch,
        Topic::Competition,
        Topic::Seasonal,
        Topic::Decline,
    ];

    /// Lowercase substrings that trigger this topic.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::BudgetCut => &["budget cut", "reduce spend"],
            Topic::ProductLaunch => &["new product launch", "product launch", "launching", "new product"],
            Topic::Competition => &["competitors", "competition"],
            Topic::Seasonal => &["seasonal", "holiday"],
            Topic::Decline => &["underperforming", "declining"],
        }
    }

    /// First topic (in priority order) whose keywords occur in `text`.
    pub fn detect(text: &str) -> Option<Topic> {
        let text = text.to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.keywords().iter().any(|kw| text.contains(kw)))
    }

    pub fn response(&self) -> DecisionOutput {
        match self {
            Topic::BudgetCut => DecisionOutput::new(
                "Consolidate to highest-performing channels",
                "During budget constraints, concentrate resources on proven channels with best ROI. \
                 Pause experimental campaigns and focus on core performance drivers.",
                Confidence::High,
            ),
            Topic::ProductLaunch => DecisionOutput::new(
                "Implement tiered awareness strategy",
                "New product launches require broad reach followed by targeted conversion campaigns. \
                 Start with awareness building, then retarget engaged audiences with conversion-focused creative.",
                Confidence::Medium,
            ),
            Topic::Competition => DecisionOutput::new(
                "Differentiate through unique value proposition",
                "Competitive pressure requires clear differentiation. Focus messaging on unique benefits \
                 and consider conquesting strategies for competitor audiences.",
                Confidence::Medium,
            ),
            Topic::Seasonal => DecisionOutput::new(
                "Prepare scaled seasonal campaigns",
                "Seasonal opportunities require advance preparation and increased budget allocation. \
                 Plan creative variants and audience expansion 4-6 weeks ahead.",
                Confidence::Medium,
            ),
            Topic::Decline => DecisionOutput::new(
                "Conduct comprehensive campaign audit",
                "Performance decline requires systematic analysis of creative fatigue, audience saturation, \
                 and competitive landscape changes. Test new approaches immediately.",
                Confidence::High,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_topics_case_insensitively() {
        assert_eq!(Topic::detect("Our BUDGET CUT hits next month"), Some(Topic::BudgetCut));
        assert_eq!(Topic::detect("We are launching a new product"), Some(Topic::ProductLaunch));
        assert_eq!(Topic::detect("competitors are outbidding us"), Some(Topic::Competition));
        assert_eq!(Topic::detect("Holiday traffic is coming"), Some(Topic::Seasonal));
        assert_eq!(Topic::detect("sales are declining"), Some(Topic::Decline));
    }

    #[test]
    fn earlier_topic_wins_when_several_match() {
        // budget cut outranks the seasonal mention
        assert_eq!(
            Topic::detect("holiday season but we had a budget cut"),
            Some(Topic::BudgetCut)
        );
        assert_eq!(
            Topic::detect("product launch while competition is fierce"),
            Some(Topic::ProductLaunch)
        );
    }

    #[test]
    fn unrelated_text_has_no_topic() {
        assert_eq!(Topic::detect("what should I do?"), None);
    }

    #[test]
    fn confidence_per_topic() {
        assert_eq!(Topic::BudgetCut.response().confidence, Confidence::High);
        assert_eq!(Topic::Decline.response().confidence, Confidence::High);
        assert_eq!(Topic::ProductLaunch.response().confidence, Confidence::Medium);
        assert_eq!(Topic::Competition.response().confidence, Confidence::Medium);
        assert_eq!(Topic::Seasonal.response().confidence, Confidence::Medium);
    }
}
