//! Metric-to-recommendation classifier.
//!
//! Model: a fixed-priority decision table. Rules are tried in order and the
//! first one with a firing branch wins:
//! 1. ROAS ladder (always fires when ROAS is present)
//! 2. CTR + CPC
//! 3. CAC against a share of the monthly goal
//! 4. spend pace against the monthly goal
//! 5. conversion rate
//! 6. free-text topics
//! 7. fallback asking for an objective
//!
//! Non-finite inputs skip their rule, as does an undefined ratio (0/0). A ratio
//! over a zero denominator is infinite and compares like any other value.

use serde::{Deserialize, Serialize};

use amschel_core::{Confidence, DecisionOutput, MetricInput};

use crate::playbook::Topic;
use crate::result::EngineResult;
use crate::thresholds::Thresholds;

/// Rule of the decision table that produced a decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Roas,
    CtrCpc,
    CacGoal,
    SpendPace,
    ConversionRate,
    FreeText(Topic),
    Fallback,
}

/// Coarse posture of a decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Put more money or reach behind what works.
    Scale,
    /// Keep running, but change creative/targeting/funnel.
    Optimize,
    /// Stop and rethink.
    Restructure,
    /// Not enough signal; ask for the objective.
    Clarify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub rule: Rule,
    pub stance: Stance,
    pub output: DecisionOutput,
}

impl Classification {
    fn new(rule: Rule, stance: Stance, output: DecisionOutput) -> Self {
        Self { rule, stance, output }
    }
}

/// Decision table bound to a set of (validated) thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(thresholds: Thresholds) -> EngineResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn analyze(&self, input: &MetricInput) -> DecisionOutput {
        self.classify(input).output
    }

    pub fn classify(&self, input: &MetricInput) -> Classification {
        let classification = self
            .by_roas(input)
            .or_else(|| self.by_ctr_cpc(input))
            .or_else(|| self.by_cac_goal(input))
            .or_else(|| self.by_spend_pace(input))
            .or_else(|| self.by_conversion_rate(input))
            .or_else(|| by_free_text(input))
            .unwrap_or_else(fallback);

        tracing::debug!(
            rule = ?classification.rule,
            stance = ?classification.stance,
            confidence = %classification.output.confidence,
            "classified metrics"
        );
        classification
    }

    fn by_roas(&self, input: &MetricInput) -> Option<Classification> {
        let roas = input.roas()?;
        let t = &self.thresholds;

        let (stance, output) = if roas >= t.roas_scale {
            (
                Stance::Scale,
                DecisionOutput::new(
                    "Scale this campaign aggressively",
                    "Exceptional ROAS indicates strong campaign performance. Request additional budget \
                     allocation and expand to similar audience segments immediately.",
                    Confidence::High,
                ),
            )
        } else if roas >= t.roas_increase {
            (
                Stance::Scale,
                DecisionOutput::new(
                    "Increase budget by 30-50%",
                    "Strong ROAS performance with room for growth. Test expanded audience targeting \
                     while maintaining current creative strategy.",
                    Confidence::High,
                ),
            )
        } else if roas >= t.roas_optimize {
            (
                Stance::Optimize,
                DecisionOutput::new(
                    "Optimize creative and targeting",
                    "Moderate ROAS suggests campaign potential. A/B test new ad creative, refine \
                     audience segments, and improve landing page experience.",
                    Confidence::High,
                ),
            )
        } else {
            (
                Stance::Restructure,
                DecisionOutput::new(
                    "Pause and restructure campaign",
                    "Poor ROAS indicates fundamental campaign issues. Reassess audience targeting, \
                     messaging alignment, and competitive positioning before continuing spend.",
                    Confidence::High,
                ),
            )
        };

        Some(Classification::new(Rule::Roas, stance, output))
    }

    fn by_ctr_cpc(&self, input: &MetricInput) -> Option<Classification> {
        let (ctr, cpc) = (input.ctr()?, input.cpc()?);
        let t = &self.thresholds;

        let (stance, output) = if ctr >= t.ctr_strong && cpc <= t.cpc_efficient {
            (
                Stance::Scale,
                DecisionOutput::new(
                    "Maximize reach with current creative",
                    "High engagement at low cost indicates strong creative resonance. Increase daily \
                     budgets and expand to lookalike audiences.",
                    Confidence::High,
                ),
            )
        } else if ctr < t.ctr_weak {
            (
                Stance::Optimize,
                DecisionOutput::new(
                    "Refresh creative assets immediately",
                    "Low click-through rate suggests ad fatigue or poor audience-message fit. Test new \
                     creative angles and update targeting parameters.",
                    Confidence::High,
                ),
            )
        } else if cpc > t.cpc_expensive {
            (
                Stance::Optimize,
                DecisionOutput::new(
                    "Reduce competition through niche targeting",
                    "High cost-per-click indicates oversaturated audience. Narrow targeting to more \
                     specific demographics or interest groups.",
                    Confidence::Medium,
                ),
            )
        } else {
            return None;
        };

        Some(Classification::new(Rule::CtrCpc, stance, output))
    }

    fn by_cac_goal(&self, input: &MetricInput) -> Option<Classification> {
        let (cac, goal) = (input.cac()?, input.monthly_goal()?);
        let ceiling = goal * self.thresholds.cac_goal_share;

        let (stance, output) = if cac > ceiling {
            (
                Stance::Optimize,
                DecisionOutput::new(
                    "Lower acquisition cost before scaling",
                    "Each new customer consumes too large a share of the monthly goal. Tighten targeting, \
                     improve landing page conversion, and shift budget toward channels with lower CAC.",
                    Confidence::Medium,
                ),
            )
        } else {
            (
                Stance::Scale,
                DecisionOutput::new(
                    "Scale acquisition at current CAC",
                    "Customer acquisition cost sits within a sustainable share of the monthly goal. \
                     Increase spend on the channels producing these customers and track CAC weekly.",
                    Confidence::Medium,
                ),
            )
        };

        Some(Classification::new(Rule::CacGoal, stance, output))
    }

    fn by_spend_pace(&self, input: &MetricInput) -> Option<Classification> {
        let ratio = defined(input.spend()? / input.monthly_goal()?)?;
        let t = &self.thresholds;

        let (stance, output) = if ratio > t.spend_ratio_high {
            (
                Stance::Optimize,
                DecisionOutput::new(
                    "Reallocate budget to top performers",
                    "High spend-to-goal ratio requires immediate optimization. Pause underperforming \
                     campaigns and concentrate budget on proven channels.",
                    Confidence::Medium,
                ),
            )
        } else if ratio < t.spend_ratio_low {
            (
                Stance::Scale,
                DecisionOutput::new(
                    "Accelerate spend on validated campaigns",
                    "Conservative spend suggests missed opportunity. Increase budgets on campaigns with \
                     proven performance metrics.",
                    Confidence::Medium,
                ),
            )
        } else {
            return None;
        };

        Some(Classification::new(Rule::SpendPace, stance, output))
    }

    fn by_conversion_rate(&self, input: &MetricInput) -> Option<Classification> {
        let rate = defined(input.conversions()? / input.impressions()? * 100.0)?;
        if rate >= self.thresholds.conversion_rate_floor {
            return None;
        }

        Some(Classification::new(
            Rule::ConversionRate,
            Stance::Optimize,
            DecisionOutput::new(
                "Focus on conversion funnel optimization",
                "Low conversion rate indicates disconnect between ads and landing experience. Audit user \
                 journey and align messaging across touchpoints.",
                Confidence::Medium,
            ),
        ))
    }
}

fn by_free_text(input: &MetricInput) -> Option<Classification> {
    let topic = Topic::detect(input.text()?)?;
    let stance = match topic {
        Topic::BudgetCut | Topic::Competition => Stance::Optimize,
        Topic::ProductLaunch | Topic::Seasonal => Stance::Scale,
        Topic::Decline => Stance::Restructure,
    };
    Some(Classification::new(Rule::FreeText(topic), stance, topic.response()))
}

fn fallback() -> Classification {
    Classification::new(
        Rule::Fallback,
        Stance::Clarify,
        DecisionOutput::new(
            "Define your primary campaign objective",
            "Effective marketing strategy requires clear KPI focus. Specify whether you're optimizing \
             for awareness, engagement, leads, or conversions to get targeted guidance.",
            Confidence::Low,
        ),
    )
}

fn defined(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

/// Classify with the default thresholds. Never fails.
pub fn analyze_metrics(input: &MetricInput) -> DecisionOutput {
    Classifier::default().analyze(input)
}

/// Like [`analyze_metrics`], also reporting the rule and stance.
pub fn classify(input: &MetricInput) -> Classification {
    Classifier::default().classify(input)
}
