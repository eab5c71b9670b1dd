//! Classifier cutoffs.
//!
//! Defaults are the fixed decision table; every value can be overridden through
//! an `AMSCHEL_<FIELD>` environment variable (e.g. `AMSCHEL_ROAS_SCALE=6`).

use serde::{Deserialize, Serialize};

use crate::result::{EngineError, EngineResult};

pub const ENV_PREFIX: &str = "AMSCHEL_";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// ROAS at or above which a campaign is scaled aggressively.
    pub roas_scale: f64,
    /// ROAS at or above which budget is increased.
    pub roas_increase: f64,
    /// ROAS at or above which the campaign is optimized rather than paused.
    pub roas_optimize: f64,

    /// CTR (percent) counted as strong engagement.
    pub ctr_strong: f64,
    /// CPC at or below which clicks are cheap.
    pub cpc_efficient: f64,
    /// CTR (percent) below which creative needs refreshing.
    pub ctr_weak: f64,
    /// CPC above which the audience is oversaturated.
    pub cpc_expensive: f64,

    /// Share of the monthly goal that CAC may take before it is too high.
    pub cac_goal_share: f64,

    /// Spend/goal ratio above which budget is reallocated.
    pub spend_ratio_high: f64,
    /// Spend/goal ratio below which spend is accelerated.
    pub spend_ratio_low: f64,

    /// Conversion rate (percent) below which the funnel needs work.
    pub conversion_rate_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            roas_scale: 5.0,
            roas_increase: 3.0,
            roas_optimize: 2.0,
            ctr_strong: 2.5,
            cpc_efficient: 1.5,
            ctr_weak: 1.0,
            cpc_expensive: 3.0,
            cac_goal_share: 0.3,
            spend_ratio_high: 0.5,
            spend_ratio_low: 0.2,
            conversion_rate_floor: 1.0,
        }
    }
}

impl Thresholds {
    /// Load thresholds from the process environment.
    ///
    /// Unset variables keep their default.
    pub fn from_env() -> EngineResult<Self> {
        let thresholds = Self::from_lookup(|key| std::env::var(key).ok());
        if let Err(err) = &thresholds {
            tracing::warn!(error = %err, "rejected threshold overrides from environment");
        }
        thresholds
    }

    /// Load thresholds through an arbitrary key lookup (environment, config map, tests).
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut thresholds = Self::default();
        let mut overridden = 0usize;

        for (name, slot) in thresholds.slots_mut() {
            let key = env_key(name);
            let Some(raw) = lookup(&key) else {
                continue;
            };
            *slot = raw.trim().parse::<f64>().map_err(|e| {
                EngineError::InvalidConfig(format!("{key}={raw:?} is not a number: {e}"))
            })?;
            overridden += 1;
        }

        thresholds.validate()?;
        tracing::debug!(overridden, "loaded classifier thresholds");
        Ok(thresholds)
    }

    /// Check that every cutoff is usable and that the ladders are ordered.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in self.slots() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number (got {value})"
                )));
            }
        }

        if !(self.roas_scale >= self.roas_increase && self.roas_increase >= self.roas_optimize) {
            return Err(EngineError::InvalidConfig(format!(
                "ROAS cutoffs must satisfy scale >= increase >= optimize (got {} / {} / {})",
                self.roas_scale, self.roas_increase, self.roas_optimize
            )));
        }

        if self.spend_ratio_high < self.spend_ratio_low {
            return Err(EngineError::InvalidConfig(format!(
                "spend_ratio_high ({}) must not be below spend_ratio_low ({})",
                self.spend_ratio_high, self.spend_ratio_low
            )));
        }

        Ok(())
    }

    fn slots(&self) -> [(&'static str, f64); 11] {
        [
            ("roas_scale", self.roas_scale),
            ("roas_increase", self.roas_increase),
            ("roas_optimize", self.roas_optimize),
            ("ctr_strong", self.ctr_strong),
            ("cpc_efficient", self.cpc_efficient),
            ("ctr_weak", self.ctr_weak),
            ("cpc_expensive", self.cpc_expensive),
            ("cac_goal_share", self.cac_goal_share),
            ("spend_ratio_high", self.spend_ratio_high),
            ("spend_ratio_low", self.spend_ratio_low),
            ("conversion_rate_floor", self.conversion_rate_floor),
        ]
    }

    fn slots_mut(&mut self) -> [(&'static str, &mut f64); 11] {
        [
            ("roas_scale", &mut self.roas_scale),
            ("roas_increase", &mut self.roas_increase),
            ("roas_optimize", &mut self.roas_optimize),
            ("ctr_strong", &mut self.ctr_strong),
            ("cpc_efficient", &mut self.cpc_efficient),
            ("ctr_weak", &mut self.ctr_weak),
            ("cpc_expensive", &mut self.cpc_expensive),
            ("cac_goal_share", &mut self.cac_goal_share),
            ("spend_ratio_high", &mut self.spend_ratio_high),
            ("spend_ratio_low", &mut self.spend_ratio_low),
            ("conversion_rate_floor", &mut self.conversion_rate_floor),
        ]
    }
}

fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}{}", name.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let t = Thresholds::from_lookup(lookup(&[])).unwrap();
        assert_eq!(t, Thresholds::default());
    }

    #[test]
    fn overrides_are_applied_by_prefixed_key() {
        let t = Thresholds::from_lookup(lookup(&[
            ("AMSCHEL_ROAS_SCALE", "6.5"),
            ("AMSCHEL_CAC_GOAL_SHARE", " 0.25 "),
        ]))
        .unwrap();

        assert_eq!(t.roas_scale, 6.5);
        assert_eq!(t.cac_goal_share, 0.25);
        assert_eq!(t.roas_increase, Thresholds::default().roas_increase);
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let err = Thresholds::from_lookup(lookup(&[("AMSCHEL_CTR_WEAK", "one")])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(msg) if msg.contains("AMSCHEL_CTR_WEAK")));
    }

    #[test]
    fn unordered_roas_ladder_is_rejected() {
        let err = Thresholds::from_lookup(lookup(&[("AMSCHEL_ROAS_INCREASE", "7")])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected() {
        let t = Thresholds {
            cpc_expensive: -1.0,
            ..Thresholds::default()
        };
        assert!(t.validate().is_err());

        let t = Thresholds {
            ctr_strong: f64::NAN,
            ..Thresholds::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn inverted_spend_ratios_are_rejected() {
        let t = Thresholds {
            spend_ratio_high: 0.1,
            ..Thresholds::default()
        };
        assert!(t.validate().is_err());
    }
}
