use serde::{Deserialize, Serialize};

/// Rubric configuration for the five-factor core match score.
///
/// Weights sum to 1.0; the gap penalty is subtracted after weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub project_weight: f64,
    pub certification_weight: f64,
    pub domain_weight: f64,
    /// Maximum additive credit for preferred-skill coverage.
    pub preferred_bonus_cap: f64,
    /// Credit granted per relevant certification.
    pub certification_credit: f64,
    pub short_gap_penalty: f64,
    pub medium_gap_penalty: f64,
    pub long_gap_penalty: f64,
}

impl Default for CoreScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.40,
            experience_weight: 0.25,
            project_weight: 0.20,
            certification_weight: 0.10,
            domain_weight: 0.05,
            preferred_bonus_cap: 0.20,
            certification_credit: 0.25,
            short_gap_penalty: 0.05,
            medium_gap_penalty: 0.10,
            long_gap_penalty: 0.15,
        }
    }
}
