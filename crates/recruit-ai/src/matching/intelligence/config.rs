use serde::{Deserialize, Serialize};

/// Rubric configuration for the recruitment-intelligence score.
///
/// Factor weights apply to 0-100 factor scores; bonuses and penalties are
/// flat points added after weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    pub skill_weight: f64,
    pub domain_weight: f64,
    pub execution_weight: f64,
    pub delivery_risk_weight: f64,
    /// Maximum points the preferred-skill bonus adds to the skill factor.
    pub preferred_bonus_cap: f64,
    /// Maximum points the tool bonus adds to the skill factor.
    pub tools_bonus_cap: f64,
    /// Maximum points the methodology bonus adds to the skill factor.
    pub methodology_bonus_cap: f64,
    pub major_scale_bonus: i32,
    pub minor_scale_bonus: i32,
    pub strong_methodology_bonus: i32,
    pub partial_methodology_bonus: i32,
    pub moderate_pmo_penalty: i32,
    pub heavy_pmo_penalty: i32,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.15,
            domain_weight: 0.25,
            execution_weight: 0.25,
            delivery_risk_weight: 0.20,
            preferred_bonus_cap: 15.0,
            tools_bonus_cap: 10.0,
            methodology_bonus_cap: 5.0,
            major_scale_bonus: 10,
            minor_scale_bonus: 5,
            strong_methodology_bonus: 5,
            partial_methodology_bonus: 2,
            moderate_pmo_penalty: -10,
            heavy_pmo_penalty: -20,
        }
    }
}
