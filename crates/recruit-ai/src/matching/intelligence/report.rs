use serde::{Deserialize, Serialize};

use super::{Rating, RecruitmentScoreRecord};

/// Fixed-shape projection of a score record for downstream consumers.
///
/// Field names are part of the wire contract; numeric scores are rounded to
/// two decimals here and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReportView {
    pub candidate_name: String,
    pub scores: ScoreBlock,
    pub evidence: EvidenceBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBlock {
    pub skill_match: f64,
    pub domain_fit: f64,
    pub execution: f64,
    pub delivery_risk: f64,
    pub scale_bonus: i32,
    pub pmo_penalty: i32,
    pub final_score: f64,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBlock {
    pub matched_skills: Vec<String>,
    pub matched_domains: Vec<String>,
    pub key_projects: Vec<String>,
    pub risk_events: Vec<String>,
    pub scale_indicators: Vec<String>,
}

impl ScoreReportView {
    pub fn from_record(record: &RecruitmentScoreRecord) -> Self {
        Self {
            candidate_name: record.candidate_name.clone(),
            scores: ScoreBlock {
                skill_match: round2(record.skill_match),
                domain_fit: round2(record.domain_fit),
                execution: round2(record.execution),
                delivery_risk: round2(record.delivery_risk),
                scale_bonus: record.scale_bonus,
                pmo_penalty: record.pmo_penalty,
                final_score: round2(record.final_score),
                rating: record.rating,
            },
            evidence: EvidenceBlock {
                matched_skills: record.matched_skills.clone(),
                matched_domains: record.matched_domains.clone(),
                key_projects: record.key_projects.clone(),
                risk_events: record.risk_events.clone(),
                scale_indicators: record.scale_indicators.clone(),
            },
        }
    }
}

impl From<&RecruitmentScoreRecord> for ScoreReportView {
    fn from(record: &RecruitmentScoreRecord) -> Self {
        Self::from_record(record)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
