mod config;
mod derive;
mod inference;
mod ranking;
mod report;
mod rules;

pub use config::IntelligenceConfig;
pub use derive::CandidateProfile;
pub use ranking::{rank_candidates, RankedCandidate};
pub(crate) use ranking::order_records;
pub use report::{EvidenceBlock, ScoreBlock, ScoreReportView};

use serde::{Deserialize, Serialize};

use super::facts::{JdFacts, ResumeFacts};
use super::skills::SkillNormalizer;

/// Stateless scorer producing the 0-100 recruitment-intelligence score.
pub struct RecruitmentIntelligenceScorer {
    normalizer: SkillNormalizer,
    config: IntelligenceConfig,
}

impl RecruitmentIntelligenceScorer {
    pub fn new(normalizer: SkillNormalizer, config: IntelligenceConfig) -> Self {
        Self { normalizer, config }
    }

    pub fn with_builtin_table() -> Self {
        Self::new(
            SkillNormalizer::with_builtin_table(),
            IntelligenceConfig::default(),
        )
    }

    pub fn score(&self, jd: &JdFacts, resume: &ResumeFacts) -> RecruitmentScoreRecord {
        let profile = CandidateProfile::from_facts(resume);
        let (factors, signals) =
            rules::score_facts(jd, resume, &profile, &self.normalizer, &self.config);

        let weighted = factors.skill_match * self.config.skill_weight
            + factors.domain_fit * self.config.domain_weight
            + factors.execution * self.config.execution_weight
            + factors.delivery_risk * self.config.delivery_risk_weight
            + f64::from(factors.scale_bonus)
            + f64::from(factors.methodology_bonus)
            + f64::from(factors.pmo_penalty);
        let final_score = weighted.clamp(0.0, 100.0);

        RecruitmentScoreRecord {
            candidate_name: resume.display_name().to_string(),
            skill_match: factors.skill_match,
            domain_fit: factors.domain_fit,
            execution: factors.execution,
            delivery_risk: factors.delivery_risk,
            methodology_bonus: factors.methodology_bonus,
            scale_bonus: factors.scale_bonus,
            pmo_penalty: factors.pmo_penalty,
            final_score,
            rating: Rating::for_score(final_score),
            matched_skills: signals.matched_skills,
            matched_domains: signals.matched_domains,
            key_projects: key_projects(resume),
            risk_events: distinct_risk_events(resume),
            scale_indicators: signals.scale_indicators,
        }
    }
}

/// Projects that shipped to production or absorbed at least one risk event.
fn key_projects(resume: &ResumeFacts) -> Vec<String> {
    resume
        .projects
        .iter()
        .filter(|project| project.production_launch || !project.risk_events.is_empty())
        .map(|project| project.name.clone())
        .collect()
}

fn distinct_risk_events(resume: &ResumeFacts) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut events = Vec::new();
    for project in &resume.projects {
        for risk in &project.risk_events {
            if seen.insert(risk.clone()) {
                events.push(risk.clone());
            }
        }
    }
    events
}

/// Shortlist tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Top Choice")]
    TopChoice,
    #[serde(rename = "Strong Primary")]
    StrongPrimary,
    #[serde(rename = "Strong Secondary")]
    StrongSecondary,
    #[serde(rename = "Backup")]
    Backup,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Rating {
    pub fn for_score(final_score: f64) -> Self {
        if final_score >= 90.0 {
            Rating::TopChoice
        } else if final_score >= 80.0 {
            Rating::StrongPrimary
        } else if final_score >= 70.0 {
            Rating::StrongSecondary
        } else if final_score >= 60.0 {
            Rating::Backup
        } else {
            Rating::NotRecommended
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rating::TopChoice => "Top Choice",
            Rating::StrongPrimary => "Strong Primary",
            Rating::StrongSecondary => "Strong Secondary",
            Rating::Backup => "Backup",
            Rating::NotRecommended => "Not Recommended",
        }
    }
}

/// Intelligence-score output with factor breakdown and evidence lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentScoreRecord {
    pub candidate_name: String,
    pub skill_match: f64,
    pub domain_fit: f64,
    pub execution: f64,
    pub delivery_risk: f64,
    pub methodology_bonus: i32,
    pub scale_bonus: i32,
    pub pmo_penalty: i32,
    pub final_score: f64,
    pub rating: Rating,
    pub matched_skills: Vec<String>,
    pub matched_domains: Vec<String>,
    pub key_projects: Vec<String>,
    pub risk_events: Vec<String>,
    pub scale_indicators: Vec<String>,
}
