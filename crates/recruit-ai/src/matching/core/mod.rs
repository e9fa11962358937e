mod config;
mod rules;

pub use config::CoreScoringConfig;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::facts::{JdFacts, ResumeFacts};
use super::gaps::EmploymentGapCalculator;
use super::skills::FuzzySkillMatcher;

/// Stateless scorer applying the five-factor rubric to one JD/resume pair.
pub struct CoreMatchScorer {
    matcher: FuzzySkillMatcher,
    gap_calculator: EmploymentGapCalculator,
    config: CoreScoringConfig,
}

impl CoreMatchScorer {
    pub fn new(matcher: FuzzySkillMatcher, config: CoreScoringConfig) -> Self {
        Self {
            matcher,
            gap_calculator: EmploymentGapCalculator,
            config,
        }
    }

    pub fn with_builtin_table() -> Self {
        Self::new(
            FuzzySkillMatcher::with_builtin_table(),
            CoreScoringConfig::default(),
        )
    }

    /// The reference date resolves "present" employment bounds; callers pass
    /// it in so replays stay deterministic.
    pub fn score(&self, jd: &JdFacts, resume: &ResumeFacts, today: NaiveDate) -> MatchRecord {
        let gaps = self
            .gap_calculator
            .scan(&resume.work_history, &resume.education, today);
        let (factors, signals) = rules::score_facts(jd, resume, &gaps, &self.matcher, &self.config);

        let weighted = self.config.skill_weight * factors.skill
            + self.config.experience_weight * factors.experience
            + self.config.project_weight * factors.projects
            + self.config.certification_weight * factors.certifications
            + self.config.domain_weight * factors.domain;
        let final_score = (weighted - factors.gap_penalty).clamp(0.0, 1.0);

        MatchRecord {
            candidate_name: resume.display_name().to_string(),
            skill_score: factors.skill,
            experience_score: factors.experience,
            project_score: factors.projects,
            certification_score: factors.certifications,
            domain_score: factors.domain,
            gap_penalty: factors.gap_penalty,
            final_score,
            experience_status: signals.experience_status,
            matched_skills: signals.matched_skills,
            missing_skills: signals.missing_skills,
            matched_preferred: signals.matched_preferred,
            relevant_projects: signals.relevant_projects,
            relevant_certifications: signals.relevant_certifications,
            has_gap: gaps.has_gap,
            total_gap_months: gaps.total_gap_months,
        }
    }
}

/// Tier taken by the experience factor, kept on the record for reviewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceStatus {
    Exceeds,
    Meets,
    Partial,
    Insufficient,
    NoRequirement,
}

impl ExperienceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceStatus::Exceeds => "EXCEEDS",
            ExperienceStatus::Meets => "MEETS",
            ExperienceStatus::Partial => "PARTIAL",
            ExperienceStatus::Insufficient => "INSUFFICIENT",
            ExperienceStatus::NoRequirement => "NO_REQUIREMENT",
        }
    }
}

/// Core match output with per-factor scores and the audit trail lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub candidate_name: String,
    pub skill_score: f64,
    pub experience_score: f64,
    pub project_score: f64,
    pub certification_score: f64,
    pub domain_score: f64,
    pub gap_penalty: f64,
    pub final_score: f64,
    pub experience_status: ExperienceStatus,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub relevant_projects: Vec<String>,
    pub relevant_certifications: Vec<String>,
    pub has_gap: bool,
    pub total_gap_months: u32,
}
