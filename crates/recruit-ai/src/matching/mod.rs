//! Resume-to-JD matching engine.
//!
//! Skill canonicalization and fuzzy matching feed two independent scoring
//! pipelines: the five-factor core match (0-1) and the recruitment
//! intelligence score (0-100). Everything here is deterministic given the
//! synonym table; callers inject the reference date for timeline work.

pub mod basic;
pub mod core;
pub mod facts;
pub mod gaps;
pub mod intelligence;
pub mod repository;
pub mod service;
pub mod skills;

#[cfg(test)]
mod tests;

pub use basic::{BasicMatchCalculator, SimpleMatchReport, WeightedMatchReport, WeightedSkill};
pub use facts::{
    CareerSummary, DeliveryType, EducationEntry, JdFacts, JdId, ProjectFact, ResumeFacts, ResumeId,
    ScaleRequirements, WorkEntry,
};
pub use gaps::{EmploymentGapCalculator, GapKind, GapPeriod, GapScan};
pub use intelligence::{
    rank_candidates, CandidateProfile, IntelligenceConfig, RankedCandidate, Rating,
    RecruitmentIntelligenceScorer, RecruitmentScoreRecord, ScoreReportView,
};
pub use repository::{
    RepositoryError, ScoreRecord, ScoreRepository, ShortlistError, ShortlistNotice,
    ShortlistPublisher,
};
pub use self::core::{CoreMatchScorer, CoreScoringConfig, ExperienceStatus, MatchRecord};
pub use service::{MatchServiceError, MatchingService};
pub use skills::{FuzzySkillMatcher, SkillNormalizer, SynonymTable};
