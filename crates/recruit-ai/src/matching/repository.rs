use serde::{Deserialize, Serialize};

use super::core::MatchRecord;
use super::facts::{JdId, ResumeId};
use super::intelligence::{Rating, RecruitmentScoreRecord};

/// Repository record pairing both scoring outputs for one JD/resume pair.
///
/// The two scores are never merged; downstream consumers read whichever
/// pipeline they care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub jd_id: JdId,
    pub resume_id: ResumeId,
    pub core: MatchRecord,
    pub intelligence: RecruitmentScoreRecord,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// `insert` upserts: rescoring a pair replaces the previous record. `ranked`
/// returns a JD's records best-first by intelligence final score, stable for
/// ties.
pub trait ScoreRepository: Send + Sync {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError>;
    fn fetch(&self, jd_id: &JdId, resume_id: &ResumeId)
        -> Result<Option<ScoreRecord>, RepositoryError>;
    fn ranked(&self, jd_id: &JdId) -> Result<Vec<ScoreRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound shortlist hooks (e.g., ATS or e-mail adapters).
pub trait ShortlistPublisher: Send + Sync {
    fn publish(&self, notice: ShortlistNotice) -> Result<(), ShortlistError>;
}

/// Payload handed to shortlist transports when a candidate clears the
/// configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistNotice {
    pub jd_id: JdId,
    pub resume_id: ResumeId,
    pub candidate_name: String,
    pub final_score: f64,
    pub rating: Rating,
}

/// Shortlist dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error("shortlist transport unavailable: {0}")]
    Transport(String),
}
