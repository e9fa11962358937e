use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::core::{CoreMatchScorer, CoreScoringConfig};
use super::facts::{JdFacts, JdId, ResumeFacts, ResumeId};
use super::intelligence::{
    order_records, IntelligenceConfig, RankedCandidate, RecruitmentIntelligenceScorer,
};
use super::repository::{
    RepositoryError, ScoreRecord, ScoreRepository, ShortlistError, ShortlistNotice,
    ShortlistPublisher,
};
use super::skills::{FuzzySkillMatcher, SkillNormalizer};
use crate::config::ShortlistConfig;

/// Service composing both scorers, the repository, and the shortlist hook.
pub struct MatchingService<R, P> {
    repository: Arc<R>,
    shortlist: Arc<P>,
    core: Arc<CoreMatchScorer>,
    intelligence: Arc<RecruitmentIntelligenceScorer>,
    shortlist_min_score: f64,
}

impl<R, P> MatchingService<R, P>
where
    R: ScoreRepository + 'static,
    P: ShortlistPublisher + 'static,
{
    /// Builds both scorers over one shared synonym table.
    pub fn new(repository: Arc<R>, shortlist: Arc<P>, config: ShortlistConfig) -> Self {
        let normalizer = SkillNormalizer::with_builtin_table();
        Self::with_scorers(
            CoreMatchScorer::new(
                FuzzySkillMatcher::new(normalizer.clone()),
                CoreScoringConfig::default(),
            ),
            RecruitmentIntelligenceScorer::new(normalizer, IntelligenceConfig::default()),
            repository,
            shortlist,
            config,
        )
    }

    pub fn with_scorers(
        core: CoreMatchScorer,
        intelligence: RecruitmentIntelligenceScorer,
        repository: Arc<R>,
        shortlist: Arc<P>,
        config: ShortlistConfig,
    ) -> Self {
        Self {
            repository,
            shortlist,
            core: Arc::new(core),
            intelligence: Arc::new(intelligence),
            shortlist_min_score: config.min_score,
        }
    }

    /// Score one pair with both pipelines and persist the combined record.
    pub fn score_pair(
        &self,
        jd_id: &JdId,
        jd: &JdFacts,
        resume_id: &ResumeId,
        resume: &ResumeFacts,
        today: NaiveDate,
    ) -> Result<ScoreRecord, MatchServiceError> {
        let core = self.core.score(jd, resume, today);
        let intelligence = self.intelligence.score(jd, resume);

        info!(
            candidate = %intelligence.candidate_name,
            core_score = core.final_score,
            final_score = intelligence.final_score,
            rating = intelligence.rating.label(),
            "scored candidate"
        );

        let record = ScoreRecord {
            jd_id: jd_id.clone(),
            resume_id: resume_id.clone(),
            core,
            intelligence,
        };
        let stored = self.repository.insert(record)?;

        if stored.intelligence.final_score >= self.shortlist_min_score {
            debug!(
                candidate = %stored.intelligence.candidate_name,
                "publishing shortlist notice"
            );
            self.shortlist.publish(ShortlistNotice {
                jd_id: stored.jd_id.clone(),
                resume_id: stored.resume_id.clone(),
                candidate_name: stored.intelligence.candidate_name.clone(),
                final_score: stored.intelligence.final_score,
                rating: stored.intelligence.rating,
            })?;
        }

        Ok(stored)
    }

    /// Score many resumes against one JD, persist each, and rank best-first.
    pub fn rank(
        &self,
        jd_id: &JdId,
        jd: &JdFacts,
        candidates: &[(ResumeId, ResumeFacts)],
        today: NaiveDate,
    ) -> Result<Vec<RankedCandidate>, MatchServiceError> {
        let mut records = Vec::with_capacity(candidates.len());
        for (resume_id, resume) in candidates {
            let stored = self.score_pair(jd_id, jd, resume_id, resume, today)?;
            records.push(stored.intelligence);
        }
        Ok(order_records(records))
    }

    /// Fetch a previously stored record.
    pub fn get(
        &self,
        jd_id: &JdId,
        resume_id: &ResumeId,
    ) -> Result<ScoreRecord, MatchServiceError> {
        let record = self
            .repository
            .fetch(jd_id, resume_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Stored records for a JD, best-first.
    pub fn ranked(&self, jd_id: &JdId) -> Result<Vec<ScoreRecord>, MatchServiceError> {
        Ok(self.repository.ranked(jd_id)?)
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Shortlist(#[from] ShortlistError),
}
