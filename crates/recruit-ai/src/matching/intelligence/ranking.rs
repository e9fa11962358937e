use serde::{Deserialize, Serialize};

use super::super::facts::{JdFacts, ResumeFacts};
use super::{RecruitmentIntelligenceScorer, RecruitmentScoreRecord};

/// One row of a ranked batch, positions starting at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub position: usize,
    pub record: RecruitmentScoreRecord,
}

/// Scores every resume against the JD and orders the results best-first.
///
/// The sort is stable, so candidates with equal scores keep their input
/// order.
pub fn rank_candidates(
    scorer: &RecruitmentIntelligenceScorer,
    jd: &JdFacts,
    resumes: &[ResumeFacts],
) -> Vec<RankedCandidate> {
    let records = resumes
        .iter()
        .map(|resume| scorer.score(jd, resume))
        .collect();
    order_records(records)
}

/// Stable best-first ordering with 1-based positions.
pub(crate) fn order_records(mut records: Vec<RecruitmentScoreRecord>) -> Vec<RankedCandidate> {
    records.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedCandidate {
            position: index + 1,
            record,
        })
        .collect()
}
