use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;

use recruit_ai::error::AppError;
use recruit_ai::matching::{
    JdFacts, JdId, RankedCandidate, RepositoryError, ResumeFacts, ResumeId, ScoreRecord,
    ScoreReportView, ScoreRepository, ShortlistError, ShortlistNotice, ShortlistPublisher,
};

/// Vec-backed store; insertion order carries through the stable ranking
/// sort, so tied candidates keep the order they were scored in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreRepository {
    records: Arc<Mutex<Vec<ScoreRecord>>>,
}

impl ScoreRepository for InMemoryScoreRepository {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard
            .iter_mut()
            .find(|stored| stored.jd_id == record.jd_id && stored.resume_id == record.resume_id)
        {
            Some(stored) => *stored = record.clone(),
            None => guard.push(record.clone()),
        }
        Ok(record)
    }

    fn fetch(
        &self,
        jd_id: &JdId,
        resume_id: &ResumeId,
    ) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|stored| &stored.jd_id == jd_id && &stored.resume_id == resume_id)
            .cloned())
    }

    fn ranked(&self, jd_id: &JdId) -> Result<Vec<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<ScoreRecord> = guard
            .iter()
            .filter(|stored| &stored.jd_id == jd_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.intelligence
                .final_score
                .total_cmp(&a.intelligence.final_score)
        });
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryShortlistPublisher {
    notices: Arc<Mutex<Vec<ShortlistNotice>>>,
}

impl ShortlistPublisher for InMemoryShortlistPublisher {
    fn publish(&self, notice: ShortlistNotice) -> Result<(), ShortlistError> {
        let mut guard = self.notices.lock().expect("shortlist mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryShortlistPublisher {
    pub(crate) fn notices(&self) -> Vec<ShortlistNotice> {
        self.notices
            .lock()
            .expect("shortlist mutex poisoned")
            .clone()
    }
}

pub(crate) fn load_jd(path: &Path) -> Result<JdFacts, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn load_resume(path: &Path) -> Result<ResumeFacts, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_weight(raw: &str) -> Result<(String, f64), String> {
    let (skill, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected skill=weight, got '{raw}'"))?;
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(format!("expected skill=weight, got '{raw}'"));
    }
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse weight in '{raw}' ({err})"))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be a non-negative number, got '{raw}'"));
    }
    Ok((skill.to_string(), weight))
}

/// One exported table row; numbers reuse the report view's rounding.
#[derive(Debug, Serialize)]
pub(crate) struct RankingRow {
    pub(crate) position: usize,
    pub(crate) candidate: String,
    pub(crate) final_score: f64,
    pub(crate) rating: &'static str,
    pub(crate) skill_match: f64,
    pub(crate) domain_fit: f64,
    pub(crate) execution: f64,
    pub(crate) delivery_risk: f64,
    pub(crate) scale_bonus: i32,
    pub(crate) pmo_penalty: i32,
}

impl RankingRow {
    pub(crate) fn from_ranked(ranked: &RankedCandidate) -> Self {
        let view = ScoreReportView::from(&ranked.record);
        Self {
            position: ranked.position,
            candidate: view.candidate_name,
            final_score: view.scores.final_score,
            rating: ranked.record.rating.label(),
            skill_match: view.scores.skill_match,
            domain_fit: view.scores.domain_fit,
            execution: view.scores.execution,
            delivery_risk: view.scores.delivery_risk,
            scale_bonus: view.scores.scale_bonus,
            pmo_penalty: view.scores.pmo_penalty,
        }
    }
}

pub(crate) fn write_ranking_csv(path: &Path, ranked: &[RankedCandidate]) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in ranked {
        writer
            .serialize(RankingRow::from_ranked(row))
            .map_err(|err| AppError::Io(io::Error::other(err)))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse_and_reject_with_context() {
        assert_eq!(
            parse_date("2025-06-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"))
        );
        let err = parse_date("06/01/2025").expect_err("slash format rejected");
        assert!(err.contains("06/01/2025"));
    }

    #[test]
    fn weight_entries_parse_and_validate() {
        assert_eq!(parse_weight("java=3"), Ok(("java".to_string(), 3.0)));
        assert_eq!(parse_weight(" aws = 1.5 "), Ok(("aws".to_string(), 1.5)));
        assert!(parse_weight("java").is_err());
        assert!(parse_weight("java=-2").is_err());
        assert!(parse_weight("=3").is_err());
    }
}
