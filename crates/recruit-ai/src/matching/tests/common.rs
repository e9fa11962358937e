use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::config::ShortlistConfig;
use crate::matching::facts::{
    CareerSummary, EducationEntry, JdFacts, JdId, ProjectFact, ResumeFacts, ResumeId, WorkEntry,
};
use crate::matching::repository::{
    RepositoryError, ScoreRecord, ScoreRepository, ShortlistError, ShortlistNotice,
    ShortlistPublisher,
};
use crate::matching::MatchingService;

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn platform_jd() -> JdFacts {
    JdFacts {
        domains: vec!["fintech".to_string()],
        mandatory_skills: vec!["Java".to_string(), "AWS".to_string()],
        preferred_skills: vec!["Terraform".to_string()],
        tools: vec!["Jira".to_string()],
        methodologies: vec!["agile".to_string(), "scrum".to_string()],
        min_experience_years: 5.0,
        critical_deliveries_required: 4,
        risk_areas_expected: 3,
        ..JdFacts::default()
    }
}

pub(super) fn delivery_project(name: &str, risk_events: &[&str], launch: bool) -> ProjectFact {
    ProjectFact {
        name: name.to_string(),
        domain: "fintech".to_string(),
        role: "Lead Engineer".to_string(),
        tech_stack: vec!["Java".to_string(), "AWS".to_string()],
        team_size: 8,
        budget_usd_thousands: 900.0,
        duration_months: 30,
        production_launch: launch,
        risk_events: risk_events.iter().map(|risk| risk.to_string()).collect(),
        ..ProjectFact::default()
    }
}

pub(super) fn strong_resume() -> ResumeFacts {
    ResumeFacts {
        candidate_name: "Priya Raman".to_string(),
        domains: vec!["Fintech Payments".to_string()],
        skills: vec![
            "Java".to_string(),
            "AWS".to_string(),
            "Terraform".to_string(),
            "Jira".to_string(),
            "Agile".to_string(),
            "Scrum".to_string(),
        ],
        methodologies: vec!["Agile".to_string(), "Scrum".to_string()],
        experience_years: 8.0,
        projects: vec![
            delivery_project("Ledger Replatform", &["database failover"], true),
            delivery_project("Card Gateway", &["pci audit finding"], true),
            delivery_project("Fraud Pipeline", &["model rollback"], true),
            delivery_project("Payments API", &["regional outage"], true),
        ],
        work_history: vec![
            WorkEntry {
                company: "Brightpay".to_string(),
                title: "Senior Engineer".to_string(),
                start: Some("2017-03".to_string()),
                end: Some("2021-02".to_string()),
            },
            WorkEntry {
                company: "Northledger".to_string(),
                title: "Staff Engineer".to_string(),
                start: Some("2021-03".to_string()),
                end: Some("present".to_string()),
            },
        ],
        education: vec![EducationEntry {
            institution: "State University".to_string(),
            degree: "BSc Computer Science".to_string(),
            end: Some("2016-12".to_string()),
            graduation_year: None,
        }],
        certifications: vec!["AWS Certified Solutions Architect".to_string()],
        career_summary: CareerSummary::default(),
    }
}

pub(super) fn minimal_resume(name: &str) -> ResumeFacts {
    ResumeFacts {
        candidate_name: name.to_string(),
        ..ResumeFacts::default()
    }
}

pub(super) fn build_service() -> (
    MatchingService<MemoryRepository, MemoryShortlist>,
    Arc<MemoryRepository>,
    Arc<MemoryShortlist>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let shortlist = Arc::new(MemoryShortlist::default());
    let service = MatchingService::new(
        repository.clone(),
        shortlist.clone(),
        ShortlistConfig { min_score: 90.0 },
    );
    (service, repository, shortlist)
}

/// Insertion-ordered store so tie order stays deterministic in assertions.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ScoreRecord>>>,
}

impl ScoreRepository for MemoryRepository {
    fn insert(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if let Some(existing) = guard
            .iter_mut()
            .find(|stored| stored.jd_id == record.jd_id && stored.resume_id == record.resume_id)
        {
            *existing = record.clone();
        } else {
            guard.push(record.clone());
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
pub(super) struct MemoryShortlist {
    notices: Arc<Mutex<Vec<ShortlistNotice>>>,
}

impl MemoryShortlist {
    pub(super) fn notices(&self) -> Vec<ShortlistNotice> {
        self.notices.lock().expect("shortlist mutex poisoned").clone()
    }
}

impl ShortlistPublisher for MemoryShortlist {
    fn publish(&self, notice: ShortlistNotice) -> Result<(), ShortlistError> {
        self.notices
            .lock()
            .expect("shortlist mutex poisoned")
            .push(notice);
        Ok(())
    }
}
