use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::super::facts::{DeliveryType, ResumeFacts};

/// Programs running longer than this count as multi-year.
const MULTI_YEAR_MONTHS: u32 = 24;
const ENTERPRISE_BUDGET_THOUSANDS: f64 = 5_000.0;
const ENTERPRISE_TEAM_SIZE: u32 = 25;

/// Delivery-scale aggregates computed from resume facts before scoring.
///
/// Values derived from projects win; the career summary only fills fields
/// the projects left at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub hands_on_ratio: f64,
    pub pmo_ratio: f64,
    pub largest_team_size: u32,
    pub max_budget_thousands: f64,
    pub multi_year_programs: u32,
    pub enterprise_scale: bool,
    pub high_risk_deliveries: u32,
    pub critical_deliveries_total: u32,
    pub risk_areas_managed: u32,
    pub identified_risk_areas: u32,
}

impl CandidateProfile {
    pub fn from_facts(resume: &ResumeFacts) -> Self {
        let mut largest_team_size = 0u32;
        let mut max_budget_thousands = 0f64;
        let mut multi_year_programs = 0u32;
        let mut critical_deliveries_total = 0u32;
        let mut high_risk_deliveries = 0u32;
        let mut risk_areas_managed = 0u32;
        let mut distinct_risks: HashSet<String> = HashSet::new();

        for project in &resume.projects {
            largest_team_size = largest_team_size.max(project.team_size);
            if project.budget_usd_thousands > max_budget_thousands {
                max_budget_thousands = project.budget_usd_thousands;
            }
            if project.duration_months > MULTI_YEAR_MONTHS {
                multi_year_programs += 1;
            }
            if project.production_launch {
                critical_deliveries_total += 1;
            }
            if !project.risk_events.is_empty() {
                high_risk_deliveries += 1;
                risk_areas_managed += project.risk_events.len() as u32;
            }
            for risk in &project.risk_events {
                distinct_risks.insert(risk.trim().to_lowercase());
            }
        }

        let summary = &resume.career_summary;
        if critical_deliveries_total == 0 {
            critical_deliveries_total = summary.production_launches;
        }
        if largest_team_size == 0 {
            largest_team_size = summary.largest_team;
        }
        if max_budget_thousands == 0.0 {
            max_budget_thousands = summary.largest_budget_thousands;
        }
        let mut enterprise_scale = summary.enterprise;
        if summary.multi_year && multi_year_programs == 0 {
            multi_year_programs = 1;
        }

        let mut hands_on_count = 0u32;
        let mut pmo_count = 0u32;
        for project in &resume.projects {
            match project.effective_delivery_type() {
                DeliveryType::Governance => pmo_count += 1,
                // Hybrid work still exercises delivery muscles.
                DeliveryType::HandsOn | DeliveryType::Hybrid => hands_on_count += 1,
            }
        }
        let total_projects = resume.projects.len() as f64;
        let (hands_on_ratio, pmo_ratio) = if resume.projects.is_empty() {
            (0.5, 0.0)
        } else {
            (
                hands_on_count as f64 / total_projects,
                pmo_count as f64 / total_projects,
            )
        };

        if !enterprise_scale {
            enterprise_scale = max_budget_thousands >= ENTERPRISE_BUDGET_THOUSANDS
                || largest_team_size >= ENTERPRISE_TEAM_SIZE;
        }

        Self {
            hands_on_ratio,
            pmo_ratio,
            largest_team_size,
            max_budget_thousands,
            multi_year_programs,
            enterprise_scale,
            high_risk_deliveries,
            critical_deliveries_total,
            risk_areas_managed,
            identified_risk_areas: distinct_risks.len() as u32,
        }
    }
}
