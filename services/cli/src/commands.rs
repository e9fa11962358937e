use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use recruit_ai::config::AppConfig;
use recruit_ai::error::AppError;
use recruit_ai::matching::{
    BasicMatchCalculator, CareerSummary, DeliveryType, EducationEntry, EmploymentGapCalculator,
    FuzzySkillMatcher, JdFacts, JdId, MatchRecord, MatchingService, ProjectFact, RankedCandidate,
    RecruitmentScoreRecord, ResumeFacts, ResumeId, ScaleRequirements, ScoreReportView,
    ShortlistNotice, WeightedSkill, WorkEntry,
};
use recruit_ai::telemetry;

use crate::infra::{
    load_jd, load_resume, write_ranking_csv, InMemoryScoreRepository, InMemoryShortlistPublisher,
    RankingRow,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the job-description fact file (JSON)
    #[arg(long)]
    pub(crate) jd: PathBuf,
    /// Path to the resume fact file (JSON)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Reference date for gap scanning (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit the report payload as JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Path to the job-description fact file (JSON)
    #[arg(long)]
    pub(crate) jd: PathBuf,
    /// Resume fact files (JSON), one per candidate
    #[arg(long = "resume", required = true, num_args = 1..)]
    pub(crate) resumes: Vec<PathBuf>,
    /// Reference date for gap scanning (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the ranked table as a JSON array to this path
    #[arg(long)]
    pub(crate) json_out: Option<PathBuf>,
    /// Write the ranked table as CSV to this path
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Required skills, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) required: Vec<String>,
    /// Candidate skills, comma separated
    #[arg(long, value_delimiter = ',')]
    pub(crate) candidate: Vec<String>,
    /// Weight overrides as skill=weight entries; unlisted skills weigh 1
    #[arg(long = "weight", value_parser = crate::infra::parse_weight)]
    pub(crate) weights: Vec<(String, f64)>,
}

#[derive(Args, Debug)]
pub(crate) struct GapsArgs {
    /// Path to the resume fact file (JSON)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Reference date for resolving open-ended jobs (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for gap scanning (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Include the evidence lists in the rendered reports
    #[arg(long)]
    pub(crate) show_evidence: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        jd,
        resume,
        today,
        json,
    } = args;

    let config = bootstrap()?;
    let jd_facts = load_jd(&jd)?;
    let resume_facts = load_resume(&resume)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let shortlist = Arc::new(InMemoryShortlistPublisher::default());
    let service = MatchingService::new(
        Arc::new(InMemoryScoreRepository::default()),
        shortlist.clone(),
        config.shortlist,
    );

    let record = service.score_pair(
        &JdId(jd.display().to_string()),
        &jd_facts,
        &ResumeId(resume.display().to_string()),
        &resume_facts,
        today,
    )?;

    if json {
        let view = ScoreReportView::from(&record.intelligence);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    render_core_match(&record.core);
    render_intelligence(&record.intelligence, true);
    render_notices(&shortlist.notices());
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        jd,
        resumes,
        today,
        json_out,
        csv_out,
    } = args;

    let config = bootstrap()?;
    let jd_facts = load_jd(&jd)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let mut candidates = Vec::with_capacity(resumes.len());
    for path in &resumes {
        candidates.push((ResumeId(path.display().to_string()), load_resume(path)?));
    }

    let shortlist = Arc::new(InMemoryShortlistPublisher::default());
    let service = MatchingService::new(
        Arc::new(InMemoryScoreRepository::default()),
        shortlist.clone(),
        config.shortlist,
    );
    let ranked = service.rank(&JdId(jd.display().to_string()), &jd_facts, &candidates, today)?;

    println!("Ranked candidates for {}", jd.display());
    render_ranking(&ranked);
    render_notices(&shortlist.notices());

    if let Some(path) = json_out {
        let rows: Vec<RankingRow> = ranked.iter().map(RankingRow::from_ranked).collect();
        fs::write(&path, serde_json::to_string_pretty(&rows)?)?;
        println!("\nWrote JSON ranking to {}", path.display());
    }
    if let Some(path) = csv_out {
        write_ranking_csv(&path, &ranked)?;
        println!("\nWrote CSV ranking to {}", path.display());
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        required,
        candidate,
        weights,
    } = args;

    let calculator = BasicMatchCalculator::new(FuzzySkillMatcher::with_builtin_table());
    let report = calculator.simple_match(&required, &candidate);

    println!(
        "Simple match: {}% ({}/{} requirements)",
        report.score_pct, report.total_matched, report.total_required
    );
    if !report.matched.is_empty() {
        println!("- matched: {}", report.matched.join(", "));
    }
    if !report.missing.is_empty() {
        println!("- missing: {}", report.missing.join(", "));
    }
    if !report.extra.is_empty() {
        println!("- extra: {}", report.extra.join(", "));
    }

    if weights.is_empty() {
        return Ok(());
    }

    let weighted_required: Vec<WeightedSkill> = required
        .iter()
        .map(|skill| WeightedSkill {
            skill: skill.clone(),
            weight: weight_for(&weights, skill),
        })
        .collect();
    let weighted = calculator.weighted_match(&weighted_required, &candidate);
    println!("\nWeighted match: {}%", weighted.score_pct);
    if !weighted.missing.is_empty() {
        println!("- missing:");
        for entry in &weighted.missing {
            println!("  - {} (weight {})", entry.skill, entry.weight);
        }
    }
    Ok(())
}

pub(crate) fn run_gaps(args: GapsArgs) -> Result<(), AppError> {
    let GapsArgs { resume, today } = args;

    let facts = load_resume(&resume)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let scan = EmploymentGapCalculator.scan(&facts.work_history, &facts.education, today);

    println!(
        "Employment gap scan: {} (as of {})",
        facts.display_name(),
        today
    );
    if !scan.has_gap {
        println!("- no unexplained gaps of six months or more");
        return Ok(());
    }
    println!("- {} total gap months", scan.total_gap_months);
    for gap in &scan.gap_details {
        println!(
            "- {}: {} -> {} ({} months)",
            gap.kind.label(),
            gap.start,
            gap.end,
            gap.months
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        show_evidence,
    } = args;

    let config = bootstrap()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Recruitment scoring demo");
    println!("Reference date: {today}");

    let shortlist = Arc::new(InMemoryShortlistPublisher::default());
    let service = MatchingService::new(
        Arc::new(InMemoryScoreRepository::default()),
        shortlist.clone(),
        config.shortlist,
    );

    let jd_id = JdId("platform-delivery-lead".to_string());
    let jd = demo_jd();
    println!(
        "Posting: {} (mandatory: {})",
        jd_id.0,
        jd.mandatory_skills.join(", ")
    );

    let candidates = demo_candidates();
    let ranked = match service.rank(&jd_id, &jd, &candidates, today) {
        Ok(ranked) => ranked,
        Err(err) => {
            println!("  Batch scoring unavailable: {}", err);
            return Ok(());
        }
    };
    println!("\nRanked candidates");
    render_ranking(&ranked);

    let headline_id = ResumeId("amara-diallo".to_string());
    let stored = match service.get(&jd_id, &headline_id) {
        Ok(stored) => stored,
        Err(err) => {
            println!("  Stored record unavailable: {}", err);
            return Ok(());
        }
    };
    render_core_match(&stored.core);
    render_intelligence(&stored.intelligence, show_evidence);

    let view = ScoreReportView::from(&stored.intelligence);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("\nScore report payload:\n{}", json),
        Err(err) => println!("\nScore report payload unavailable: {}", err),
    }

    render_notices(&shortlist.notices());
    Ok(())
}

/// Shared startup for commands that host the scoring service.
fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "scoring engine ready");
    Ok(config)
}

fn render_core_match(record: &MatchRecord) {
    println!("\nCore match: {}", record.candidate_name);
    println!(
        "- final {:.3} | skill {:.2} | experience {:.2} ({}) | projects {:.2} | certifications {:.2} | domain {:.2}",
        record.final_score,
        record.skill_score,
        record.experience_score,
        record.experience_status.label(),
        record.project_score,
        record.certification_score,
        record.domain_score
    );
    if record.has_gap {
        println!(
            "- employment gaps: {} months (penalty {:.2})",
            record.total_gap_months, record.gap_penalty
        );
    } else {
        println!("- employment gaps: none");
    }
    if !record.matched_skills.is_empty() {
        println!("- matched: {}", record.matched_skills.join(", "));
    }
    if !record.missing_skills.is_empty() {
        println!("- missing: {}", record.missing_skills.join(", "));
    }
    if !record.matched_preferred.is_empty() {
        println!("- preferred: {}", record.matched_preferred.join(", "));
    }
}

fn render_intelligence(record: &RecruitmentScoreRecord, show_evidence: bool) {
    println!("\nRecruitment intelligence: {}", record.candidate_name);
    println!(
        "- final {:.2} -> {}",
        record.final_score,
        record.rating.label()
    );
    println!(
        "- skill {:.2} | domain {:.2} | execution {:.2} | delivery risk {:.2}",
        record.skill_match, record.domain_fit, record.execution, record.delivery_risk
    );
    println!(
        "- bonuses: methodology {:+} | scale {:+} | pmo {:+}",
        record.methodology_bonus, record.scale_bonus, record.pmo_penalty
    );
    if !show_evidence {
        return;
    }
    if !record.matched_skills.is_empty() {
        println!("- matched skills: {}", record.matched_skills.join(", "));
    }
    if !record.matched_domains.is_empty() {
        println!("- matched domains: {}", record.matched_domains.join(", "));
    }
    if !record.key_projects.is_empty() {
        println!("- key projects: {}", record.key_projects.join(", "));
    }
    if !record.risk_events.is_empty() {
        println!("- risk events: {}", record.risk_events.join(", "));
    }
    if !record.scale_indicators.is_empty() {
        println!("- scale indicators: {}", record.scale_indicators.join(", "));
    }
}

fn render_ranking(ranked: &[RankedCandidate]) {
    for row in ranked {
        println!(
            "{:>3}. {} | {:.2} | {}",
            row.position,
            row.record.candidate_name,
            row.record.final_score,
            row.record.rating.label()
        );
    }
}

fn render_notices(notices: &[ShortlistNotice]) {
    if notices.is_empty() {
        println!("\nShortlist notices: none dispatched");
        return;
    }
    println!("\nShortlist notices");
    for notice in notices {
        println!(
            "- {} ({:.2}, {}) for {}",
            notice.candidate_name,
            notice.final_score,
            notice.rating.label(),
            notice.jd_id.0
        );
    }
}

fn weight_for(weights: &[(String, f64)], skill: &str) -> f64 {
    weights
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(skill))
        .map(|(_, weight)| *weight)
        .unwrap_or(1.0)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn demo_jd() -> JdFacts {
    JdFacts {
        domains: strings(&["fintech"]),
        mandatory_skills: strings(&["Java", "AWS", "Kubernetes"]),
        preferred_skills: strings(&["Terraform"]),
        tools: strings(&["Jira"]),
        methodologies: strings(&["agile", "scrum"]),
        min_experience_years: 6.0,
        critical_deliveries_required: 3,
        risk_areas_expected: 2,
        delivery_style: DeliveryType::HandsOn,
        scale_requirements: ScaleRequirements {
            enterprise: true,
            multi_year: true,
            large_budget: false,
        },
        text: "Payments platform lead owning production launches, migration go-lives, \
               and enterprise risk reviews."
            .to_string(),
    }
}

fn demo_candidates() -> Vec<(ResumeId, ResumeFacts)> {
    vec![
        (
            ResumeId("amara-diallo".to_string()),
            demo_delivery_lead(),
        ),
        (
            ResumeId("dev-patel".to_string()),
            demo_governance_director(),
        ),
        (
            ResumeId("sofia-marchetti".to_string()),
            demo_early_career_analyst(),
        ),
    ]
}

fn demo_delivery_lead() -> ResumeFacts {
    ResumeFacts {
        candidate_name: "Amara Diallo".to_string(),
        domains: strings(&["fintech"]),
        skills: strings(&["Java", "AWS", "K8s", "Terraform", "Jira", "Agile", "Scrum"]),
        methodologies: strings(&["Agile", "Scrum"]),
        experience_years: 9.0,
        projects: vec![
            ProjectFact {
                name: "Core Banking Replatform".to_string(),
                domain: "fintech".to_string(),
                role: "Lead Engineer".to_string(),
                tech_stack: strings(&["Java", "AWS", "Kubernetes"]),
                team_size: 30,
                budget_usd_thousands: 12_000.0,
                duration_months: 30,
                production_launch: true,
                risk_events: strings(&["database failover drill"]),
                delivery_type: None,
            },
            ProjectFact {
                name: "Instant Payments Gateway".to_string(),
                domain: "fintech".to_string(),
                role: "Lead Engineer".to_string(),
                tech_stack: strings(&["Java", "Terraform"]),
                team_size: 14,
                budget_usd_thousands: 4_500.0,
                duration_months: 18,
                production_launch: true,
                risk_events: strings(&["pci audit finding"]),
                delivery_type: None,
            },
            ProjectFact {
                name: "Fraud Scoring Rollout".to_string(),
                domain: "fintech".to_string(),
                role: "Lead Engineer".to_string(),
                tech_stack: strings(&["AWS", "Kubernetes"]),
                team_size: 9,
                budget_usd_thousands: 2_200.0,
                duration_months: 26,
                production_launch: true,
                risk_events: strings(&["regional outage"]),
                delivery_type: None,
            },
        ],
        work_history: vec![
            WorkEntry {
                company: "Meridian Bank".to_string(),
                title: "Senior Engineer".to_string(),
                start: Some("2015-02".to_string()),
                end: Some("2019-12".to_string()),
            },
            WorkEntry {
                company: "Sable Payments".to_string(),
                title: "Lead Engineer".to_string(),
                start: Some("2020-01".to_string()),
                end: Some("present".to_string()),
            },
        ],
        education: vec![EducationEntry {
            institution: "University of Lagos".to_string(),
            degree: "BSc Computer Science".to_string(),
            end: Some("2014-12".to_string()),
            graduation_year: None,
        }],
        certifications: strings(&["AWS Certified Solutions Architect"]),
        career_summary: CareerSummary::default(),
    }
}

fn demo_governance_director() -> ResumeFacts {
    ResumeFacts {
        candidate_name: "Dev Patel".to_string(),
        domains: strings(&["fintech"]),
        skills: strings(&["Java", "Jira", "Scrum"]),
        methodologies: strings(&["Scrum"]),
        experience_years: 12.0,
        projects: vec![
            ProjectFact {
                name: "Payments PMO Standup".to_string(),
                domain: "fintech".to_string(),
                role: "PMO Director".to_string(),
                tech_stack: strings(&["Jira"]),
                team_size: 22,
                budget_usd_thousands: 8_000.0,
                duration_months: 20,
                production_launch: false,
                risk_events: Vec::new(),
                delivery_type: None,
            },
            ProjectFact {
                name: "Vendor Governance Program".to_string(),
                domain: "fintech".to_string(),
                role: "Governance Lead".to_string(),
                tech_stack: strings(&["Java"]),
                team_size: 12,
                budget_usd_thousands: 3_000.0,
                duration_months: 28,
                production_launch: false,
                risk_events: Vec::new(),
                delivery_type: None,
            },
        ],
        work_history: vec![WorkEntry {
            company: "Argent Capital".to_string(),
            title: "PMO Director".to_string(),
            start: Some("2010-04".to_string()),
            end: Some("present".to_string()),
        }],
        education: vec![EducationEntry {
            institution: "Pune University".to_string(),
            degree: "MBA".to_string(),
            end: Some("2009-12".to_string()),
            graduation_year: None,
        }],
        certifications: strings(&["PMP"]),
        career_summary: CareerSummary::default(),
    }
}

fn demo_early_career_analyst() -> ResumeFacts {
    ResumeFacts {
        candidate_name: "Sofia Marchetti".to_string(),
        domains: Vec::new(),
        skills: strings(&["Python", "SQL"]),
        methodologies: Vec::new(),
        experience_years: 2.0,
        projects: vec![ProjectFact {
            name: "Analytics Dashboard".to_string(),
            domain: "saas".to_string(),
            role: "Developer".to_string(),
            tech_stack: strings(&["Python"]),
            team_size: 4,
            budget_usd_thousands: 150.0,
            duration_months: 10,
            production_launch: false,
            risk_events: Vec::new(),
            delivery_type: None,
        }],
        work_history: vec![WorkEntry {
            company: "Northwind Analytics".to_string(),
            title: "Data Analyst".to_string(),
            start: Some("2023-09".to_string()),
            end: Some("present".to_string()),
        }],
        education: vec![EducationEntry {
            institution: "Politecnico di Milano".to_string(),
            degree: "MSc Data Science".to_string(),
            end: Some("2023-07".to_string()),
            graduation_year: None,
        }],
        certifications: Vec::new(),
        career_summary: CareerSummary::default(),
    }
}
