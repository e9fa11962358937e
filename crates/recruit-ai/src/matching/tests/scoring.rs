use super::common::*;
use crate::matching::core::{CoreMatchScorer, ExperienceStatus, MatchRecord};
use crate::matching::facts::{JdFacts, ProjectFact, ResumeFacts, WorkEntry};

fn scorer() -> CoreMatchScorer {
    CoreMatchScorer::with_builtin_table()
}

fn experience_case(min_years: f64, candidate_years: f64) -> MatchRecord {
    let jd = JdFacts {
        min_experience_years: min_years,
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        experience_years: candidate_years,
        ..ResumeFacts::default()
    };
    scorer().score(&jd, &resume, reference_date())
}

#[test]
fn skill_and_experience_combine_for_partial_match() {
    let jd = JdFacts {
        mandatory_skills: vec![
            "Java".to_string(),
            "AWS".to_string(),
            "Kubernetes".to_string(),
            "PostgreSQL".to_string(),
        ],
        min_experience_years: 5.0,
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        candidate_name: "Sam Ortiz".to_string(),
        skills: vec!["Java".to_string(), "AWS".to_string()],
        experience_years: 5.0,
        ..ResumeFacts::default()
    };

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.skill_score, 0.5);
    assert_close(record.experience_score, 1.0);
    assert_eq!(record.experience_status, ExperienceStatus::Meets);
    assert_close(record.project_score, 0.0);
    assert_close(record.certification_score, 0.0);
    assert_close(record.domain_score, 0.0);
    assert_close(record.final_score, 0.45);
    assert_eq!(record.matched_skills, vec!["Java", "AWS"]);
    assert_eq!(record.missing_skills, vec!["Kubernetes", "PostgreSQL"]);
    assert!(!record.has_gap);
}

#[test]
fn preferred_coverage_tops_out_at_full_skill_score() {
    let jd = JdFacts {
        mandatory_skills: vec!["Java".to_string()],
        preferred_skills: vec!["Terraform".to_string(), "Kafka".to_string()],
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        skills: vec![
            "java".to_string(),
            "terraform".to_string(),
            "kafka".to_string(),
        ],
        ..ResumeFacts::default()
    };

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.skill_score, 1.0);
    assert_eq!(record.matched_preferred.len(), 2);
}

#[test]
fn empty_requirements_score_neutral() {
    let record = scorer().score(
        &JdFacts::default(),
        &ResumeFacts {
            skills: vec!["Java".to_string()],
            ..ResumeFacts::default()
        },
        reference_date(),
    );

    assert_close(record.skill_score, 0.5);
    assert!(record.matched_skills.is_empty());
    assert!(record.missing_skills.is_empty());
}

#[test]
fn experience_tiers_follow_required_years() {
    let exceeds = experience_case(10.0, 12.0);
    assert_close(exceeds.experience_score, 1.0);
    assert_eq!(exceeds.experience_status, ExperienceStatus::Exceeds);

    let meets = experience_case(10.0, 10.0);
    assert_close(meets.experience_score, 1.0);
    assert_eq!(meets.experience_status, ExperienceStatus::Meets);

    let partial = experience_case(10.0, 7.0);
    assert_close(partial.experience_score, 0.7);
    assert_eq!(partial.experience_status, ExperienceStatus::Partial);

    let insufficient = experience_case(10.0, 5.0);
    assert_close(insufficient.experience_score, 0.5);
    assert_eq!(
        insufficient.experience_status,
        ExperienceStatus::Insufficient
    );

    let unspecified = experience_case(0.0, 5.0);
    assert_close(unspecified.experience_score, 0.5);
    assert_eq!(
        unspecified.experience_status,
        ExperienceStatus::NoRequirement
    );
}

#[test]
fn single_relevant_project_floors_the_project_score() {
    let jd = JdFacts {
        mandatory_skills: vec!["Java".to_string()],
        ..JdFacts::default()
    };
    let mut resume = strong_resume();
    resume.projects = vec![
        delivery_project("Ledger Replatform", &[], true),
        ProjectFact {
            name: "Inventory Portal".to_string(),
            tech_stack: vec!["Rust".to_string()],
            ..ProjectFact::default()
        },
        ProjectFact {
            name: "Design System".to_string(),
            tech_stack: vec!["Figma".to_string()],
            ..ProjectFact::default()
        },
    ];

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.project_score, 0.5);
    assert_eq!(record.relevant_projects, vec!["Ledger Replatform"]);
}

#[test]
fn irrelevant_projects_score_zero() {
    let jd = JdFacts {
        mandatory_skills: vec!["Java".to_string()],
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        projects: vec![ProjectFact {
            name: "Design System".to_string(),
            tech_stack: vec!["Figma".to_string()],
            ..ProjectFact::default()
        }],
        ..ResumeFacts::default()
    };

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.project_score, 0.0);
    assert!(record.relevant_projects.is_empty());
}

#[test]
fn certification_credit_caps_at_full_score() {
    let jd = JdFacts {
        mandatory_skills: vec!["AWS".to_string()],
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        certifications: vec![
            "AWS Certified Solutions Architect".to_string(),
            "AWS Certified Developer".to_string(),
            "AWS SysOps Administrator".to_string(),
            "Advanced AWS Networking".to_string(),
            "AWS Security Specialty".to_string(),
        ],
        ..ResumeFacts::default()
    };

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.certification_score, 1.0);
    assert_eq!(record.relevant_certifications.len(), 5);

    // Containment runs both directions.
    let jd = JdFacts {
        mandatory_skills: vec!["Certified Kubernetes Administrator".to_string()],
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        certifications: vec!["Kubernetes".to_string()],
        ..ResumeFacts::default()
    };
    let record = scorer().score(&jd, &resume, reference_date());
    assert_close(record.certification_score, 0.25);
}

#[test]
fn domain_match_is_exact_intersection() {
    let jd = JdFacts {
        domains: vec!["FinTech".to_string()],
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        domains: vec!["fintech".to_string()],
        ..ResumeFacts::default()
    };
    let record = scorer().score(&jd, &resume, reference_date());
    assert_close(record.domain_score, 1.0);

    let broader = ResumeFacts {
        domains: vec!["fintech payments".to_string()],
        ..ResumeFacts::default()
    };
    let record = scorer().score(&jd, &broader, reference_date());
    assert_close(record.domain_score, 0.0);
}

#[test]
fn between_jobs_gap_subtracts_medium_penalty() {
    let resume = ResumeFacts {
        work_history: vec![
            WorkEntry {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                start: Some("2019-01".to_string()),
                end: Some("2019-06".to_string()),
            },
            WorkEntry {
                company: "Initech".to_string(),
                title: "Engineer".to_string(),
                start: Some("2021-01".to_string()),
                end: Some("present".to_string()),
            },
        ],
        ..ResumeFacts::default()
    };

    let record = scorer().score(&JdFacts::default(), &resume, reference_date());

    assert!(record.has_gap);
    assert_eq!(record.total_gap_months, 19);
    assert_close(record.gap_penalty, 0.10);
    assert_close(record.final_score, 0.225);
}

#[test]
fn penalty_never_drives_score_below_zero() {
    let jd = JdFacts {
        mandatory_skills: vec!["Java".to_string()],
        min_experience_years: 10.0,
        ..JdFacts::default()
    };
    let resume = ResumeFacts {
        skills: vec!["Rust".to_string()],
        experience_years: 0.0,
        work_history: vec![
            WorkEntry {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                start: Some("2015-01".to_string()),
                end: Some("2016-01".to_string()),
            },
            WorkEntry {
                company: "Initech".to_string(),
                title: "Engineer".to_string(),
                start: Some("2019-06".to_string()),
                end: Some("present".to_string()),
            },
        ],
        ..ResumeFacts::default()
    };

    let record = scorer().score(&jd, &resume, reference_date());

    assert_close(record.gap_penalty, 0.15);
    assert_close(record.final_score, 0.0);
}
