use super::super::facts::{JdFacts, ResumeFacts};
use super::super::gaps::GapScan;
use super::super::skills::FuzzySkillMatcher;
use super::config::CoreScoringConfig;
use super::ExperienceStatus;

const NEUTRAL_FACTOR: f64 = 0.5;
const EXCEEDS_MARGIN_YEARS: f64 = 2.0;
const PARTIAL_EXPERIENCE_RATIO: f64 = 0.7;
const PARTIAL_EXPERIENCE_SCORE: f64 = 0.7;
const MEDIUM_GAP_MONTHS: u32 = 12;
const LONG_GAP_MONTHS: u32 = 24;

pub(crate) struct FactorScores {
    pub skill: f64,
    pub experience: f64,
    pub projects: f64,
    pub certifications: f64,
    pub domain: f64,
    pub gap_penalty: f64,
}

pub(crate) struct MatchSignals {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub relevant_projects: Vec<String>,
    pub relevant_certifications: Vec<String>,
    pub experience_status: ExperienceStatus,
}

pub(crate) fn score_facts(
    jd: &JdFacts,
    resume: &ResumeFacts,
    gaps: &GapScan,
    matcher: &FuzzySkillMatcher,
    config: &CoreScoringConfig,
) -> (FactorScores, MatchSignals) {
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for required in &jd.mandatory_skills {
        if matcher.matches_any(required, &resume.skills) {
            matched_skills.push(required.clone());
        } else {
            missing_skills.push(required.clone());
        }
    }
    let mut matched_preferred = Vec::new();
    for preferred in &jd.preferred_skills {
        if matcher.matches_any(preferred, &resume.skills) {
            matched_preferred.push(preferred.clone());
        }
    }
    let skill = if jd.mandatory_skills.is_empty() {
        NEUTRAL_FACTOR
    } else {
        let base = matched_skills.len() as f64 / jd.mandatory_skills.len() as f64;
        let bonus = if jd.preferred_skills.is_empty() {
            0.0
        } else {
            matched_preferred.len() as f64 / jd.preferred_skills.len() as f64
                * config.preferred_bonus_cap
        };
        (base + bonus).min(1.0)
    };

    let (experience, experience_status) =
        experience_tier(jd.min_experience_years, resume.experience_years);

    let mut relevant_projects = Vec::new();
    for project in &resume.projects {
        let relevant = project.tech_stack.iter().any(|tech| {
            jd.mandatory_skills
                .iter()
                .any(|required| matcher.is_match(required, tech))
        });
        if relevant {
            relevant_projects.push(project.name.clone());
        }
    }
    let projects = if relevant_projects.is_empty() {
        0.0
    } else {
        let ratio = relevant_projects.len() as f64 / resume.projects.len() as f64;
        ratio.clamp(NEUTRAL_FACTOR, 1.0)
    };

    let mut relevant_certifications = Vec::new();
    for certification in &resume.certifications {
        let cert_lower = certification.trim().to_lowercase();
        if cert_lower.is_empty() {
            continue;
        }
        let relevant = jd.mandatory_skills.iter().any(|required| {
            let required_lower = required.trim().to_lowercase();
            !required_lower.is_empty()
                && (cert_lower.contains(&required_lower) || required_lower.contains(&cert_lower))
        });
        if relevant {
            relevant_certifications.push(certification.clone());
        }
    }
    let certifications =
        (relevant_certifications.len() as f64 * config.certification_credit).min(1.0);

    let domain_matched = jd.domains.iter().any(|jd_domain| {
        resume
            .domains
            .iter()
            .any(|resume_domain| jd_domain.trim().eq_ignore_ascii_case(resume_domain.trim()))
    });
    let domain = if domain_matched { 1.0 } else { 0.0 };

    let factors = FactorScores {
        skill,
        experience,
        projects,
        certifications,
        domain,
        gap_penalty: gap_penalty(gaps, config),
    };
    let signals = MatchSignals {
        matched_skills,
        missing_skills,
        matched_preferred,
        relevant_projects,
        relevant_certifications,
        experience_status,
    };
    (factors, signals)
}

fn experience_tier(min_years: f64, candidate_years: f64) -> (f64, ExperienceStatus) {
    if min_years <= 0.0 {
        (NEUTRAL_FACTOR, ExperienceStatus::NoRequirement)
    } else if candidate_years >= min_years + EXCEEDS_MARGIN_YEARS {
        (1.0, ExperienceStatus::Exceeds)
    } else if candidate_years >= min_years {
        (1.0, ExperienceStatus::Meets)
    } else if candidate_years >= PARTIAL_EXPERIENCE_RATIO * min_years {
        (PARTIAL_EXPERIENCE_SCORE, ExperienceStatus::Partial)
    } else {
        (candidate_years / min_years, ExperienceStatus::Insufficient)
    }
}

fn gap_penalty(gaps: &GapScan, config: &CoreScoringConfig) -> f64 {
    if !gaps.has_gap {
        0.0
    } else if gaps.total_gap_months < MEDIUM_GAP_MONTHS {
        config.short_gap_penalty
    } else if gaps.total_gap_months < LONG_GAP_MONTHS {
        config.medium_gap_penalty
    } else {
        config.long_gap_penalty
    }
}
