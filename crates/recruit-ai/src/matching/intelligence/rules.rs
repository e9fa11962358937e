use std::collections::HashSet;

use super::super::facts::{JdFacts, ResumeFacts};
use super::super::skills::SkillNormalizer;
use super::config::IntelligenceConfig;
use super::derive::CandidateProfile;
use super::inference;

const NEUTRAL_SCORE: f64 = 50.0;
const MAX_FACTOR_SCORE: f64 = 100.0;
const STRONG_METHODOLOGY_FRACTION: f64 = 0.5;
const HANDS_ON_FULL_RATIO: f64 = 0.65;
const HANDS_ON_PARTIAL_RATIO: f64 = 0.40;
const MAJOR_BUDGET_THOUSANDS: f64 = 10_000.0;
const MAJOR_TEAM_SIZE: u32 = 15;

pub(crate) struct IntelligenceFactors {
    pub skill_match: f64,
    pub domain_fit: f64,
    pub execution: f64,
    pub delivery_risk: f64,
    pub methodology_bonus: i32,
    pub scale_bonus: i32,
    pub pmo_penalty: i32,
}

pub(crate) struct IntelligenceSignals {
    pub matched_skills: Vec<String>,
    pub matched_domains: Vec<String>,
    pub scale_indicators: Vec<String>,
}

pub(crate) fn score_facts(
    jd: &JdFacts,
    resume: &ResumeFacts,
    profile: &CandidateProfile,
    normalizer: &SkillNormalizer,
    config: &IntelligenceConfig,
) -> (IntelligenceFactors, IntelligenceSignals) {
    let candidate_skills: HashSet<String> =
        normalizer.normalize_all(&resume.skills).into_iter().collect();

    // Skill factor: exact membership over canonical forms. The mandatory
    // fraction is the basis; preferred/tool/methodology coverage adds capped
    // bonus points only when the JD declares that list.
    let mandatory = normalizer.normalize_all(&jd.mandatory_skills);
    let mut matched_skills = Vec::new();
    let skill_match = if mandatory.is_empty() {
        NEUTRAL_SCORE
    } else {
        let matched_mandatory: Vec<String> = mandatory
            .iter()
            .filter(|skill| candidate_skills.contains(*skill))
            .cloned()
            .collect();
        let mut score =
            matched_mandatory.len() as f64 / mandatory.len() as f64 * MAX_FACTOR_SCORE;
        matched_skills.extend(matched_mandatory);

        let preferred = normalizer.normalize_all(&jd.preferred_skills);
        if !preferred.is_empty() {
            let matched_preferred: Vec<String> = preferred
                .iter()
                .filter(|skill| candidate_skills.contains(*skill))
                .cloned()
                .collect();
            score += matched_preferred.len() as f64 / preferred.len() as f64
                * config.preferred_bonus_cap;
            matched_skills.extend(matched_preferred);
        }
        let tools = normalizer.normalize_all(&jd.tools);
        if !tools.is_empty() {
            let matched = tools
                .iter()
                .filter(|tool| candidate_skills.contains(*tool))
                .count();
            score += matched as f64 / tools.len() as f64 * config.tools_bonus_cap;
        }
        let methodologies = normalizer.normalize_all(&jd.methodologies);
        if !methodologies.is_empty() {
            let matched = methodologies
                .iter()
                .filter(|methodology| candidate_skills.contains(*methodology))
                .count();
            score += matched as f64 / methodologies.len() as f64 * config.methodology_bonus_cap;
        }
        score.min(MAX_FACTOR_SCORE)
    };

    let jd_domains = inference::effective_domains(jd);
    let mut matched_domains = Vec::new();
    let domain_fit = if jd_domains.is_empty() {
        NEUTRAL_SCORE
    } else {
        for jd_domain in &jd_domains {
            let jd_lower = jd_domain.trim().to_lowercase();
            if jd_lower.is_empty() {
                continue;
            }
            let matched = resume.domains.iter().any(|resume_domain| {
                let resume_lower = resume_domain.trim().to_lowercase();
                !resume_lower.is_empty()
                    && (resume_lower.contains(&jd_lower) || jd_lower.contains(&resume_lower))
            });
            if matched {
                matched_domains.push(jd_domain.clone());
            }
        }
        matched_domains.len() as f64 / jd_domains.len() as f64 * MAX_FACTOR_SCORE
    };

    let critical_deliveries = profile
        .critical_deliveries_total
        .max(inference::effective_critical_deliveries(jd));
    let execution = if critical_deliveries == 0 {
        NEUTRAL_SCORE
    } else {
        profile.high_risk_deliveries as f64 / critical_deliveries as f64 * MAX_FACTOR_SCORE
    };

    let risk_areas = profile
        .identified_risk_areas
        .max(inference::effective_risk_areas(jd));
    let delivery_risk = if risk_areas == 0 {
        NEUTRAL_SCORE
    } else {
        profile.risk_areas_managed as f64 / risk_areas as f64 * MAX_FACTOR_SCORE
    };

    let methodology_bonus = methodology_bonus(jd, resume, config);
    let pmo_penalty = pmo_penalty(profile, config);
    let (scale_bonus, scale_indicators) = scale_evidence(profile, config);

    let factors = IntelligenceFactors {
        skill_match,
        domain_fit,
        execution,
        delivery_risk,
        methodology_bonus,
        scale_bonus,
        pmo_penalty,
    };
    let signals = IntelligenceSignals {
        matched_skills,
        matched_domains,
        scale_indicators,
    };
    (factors, signals)
}

fn methodology_bonus(jd: &JdFacts, resume: &ResumeFacts, config: &IntelligenceConfig) -> i32 {
    if jd.methodologies.is_empty() || resume.methodologies.is_empty() {
        return 0;
    }
    let candidate: HashSet<String> = resume
        .methodologies
        .iter()
        .map(|methodology| methodology.trim().to_lowercase())
        .collect();
    let matched = jd
        .methodologies
        .iter()
        .filter(|methodology| candidate.contains(&methodology.trim().to_lowercase()))
        .count();
    if matched as f64 >= jd.methodologies.len() as f64 * STRONG_METHODOLOGY_FRACTION {
        config.strong_methodology_bonus
    } else if matched > 0 {
        config.partial_methodology_bonus
    } else {
        0
    }
}

fn pmo_penalty(profile: &CandidateProfile, config: &IntelligenceConfig) -> i32 {
    if profile.hands_on_ratio >= HANDS_ON_FULL_RATIO {
        0
    } else if profile.hands_on_ratio >= HANDS_ON_PARTIAL_RATIO {
        config.moderate_pmo_penalty
    } else {
        config.heavy_pmo_penalty
    }
}

fn scale_evidence(profile: &CandidateProfile, config: &IntelligenceConfig) -> (i32, Vec<String>) {
    let scale_bonus =
        if profile.max_budget_thousands >= MAJOR_BUDGET_THOUSANDS || profile.multi_year_programs >= 1
        {
            config.major_scale_bonus
        } else if profile.largest_team_size >= MAJOR_TEAM_SIZE || profile.enterprise_scale {
            config.minor_scale_bonus
        } else {
            0
        };

    let mut scale_indicators = Vec::new();
    if profile.max_budget_thousands >= MAJOR_BUDGET_THOUSANDS {
        scale_indicators.push("Budget ≥ $10M".to_string());
    }
    if profile.multi_year_programs >= 1 {
        scale_indicators.push(format!(
            "Multi-year programs: {}",
            profile.multi_year_programs
        ));
    }
    if profile.largest_team_size >= MAJOR_TEAM_SIZE {
        scale_indicators.push(format!("Team size: {}", profile.largest_team_size));
    }
    if profile.enterprise_scale {
        scale_indicators.push("Enterprise scale experience".to_string());
    }
    (scale_bonus, scale_indicators)
}
