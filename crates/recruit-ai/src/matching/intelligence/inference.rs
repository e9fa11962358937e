//! Backfills JD expectations from raw text when the structured fields are
//! empty. Each inference applies only when the explicit value is zero or
//! missing; explicit values always win.

use super::super::facts::JdFacts;

const CRITICAL_DELIVERY_KEYWORDS: &[&str] =
    &["production launch", "migration", "go-live", "critical", "enterprise"];
const CRITICAL_DELIVERY_FLOOR: u32 = 3;

const RISK_AREA_KEYWORDS: &[&str] = &["risk", "security", "compliance", "disaster", "backup"];
const RISK_AREA_FLOOR: u32 = 2;

const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("fintech", &["fintech", "financial", "banking"]),
    ("healthcare", &["healthcare", "medical", "health"]),
    ("saas", &["saas", "software as a service"]),
    ("e-commerce", &["e-commerce", "ecommerce", "retail"]),
    ("logistics", &["logistics", "supply chain"]),
];

pub(crate) fn effective_critical_deliveries(jd: &JdFacts) -> u32 {
    if jd.critical_deliveries_required > 0 {
        return jd.critical_deliveries_required;
    }
    let text = jd.text.to_lowercase();
    let count = CRITICAL_DELIVERY_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count() as u32;
    count.max(CRITICAL_DELIVERY_FLOOR)
}

pub(crate) fn effective_risk_areas(jd: &JdFacts) -> u32 {
    if jd.risk_areas_expected > 0 {
        return jd.risk_areas_expected;
    }
    let text = jd.text.to_lowercase();
    let count = RISK_AREA_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count() as u32;
    count.max(RISK_AREA_FLOOR)
}

pub(crate) fn effective_domains(jd: &JdFacts) -> Vec<String> {
    if !jd.domains.is_empty() {
        return jd.domains.clone();
    }
    let text = jd.text.to_lowercase();
    DOMAIN_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(domain, _)| (*domain).to_string())
        .collect()
}
