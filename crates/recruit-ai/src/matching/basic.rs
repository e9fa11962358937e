use serde::{Deserialize, Serialize};

use super::skills::FuzzySkillMatcher;

/// Lightweight on-demand comparison of two flat skill lists, independent of
/// the full fact records the scorers consume.
#[derive(Debug, Clone)]
pub struct BasicMatchCalculator {
    matcher: FuzzySkillMatcher,
}

/// Outcome of an unweighted percentage match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleMatchReport {
    pub score_pct: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub total_required: usize,
    pub total_matched: usize,
}

/// Requirement with a relative weight for weighted matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSkill {
    pub skill: String,
    pub weight: f64,
}

/// Outcome of a weighted percentage match; missing entries keep their
/// weights so callers can show what the gap costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMatchReport {
    pub score_pct: u32,
    pub matched: Vec<String>,
    pub missing: Vec<WeightedSkill>,
}

impl BasicMatchCalculator {
    pub fn new(matcher: FuzzySkillMatcher) -> Self {
        Self { matcher }
    }

    /// Percentage of required skills present in the candidate list. With no
    /// requirements there is nothing to score, so every candidate skill is
    /// surplus; with no candidate skills every requirement is missing.
    pub fn simple_match(&self, required: &[String], candidate: &[String]) -> SimpleMatchReport {
        if required.is_empty() {
            return SimpleMatchReport {
                score_pct: 0,
                matched: Vec::new(),
                missing: Vec::new(),
                extra: candidate.to_vec(),
                total_required: 0,
                total_matched: 0,
            };
        }
        if candidate.is_empty() {
            return SimpleMatchReport {
                score_pct: 0,
                matched: Vec::new(),
                missing: required.to_vec(),
                extra: Vec::new(),
                total_required: required.len(),
                total_matched: 0,
            };
        }

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for requirement in required {
            if self.matcher.matches_any(requirement, candidate) {
                matched.push(requirement.clone());
            } else {
                missing.push(requirement.clone());
            }
        }

        let extra = candidate
            .iter()
            .filter(|skill| {
                !required
                    .iter()
                    .any(|requirement| self.matcher.is_match(requirement, skill))
            })
            .cloned()
            .collect();

        let score_pct = (matched.len() as f64 / required.len() as f64 * 100.0).round() as u32;
        SimpleMatchReport {
            score_pct,
            total_required: required.len(),
            total_matched: matched.len(),
            matched,
            missing,
            extra,
        }
    }

    /// Weight-proportional match; zero total weight scores zero rather than
    /// dividing by it.
    pub fn weighted_match(
        &self,
        required: &[WeightedSkill],
        candidate: &[String],
    ) -> WeightedMatchReport {
        let total_weight: f64 = required.iter().map(|entry| entry.weight).sum();

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        let mut matched_weight = 0.0;
        for entry in required {
            if self.matcher.matches_any(&entry.skill, candidate) {
                matched_weight += entry.weight;
                matched.push(entry.skill.clone());
            } else {
                missing.push(entry.clone());
            }
        }

        let score_pct = if total_weight > 0.0 {
            (matched_weight / total_weight * 100.0).round() as u32
        } else {
            0
        };

        WeightedMatchReport {
            score_pct,
            matched,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> BasicMatchCalculator {
        BasicMatchCalculator::new(FuzzySkillMatcher::with_builtin_table())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn empty_requirements_score_zero_with_all_candidate_skills_extra() {
        let report = calculator().simple_match(&[], &strings(&["python", "aws"]));
        assert_eq!(report.score_pct, 0);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.extra, strings(&["python", "aws"]));
    }

    #[test]
    fn empty_candidate_list_misses_every_requirement() {
        let report = calculator().simple_match(&strings(&["python", "aws"]), &[]);
        assert_eq!(report.score_pct, 0);
        assert_eq!(report.missing, strings(&["python", "aws"]));
        assert!(report.extra.is_empty());
    }

    #[test]
    fn word_boundary_containment_counts_as_a_match() {
        let report = calculator().simple_match(
            &strings(&["Python", "AWS"]),
            &strings(&["python developer", "aws certified"]),
        );
        assert_eq!(report.score_pct, 100);
        assert_eq!(report.total_matched, 2);
        assert!(report.extra.is_empty());
    }

    #[test]
    fn short_token_guard_blocks_false_substring_hits() {
        let report = calculator().simple_match(&strings(&["r"]), &strings(&["react"]));
        assert_eq!(report.score_pct, 0);
        assert_eq!(report.missing, strings(&["r"]));
        assert_eq!(report.extra, strings(&["react"]));
    }

    #[test]
    fn partial_match_rounds_to_nearest_percent() {
        let report = calculator().simple_match(
            &strings(&["python", "terraform", "kafka"]),
            &strings(&["python", "kafka"]),
        );
        assert_eq!(report.score_pct, 67);
        assert_eq!(report.missing, strings(&["terraform"]));
    }

    #[test]
    fn weighted_match_is_weight_proportional() {
        let required = vec![
            WeightedSkill {
                skill: "python".to_string(),
                weight: 3.0,
            },
            WeightedSkill {
                skill: "terraform".to_string(),
                weight: 1.0,
            },
        ];
        let report = calculator().weighted_match(&required, &strings(&["python developer"]));
        assert_eq!(report.score_pct, 75);
        assert_eq!(report.matched, strings(&["python"]));
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].skill, "terraform");
    }

    #[test]
    fn zero_total_weight_scores_zero() {
        let required = vec![WeightedSkill {
            skill: "python".to_string(),
            weight: 0.0,
        }];
        let report = calculator().weighted_match(&required, &strings(&["python"]));
        assert_eq!(report.score_pct, 0);
    }
}
