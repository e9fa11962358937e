use regex::Regex;

use super::normalizer::SkillNormalizer;

/// Decides whether a required skill is present in a candidate's skill set.
///
/// Plain substring containment would let "java" match "javascript"; the
/// ladder below stops at whole-word containment so compound phrasings
/// ("python developer", "react.js") still count without those false hits.
#[derive(Debug, Clone)]
pub struct FuzzySkillMatcher {
    normalizer: SkillNormalizer,
}

impl FuzzySkillMatcher {
    pub fn new(normalizer: SkillNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn with_builtin_table() -> Self {
        Self::new(SkillNormalizer::with_builtin_table())
    }

    pub fn normalizer(&self) -> &SkillNormalizer {
        &self.normalizer
    }

    /// First success wins: exact after normalization, then whole-word
    /// containment on the raw forms, then the same check on the normalized
    /// forms. Tokens of one or two characters only ever match exactly,
    /// keeping "r" out of "react" and "hr".
    pub fn is_match(&self, requirement: &str, candidate: &str) -> bool {
        let required = self.normalizer.normalize(requirement);
        let offered = self.normalizer.normalize(candidate);
        if required.is_empty() || offered.is_empty() {
            return false;
        }
        if required == offered {
            return true;
        }
        if required.chars().count() <= 2 || offered.chars().count() <= 2 {
            return false;
        }

        let raw_required = requirement.trim().to_lowercase();
        let raw_offered = candidate.trim().to_lowercase();
        if contains_word(&raw_offered, &raw_required) || contains_word(&raw_required, &raw_offered)
        {
            return true;
        }

        contains_word(&offered, &required) || contains_word(&required, &offered)
    }

    /// True when the requirement matches at least one candidate skill.
    pub fn matches_any<S: AsRef<str>>(&self, requirement: &str, candidates: &[S]) -> bool {
        candidates
            .iter()
            .any(|candidate| self.is_match(requirement, candidate.as_ref()))
    }
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let pattern = format!(r"\b{}\b", regex::escape(needle));
    Regex::new(&pattern)
        .map(|matcher| matcher.is_match(haystack))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FuzzySkillMatcher {
        FuzzySkillMatcher::with_builtin_table()
    }

    #[test]
    fn exact_match_after_normalization() {
        let matcher = matcher();
        assert!(matcher.is_match("Node.js", "nodejs"));
        assert!(matcher.is_match("K8S", "kubernetes"));
    }

    #[test]
    fn whole_word_containment_both_directions() {
        let matcher = matcher();
        assert!(matcher.is_match("Python", "python developer"));
        assert!(matcher.is_match("python developer", "Python"));
        assert!(matcher.is_match("AWS", "aws certified architect"));
    }

    #[test]
    fn normalized_forms_participate_in_containment() {
        let matcher = matcher();
        // "k8s" normalizes to "kubernetes", which sits whole-word in the phrase.
        assert!(matcher.is_match("k8s", "kubernetes cluster administration"));
    }

    #[test]
    fn short_tokens_only_match_exactly() {
        let matcher = matcher();
        assert!(!matcher.is_match("r", "react"));
        assert!(!matcher.is_match("go", "google cloud"));
        assert!(matcher.is_match("R", "r"));
    }

    #[test]
    fn substring_without_word_boundary_is_rejected() {
        let matcher = matcher();
        assert!(!matcher.is_match("java", "javascript"));
        assert!(!matcher.is_match("rest", "restaurant operations"));
    }

    #[test]
    fn matches_any_scans_the_candidate_list() {
        let matcher = matcher();
        let candidates = vec!["terraform".to_string(), "python developer".to_string()];
        assert!(matcher.matches_any("Python", &candidates));
        assert!(!matcher.matches_any("ruby", &candidates));
    }
}
