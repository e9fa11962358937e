use std::collections::HashSet;
use std::sync::Arc;

use super::synonyms::SynonymTable;

/// Canonicalizes raw skill tokens against an injected synonym table.
///
/// Cheap to clone; the table lives behind an `Arc` so every matcher and
/// scorer in a process shares the single build.
#[derive(Debug, Clone)]
pub struct SkillNormalizer {
    table: Arc<SynonymTable>,
}

impl SkillNormalizer {
    pub fn new(table: SynonymTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Normalizer over the built-in vocabulary.
    pub fn with_builtin_table() -> Self {
        Self::new(SynonymTable::builtin())
    }

    /// Lowercase, trim, and map through the synonym table. Tokens without
    /// an entry come back folded but otherwise unchanged; blank input stays
    /// blank rather than erroring.
    pub fn normalize(&self, token: &str) -> String {
        let folded = token.trim().to_lowercase();
        if folded.is_empty() {
            return folded;
        }
        match self.table.canonical(&folded) {
            Some(canonical) => canonical.to_string(),
            None => folded,
        }
    }

    /// Normalize a list, de-duplicating after normalization while keeping
    /// the first-occurrence order, so "JS" and "Javascript" collapse to a
    /// single "javascript" entry.
    pub fn normalize_all<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for token in tokens {
            let canonical = self.normalize(token.as_ref());
            if canonical.is_empty() {
                continue;
            }
            if seen.insert(canonical.clone()) {
                normalized.push(canonical);
            }
        }
        normalized
    }
}
