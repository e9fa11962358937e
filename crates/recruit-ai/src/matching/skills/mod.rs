//! Skill canonicalization and fuzzy presence matching shared by both
//! scoring pipelines.

mod matcher;
mod normalizer;
mod synonyms;

pub use matcher::FuzzySkillMatcher;
pub use normalizer::SkillNormalizer;
pub use synonyms::SynonymTable;
