//! Normalizer: text cleanup plus per-field alias expansion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceData;

/// Which alias table a value is expanded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Degree,
    Major,
    Skill,
}

/// Lowercases, strips `.`, turns `-`/`_` into spaces and collapses whitespace.
///
/// Falls back to the lowercased, trimmed input when cleanup would leave nothing,
/// so non-empty input always yields a non-empty string.
pub fn clean(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    let cleaned = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        raw.trim().to_lowercase()
    } else {
        cleaned
    }
}

/// Deterministic normalizer backed by the shared reference tables.
#[derive(Debug, Clone)]
pub struct Normalizer {
    reference: Arc<ReferenceData>,
}

impl Normalizer {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn normalize(&self, raw: &str, kind: FieldKind) -> String {
        let cleaned = clean(raw);
        let expanded = match kind {
            FieldKind::Degree => self.reference.degree_synonym(&cleaned),
            FieldKind::Major => self.reference.major_alias(&cleaned),
            FieldKind::Skill => self.reference.skill_alias(&cleaned),
        };
        expanded.map(str::to_string).unwrap_or(cleaned)
    }

    /// True when `raw` is a key of the alias table for `kind`.
    pub fn is_alias(&self, raw: &str, kind: FieldKind) -> bool {
        let cleaned = clean(raw);
        match kind {
            FieldKind::Degree => self.reference.degree_synonym(&cleaned).is_some(),
            FieldKind::Major => self.reference.major_alias(&cleaned).is_some(),
            FieldKind::Skill => self.reference.skill_alias(&cleaned).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(ReferenceData::default()))
    }

    #[test]
    fn test_clean_strips_dots_and_separators() {
        assert_eq!(clean("  B.Sc. "), "bsc");
        assert_eq!(clean("Computer-Science"), "computer science");
        assert_eq!(clean("data_science   engineering"), "data science engineering");
    }

    #[test]
    fn test_clean_never_empties_non_empty_input() {
        assert_eq!(clean("..."), "...");
        assert!(!clean(" - ").is_empty());
    }

    #[test]
    fn test_degree_synonyms_expand() {
        let n = normalizer();
        assert_eq!(n.normalize("Master of Science", FieldKind::Degree), "msc");
        assert_eq!(n.normalize("M.Sc.", FieldKind::Degree), "msc");
        assert_eq!(n.normalize("PhD", FieldKind::Degree), "phd");
    }

    #[test]
    fn test_major_abbreviations_expand() {
        let n = normalizer();
        assert_eq!(n.normalize("CS", FieldKind::Major), "computer science");
        assert_eq!(n.normalize("Computer Science", FieldKind::Major), "computer science");
    }

    #[test]
    fn test_skill_aliases_are_field_specific() {
        let n = normalizer();
        assert_eq!(n.normalize("k8s", FieldKind::Skill), "kubernetes");
        assert_eq!(n.normalize("Postgres", FieldKind::Skill), "postgresql");
        // "cs" is a major abbreviation, not a skill one
        assert_eq!(n.normalize("cs", FieldKind::Skill), "cs");
    }

    #[test]
    fn test_alias_values_share_the_cleaning_rules() {
        let n = normalizer();
        assert_eq!(n.normalize("node", FieldKind::Skill), "nodejs");
        assert_eq!(n.normalize("Node.js", FieldKind::Skill), "nodejs");
    }

    #[test]
    fn test_is_alias() {
        let n = normalizer();
        assert!(n.is_alias("ML", FieldKind::Skill));
        assert!(!n.is_alias("python", FieldKind::Skill));
    }
}
