//! Similarity capabilities consumed by the field matchers.
//!
//! Lexical and fuzzy similarity are pure string functions. Semantic similarity
//! is injected as `Arc<dyn SemanticSimilarity>` so the backend can be swapped
//! (hashed embeddings by default, a stub in tests).

use rapidfuzz::distance::levenshtein;

/// Semantic similarity backend.
///
/// Contract: symmetric, bounded to [0, 1], deterministic for identical input
/// pairs within one process lifetime.
pub trait SemanticSimilarity: Send + Sync {
    /// Backend name, reported alongside results.
    fn name(&self) -> &'static str;

    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Case-insensitive edit-distance ratio in [0, 1]; 1.0 only for identical strings.
pub fn lexical_ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }
    levenshtein::normalized_similarity(a.chars(), b.chars())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_ratio_identity_is_case_insensitive() {
        assert_eq!(lexical_ratio("Physics", "physics"), 1.0);
    }

    #[test]
    fn test_lexical_ratio_spelling_variant_scores_high() {
        let score = lexical_ratio("Mathematics", "Mathematcs");
        assert!(score > 0.85, "score was {score}");
        assert!(score < 1.0);
    }

    #[test]
    fn test_lexical_ratio_is_symmetric() {
        assert_eq!(
            lexical_ratio("economics", "econometrics"),
            lexical_ratio("econometrics", "economics")
        );
    }

    #[test]
    fn test_stub_similarity_is_order_independent() {
        let stub = testing::StubSimilarity::new(0.1).with_pair("a", "b", 0.7);
        assert_eq!(stub.similarity("a", "b"), 0.7);
        assert_eq!(stub.similarity("b", "a"), 0.7);
        assert_eq!(stub.similarity("a", "c"), 0.1);
        assert_eq!(stub.similarity("c", "c"), 1.0);
    }
}
