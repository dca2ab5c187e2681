//! Default semantic backend: feature-hashed text embeddings compared by cosine.
//!
//! - word tokens and padded character trigrams as features
//! - SipHash13 with a fixed seed, so vectors are stable across runs
//! - sign hashing + L2 normalization
//!
//! `CachedSimilarity` memoizes any backend behind a mutex-guarded LRU.

use std::hash::Hasher;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;
use siphasher::sip::SipHasher13;

use crate::matching::similarity::SemanticSimilarity;

/// Changing these changes every embedding.
const HASH_SEED_K0: u64 = 0x5f1e_44a0_93c2_7d18;
const HASH_SEED_K1: u64 = 0x0b6d_2e9f_c815_a374;

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

pub const DEFAULT_DIMENSION: usize = 512;

/// Turns text into a fixed-width vector.
pub trait Embedder: Send + Sync {
    fn name(&self) -> &'static str;

    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Cosine similarity clamped to [0, 1]. Zero vectors and mismatched widths score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    f64::from(dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// HashEmbedder
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash(&self, feature: &str) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        hasher.write(feature.as_bytes());
        hasher.finish()
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let h = self.hash(feature);
        let idx = (h % self.dimension as u64) as usize;
        // top bit picks the sign, independent of the bucket bits
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        vector[idx] += sign * weight;
    }
}

impl Embedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        let lowered = text.to_lowercase();

        for word in lowered.split_whitespace() {
            self.add_feature(&mut vector, &format!("w:{word}"), WORD_WEIGHT);

            let padded: Vec<char> = format!(" {word} ").chars().collect();
            for trigram in padded.windows(3) {
                let gram: String = trigram.iter().collect();
                self.add_feature(&mut vector, &format!("g:{gram}"), TRIGRAM_WEIGHT);
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EmbeddingSimilarity
// ────────────────────────────────────────────────────────────────────────────

/// Semantic similarity as cosine between two embeddings.
pub struct EmbeddingSimilarity<E> {
    embedder: E,
}

impl<E: Embedder> EmbeddingSimilarity<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }
}

impl<E: Embedder> SemanticSimilarity for EmbeddingSimilarity<E> {
    fn name(&self) -> &'static str {
        self.embedder.name()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        cosine_similarity(&self.embedder.embed(a), &self.embedder.embed(b))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CachedSimilarity
// ────────────────────────────────────────────────────────────────────────────

/// Memoizes a backend per unordered string pair. Safe to share across threads.
pub struct CachedSimilarity {
    inner: Arc<dyn SemanticSimilarity>,
    cache: Mutex<LruCache<(String, String), f64>>,
}

impl CachedSimilarity {
    /// Returns `inner` unchanged when `capacity` is zero.
    pub fn wrap(inner: Arc<dyn SemanticSimilarity>, capacity: usize) -> Arc<dyn SemanticSimilarity> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Arc::new(Self {
                inner,
                cache: Mutex::new(LruCache::new(capacity)),
            }),
            None => inner,
        }
    }
}

impl SemanticSimilarity for CachedSimilarity {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };

        if let Some(&hit) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit;
        }

        // computed outside the lock; a racing duplicate computes the same value
        let score = self.inner.similarity(&key.0, &key.1);
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, score);
        score
    }
}
