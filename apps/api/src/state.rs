use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::hierarchy::{DegreeHierarchy, NoHierarchy, WikidataHierarchy};
use crate::matching::aggregate::ScoringWeights;
use crate::matching::embedding::{CachedSimilarity, EmbeddingSimilarity, HashEmbedder};
use crate::matching::engine::MatchEngine;
use crate::matching::similarity::SemanticSimilarity;
use crate::reference::ReferenceData;
use crate::report::Narrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; shared by every request.
    pub engine: Arc<MatchEngine>,
    pub narrator: Narrator,
}

impl AppState {
    /// Loads reference data and wires the similarity backend, hierarchy lookup
    /// and matchers described by `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let reference = Arc::new(
            ReferenceData::load(config.reference_data_path.as_deref())
                .context("Failed to load reference data")?,
        );
        info!(
            degrees = reference.known_degrees().len(),
            skills = reference.known_skills().len(),
            "Reference data ready"
        );

        let embedder = HashEmbedder::new(config.embedding_dimension);
        let semantic: Arc<dyn SemanticSimilarity> = CachedSimilarity::wrap(
            Arc::new(EmbeddingSimilarity::new(embedder)),
            config.similarity_cache_capacity,
        );
        info!(
            "Semantic similarity: {} ({} dims, cache {})",
            semantic.name(),
            config.embedding_dimension,
            config.similarity_cache_capacity
        );

        let hierarchy: Arc<dyn DegreeHierarchy> = if config.degree_lookup_enabled {
            let lookup = WikidataHierarchy::new(
                config.degree_lookup_url.clone(),
                config.degree_lookup_timeout,
                reference.clone(),
            )
            .context("Failed to build degree hierarchy client")?;
            info!(
                "Degree hierarchy lookup enabled ({}, timeout {:?})",
                config.degree_lookup_url, config.degree_lookup_timeout
            );
            Arc::new(lookup)
        } else {
            info!("Degree hierarchy lookup disabled");
            Arc::new(NoHierarchy)
        };

        let weights = ScoringWeights::for_scheme(config.weight_scheme);
        info!("Weight scheme {:?}: {:?}", config.weight_scheme, weights);

        let engine = MatchEngine::new(reference, hierarchy, semantic, weights, config.project_scoring);

        Ok(AppState {
            narrator: Narrator::new(config.narrative_seed),
            engine: Arc::new(engine),
            config,
        })
    }
}
