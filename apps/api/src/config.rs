use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::hierarchy;
use crate::matching::aggregate::WeightScheme;
use crate::matching::embedding::DEFAULT_DIMENSION;
use crate::matching::projects::ProjectScoring;

/// Upper bound for `PROJECT_DOMAIN_BONUS`, in percentage points.
const MAX_DOMAIN_BONUS: f64 = 20.0;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weight_scheme: WeightScheme,
    pub degree_lookup_enabled: bool,
    pub degree_lookup_url: String,
    pub degree_lookup_timeout: Duration,
    pub embedding_dimension: usize,
    pub similarity_cache_capacity: usize,
    pub reference_data_path: Option<PathBuf>,
    pub project_scoring: ProjectScoring,
    pub narrative_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            weight_scheme: WeightScheme::SkillsFocused,
            degree_lookup_enabled: true,
            degree_lookup_url: hierarchy::DEFAULT_ENDPOINT.to_string(),
            degree_lookup_timeout: hierarchy::DEFAULT_TIMEOUT,
            embedding_dimension: DEFAULT_DIMENSION,
            similarity_cache_capacity: 4096,
            reference_data_path: None,
            project_scoring: ProjectScoring::default(),
            narrative_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key→value source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: parse_or(&get, "PORT", defaults.port)?,
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            weight_scheme: parse_or(&get, "MATCH_WEIGHT_SCHEME", defaults.weight_scheme)?,
            degree_lookup_enabled: parse_or(&get, "DEGREE_LOOKUP_ENABLED", defaults.degree_lookup_enabled)?,
            degree_lookup_url: get("DEGREE_LOOKUP_URL").unwrap_or(defaults.degree_lookup_url),
            degree_lookup_timeout: Duration::from_millis(parse_or(
                &get,
                "DEGREE_LOOKUP_TIMEOUT_MS",
                defaults.degree_lookup_timeout.as_millis() as u64,
            )?),
            embedding_dimension: parse_or(&get, "EMBEDDING_DIMENSION", defaults.embedding_dimension)?,
            similarity_cache_capacity: parse_or(
                &get,
                "SIMILARITY_CACHE_CAPACITY",
                defaults.similarity_cache_capacity,
            )?,
            reference_data_path: get("REFERENCE_DATA_PATH").map(PathBuf::from),
            project_scoring: ProjectScoring {
                semantic_threshold: parse_bounded(
                    &get,
                    "PROJECT_SEMANTIC_THRESHOLD",
                    defaults.project_scoring.semantic_threshold,
                    0.0..=1.0,
                )?,
                domain_bonus: parse_bounded(
                    &get,
                    "PROJECT_DOMAIN_BONUS",
                    defaults.project_scoring.domain_bonus,
                    0.0..=MAX_DOMAIN_BONUS,
                )?,
                ..defaults.project_scoring
            },
            narrative_seed: get("NARRATIVE_SEED")
                .map(|raw| parse_value::<u64>("NARRATIVE_SEED", &raw))
                .transpose()?,
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match get(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

/// Like `parse_or`, but the value must be finite and inside `range`.
fn parse_bounded(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: f64,
    range: RangeInclusive<f64>,
) -> Result<f64> {
    let Some(raw) = get(key) else {
        return Ok(default);
    };
    let value: f64 = parse_value(key, &raw)?;
    if !value.is_finite() || !range.contains(&value) {
        return Err(anyhow!(
            "Environment variable '{key}' has invalid value '{raw}': expected a number in [{}, {}]",
            range.start(),
            range.end()
        ));
    }
    Ok(value)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("Environment variable '{key}' has invalid value '{raw}': {e}"))
}
