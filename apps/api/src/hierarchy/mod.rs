//! Degree hierarchy lookup: best-effort rank resolution through Wikidata.
//!
//! Only the degree matcher consults this, and only for degrees missing from the
//! local rank table. A lookup is a single attempt with a bounded timeout: any
//! transport error, non-2xx status, non-JSON body or unknown parent degree is
//! logged and reported as "no result".

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::matching::normalize::{FieldKind, Normalizer};
use crate::reference::ReferenceData;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);
const USER_AGENT: &str = concat!("fitmatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup returned status {0}")]
    Status(u16),

    #[error("lookup returned non-JSON content type '{0}'")]
    NotJson(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// External degree hierarchy capability.
#[async_trait]
pub trait DegreeHierarchy: Send + Sync {
    /// Rank of a known parent degree of `degree`, if one can be found.
    /// Never fails; errors are "no result".
    async fn parent_rank(&self, degree: &str) -> Option<f64>;
}

/// Offline hierarchy: always "no result".
pub struct NoHierarchy;

#[async_trait]
impl DegreeHierarchy for NoHierarchy {
    async fn parent_rank(&self, _degree: &str) -> Option<f64> {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SPARQL response shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct Binding {
    #[serde(rename = "parentLabel")]
    parent_label: Option<LabelValue>,
}

#[derive(Debug, Deserialize)]
struct LabelValue {
    value: String,
}

// ────────────────────────────────────────────────────────────────────────────
// WikidataHierarchy
// ────────────────────────────────────────────────────────────────────────────

/// Looks up `subclass of` parents of an academic degree on a SPARQL endpoint
/// and maps the first parent found in the local table to its rank.
#[derive(Clone)]
pub struct WikidataHierarchy {
    client: Client,
    endpoint: String,
    reference: Arc<ReferenceData>,
    normalizer: Normalizer,
}

impl WikidataHierarchy {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        reference: Arc<ReferenceData>,
    ) -> Result<Self, HierarchyError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            normalizer: Normalizer::new(reference.clone()),
            reference,
        })
    }

    /// Fetches parent degree labels for `degree`.
    pub async fn fetch_parent_labels(&self, degree: &str) -> Result<Vec<String>, HierarchyError> {
        let query = build_query(degree);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/sparql-results+json")
            .query(&[("query", query.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HierarchyError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("json") {
            return Err(HierarchyError::NotJson(content_type));
        }

        let body = response.text().await?;
        parse_parent_labels(&body)
    }

    /// Maps the first parent label with a local rank to that rank.
    fn rank_of_parents(&self, labels: &[String]) -> Option<f64> {
        labels.iter().find_map(|label| {
            let normalized = self.normalizer.normalize(label, FieldKind::Degree);
            self.reference.degree_rank(&normalized)
        })
    }
}

#[async_trait]
impl DegreeHierarchy for WikidataHierarchy {
    async fn parent_rank(&self, degree: &str) -> Option<f64> {
        match self.fetch_parent_labels(degree).await {
            Ok(labels) => {
                let rank = self.rank_of_parents(&labels);
                debug!(degree, parents = labels.len(), ?rank, "degree hierarchy lookup");
                rank
            }
            Err(e) => {
                warn!(degree, "degree hierarchy lookup failed, falling back: {e}");
                None
            }
        }
    }
}

fn build_query(degree: &str) -> String {
    let label = escape_literal(degree);
    format!(
        r#"SELECT ?degreeLabel ?parentLabel WHERE {{
  ?degree wdt:P31 wd:Q189533;
          rdfs:label "{label}"@en.
  OPTIONAL {{ ?degree wdt:P279 ?parent. }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "en". }}
}}"#
    )
}

/// Escapes a value for use inside a double-quoted SPARQL literal.
fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn parse_parent_labels(body: &str) -> Result<Vec<String>, HierarchyError> {
    let parsed: SparqlResponse = serde_json::from_str(body)?;
    Ok(parsed
        .results
        .bindings
        .into_iter()
        .filter_map(|b| b.parent_label.map(|l| l.value))
        .collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "head": {"vars": ["degreeLabel", "parentLabel"]},
        "results": {"bindings": [
            {"degreeLabel": {"type": "literal", "value": "Bachelor of Arts"}},
            {"degreeLabel": {"type": "literal", "value": "Bachelor of Arts"},
             "parentLabel": {"type": "literal", "value": "bachelor's degree"}},
            {"degreeLabel": {"type": "literal", "value": "Bachelor of Arts"},
             "parentLabel": {"type": "literal", "value": "Bachelor of Science"}}
        ]}
    }"#;

    fn hierarchy() -> WikidataHierarchy {
        WikidataHierarchy::new(
            "http://127.0.0.1:9/sparql",
            Duration::from_millis(200),
            Arc::new(ReferenceData::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_parent_labels_skips_bindings_without_parent() {
        let labels = parse_parent_labels(SAMPLE).unwrap();
        assert_eq!(labels, ["bachelor's degree", "Bachelor of Science"]);
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        assert!(matches!(
            parse_parent_labels("<html>busy</html>"),
            Err(HierarchyError::Parse(_))
        ));
    }

    #[test]
    fn test_first_known_parent_wins() {
        let labels = vec![
            "bachelor's degree".to_string(),
            "Bachelor of Science".to_string(),
            "PhD".to_string(),
        ];
        assert_eq!(hierarchy().rank_of_parents(&labels), Some(2.0));
    }

    #[test]
    fn test_unknown_parents_yield_none() {
        let labels = vec!["academic degree".to_string()];
        assert_eq!(hierarchy().rank_of_parents(&labels), None);
    }

    #[test]
    fn test_query_escapes_label() {
        let query = build_query(r#"B.A. "Hons" \ x"#);
        assert!(query.contains(r#"rdfs:label "B.A. \"Hons\" \\ x"@en"#));
        assert!(query.contains("wd:Q189533"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_no_result() {
        assert_eq!(hierarchy().parent_rank("Bachelor of Arts").await, None);
    }

    #[tokio::test]
    async fn test_no_hierarchy_is_always_none() {
        assert_eq!(NoHierarchy.parent_rank("BSc").await, None);
    }
}
