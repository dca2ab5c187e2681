//! Reference data: degree ranks, alias tables, skill categories and relations.
//!
//! Loaded once at startup and shared read-only as `Arc<ReferenceData>`.
//! Every key and value goes through `normalize::clean` on the way in, so the
//! indexes are directly comparable with normalized request values.

pub mod tables;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::matching::domain::Domain;
use crate::matching::normalize::clean;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("could not read reference data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid reference data JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Serialized form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeRank {
    pub degree: String,
    pub rank: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainKeywords {
    pub domain: Domain,
    pub keywords: Vec<String>,
}

/// Plain key→value tables as they appear on disk. Omitted fields fall back to
/// the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub degree_ranks: Vec<DegreeRank>,
    pub degree_synonyms: BTreeMap<String, String>,
    pub major_aliases: BTreeMap<String, String>,
    pub skill_aliases: BTreeMap<String, String>,
    pub skill_categories: Vec<SkillCategory>,
    pub skill_relations: BTreeMap<String, Vec<String>>,
    pub domain_keywords: Vec<DomainKeywords>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        fn pairs(table: &[(&str, &str)]) -> BTreeMap<String, String> {
            table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }

        Self {
            degree_ranks: tables::DEGREE_RANKS
                .iter()
                .map(|(degree, rank)| DegreeRank {
                    degree: degree.to_string(),
                    rank: *rank,
                })
                .collect(),
            degree_synonyms: pairs(tables::DEGREE_SYNONYMS),
            major_aliases: pairs(tables::MAJOR_ALIASES),
            skill_aliases: pairs(tables::SKILL_ALIASES),
            skill_categories: tables::SKILL_CATEGORIES
                .iter()
                .map(|(name, skills)| SkillCategory {
                    name: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            skill_relations: tables::SKILL_RELATIONS
                .iter()
                .map(|(skill, related)| {
                    (
                        skill.to_string(),
                        related.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
            domain_keywords: tables::DOMAIN_KEYWORDS
                .iter()
                .map(|(domain, keywords)| DomainKeywords {
                    domain: *domain,
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Indexed form
// ────────────────────────────────────────────────────────────────────────────

/// Indexed, normalized reference data. Immutable after construction.
#[derive(Debug)]
pub struct ReferenceData {
    degree_ranks: Vec<(String, f64)>,
    degree_index: HashMap<String, f64>,
    degree_synonyms: HashMap<String, String>,
    major_aliases: HashMap<String, String>,
    skill_aliases: HashMap<String, String>,
    categories: Vec<(String, Vec<String>)>,
    category_index: HashMap<String, usize>,
    skill_categories: HashMap<String, Vec<usize>>,
    /// Category names and members, first-seen order, deduplicated.
    known_skills: Vec<String>,
    relations: HashMap<String, HashSet<String>>,
    domain_keywords: Vec<(Domain, Vec<String>)>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::from_tables(ReferenceTables::default())
    }
}

impl ReferenceData {
    /// Loads the built-in tables, overridden field-by-field by the JSON file at `path`.
    pub fn load(path: Option<&Path>) -> Result<Self, ReferenceError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)?;
        let tables: ReferenceTables = serde_json::from_str(&raw)?;
        info!("Loaded reference data from {}", path.display());
        Ok(Self::from_tables(tables))
    }

    pub fn from_tables(tables: ReferenceTables) -> Self {
        let mut degree_ranks = Vec::new();
        let mut degree_index = HashMap::new();
        for DegreeRank { degree, rank } in tables.degree_ranks {
            if !rank.is_finite() || rank < 0.0 {
                warn!(degree = %degree, rank, "skipping degree with invalid rank");
                continue;
            }
            let key = clean(&degree);
            if degree_index.insert(key.clone(), rank).is_none() {
                degree_ranks.push((key, rank));
            }
        }

        let mut categories: Vec<(String, Vec<String>)> = Vec::new();
        let mut category_index = HashMap::new();
        let mut skill_categories: HashMap<String, Vec<usize>> = HashMap::new();
        let mut known_skills = Vec::new();
        let mut seen = HashSet::new();

        for SkillCategory { name, skills } in tables.skill_categories {
            let name = clean(&name);
            let idx = categories.len();
            let members: Vec<String> = skills.iter().map(|s| clean(s)).collect();

            category_index.insert(name.clone(), idx);
            if seen.insert(name.clone()) {
                known_skills.push(name.clone());
            }
            for member in &members {
                let entry = skill_categories.entry(member.clone()).or_default();
                if !entry.contains(&idx) {
                    entry.push(idx);
                }
                if seen.insert(member.clone()) {
                    known_skills.push(member.clone());
                }
            }
            categories.push((name, members));
        }

        let mut relations: HashMap<String, HashSet<String>> = HashMap::new();
        for (skill, related) in tables.skill_relations {
            let skill = clean(&skill);
            for other in related {
                let other = clean(&other);
                relations
                    .entry(skill.clone())
                    .or_default()
                    .insert(other.clone());
                relations.entry(other).or_default().insert(skill.clone());
            }
        }

        Self {
            degree_ranks,
            degree_index,
            degree_synonyms: clean_map(tables.degree_synonyms),
            major_aliases: clean_map(tables.major_aliases),
            skill_aliases: clean_map(tables.skill_aliases),
            categories,
            category_index,
            skill_categories,
            known_skills,
            relations,
            domain_keywords: tables
                .domain_keywords
                .into_iter()
                .map(|d| (d.domain, d.keywords.iter().map(|k| clean(k)).collect()))
                .collect(),
        }
    }

    // ── degrees ────────────────────────────────────────────────────────────

    pub fn degree_rank(&self, normalized: &str) -> Option<f64> {
        self.degree_index.get(normalized).copied()
    }

    /// Known degrees with their ranks, in table order.
    pub fn known_degrees(&self) -> &[(String, f64)] {
        &self.degree_ranks
    }

    pub fn max_degree_rank(&self) -> f64 {
        self.degree_ranks
            .iter()
            .map(|(_, rank)| *rank)
            .fold(0.0, f64::max)
    }

    pub fn degree_synonym(&self, cleaned: &str) -> Option<&str> {
        self.degree_synonyms.get(cleaned).map(String::as_str)
    }

    // ── majors ─────────────────────────────────────────────────────────────

    pub fn major_alias(&self, cleaned: &str) -> Option<&str> {
        self.major_aliases.get(cleaned).map(String::as_str)
    }

    // ── skills ─────────────────────────────────────────────────────────────

    pub fn skill_alias(&self, cleaned: &str) -> Option<&str> {
        self.skill_aliases.get(cleaned).map(String::as_str)
    }

    pub fn is_known_skill(&self, normalized: &str) -> bool {
        self.category_index.contains_key(normalized) || self.skill_categories.contains_key(normalized)
    }

    pub fn known_skills(&self) -> &[String] {
        &self.known_skills
    }

    pub fn is_category(&self, normalized: &str) -> bool {
        self.category_index.contains_key(normalized)
    }

    /// Names of the categories `skill` belongs to. A category name belongs to itself.
    pub fn categories_of(&self, skill: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .skill_categories
            .get(skill)
            .into_iter()
            .flatten()
            .map(|&idx| self.categories[idx].0.as_str())
            .collect();
        if let Some(&idx) = self.category_index.get(skill) {
            let own = self.categories[idx].0.as_str();
            if !names.contains(&own) {
                names.insert(0, own);
            }
        }
        names
    }

    pub fn category_members(&self, category: &str) -> Option<&[String]> {
        self.category_index
            .get(category)
            .map(|&idx| self.categories[idx].1.as_slice())
    }

    /// First category both skills belong to, if any.
    pub fn shared_category(&self, a: &str, b: &str) -> Option<&str> {
        let b_categories = self.categories_of(b);
        self.categories_of(a)
            .into_iter()
            .find(|name| b_categories.contains(name))
    }

    /// True when one skill names a category that contains the other.
    pub fn category_contains(&self, a: &str, b: &str) -> bool {
        let contains = |category: &str, skill: &str| {
            self.category_members(category)
                .map(|members| members.iter().any(|m| m == skill))
                .unwrap_or(false)
        };
        contains(a, b) || contains(b, a)
    }

    pub fn are_related(&self, a: &str, b: &str) -> bool {
        self.relations
            .get(a)
            .map(|related| related.contains(b))
            .unwrap_or(false)
    }

    // ── domains ────────────────────────────────────────────────────────────

    pub fn domain_keywords(&self) -> &[(Domain, Vec<String>)] {
        &self.domain_keywords
    }
}

fn clean_map(map: BTreeMap<String, String>) -> HashMap<String, String> {
    map.into_iter().map(|(k, v)| (clean(&k), clean(&v))).collect()
}
