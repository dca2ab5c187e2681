//! Aggregator: weighted overall score, sorted breakdown, bands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matching::round2;

/// Components scoring below this are flagged as a concern.
pub const CONCERN_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    SkillsFocused,
    EducationFocused,
}

impl FromStr for WeightScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skills_focused" => Ok(WeightScheme::SkillsFocused),
            "education_focused" => Ok(WeightScheme::EducationFocused),
            other => Err(format!(
                "unknown weight scheme '{other}' (expected skills_focused or education_focused)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub degree: f64,
    pub major: f64,
    pub skills: f64,
    pub projects: f64,
}

impl ScoringWeights {
    pub fn for_scheme(scheme: WeightScheme) -> Self {
        match scheme {
            WeightScheme::SkillsFocused => Self {
                degree: 0.15,
                major: 0.20,
                skills: 0.35,
                projects: 0.30,
            },
            WeightScheme::EducationFocused => Self {
                degree: 0.30,
                major: 0.20,
                skills: 0.30,
                projects: 0.20,
            },
        }
    }

    pub fn weight(&self, component: Component) -> f64 {
        match component {
            Component::Degree => self.degree,
            Component::Major => self.major,
            Component::Skills => self.skills,
            Component::Projects => self.projects,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::for_scheme(WeightScheme::SkillsFocused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Degree,
    Major,
    Skills,
    Projects,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Degree,
        Component::Major,
        Component::Skills,
        Component::Projects,
    ];

    pub fn describe(self) -> &'static str {
        match self {
            Component::Degree => "educational qualification",
            Component::Major => "field of study",
            Component::Skills => "technical skills",
            Component::Projects => "project experience",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Degree => "degree",
            Component::Major => "major",
            Component::Skills => "skills",
            Component::Projects => "projects",
        };
        f.write_str(name)
    }
}

/// Per-field scores on their own scales: degree ≈ [0, 140], others [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentScores {
    pub degree: f64,
    pub major: f64,
    pub skills: f64,
    pub projects: f64,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Degree => self.degree,
            Component::Major => self.major,
            Component::Skills => self.skills,
            Component::Projects => self.projects,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component: Component,
    pub score: f64,
    pub weight: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Exceptional,
    Strong,
    Good,
    Moderate,
    Fair,
    Limited,
}

impl MatchStrength {
    pub fn from_score(overall: f64) -> Self {
        if overall >= 85.0 {
            MatchStrength::Exceptional
        } else if overall >= 75.0 {
            MatchStrength::Strong
        } else if overall >= 65.0 {
            MatchStrength::Good
        } else if overall >= 55.0 {
            MatchStrength::Moderate
        } else if overall >= 45.0 {
            MatchStrength::Fair
        } else {
            MatchStrength::Limited
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchStrength::Exceptional => "exceptional",
            MatchStrength::Strong => "strong",
            MatchStrength::Good => "good",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Fair => "fair",
            MatchStrength::Limited => "limited",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StronglyRecommend,
    Recommend,
    Consider,
    NotRecommended,
}

impl Recommendation {
    pub fn from_score(overall: f64) -> Self {
        if overall >= 80.0 {
            Recommendation::StronglyRecommend
        } else if overall >= 70.0 {
            Recommendation::Recommend
        } else if overall >= 60.0 {
            Recommendation::Consider
        } else {
            Recommendation::NotRecommended
        }
    }
}

/// Σ score × weight, rounded to two decimals.
pub fn overall_score(scores: &ComponentScores, weights: &ScoringWeights) -> f64 {
    let total: f64 = Component::ALL
        .iter()
        .map(|&c| scores.get(c) * weights.weight(c))
        .sum();
    round2(total)
}

/// Components sorted by score, highest first. Equal scores keep field order.
pub fn breakdown(scores: &ComponentScores, weights: &ScoringWeights) -> Vec<ComponentScore> {
    let mut components: Vec<ComponentScore> = Component::ALL
        .iter()
        .map(|&component| {
            let score = scores.get(component);
            let weight = weights.weight(component);
            ComponentScore {
                component,
                score,
                weight,
                weighted: round2(score * weight),
            }
        })
        .collect();
    components.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    components
}

/// Aggregated view consumed by the report layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub scores: ComponentScores,
    pub weights: ScoringWeights,
    pub overall_score: f64,
    pub breakdown: Vec<ComponentScore>,
    pub strongest: ComponentScore,
    pub weakest: ComponentScore,
    pub strength: MatchStrength,
    pub recommendation: Recommendation,
}

impl Aggregate {
    pub fn new(scores: ComponentScores, weights: ScoringWeights) -> Self {
        let overall = overall_score(&scores, &weights);
        let breakdown = breakdown(&scores, &weights);
        // breakdown always holds all four components
        let strongest = breakdown[0];
        let weakest = breakdown[breakdown.len() - 1];

        Self {
            scores,
            weights,
            overall_score: overall,
            strongest,
            weakest,
            strength: MatchStrength::from_score(overall),
            recommendation: Recommendation::from_score(overall),
            breakdown,
        }
    }

    pub fn has_concern(&self) -> bool {
        self.weakest.score < CONCERN_THRESHOLD
    }
}
