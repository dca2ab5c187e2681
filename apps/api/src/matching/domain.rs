//! Coarse domain classification by keyword overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::normalize::clean;
use crate::reference::ReferenceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    MachineLearning,
    WebDevelopment,
    DataScience,
    Devops,
    Mobile,
}

impl Domain {
    pub fn label(self) -> &'static str {
        match self {
            Domain::MachineLearning => "machine learning",
            Domain::WebDevelopment => "web development",
            Domain::DataScience => "data science",
            Domain::Devops => "devops",
            Domain::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Infers the domain whose keywords appear most often across `skills` and `text`.
///
/// A keyword counts once if it occurs as a whole-word phrase in any skill or in
/// the text. Ties go to the domain listed first in the reference table; no hits
/// at all yields `None`.
pub fn infer_domain(reference: &ReferenceData, skills: &[String], text: &str) -> Option<Domain> {
    // "|" never appears in a cleaned keyword, so phrases cannot span segments
    let haystack = skills
        .iter()
        .map(|s| clean(s))
        .chain(std::iter::once(clean(text)))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    let haystack = format!(" {haystack} ");

    let mut best: Option<(Domain, usize)> = None;
    for (domain, keywords) in reference.domain_keywords() {
        let hits = keywords
            .iter()
            .filter(|k| haystack.contains(&format!(" {k} ")))
            .count();
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((*domain, hits));
        }
    }
    best.map(|(domain, _)| domain)
}
