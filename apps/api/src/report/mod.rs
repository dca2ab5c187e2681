//! Narrative report formatter: deterministic text built from match results.
//!
//! Each message has a few template variants. With a seed, the variant is picked
//! by hashing `(seed, message key)`; without one the first variant is always used.
//! Scores are never computed here, only described.

pub mod templates;

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::matching::aggregate::{Aggregate, MatchStrength, Recommendation};
use crate::matching::degree::DegreeMatch;
use crate::matching::engine::Evaluation;
use crate::matching::major::MajorMatch;
use crate::matching::projects::ProjectsReport;
use crate::matching::reducer::MatchResult;
use crate::matching::round2;
use crate::matching::skills::SkillsReport;

use templates::*;

/// Fills `{name}` placeholders. Unknown placeholders are left as is.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

fn pct(score: f64) -> String {
    round2(score).to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    seed: Option<u64>,
}

impl Narrator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn choose(&self, key: &str, variants: &[&'static str]) -> &'static str {
        let idx = match self.seed {
            Some(seed) if !variants.is_empty() => {
                let mut hasher = SipHasher13::new_with_keys(seed, 0);
                hasher.write(key.as_bytes());
                (hasher.finish() % variants.len() as u64) as usize
            }
            _ => 0,
        };
        variants.get(idx).copied().unwrap_or_default()
    }

    fn say(&self, key: &str, variants: &[&'static str], vars: &[(&str, String)]) -> String {
        render(self.choose(key, variants), vars)
    }

    // ── degree ─────────────────────────────────────────────────────────────

    pub fn degree(&self, matched: &DegreeMatch) -> String {
        let (key, variants) = match matched.score {
            s if s >= 130.0 => ("degree.far_above", DEGREE_FAR_ABOVE),
            s if s >= 110.0 => ("degree.above", DEGREE_ABOVE),
            s if s >= 95.0 => ("degree.meets", DEGREE_MEETS),
            s if s >= 80.0 => ("degree.slightly_below", DEGREE_SLIGHTLY_BELOW),
            s if s >= 60.0 => ("degree.below", DEGREE_BELOW),
            _ => ("degree.far_below", DEGREE_FAR_BELOW),
        };
        self.say(
            key,
            variants,
            &[
                ("candidate", matched.candidate.degree.clone()),
                ("job", matched.job.degree.clone()),
                ("score", pct(matched.score)),
            ],
        )
    }

    pub fn degree_list(&self, job: &str, result: &MatchResult) -> String {
        self.list("degree", job, result, DEGREE_LIST_BEST, DEGREE_LIST_EMPTY, 1.0)
    }

    // ── major ──────────────────────────────────────────────────────────────

    pub fn major(&self, matched: &MajorMatch) -> String {
        let (key, variants) = match matched.score {
            s if s >= 0.9 => ("major.excellent", MAJOR_EXCELLENT),
            s if s >= 0.75 => ("major.strong", MAJOR_STRONG),
            s if s >= 0.6 => ("major.good", MAJOR_GOOD),
            s if s >= 0.4 => ("major.partial", MAJOR_PARTIAL),
            _ => ("major.weak", MAJOR_WEAK),
        };
        self.say(
            key,
            variants,
            &[
                ("candidate", matched.candidate_major.clone()),
                ("job", matched.job_major.clone()),
                ("score", pct(matched.score * 100.0)),
                ("relationship", matched.relationship.describe().to_string()),
            ],
        )
    }

    pub fn major_list(&self, job: &str, result: &MatchResult) -> String {
        self.list("major", job, result, MAJOR_LIST_BEST, MAJOR_LIST_EMPTY, 100.0)
    }

    fn list(
        &self,
        field: &str,
        job: &str,
        result: &MatchResult,
        best: &[&'static str],
        empty: &[&'static str],
        scale: f64,
    ) -> String {
        match &result.best_match {
            Some(best_match) => self.say(
                &format!("{field}.list"),
                best,
                &[
                    ("count", result.all_matches.len().to_string()),
                    ("best", best_match.clone()),
                    ("job", job.to_string()),
                    ("score", pct(result.similarity * scale)),
                ],
            ),
            None => self.say(&format!("{field}.list_empty"), empty, &[("job", job.to_string())]),
        }
    }

    // ── skills ─────────────────────────────────────────────────────────────

    pub fn skills(&self, report: &SkillsReport) -> String {
        if report.matches.is_empty() {
            return self.say("skills.none_required", SKILLS_NONE_REQUIRED, &[]);
        }

        let mut lines = vec![self.say(
            "skills.summary",
            SKILLS_SUMMARY,
            &[("percentage", pct(report.match_percentage))],
        )];

        let exact: Vec<&str> = report.exact_matches().map(|m| m.job_skill.as_str()).collect();
        if !exact.is_empty() {
            lines.push(self.say("skills.exact", SKILLS_EXACT, &[("skills", exact.join(", "))]));
        }

        let related: Vec<String> = report
            .related_matches()
            .map(|m| match &m.candidate_skill {
                Some(candidate) => format!("{} (via {candidate})", m.job_skill),
                None => m.job_skill.clone(),
            })
            .collect();
        if !related.is_empty() {
            lines.push(self.say("skills.related", SKILLS_RELATED, &[("skills", related.join(", "))]));
        }

        let missing: Vec<&str> = report.missing().map(|m| m.job_skill.as_str()).collect();
        if !missing.is_empty() {
            lines.push(self.say("skills.missing", SKILLS_MISSING, &[("skills", missing.join(", "))]));
        }

        let additional: Vec<&str> = report
            .additional_skills
            .iter()
            .filter(|a| !a.shared_categories.is_empty())
            .map(|a| a.skill.as_str())
            .collect();
        if !additional.is_empty() {
            lines.push(self.say(
                "skills.additional",
                SKILLS_ADDITIONAL,
                &[("skills", additional.join(", "))],
            ));
        }

        lines.join(" ")
    }

    // ── projects ───────────────────────────────────────────────────────────

    pub fn projects(&self, report: &ProjectsReport) -> String {
        let Some(best) = &report.best_project else {
            return self.say("projects.none", PROJECTS_NONE, &[]);
        };

        let mut text = self.say(
            "projects.summary",
            PROJECTS_SUMMARY,
            &[
                ("score", pct(report.overall_score)),
                ("count", report.projects.len().to_string()),
                ("best", best.clone()),
                ("best_score", pct(report.best_score)),
            ],
        );

        let aligned = report.projects.iter().filter(|p| p.domain_aligned).count();
        if let (Some(domain), true) = (report.job_domain, aligned > 0) {
            text.push(' ');
            text.push_str(&self.say(
                "projects.domain",
                PROJECTS_DOMAIN,
                &[("aligned", aligned.to_string()), ("domain", domain.to_string())],
            ));
        }
        text
    }

    // ── overall ────────────────────────────────────────────────────────────

    pub fn overall(&self, evaluation: &Evaluation) -> String {
        let aggregate = &evaluation.aggregate;
        let mut sections = vec![self.say(
            "overall.intro",
            OVERALL_INTRO,
            &[
                ("strength", aggregate.strength.label().to_string()),
                ("score", pct(aggregate.overall_score)),
            ],
        )];

        sections.push(self.degree(&evaluation.degree));
        sections.push(self.major(&evaluation.major));
        sections.push(self.skills(&evaluation.skills));
        sections.push(self.projects(&evaluation.projects));
        sections.push(self.highlights(aggregate));
        sections.push(self.closing(aggregate));
        sections.push(recommendation_text(aggregate.recommendation).to_string());

        sections.join("\n\n")
    }

    fn highlights(&self, aggregate: &Aggregate) -> String {
        let strongest = &aggregate.strongest;
        let mut text = self.say(
            "overall.strength",
            OVERALL_STRENGTH,
            &[
                ("component", strongest.component.describe().to_string()),
                ("score", pct(strongest.score)),
            ],
        );

        if aggregate.has_concern() {
            let weakest = &aggregate.weakest;
            text.push(' ');
            text.push_str(&self.say(
                "overall.concern",
                OVERALL_CONCERN,
                &[
                    ("component", weakest.component.describe().to_string()),
                    ("score", pct(weakest.score)),
                ],
            ));
        }
        text
    }

    fn closing(&self, aggregate: &Aggregate) -> String {
        let (key, variants) = match aggregate.strength {
            MatchStrength::Exceptional => ("closing.exceptional", CLOSING_EXCEPTIONAL),
            MatchStrength::Strong => ("closing.strong", CLOSING_STRONG),
            MatchStrength::Good => ("closing.good", CLOSING_GOOD),
            MatchStrength::Moderate => ("closing.moderate", CLOSING_MODERATE),
            MatchStrength::Fair | MatchStrength::Limited => ("closing.weak", CLOSING_WEAK),
        };
        self.say(key, variants, &[])
    }
}

fn recommendation_text(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StronglyRecommend => RECOMMEND_STRONGLY,
        Recommendation::Recommend => RECOMMEND,
        Recommendation::Consider => RECOMMEND_CONSIDER,
        Recommendation::NotRecommended => RECOMMEND_NOT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::aggregate::{ComponentScores, ScoringWeights};
    use crate::matching::degree::{RankResolution, RankSource};
    use crate::matching::major::MajorRelationship;
    use crate::matching::reducer::{rank, RankedValue};

    fn resolution(degree: &str, rank: f64) -> RankResolution {
        RankResolution {
            degree: degree.to_string(),
            normalized: degree.to_lowercase(),
            rank,
            source: RankSource::Table,
        }
    }

    fn degree_match(score: f64) -> DegreeMatch {
        DegreeMatch {
            score,
            candidate: resolution("PhD", 6.0),
            job: resolution("BSc", 2.0),
        }
    }

    fn major_match(score: f64) -> MajorMatch {
        MajorMatch {
            job_major: "Physics".to_string(),
            candidate_major: "Chemistry".to_string(),
            normalized_job_major: "physics".to_string(),
            normalized_candidate_major: "chemistry".to_string(),
            score,
            relationship: MajorRelationship::classify(score, false),
        }
    }

    #[test]
    fn test_render_fills_placeholders() {
        let text = render("{a} and {b} and {a}", &[("a", "x".to_string()), ("b", "y".to_string())]);
        assert_eq!(text, "x and y and x");
        assert_eq!(render("{missing}", &[]), "{missing}");
    }

    #[test]
    fn test_unseeded_narrator_uses_first_variant() {
        let text = Narrator::default().degree(&degree_match(140.0));
        assert_eq!(text, "The candidate's PhD significantly exceeds the BSc requirement (140%).");
    }

    #[test]
    fn test_seeded_narrator_is_deterministic() {
        let a = Narrator::new(Some(7));
        let b = Narrator::new(Some(7));
        for score in [140.0, 120.0, 100.0, 85.0, 70.0, 40.0] {
            assert_eq!(a.degree(&degree_match(score)), b.degree(&degree_match(score)));
        }
    }

    #[test]
    fn test_seeded_choice_stays_within_variants() {
        for seed in 0..32 {
            let text = Narrator::new(Some(seed)).degree(&degree_match(100.0));
            assert!(
                DEGREE_MEETS.iter().any(|t| render(t, &[
                    ("candidate", "PhD".to_string()),
                    ("job", "BSc".to_string()),
                    ("score", "100".to_string()),
                ]) == text),
                "unexpected text for seed {seed}: {text}"
            );
        }
    }

    #[test]
    fn test_degree_bands() {
        let n = Narrator::default();
        assert!(n.degree(&degree_match(120.0)).contains("exceeds the BSc"));
        assert!(n.degree(&degree_match(100.0)).contains("meets"));
        assert!(n.degree(&degree_match(90.0)).contains("slightly below"));
        assert!(n.degree(&degree_match(70.0)).contains("is below"));
        assert!(n.degree(&degree_match(45.0)).contains("substantially below"));
    }

    #[test]
    fn test_major_bands() {
        let n = Narrator::default();
        assert!(n.major(&major_match(0.95)).contains("excellent"));
        assert!(n.major(&major_match(0.8)).contains("strong"));
        assert!(n.major(&major_match(0.65)).contains("good"));
        assert!(n.major(&major_match(0.45)).contains("partially"));
        assert!(n.major(&major_match(0.1)).contains("limited relevance"));
        assert!(n.major(&major_match(0.95)).contains("(95%)"));
    }

    #[test]
    fn test_list_reports() {
        let n = Narrator::default();
        let result = rank(vec![
            RankedValue {
                value: "BSc".to_string(),
                similarity: 60.0,
                normalized: "bsc".to_string(),
            },
            RankedValue {
                value: "PhD".to_string(),
                similarity: 110.0,
                normalized: "phd".to_string(),
            },
        ]);
        assert_eq!(
            n.degree_list("MSc", &result),
            "Of the 2 degrees provided, PhD is the strongest match for the MSc requirement (110%)."
        );
        assert!(n.major_list("Physics", &MatchResult::empty()).contains("No candidate majors"));
    }

    #[test]
    fn test_recommendation_text_per_tier() {
        let aggregate = Aggregate::new(
            ComponentScores {
                degree: 100.0,
                major: 100.0,
                skills: 100.0,
                projects: 100.0,
            },
            ScoringWeights::default(),
        );
        assert_eq!(recommendation_text(aggregate.recommendation), RECOMMEND_STRONGLY);
        assert!(!aggregate.has_concern());
    }
}
