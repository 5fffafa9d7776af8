//! Component scorers. Every function returns a percentage in [0, 100].

use std::collections::{BTreeSet, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::scoring::aggregate::round2;
use crate::scoring::vocabulary::normalize_text;

/// Score returned by the text scorer when either side has nothing to compare.
pub const NEUTRAL_TEXT_SIMILARITY: f64 = 50.0;

/// Share of the distinct required skills present in the extracted set.
///
/// No required skills is a vacuous 100. Comparison is exact after
/// lowercasing both sides.
pub fn skill_match_score(extracted: &BTreeSet<String>, required: &[String]) -> f64 {
    if required.is_empty() {
        return 100.0;
    }
    if extracted.is_empty() {
        return 0.0;
    }

    let extracted_lower: HashSet<String> = extracted.iter().map(|s| s.to_lowercase()).collect();
    let required_lower: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();

    let matched = extracted_lower.intersection(&required_lower).count();
    let pct = matched as f64 / required_lower.len() as f64 * 100.0;

    pct.clamp(0.0, 100.0)
}

/// Stepped experience scale: full marks at the minimum, 70 from 70% of it,
/// 50 from half of it, and a linear ramp to 50 below that.
pub fn experience_match_score(resume_years: u32, job_min_years: f64) -> f64 {
    if job_min_years == 0.0 {
        return 100.0;
    }

    let years = f64::from(resume_years);
    let score = if years >= job_min_years {
        100.0
    } else if years >= job_min_years * 0.7 {
        70.0
    } else if years >= job_min_years * 0.5 {
        50.0
    } else {
        years / job_min_years * 50.0
    };

    score.clamp(0.0, 100.0)
}

/// Token-level Jaccard similarity, rounded to two decimals.
///
/// No stemming or stopword handling. Empty input on either side scores
/// [`NEUTRAL_TEXT_SIMILARITY`].
pub fn text_similarity(resume_text: &str, job_description: &str) -> f64 {
    if resume_text.is_empty() || job_description.is_empty() {
        return NEUTRAL_TEXT_SIMILARITY;
    }

    let resume_norm = normalize_text(resume_text);
    let job_norm = normalize_text(job_description);
    let resume_tokens: HashSet<&str> = resume_norm.split_whitespace().collect();
    let job_tokens: HashSet<&str> = job_norm.split_whitespace().collect();

    if resume_tokens.is_empty() || job_tokens.is_empty() {
        return NEUTRAL_TEXT_SIMILARITY;
    }

    let intersection = resume_tokens.intersection(&job_tokens).count();
    let union = resume_tokens.union(&job_tokens).count();

    round2(intersection as f64 / union as f64 * 100.0).clamp(0.0, 100.0)
}

/// Per-skill indicators keyed by the skill string exactly as requested.
///
/// Serialises as a JSON object in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatchScores(Vec<(String, f64)>);

impl SkillMatchScores {
    pub fn get(&self, skill: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == skill).map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn insert(&mut self, skill: &str, score: f64) {
        match self.0.iter_mut().find(|(k, _)| k == skill) {
            Some(entry) => entry.1 = score,
            None => self.0.push((skill.to_string(), score)),
        }
    }
}

impl Serialize for SkillMatchScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (skill, score) in &self.0 {
            map.serialize_entry(skill, score)?;
        }
        map.end()
    }
}

/// Marks each requested skill 100 when it contains, or is contained in, any
/// extracted skill (case-insensitive), otherwise 0.
///
/// This is looser than [`skill_match_score`]: "Script" counts as a hit
/// against "Javascript" here but not there.
pub fn per_skill_match(extracted: &BTreeSet<String>, required: &[String]) -> SkillMatchScores {
    let extracted_lower: Vec<String> = extracted.iter().map(|s| s.to_lowercase()).collect();
    let mut scores = SkillMatchScores::default();

    for skill in required {
        let skill_lower = skill.to_lowercase();
        let hit = extracted_lower
            .iter()
            .any(|s| s.contains(&skill_lower) || skill_lower.contains(s.as_str()));
        scores.insert(skill, if hit { 100.0 } else { 0.0 });
    }

    scores
}
