//! Match Scoring — trait-based scorer that rates a resume against one job.
//!
//! Default: `KeywordMatchScorer` (vocabulary substring matching, regex
//! experience extraction, token Jaccard text similarity).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, built once at startup.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::scoring::aggregate::{compute_overall_score, ScoreBreakdown, ScoringWeights};
use crate::scoring::experience::extract_experience_years;
use crate::scoring::similarity::{
    experience_match_score, per_skill_match, skill_match_score, text_similarity,
    SkillMatchScores,
};
use crate::scoring::skills::extract_skills;
use crate::scoring::vocabulary::TECH_SKILLS;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Fields of one scoring request. Absent fields are empty / zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_required_skills: Vec<String>,
    pub job_min_years: f64,
    pub job_description: String,
}

/// What the scorer read out of the resume.
#[derive(Debug, Clone)]
pub struct ExtractedProfile {
    pub skills: BTreeSet<String>,
    pub years_of_experience: u32,
}

/// Full scoring result, serialised as the `/predict-score` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: f64,
    pub skill_match_scores: SkillMatchScores,
    pub breakdown: ScoreBreakdown,
    pub extracted_skills: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one resume against one job. Implementations must be pure: the
/// same request always yields the same result.
pub trait MatchScorer: Send + Sync {
    fn extract_skills(&self, text: &str) -> BTreeSet<String>;

    fn score(&self, request: &ScoreRequest) -> ScoreResult;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-based scorer over a fixed, read-only skill vocabulary.
///
/// Pipeline:
/// 1. Extract skills and years of experience from the resume text
/// 2. Skill match (set overlap), experience match (stepped), text similarity (Jaccard)
/// 3. overall = weighted sum of the three
/// 4. Per-skill indicators via bidirectional substring containment
pub struct KeywordMatchScorer {
    vocabulary: &'static [&'static str],
    weights: ScoringWeights,
}

impl KeywordMatchScorer {
    pub fn new(vocabulary: &'static [&'static str], weights: ScoringWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn extract_profile(&self, resume_text: &str) -> ExtractedProfile {
        ExtractedProfile {
            skills: extract_skills(resume_text, self.vocabulary),
            years_of_experience: extract_experience_years(resume_text),
        }
    }
}

impl Default for KeywordMatchScorer {
    fn default() -> Self {
        Self::new(TECH_SKILLS, ScoringWeights::default())
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        extract_skills(text, self.vocabulary)
    }

    fn score(&self, request: &ScoreRequest) -> ScoreResult {
        let profile = self.extract_profile(&request.resume_text);

        tracing::debug!(
            skills = profile.skills.len(),
            years = profile.years_of_experience,
            "Extracted resume profile"
        );

        let breakdown = ScoreBreakdown {
            skill_match: skill_match_score(&profile.skills, &request.job_required_skills),
            experience_match: experience_match_score(
                profile.years_of_experience,
                request.job_min_years,
            ),
            text_similarity: text_similarity(&request.resume_text, &request.job_description),
        };

        let overall_score = compute_overall_score(&breakdown, &self.weights);
        let skill_match_scores = per_skill_match(&profile.skills, &request.job_required_skills);

        ScoreResult {
            overall_score,
            skill_match_scores,
            breakdown,
            extracted_skills: profile.skills,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
