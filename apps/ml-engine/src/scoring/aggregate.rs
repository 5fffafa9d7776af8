use serde::Serialize;

/// Fixed component weights for the overall score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub experience_match: f64,
    pub text_similarity: f64,
}

pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skill_match: 0.4,
    experience_match: 0.3,
    text_similarity: 0.3,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// The three component percentages feeding the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub text_similarity: f64,
}

/// Weighted sum of the breakdown: 0.4*skill + 0.3*experience + 0.3*text,
/// rounded to two decimals.
pub fn compute_overall_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> f64 {
    let overall = breakdown.skill_match * weights.skill_match
        + breakdown.experience_match * weights.experience_match
        + breakdown.text_similarity * weights.text_similarity;

    round2(overall).clamp(0.0, 100.0)
}

/// Rounds to two decimals on the exact binary value, ties to even
/// (3.125 → 3.12). Scaling by 100 first would round 3.125 up.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
