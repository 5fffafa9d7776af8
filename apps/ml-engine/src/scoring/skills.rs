//! Skill extraction — plain substring matching against the vocabulary.
//!
//! There is no word-boundary check: "java" is found inside "javascript".
//! Callers rely on this behaviour, so it is kept as is.

use std::collections::BTreeSet;

use crate::scoring::vocabulary::normalize_text;

/// Returns every vocabulary skill found in `text`, in display (title) form.
pub fn extract_skills(text: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }

    let normalized = normalize_text(text);

    vocabulary
        .iter()
        .filter(|skill| normalized.contains(&skill.to_lowercase()))
        .map(|skill| title_case(skill))
        .collect()
}

/// Upper-cases every letter that does not follow another letter and
/// lower-cases the rest: "node.js" → "Node.Js", "ci/cd" → "Ci/Cd".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
