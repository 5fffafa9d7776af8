//! Years-of-experience extraction.
//!
//! Patterns are tried in priority order. The first pattern with a match
//! decides the result, using its first match in the text. A numeral that
//! does not parse (too large for `u32`) skips to the next pattern.
//!
//! Only ASCII numerals are recognised; "٥ years experience" yields nothing.

use std::sync::LazyLock;

use regex::Regex;

static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"((?-u:\d)+)\+?\s*years?\s*(?:of\s*)?experience",
        r"experience[:\s]+((?-u:\d)+)\+?\s*years?",
        r"((?-u:\d)+)\+?\s*years?\s*in",
    ]
    .iter()
    .filter_map(|p| match Regex::new(p) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Invalid experience pattern {p}: {e}");
            None
        }
    })
    .collect()
});

/// Returns the years of experience stated in `text`, or 0 when none is found.
pub fn extract_experience_years(text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }

    let text_lower = text.to_lowercase();

    for pattern in EXPERIENCE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(&text_lower) else {
            continue;
        };
        match caps[1].parse::<u32>() {
            Ok(years) => return years,
            Err(e) => tracing::debug!("Discarding experience numeral '{}': {e}", &caps[1]),
        }
    }

    0
}
