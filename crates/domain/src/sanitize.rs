//! Cleanup of research notes taken from the knowledge base.
//!
//! The notes contain annotation artifacts left over from their generation: citation references,
//! image placeholders and index markers. They are removed by an ordered list of patterns. The
//! citation pattern with braces must run before the one without, otherwise the brace part would
//! be left behind as an orphaned `{index=N}` fragment.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

const REMOVALS: [(&str, &str); 4] = [
    (
        "citation reference with braces",
        r":?contentReference\[[^\]]*\]\{[^}]*\}",
    ),
    ("citation reference", r":?contentReference\[[^\]]*\]"),
    ("image placeholder", r"!?\[(?i:image)(?::[^\]]*)?\]"),
    ("index marker", r"\{index=\d+\}"),
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REMOVALS
        .iter()
        .filter_map(|(name, pattern)| match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("failed to compile {name} pattern: {err}");
                None
            }
        })
        .collect()
});

static SPACES: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(" {2,}").ok());

/// Removes annotation artifacts from `text` and collapses redundant spaces.
///
/// The removals are repeated until none of them matches anymore, so that
/// `sanitize(&sanitize(x)) == sanitize(x)` holds for every input.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut result = text.to_string();

    loop {
        let mut changed = false;
        for pattern in PATTERNS.iter() {
            let replaced = pattern.replace_all(&result, "").into_owned();
            if replaced != result {
                result = replaced;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    if let Some(spaces) = SPACES.as_ref() {
        result = spaces.replace_all(&result, " ").into_owned();
    }

    result.trim().to_string()
}

/// Returns the sanitized text up to, but not including, the first period.
#[must_use]
pub fn first_sentence(text: &str) -> String {
    let sanitized = sanitize(text);
    match sanitized.split_once('.') {
        Some((sentence, _)) => sentence.to_string(),
        None => sanitized,
    }
}
