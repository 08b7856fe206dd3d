use std::sync::LazyLock;

use regex::Regex;

// Characters stripped before collapsing. Letters, combining marks, and digits
// from any script are kept, as are whitespace and hyphens, which the collapse
// pass turns into single hyphens.
static DISALLOWED_UNICODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\p{L}\p{M}\p{N}\s]").expect("Invalid regex"));

// ASCII-only variant. The input is already lowercased when this runs, so
// `a-z` covers every letter that can survive.
static DISALLOWED_ASCII: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-a-z0-9\s]").expect("Invalid regex"));

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("Invalid regex"));

/// Converts arbitrary human-entered text into a URL-safe slug.
///
/// The input is lowercased, characters that are neither letters, marks, nor
/// digits are stripped, runs of whitespace and hyphens collapse to a single
/// hyphen, the result is cut to at most `max_length` characters, and hyphens
/// left at either edge by the cut are trimmed. With `allow_unicode` set,
/// letters outside ASCII survive in their original script; otherwise they are
/// stripped along with the punctuation.
///
/// Example: `The D is silent` → `the-d-is-silent`
///
/// Every input maps to a valid slug, possibly the empty string. Stripping
/// happens before collapsing, so punctuation never leaves a hyphen behind:
/// `D#silent@` becomes `dsilent`, not `d-silent-`.
pub fn urlify(text: &str, max_length: usize, allow_unicode: bool) -> String {
    let lowered = text.to_lowercase();
    let filtered = if allow_unicode {
        DISALLOWED_UNICODE.replace_all(&lowered, "")
    } else {
        DISALLOWED_ASCII.replace_all(&lowered, "")
    };
    let collapsed = SEPARATOR_RUN.replace_all(&filtered, "-");
    // max_length counts characters, not bytes. Truncation runs before the
    // edge trim so a cut landing on a hyphen still yields a clean slug.
    let truncated: String = collapsed.chars().take(max_length).collect();
    truncated.trim_matches('-').to_string()
}
