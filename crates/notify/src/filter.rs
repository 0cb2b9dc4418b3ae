//! Noise suppression by case-insensitive substring match.

use crate::catalog::SELF_TEST_BODY;

/// Lowercase fragments that suppress delivery when found anywhere in a body.
pub const IGNORE_SUBSTRINGS: &[&str] = &["signal 15", "cannot read watched", "message was ignored"];

/// Whether `body` should be dropped without contacting any destination.
pub fn should_ignore(body: &str) -> bool {
    should_ignore_with(body, IGNORE_SUBSTRINGS)
}

/// Same as [`should_ignore`] against a caller-supplied list.
///
/// `patterns` must already be lowercase. The self-test body is never ignored.
pub fn should_ignore_with(body: &str, patterns: &[&str]) -> bool {
    if body == SELF_TEST_BODY {
        return false;
    }
    let lowered = body.to_lowercase();
    patterns.iter().any(|pattern| lowered.contains(pattern))
}
