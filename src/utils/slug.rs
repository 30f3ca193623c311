//! Slug validation for page paths.

use regex::Regex;
use std::sync::LazyLock;

/// Longest slug accepted from a request path.
pub const MAX_SLUG_LENGTH: usize = 200;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug regex"));

/// Returns true if `slug` is a well-formed, URL-safe slug.
///
/// # Rules
///
/// - 1 to [`MAX_SLUG_LENGTH`] characters
/// - Lowercase ASCII letters, digits and hyphens only
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LENGTH && SLUG_REGEX.is_match(slug)
}
