//! `:PAGE` substitution for page paths and labels.

use crate::config::defaults::PAGE_TOKEN;

/// Replace the first `:PAGE` in `pattern` with `page`.
///
/// Later tokens are left untouched, and a pattern without the token comes
/// back unchanged (every page then maps to the same path).
pub fn substitute(pattern: &str, page: usize) -> String {
    pattern.replacen(PAGE_TOKEN, &page.to_string(), 1)
}
