//! Default values for optional settings.
//!
//! These functions are used by serde for default deserialization.

use std::num::NonZeroUsize;

/// Token replaced by a page number in patterns and labels.
pub const PAGE_TOKEN: &str = ":PAGE";

pub fn page_pattern() -> String {
    "page/:PAGE/index.html".into()
}

pub fn page_label() -> String {
    PAGE_TOKEN.into()
}

/// Defaults for the raw, nullable settings surface.
pub mod settings {
    pub fn page_pattern() -> Option<String> {
        Some(super::page_pattern())
    }

    pub fn page_label() -> Option<String> {
        Some(super::page_label())
    }
}

/// Page size used when `elementsPerPage` is given as zero.
pub const fn elements_per_page() -> NonZeroUsize {
    match NonZeroUsize::new(5) {
        Some(size) => size,
        None => NonZeroUsize::MIN,
    }
}
