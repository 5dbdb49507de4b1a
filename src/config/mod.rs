//! Paginator settings.
//!
//! Settings arrive as a loosely typed table (TOML or JSON, camelCase keys with
//! snake_case aliases) and are validated once into an immutable [`PagerConfig`].
//!
//! | Key                      | Required | Default                 |
//! |--------------------------|----------|-------------------------|
//! | `collection`             | yes      |                         |
//! | `layoutName`             | yes      |                         |
//! | `paginationTemplatePath` | yes      |                         |
//! | `elementsPerPage`        | yes      | `0` means 5             |
//! | `pagePattern`            | no       | `page/:PAGE/index.html` |
//! | `pageLabel`              | no       | `:PAGE`                 |
//!
//! # Example
//!
//! ```toml
//! collection = "blog"
//! layoutName = "blog-index.html"
//! paginationTemplatePath = "templates/blog.html"
//! elementsPerPage = 5
//! pagePattern = "blog/:PAGE/index.html"
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

// ============================================================================
// Raw Settings
// ============================================================================

/// Settings as supplied by the host, before validation.
///
/// Every field is optional at this stage so that missing or mistyped values
/// are reported by [`PagerSettings::validate`] with the offending key name
/// instead of a generic parse error.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PagerSettings {
    /// Collection whose entries get paginated.
    #[serde(default)]
    pub collection: Option<String>,

    /// Layout attached to every generated page.
    #[serde(default, alias = "layout_name")]
    pub layout_name: Option<String>,

    /// Template path, relative to the pipeline's source directory.
    #[serde(default, alias = "pagination_template_path")]
    pub pagination_template_path: Option<PathBuf>,

    /// Page size. Kept untyped so a non-numeric value can be reported as such.
    #[serde(default, alias = "elements_per_page")]
    pub elements_per_page: Option<Value>,

    /// Output path pattern, `:PAGE` is replaced by the page number.
    /// `null` and `""` mean the default.
    #[serde(default = "defaults::settings::page_pattern", alias = "page_pattern")]
    #[educe(Default = defaults::settings::page_pattern())]
    pub page_pattern: Option<String>,

    /// Display label pattern, `:PAGE` is replaced by the page index.
    /// `null` and `""` mean the default.
    #[serde(default = "defaults::settings::page_label", alias = "page_label")]
    #[educe(Default = defaults::settings::page_label())]
    pub page_label: Option<String>,
}

impl PagerSettings {
    /// Settings with every required key filled in and default patterns.
    pub fn new(
        collection: impl Into<String>,
        layout_name: impl Into<String>,
        pagination_template_path: impl Into<PathBuf>,
        elements_per_page: usize,
    ) -> Self {
        Self {
            collection: Some(collection.into()),
            layout_name: Some(layout_name.into()),
            pagination_template_path: Some(pagination_template_path.into()),
            elements_per_page: Some(Value::from(elements_per_page)),
            ..Self::default()
        }
    }

    pub fn with_page_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.page_pattern = Some(pattern.into());
        self
    }

    pub fn with_page_label(mut self, label: impl Into<String>) -> Self {
        self.page_label = Some(label.into());
        self
    }

    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse settings from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Check every required setting and produce the immutable config.
    ///
    /// Checks run in a fixed order: `collection`, `layoutName`,
    /// `paginationTemplatePath`, then `elementsPerPage`. The first failure wins.
    pub fn validate(&self) -> Result<PagerConfig, ConfigError> {
        let collection = required(self.collection.as_deref(), "collection")?;
        let layout_name = required(self.layout_name.as_deref(), "layoutName")?;
        let pagination_template_path = self
            .pagination_template_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::Missing("paginationTemplatePath"))?;
        let elements_per_page = parse_page_size(self.elements_per_page.as_ref())?;

        Ok(PagerConfig {
            collection: collection.to_owned(),
            layout_name: layout_name.to_owned(),
            pagination_template_path: pagination_template_path.to_path_buf(),
            elements_per_page,
            page_pattern: or_default(self.page_pattern.as_deref(), defaults::page_pattern),
            page_label: or_default(self.page_label.as_deref(), defaults::page_label),
        })
    }
}

// ============================================================================
// Validated Config
// ============================================================================

/// Validated settings, bound to a paginator for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub collection: String,
    pub layout_name: String,
    pub pagination_template_path: PathBuf,
    pub elements_per_page: NonZeroUsize,
    pub page_pattern: String,
    pub page_label: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn or_default(value: Option<&str>, default: fn() -> String) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => default(),
    }
}

/// Interpret the page size.
///
/// Any JSON/TOML number passes the type check. Zero falls back to the default
/// size; negative and fractional numbers are rejected.
///
/// TOML `nan` and `inf` have no JSON representation and arrive as `null`, so
/// they are reported as [`ConfigError::NotANumber`] rather than treated as
/// numbers.
fn parse_page_size(value: Option<&Value>) -> Result<NonZeroUsize, ConfigError> {
    let Some(Value::Number(number)) = value else {
        return Err(ConfigError::NotANumber);
    };

    let size = if let Some(size) = number.as_u64() {
        size
    } else {
        match number.as_f64() {
            Some(size) if size >= 0.0 && size.fract() == 0.0 && size <= u64::MAX as f64 => {
                size as u64
            }
            _ => {
                return Err(ConfigError::Validation(format!(
                    "\"elementsPerPage\" must be a positive integer, got {number}"
                )));
            }
        }
    };

    let size = usize::try_from(size).map_err(|_| {
        ConfigError::Validation(format!("\"elementsPerPage\" is too large: {size}"))
    })?;
    Ok(NonZeroUsize::new(size).unwrap_or(defaults::elements_per_page()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> PagerSettings {
        PagerSettings::new("blog", "blog.html", "templates/blog.html", 5)
    }

    #[test]
    fn test_validate_full() {
        let config = settings().validate().unwrap();

        assert_eq!(config.collection, "blog");
        assert_eq!(config.layout_name, "blog.html");
        assert_eq!(config.pagination_template_path, PathBuf::from("templates/blog.html"));
        assert_eq!(config.elements_per_page.get(), 5);
        assert_eq!(config.page_pattern, "page/:PAGE/index.html");
        assert_eq!(config.page_label, ":PAGE");
    }

    #[test]
    fn test_missing_collection() {
        let mut raw = settings();
        raw.collection = None;
        let err = raw.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("collection")));
    }

    #[test]
    fn test_missing_layout_name() {
        let mut raw = settings();
        raw.layout_name = None;
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().contains("\"layoutName\""));
    }

    #[test]
    fn test_empty_template_path_is_missing() {
        let mut raw = settings();
        raw.pagination_template_path = Some(PathBuf::new());
        let err = raw.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("paginationTemplatePath")));
    }

    #[test]
    fn test_empty_collection_is_missing() {
        let mut raw = settings();
        raw.collection = Some(String::new());
        assert!(matches!(
            raw.validate(),
            Err(ConfigError::Missing("collection"))
        ));
    }

    #[test]
    fn test_missing_elements_per_page() {
        let mut raw = settings();
        raw.elements_per_page = None;
        assert!(matches!(raw.validate(), Err(ConfigError::NotANumber)));
    }

    #[test]
    fn test_string_elements_per_page() {
        let mut raw = settings();
        raw.elements_per_page = Some(json!("5"));
        assert!(matches!(raw.validate(), Err(ConfigError::NotANumber)));
    }

    #[test]
    fn test_required_checks_run_in_order() {
        let raw = PagerSettings::default();
        assert!(matches!(
            raw.validate(),
            Err(ConfigError::Missing("collection"))
        ));
    }

    #[test]
    fn test_zero_elements_per_page_falls_back() {
        let mut raw = settings();
        raw.elements_per_page = Some(json!(0));
        assert_eq!(raw.validate().unwrap().elements_per_page.get(), 5);
    }

    #[test]
    fn test_whole_float_elements_per_page() {
        let mut raw = settings();
        raw.elements_per_page = Some(json!(3.0));
        assert_eq!(raw.validate().unwrap().elements_per_page.get(), 3);
    }

    #[test]
    fn test_negative_and_fractional_elements_per_page() {
        let mut raw = settings();
        raw.elements_per_page = Some(json!(-2));
        assert!(matches!(raw.validate(), Err(ConfigError::Validation(_))));

        raw.elements_per_page = Some(json!(2.5));
        assert!(matches!(raw.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_patterns_fall_back() {
        let config = settings()
            .with_page_pattern("")
            .with_page_label("")
            .validate()
            .unwrap();
        assert_eq!(config.page_pattern, defaults::page_pattern());
        assert_eq!(config.page_label, defaults::page_label());
    }

    #[test]
    fn test_from_json_null_patterns_fall_back() {
        let raw = PagerSettings::from_json(
            r#"{
                "collection": "blog",
                "layoutName": "blog.html",
                "paginationTemplatePath": "blog.html",
                "elementsPerPage": 5,
                "pagePattern": null,
                "pageLabel": null
            }"#,
        )
        .unwrap();
        assert_eq!(raw.page_pattern, None);

        let config = raw.validate().unwrap();
        assert_eq!(config.page_pattern, "page/:PAGE/index.html");
        assert_eq!(config.page_label, ":PAGE");
    }

    #[test]
    fn test_absent_patterns_use_defaults() {
        let raw = PagerSettings::from_json(r#"{ "collection": "blog" }"#).unwrap();
        assert_eq!(raw.page_pattern.as_deref(), Some("page/:PAGE/index.html"));
        assert_eq!(raw.page_label.as_deref(), Some(":PAGE"));
    }

    #[test]
    fn test_toml_nan_page_size_is_not_a_number() {
        let raw = PagerSettings::from_str(
            r#"
            collection = "blog"
            layoutName = "blog.html"
            paginationTemplatePath = "templates/blog.html"
            elementsPerPage = nan
        "#,
        )
        .unwrap();
        assert!(matches!(raw.validate(), Err(ConfigError::NotANumber)));
    }

    #[test]
    fn test_from_toml() {
        let raw = PagerSettings::from_str(
            r#"
            collection = "blog"
            layoutName = "blog.html"
            paginationTemplatePath = "templates/blog.html"
            elementsPerPage = 10
            pagePattern = "blog/:PAGE.html"
            pageLabel = "Page :PAGE"
        "#,
        )
        .unwrap();
        let config = raw.validate().unwrap();

        assert_eq!(config.elements_per_page.get(), 10);
        assert_eq!(config.page_pattern, "blog/:PAGE.html");
        assert_eq!(config.page_label, "Page :PAGE");
    }

    #[test]
    fn test_from_toml_snake_case_aliases() {
        let raw = PagerSettings::from_str(
            r#"
            collection = "blog"
            layout_name = "blog.html"
            pagination_template_path = "templates/blog.html"
            elements_per_page = 2
        "#,
        )
        .unwrap();
        assert_eq!(raw.validate().unwrap().elements_per_page.get(), 2);
    }

    #[test]
    fn test_from_toml_string_page_size() {
        let raw = PagerSettings::from_str(
            r#"
            collection = "blog"
            layoutName = "blog.html"
            paginationTemplatePath = "templates/blog.html"
            elementsPerPage = "ten"
        "#,
        )
        .unwrap();
        assert!(matches!(raw.validate(), Err(ConfigError::NotANumber)));
    }

    #[test]
    fn test_from_json() {
        let raw = PagerSettings::from_json(
            r#"{
                "collection": "news",
                "layoutName": "news.html",
                "paginationTemplatePath": "news.html",
                "elementsPerPage": 4
            }"#,
        )
        .unwrap();
        let config = raw.validate().unwrap();
        assert_eq!(config.collection, "news");
        assert_eq!(config.elements_per_page.get(), 4);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result = PagerSettings::from_str(
            r#"
            collection = "blog"
            unknown_field = "should_fail"
        "#,
        );

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PagerSettings::from_path(Path::new("/nonexistent/pager.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
        assert!(err.to_string().contains("/nonexistent/pager.toml"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pager.toml");
        fs::write(
            &path,
            "collection = \"blog\"\nlayoutName = \"l\"\npaginationTemplatePath = \"t\"\nelementsPerPage = 1\n",
        )
        .unwrap();

        let config = PagerSettings::from_path(&path).unwrap().validate().unwrap();
        assert_eq!(config.elements_per_page.get(), 1);
    }
}
