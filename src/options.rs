//! Rendering configuration.
//!
//! This module provides the types a caller fills in to choose how a DataSet
//! tree is rendered:
//!
//! - [`FormatSpec`]: main configuration struct
//! - [`OutputKind`]: plain text or XML markup
//! - [`Style`]: table (with [`ColumnSpec`]s) or nested list (with [`LevelSpec`]s)
//! - [`CompactDialect`]: the two flat key/value renderings
//!
//! Styles are enums, so two layouts can never be active at once. A spec may
//! still leave the style unset (a configuration file can omit it); text
//! rendering rejects that before writing anything.
//!
//! ## Examples
//!
//! ```rust
//! use dataset_show::{ColumnSpec, CompactDialect, FormatSpec, LevelSpec};
//!
//! let table = FormatSpec::table(vec![
//!     ColumnSpec::new("DimmID", 8, "DimmID"),
//!     ColumnSpec::new("Capacity", 10, "Capacity"),
//! ]);
//!
//! let list = FormatSpec::list(vec![LevelSpec::new().with_item_header("---{name}---")])
//!     .with_verbose(true);
//!
//! let flat = FormatSpec::compact(CompactDialect::KeyVal);
//! assert!(flat.validate().is_ok());
//! ```
//!
//! `FormatSpec` is serde-compatible, so it can be loaded from configuration:
//!
//! ```rust
//! use dataset_show::{FormatSpec, OutputKind};
//!
//! let spec: FormatSpec = serde_json::from_str(r#"{ "kind": "xml" }"#).unwrap();
//! assert_eq!(spec.kind, OutputKind::Xml);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum length of a header text, in characters.
pub const MAX_HEADER_NAME_SZ: usize = 100;
/// Maximum number of per-depth templates in nested-list mode.
pub const MAX_LIST_LEVELS: usize = 10;
/// Maximum number of columns in table mode.
pub const MAX_TABLE_COLUMNS: usize = 15;

/// Output family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Text,
    Xml,
}

/// Per-depth template for nested-list rendering.
///
/// Header, item header and footer may use `{name}` (node name), `{depth}` and
/// `{key:NAME}` (value of key `NAME`, empty when absent). The key/value format
/// may use `{key}`, `{value}` and `{type}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSpec {
    /// Node name this level applies to, taking precedence over depth
    pub level_type: Option<String>,
    /// Emitted before each run of siblings using this level
    pub header: Option<String>,
    /// Emitted once per node before its attributes
    pub item_header: Option<String>,
    pub key_val_format: String,
    /// Emitted after a node's children are done
    pub footer: Option<String>,
    /// Keys never rendered at this depth
    pub ignore_keys: Vec<String>,
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec {
            level_type: None,
            header: None,
            item_header: None,
            key_val_format: "{key}: {value}".to_string(),
            footer: None,
            ignore_keys: Vec::new(),
        }
    }
}

impl LevelSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level_type(mut self, level_type: impl Into<String>) -> Self {
        self.level_type = Some(level_type.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_item_header(mut self, item_header: impl Into<String>) -> Self {
        self.item_header = Some(item_header.into());
        self
    }

    #[must_use]
    pub fn with_key_val_format(mut self, format: impl Into<String>) -> Self {
        self.key_val_format = format.into();
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Adds a key that is never rendered at this depth.
    #[must_use]
    pub fn ignore(mut self, key: impl Into<String>) -> Self {
        self.ignore_keys.push(key.into());
        self
    }

    pub(crate) fn is_ignored(&self, key: &str) -> bool {
        self.ignore_keys.iter().any(|k| k == key)
    }
}

/// One column of a table.
///
/// `path` is resolved against each row node: everything before the last `/` is
/// a node path relative to the row, the last segment is the key. A cell the
/// row cannot resolve is looked up on the row's ancestors, nearest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    pub width: usize,
    pub path: String,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(header: impl Into<String>, width: usize, path: impl Into<String>) -> Self {
        ColumnSpec {
            header: header.into(),
            width,
            path: path.into(),
        }
    }
}

/// Layout for structured text output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Table(Vec<ColumnSpec>),
    List(Vec<LevelSpec>),
}

/// Flat key/value renderings that skip all structural headers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactDialect {
    /// One `Parent.Child.Key.type=value` line per attribute
    KeyVal,
    /// One line per node: the name, then `key{kv}value` pairs, all joined by
    /// `field_separator`
    Custom {
        field_separator: String,
        kv_separator: String,
    },
}

impl CompactDialect {
    /// Custom dialect with `,` between fields and `=` inside pairs.
    #[must_use]
    pub fn custom() -> Self {
        CompactDialect::Custom {
            field_separator: ",".to_string(),
            kv_separator: "=".to_string(),
        }
    }
}

/// Complete rendering configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    pub kind: OutputKind,
    pub style: Option<Style>,
    pub compact: Option<CompactDialect>,
    /// Also report nodes without attributes
    pub verbose: bool,
    /// Spaces per depth level in list and XML output
    pub indent: usize,
    pub column_separator: String,
    /// Text used for table cells whose path does not resolve
    pub missing_value: String,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            kind: OutputKind::Text,
            style: None,
            compact: None,
            verbose: false,
            indent: 2,
            column_separator: " ".to_string(),
            missing_value: String::new(),
        }
    }
}

impl FormatSpec {
    /// Creates a text spec with no style selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text table with the given columns.
    #[must_use]
    pub fn table(columns: Vec<ColumnSpec>) -> Self {
        FormatSpec {
            style: Some(Style::Table(columns)),
            ..Default::default()
        }
    }

    /// Nested text list with the given per-depth templates.
    #[must_use]
    pub fn list(levels: Vec<LevelSpec>) -> Self {
        FormatSpec {
            style: Some(Style::List(levels)),
            ..Default::default()
        }
    }

    /// XML markup.
    #[must_use]
    pub fn xml() -> Self {
        FormatSpec {
            kind: OutputKind::Xml,
            ..Default::default()
        }
    }

    /// Flat text in one of the compact dialects.
    #[must_use]
    pub fn compact(dialect: CompactDialect) -> Self {
        FormatSpec {
            compact: Some(dialect),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_compact(mut self, dialect: CompactDialect) -> Self {
        self.compact = Some(dialect);
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_missing_value(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_value = placeholder.into();
        self
    }

    /// Checks that this format describes something renderable.
    ///
    /// # Errors
    ///
    /// [`Error::UnsetStyle`] for text output with neither a style nor a compact
    /// dialect; [`Error::MalformedFormat`] for XML combined with a compact
    /// dialect, too many levels or columns, a zero-width column, or an
    /// over-long header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::{CompactDialect, Error, FormatSpec};
    ///
    /// assert_eq!(FormatSpec::new().validate(), Err(Error::UnsetStyle));
    /// assert!(FormatSpec::xml()
    ///     .with_compact(CompactDialect::KeyVal)
    ///     .validate()
    ///     .is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.kind == OutputKind::Xml && self.compact.is_some() {
            return Err(Error::malformed("XML output cannot use a compact dialect"));
        }
        if self.kind == OutputKind::Text && self.style.is_none() && self.compact.is_none() {
            return Err(Error::UnsetStyle);
        }

        match &self.style {
            Some(Style::Table(columns)) => {
                if columns.is_empty() || columns.len() > MAX_TABLE_COLUMNS {
                    return Err(Error::malformed(format!(
                        "table needs 1 to {} columns, got {}",
                        MAX_TABLE_COLUMNS,
                        columns.len()
                    )));
                }
                for column in columns {
                    check_header(&column.header)?;
                    if column.width == 0 {
                        return Err(Error::malformed(format!(
                            "column `{}` has zero width",
                            column.header
                        )));
                    }
                }
            }
            Some(Style::List(levels)) => {
                if levels.is_empty() || levels.len() > MAX_LIST_LEVELS {
                    return Err(Error::malformed(format!(
                        "list needs 1 to {} levels, got {}",
                        MAX_LIST_LEVELS,
                        levels.len()
                    )));
                }
                for header in levels.iter().filter_map(|level| level.header.as_deref()) {
                    check_header(header)?;
                }
            }
            None => {}
        }
        Ok(())
    }
}

fn check_header(header: &str) -> Result<()> {
    if header.chars().count() > MAX_HEADER_NAME_SZ {
        return Err(Error::malformed(format!(
            "header longer than {} characters",
            MAX_HEADER_NAME_SZ
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = FormatSpec::new();
        assert_eq!(spec.kind, OutputKind::Text);
        assert_eq!(spec.indent, 2);
        assert!(!spec.verbose);
        assert_eq!(LevelSpec::new().key_val_format, "{key}: {value}");
    }

    #[test]
    fn test_validate_limits() {
        let too_many = vec![ColumnSpec::new("c", 1, "k"); MAX_TABLE_COLUMNS + 1];
        assert!(FormatSpec::table(too_many).validate().is_err());

        let zero = FormatSpec::table(vec![ColumnSpec::new("c", 0, "k")]);
        assert!(matches!(zero.validate(), Err(Error::MalformedFormat(_))));

        let long = "h".repeat(MAX_HEADER_NAME_SZ + 1);
        assert!(FormatSpec::list(vec![LevelSpec::new().with_header(long)])
            .validate()
            .is_err());

        assert!(FormatSpec::list(vec![LevelSpec::new(); MAX_LIST_LEVELS])
            .validate()
            .is_ok());
        assert!(FormatSpec::list(Vec::new()).validate().is_err());
    }

    #[test]
    fn test_xml_ignores_style() {
        let spec = FormatSpec::xml().with_style(Style::List(vec![LevelSpec::new()]));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_deserialize_table_config() {
        let json = r#"{
            "style": { "table": [
                { "header": "ID", "width": 6, "path": "DimmID" },
                { "header": "Temp", "width": 5, "path": "sensor/Temp" }
            ] },
            "column_separator": " | "
        }"#;
        let spec: FormatSpec = serde_json::from_str(json).unwrap();
        match &spec.style {
            Some(Style::Table(columns)) => {
                assert_eq!(columns.len(), 2);
                assert_eq!(columns[1].path, "sensor/Temp");
            }
            other => panic!("unexpected style {:?}", other),
        }
        assert_eq!(spec.column_separator, " | ");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_deserialize_custom_dialect() {
        let json = r#"{ "compact": { "custom": { "field_separator": ";", "kv_separator": ":" } } }"#;
        let spec: FormatSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.compact,
            Some(CompactDialect::Custom {
                field_separator: ";".to_string(),
                kv_separator: ":".to_string(),
            })
        );
    }
}
