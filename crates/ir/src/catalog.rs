//! Type-option catalog
//!
//! Maps a normalized column type category to the ordered list of field
//! types an operator may pick for it. Automatic mode takes the first entry.

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Normalization
// ============================================================================

/// Parenthesized annotations and stray length/precision characters
static TYPE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)|[0-9,]").expect("type decoration pattern is valid"));

/// Strip length/precision decorations from a raw database type
///
/// `varchar(191)` → `varchar`, `bigint(20) unsigned` → `bigint`,
/// `enum('a','b')` → `enum`, `int4` → `int`.
pub fn normalize_type(raw_type: &str) -> String {
    let lowered = raw_type.trim().to_lowercase();
    let stripped = TYPE_DECORATION.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

// ============================================================================
// Catalog
// ============================================================================

const STRING_OPTIONS: &[&str] = &[
    "Text", "Password", "Textarea", "Slug", "Gravatar", "Country", "Currency", "Timezone", "Place",
];
const TEXT_OPTIONS: &[&str] = &["Textarea", "Markdown", "Trix", "Code"];
const INTEGER_OPTIONS: &[&str] = &["Number", "ID"];
const BOOLEAN_OPTIONS: &[&str] = &["Boolean", "Number"];
const DECIMAL_OPTIONS: &[&str] = &["Number", "Currency"];
const DATE_OPTIONS: &[&str] = &["Date"];
const DATETIME_OPTIONS: &[&str] = &["DateTime", "Date"];
const TIME_OPTIONS: &[&str] = &["Text"];
const YEAR_OPTIONS: &[&str] = &["Number"];
const ENUM_OPTIONS: &[&str] = &["Select", "Badge"];
const SET_OPTIONS: &[&str] = &["BooleanGroup", "Select"];
const JSON_OPTIONS: &[&str] = &["Code", "KeyValue"];
const BINARY_OPTIONS: &[&str] = &["File", "Image"];
const UUID_OPTIONS: &[&str] = &["Text", "ID"];

/// Normalized type categories and their field-type options
const CATALOG: &[(&[&str], &[&str])] = &[
    (&["varchar", "char", "string"], STRING_OPTIONS),
    (&["text", "tinytext", "mediumtext", "longtext"], TEXT_OPTIONS),
    (
        &["int", "integer", "bigint", "smallint", "mediumint", "serial", "bigserial"],
        INTEGER_OPTIONS,
    ),
    (&["tinyint", "boolean", "bool"], BOOLEAN_OPTIONS),
    (&["decimal", "numeric", "float", "double", "real"], DECIMAL_OPTIONS),
    (&["date"], DATE_OPTIONS),
    (&["datetime", "timestamp", "timestamptz"], DATETIME_OPTIONS),
    (&["time"], TIME_OPTIONS),
    (&["year"], YEAR_OPTIONS),
    (&["enum"], ENUM_OPTIONS),
    (&["set"], SET_OPTIONS),
    (&["json", "jsonb"], JSON_OPTIONS),
    (
        &["blob", "binary", "varbinary", "bytea", "longblob", "mediumblob"],
        BINARY_OPTIONS,
    ),
    (&["uuid"], UUID_OPTIONS),
];

/// Field-type options for a column type
///
/// The type is normalized first, so both `varchar(191)` and `varchar` work.
/// An unknown category yields an empty slice: no field can be generated for
/// that column.
pub fn options_for(column_type: &str) -> &'static [&'static str] {
    let category = normalize_type(column_type);
    CATALOG
        .iter()
        .find(|(categories, _)| categories.contains(&category.as_str()))
        .map(|(_, options)| *options)
        .unwrap_or(&[])
}

/// The first (default) option for a column type
pub fn default_option_for(column_type: &str) -> Option<&'static str> {
    options_for(column_type).first().copied()
}

/// Every category the catalog knows about
pub fn categories() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .flat_map(|(categories, _)| categories.iter().copied())
}

// ============================================================================
// Tests
// ============================================================================
