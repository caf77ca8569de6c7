//! Naming convention predicates for bare file and folder names.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Convention a name is checked against, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub(crate) enum NamingConvention {
    #[value(name = "snake_case")]
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[value(name = "PascalCase")]
    #[serde(rename = "PascalCase")]
    PascalCase,
}

impl NamingConvention {
    /// Check a bare name (no separators, no extension) against this convention.
    pub(crate) fn matches(self, name: &str) -> bool {
        match self {
            NamingConvention::SnakeCase => is_snake_case(name),
            NamingConvention::PascalCase => is_pascal_case(name),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::PascalCase => "PascalCase",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_decimal_digit(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

fn is_lowercase_letter(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::LowercaseLetter)
}

fn is_uppercase_letter(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::UppercaseLetter)
}

/// Any `L*` category. Letter-like numerals such as `Ⅲ` are excluded.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Lowercase letters and digits separated by single underscores.
///
/// The empty string is accepted.
///
/// # Examples
/// ```ignore
/// assert!(is_snake_case("snake_case_123"));
/// assert!(!is_snake_case("snake__case"));
/// assert!(!is_snake_case("_snake"));
/// ```
pub(crate) fn is_snake_case(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    if name.starts_with('_') || name.ends_with('_') {
        return false;
    }

    let mut previous_underscore = false;
    for ch in name.chars() {
        if ch == '_' {
            if previous_underscore {
                return false;
            }
            previous_underscore = true;
            continue;
        }
        if !is_lowercase_letter(ch) && !is_decimal_digit(ch) {
            return false;
        }
        previous_underscore = false;
    }
    true
}

/// An uppercase first letter followed only by letters and decimal digits.
///
/// Unlike [`is_snake_case`], the empty string is rejected.
pub(crate) fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_uppercase_letter(first) => {}
        _ => return false,
    }
    chars.all(|ch| is_letter(ch) || is_decimal_digit(ch))
}
