//! Aggregated validation outcome for one path and its rendering.

use serde::Serialize;
use std::io::{self, Write};

use crate::convention::NamingConvention;
use crate::paths::PathComponents;

/// Which part of the path an offending name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum NameKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Violation {
    pub(crate) kind: NameKind,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Status {
    Passed,
    Failed,
    Skipped,
}

/// Result of checking every name in a path against one convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationResult {
    /// The path's final segment is hidden, so nothing was checked.
    Skipped,
    Checked { violations: Vec<Violation> },
}

impl ValidationResult {
    /// Check the file name, then each folder with one leading dot removed.
    pub(crate) fn evaluate(components: &PathComponents, convention: NamingConvention) -> Self {
        if components.is_hidden {
            return ValidationResult::Skipped;
        }

        let mut violations = Vec::new();
        if !convention.matches(&components.base_name) {
            violations.push(Violation {
                kind: NameKind::File,
                name: components.base_name.clone(),
            });
        }
        for folder in &components.folders {
            let name = folder.strip_prefix('.').unwrap_or(folder);
            if !convention.matches(name) {
                violations.push(Violation {
                    kind: NameKind::Folder,
                    name: name.to_string(),
                });
            }
        }
        ValidationResult::Checked { violations }
    }

    pub(crate) fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Skipped => &[],
            ValidationResult::Checked { violations } => violations.as_slice(),
        }
    }

    pub(crate) fn status(&self) -> Status {
        match self {
            ValidationResult::Skipped => Status::Skipped,
            ValidationResult::Checked { violations } if violations.is_empty() => Status::Passed,
            ValidationResult::Checked { .. } => Status::Failed,
        }
    }

    pub(crate) fn passed(&self) -> bool {
        self.status() != Status::Failed
    }

    /// Write one `Invalid ... name` block per violation.
    pub(crate) fn write_text(&self, path: &str, out: &mut impl Write) -> io::Result<()> {
        for violation in self.violations() {
            let label = match violation.kind {
                NameKind::File => "file",
                NameKind::Folder => "folder",
            };
            writeln!(out, "Invalid {label} name: {}", violation.name)?;
            writeln!(out, "Path: {path}")?;
        }
        Ok(())
    }
}

/// JSON report emitted with `--format json`.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    pub(crate) path: &'a str,
    pub(crate) convention: NamingConvention,
    pub(crate) status: Status,
    pub(crate) violations: &'a [Violation],
}

impl<'a> Report<'a> {
    pub(crate) fn new(path: &'a str, convention: NamingConvention, result: &'a ValidationResult) -> Self {
        Self {
            path,
            convention,
            status: result.status(),
            violations: result.violations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(path: &str, convention: NamingConvention) -> ValidationResult {
        ValidationResult::evaluate(&PathComponents::from_path(path), convention)
    }

    fn folder(name: &str) -> Violation {
        Violation {
            kind: NameKind::Folder,
            name: name.to_string(),
        }
    }

    #[test]
    fn hidden_folder_is_checked_without_its_dot() {
        let result = evaluate("/path/to/.hidden/File.txt", NamingConvention::PascalCase);
        assert_eq!(result.status(), Status::Failed);
        assert_eq!(
            result.violations(),
            &[folder("path"), folder("to"), folder("hidden")]
        );
    }

    #[test]
    fn hidden_path_skips_all_checks() {
        for convention in [NamingConvention::SnakeCase, NamingConvention::PascalCase] {
            let result = evaluate(".env", convention);
            assert_eq!(result, ValidationResult::Skipped);
            assert!(result.passed());
            assert!(result.violations().is_empty());
        }
        assert_eq!(
            evaluate("Bad-Dir/.hidden_file", NamingConvention::SnakeCase),
            ValidationResult::Skipped
        );
    }

    #[test]
    fn snake_case_file_without_folders_passes() {
        let result = evaluate("snake_case_name.txt", NamingConvention::SnakeCase);
        assert_eq!(result.status(), Status::Passed);
        assert!(result.passed());
    }

    #[test]
    fn windows_path_reports_underscored_folder() {
        let result = evaluate("C:\\Users\\Bad_Folder\\File.txt", NamingConvention::PascalCase);
        assert!(!result.passed());
        // `:` is neither a letter nor a digit.
        assert_eq!(result.violations(), &[folder("C:"), folder("Bad_Folder")]);
    }

    #[test]
    fn file_violation_is_listed_before_folders() {
        let result = evaluate("Bad-Dir/Other Dir/BadFile.rs", NamingConvention::SnakeCase);
        assert_eq!(
            result.violations(),
            &[
                Violation {
                    kind: NameKind::File,
                    name: "BadFile".to_string(),
                },
                folder("Bad-Dir"),
                folder("Other Dir"),
            ]
        );
    }

    #[test]
    fn text_output_has_one_block_per_violation() {
        let path = "src/Bad-Dir/BadFile.rs";
        let result = evaluate(path, NamingConvention::SnakeCase);
        let mut out = Vec::new();
        result.write_text(path, &mut out).expect("write text");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Invalid file name: BadFile\nPath: src/Bad-Dir/BadFile.rs\n\
             Invalid folder name: Bad-Dir\nPath: src/Bad-Dir/BadFile.rs\n"
        );
    }

    #[test]
    fn json_report_shape() {
        let result = evaluate("to/.git/File.txt", NamingConvention::PascalCase);
        let report = Report::new("to/.git/File.txt", NamingConvention::PascalCase, &result);
        let value = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(
            value,
            serde_json::json!({
                "path": "to/.git/File.txt",
                "convention": "PascalCase",
                "status": "failed",
                "violations": [
                    {"kind": "folder", "name": "to"},
                    {"kind": "folder", "name": "git"},
                ],
            })
        );
    }
}
