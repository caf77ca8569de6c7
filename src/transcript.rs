//! `--verbose` notes on stderr: the convention in use, how the path was
//! decomposed, and each name that failed its check.
//!
//! Nothing is written unless verbose mode is on, and stdout stays reserved for
//! the report.

use crate::convention::NamingConvention;
use crate::paths::PathComponents;
use crate::report::{NameKind, Violation};

pub(crate) struct Transcript {
    enabled: bool,
    header_written: bool,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            header_written: false,
        }
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if self.enabled {
            self.header();
            eprintln!("- {}", message.as_ref());
        }
    }

    /// Record the hidden flag, file name and folder list of one path.
    pub(crate) fn components(&mut self, components: &PathComponents) {
        if components.is_hidden {
            self.note("final segment is hidden; skipping checks");
            return;
        }
        self.note(format!("file name: {:?}", components.base_name));
        if !self.enabled {
            return;
        }
        if components.folders.is_empty() {
            self.note("folders: (none)");
            return;
        }
        self.note("folders:");
        for folder in &components.folders {
            eprintln!("    {folder}");
        }
    }

    pub(crate) fn violation(&mut self, violation: &Violation, convention: NamingConvention) {
        let kind = match violation.kind {
            NameKind::File => "file",
            NameKind::Folder => "folder",
        };
        self.note(format!(
            "{kind} name {:?} is not {convention}",
            violation.name
        ));
    }

    fn header(&mut self) {
        if !self.header_written {
            self.header_written = true;
            eprintln!("transcript:");
        }
    }
}
