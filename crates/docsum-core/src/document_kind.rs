//! Document type detection by filename suffix.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Document formats the processing workflow can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
}

impl DocumentKind {
    /// Infer the document kind from the storage filename.
    ///
    /// Matching is on the exact lowercase suffix; `REPORT.PDF` is not recognized.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else {
            None
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
        }
    }
}
