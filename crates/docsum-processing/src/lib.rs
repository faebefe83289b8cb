//! Document processing
//!
//! `DocumentWorkflow` turns one work item into a stored summary and
//! translation: fetch, extract, summarize, translate, persist. Every step
//! runs from scratch on each delivery.

pub mod error;
pub mod extract;
pub mod workflow;

#[cfg(test)]
mod test_helpers;

pub use error::{Disposition, ProcessingError};
pub use extract::{ExtractionError, PdfTextExtractor, TextExtractor};
pub use workflow::DocumentWorkflow;
