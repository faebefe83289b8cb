//! Clients for the third-party services used by the processing workflow.

pub mod services;

pub use services::cohere::CohereSummarizer;
pub use services::summarizer::{SummarizeError, Summarizer};
pub use services::translate::AwsTranslator;
pub use services::translator::{TranslateError, Translator};
