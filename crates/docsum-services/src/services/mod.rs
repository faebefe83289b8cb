pub mod cohere;
pub mod summarizer;
pub mod translate;
pub mod translator;
