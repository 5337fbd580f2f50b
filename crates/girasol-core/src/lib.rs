//! Question answering over a small corpus: validation, configuration and the answer pipeline

mod config;
mod demo;
mod error;
mod pipeline;
mod types;

pub use config::Config;
pub use demo::{default_documents, DEFAULT_DOCUMENTS, SUGGESTED_QUESTIONS};
pub use error::QaError;
pub use girasol_index::Locale;
pub use pipeline::{split_documents, validate, Pipeline};
pub use types::{Answer, Confidence, WeightTable};
