use girasol_core::{default_documents, Config, Pipeline};

pub fn sample_config() -> Config {
    Config {
        low_confidence_threshold: 0.01,
        display_precision: 3,
        min_token_len: 2,
        locale: girasol_core::Locale::Spanish,
    }
}

pub fn sample_pipeline() -> Pipeline {
    Pipeline::new(sample_config())
}

pub fn sample_documents() -> Vec<String> {
    default_documents()
}
