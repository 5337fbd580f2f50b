pub mod ask;
pub mod matrix;
pub mod suggest;
pub mod version;

use anyhow::Context;
use girasol_core::Config;

/// Config file if given, defaults otherwise.
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load(p).with_context(|| format!("loading config from {p}")),
        None => Ok(Config::new()),
    }
}

/// Documents file split one per line, or the demo corpus.
pub fn load_documents(path: Option<&str>) -> anyhow::Result<Vec<String>> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("reading documents from {p}"))?;
            Ok(girasol_core::split_documents(&raw))
        }
        None => Ok(girasol_core::default_documents()),
    }
}
