use memrank::config::{ConfigLoader, MemrankConfig};
use memrank::marshal::{MalformedPolicy, Marshaller};
use memrank::ranking::TieBreak;
use std::path::Path;

pub struct MemrankCliContext {
    pub config: MemrankConfig,
}

impl MemrankCliContext {
    /// Load configuration from `config_file` (or the default locations when
    /// absent), then from `MEMRANK_` environment variables.
    pub fn new(config_file: Option<&Path>) -> memrank::Result<Self> {
        let mut loader = ConfigLoader::new();
        match config_file {
            Some(path) => {
                loader.load_file(path)?;
            }
            None => {
                loader.load_default_files();
            }
        }
        loader.load_env();

        Ok(Self {
            config: loader.extract()?,
        })
    }

    pub fn from_config(config: MemrankConfig) -> Self {
        Self { config }
    }

    /// Build a marshaller from the loaded configuration, with command-line
    /// flags taking precedence.
    pub fn marshaller(&self, strict: bool, tie_break: Option<TieBreak>) -> Marshaller {
        let policy = if strict {
            MalformedPolicy::Strict
        } else {
            self.config.ranking.malformed_records
        };
        let tie_break = tie_break.unwrap_or(self.config.ranking.tie_break);

        Marshaller::new(policy, tie_break)
    }
}
