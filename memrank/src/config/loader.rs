//! Layered configuration loading on top of figment.
//!
//! Sources merge in call order, later ones overriding earlier ones. The usual
//! sequence is defaults, then a config file, then `MEMRANK_` environment
//! variables, then [`ConfigLoader::extract`].

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*, validation};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};

/// File name looked up inside the user config directory
const USER_CONFIG_STEM: &str = "config";

/// Extensions tried, in order, for the user config file
const USER_CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Builds a [`MemrankConfig`] from defaults, files and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Start from the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(MemrankConfig::default())),
        }
    }

    /// Merge a toml, yaml or json file; the format follows the extension.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension {
            Some("toml") => self.merge(Toml::file(path)),
            Some("yaml" | "yml") => self.merge(Yaml::file(path)),
            Some("json") => self.merge(Json::file(path)),
            _ => {
                return Err(ConfigError::FileLoadError(format!(
                    "Unsupported file format (expected toml, yaml or json): {}",
                    path.display()
                )));
            }
        };

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(self)
    }

    /// Merge the first project-local file from [`DEFAULT_CONFIG_FILES`] and
    /// then the first file found in the user config directory, if any.
    ///
    /// A user file overrides a project-local one. Missing files are not an
    /// error.
    pub fn load_default_files(&mut self) -> &mut Self {
        let local = DEFAULT_CONFIG_FILES.iter().map(PathBuf::from);
        self.load_first_existing(local);

        if let Some(dir) = user_config_dir() {
            let user = USER_CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", USER_CONFIG_STEM, ext)));
            self.load_first_existing(user);
        }

        self
    }

    /// Merge `MEMRANK_`-prefixed environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `MEMRANK_RANKING__TIE_BREAK`.
    pub fn load_env(&mut self) -> &mut Self {
        self.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Merge any other figment provider.
    pub fn merge<T: figment::Provider>(&mut self, provider: T) -> &mut Self {
        self.figment = std::mem::take(&mut self.figment).merge(provider);
        self
    }

    /// Extract the merged configuration and validate it.
    pub fn extract(&self) -> Result<MemrankConfig> {
        let config: MemrankConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;
        Ok(config)
    }

    fn load_first_existing(&mut self, candidates: impl IntoIterator<Item = PathBuf>) {
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            match self.load_file(&path) {
                Ok(_) => return,
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping config file"),
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-user config directory (`$XDG_CONFIG_HOME/memrank` on Linux).
pub fn user_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "memrank", "memrank")
        .map(|dirs| dirs.config_dir().to_path_buf())
}
