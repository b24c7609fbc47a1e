//! CLI configuration.
//!
//! Settings come from, highest precedence first:
//!
//! 1. command-line flags (`--catalog-dir`)
//! 2. a YAML config file (`--config cfx.yaml`)
//! 3. environment variables (`CFX_CATALOG_DIR`, `CFX_DUPLICATE_IDS`)
//! 4. built-in defaults (`./frameworks`, duplicate ids allowed)
//!
//! A relative `catalog_dir` in a config file is resolved against the
//! directory holding that file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cfx_checklist::{DuplicateIdPolicy, SessionOptions};

/// Catalog directory used when nothing else is configured.
pub const DEFAULT_CATALOG_DIR: &str = "frameworks";

/// Environment variable naming the catalog directory.
pub const ENV_CATALOG_DIR: &str = "CFX_CATALOG_DIR";

/// Environment variable selecting the duplicate id policy.
pub const ENV_DUPLICATE_IDS: &str = "CFX_DUPLICATE_IDS";

/// Contents of a `cfx.yaml` config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Directory of framework documents.
    pub catalog_dir: Option<PathBuf>,
    /// Handling of custom controls that reuse an existing id.
    pub duplicate_ids: Option<DuplicateIdPolicy>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory of framework documents.
    pub catalog_dir: PathBuf,
    /// Options for new checklist sessions.
    pub session: SessionOptions,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value for {var}: {detail}")]
    InvalidEnv { var: String, detail: String },
}

impl CliConfig {
    /// Read a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if let (Some(dir), Some(base)) = (config.catalog_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.catalog_dir = Some(base.join(dir));
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Merge with the command line and the process environment.
    pub fn resolve(self, catalog_dir_flag: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
        self.resolve_with(catalog_dir_flag, |var| std::env::var(var).ok())
    }

    /// Merge with the command line and an environment lookup.
    pub fn resolve_with<F>(
        self,
        catalog_dir_flag: Option<PathBuf>,
        env: F,
    ) -> Result<ResolvedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_dir = catalog_dir_flag
            .or(self.catalog_dir)
            .or_else(|| env(ENV_CATALOG_DIR).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR));

        let duplicate_ids = match self.duplicate_ids {
            Some(policy) => policy,
            None => match env(ENV_DUPLICATE_IDS) {
                Some(raw) => raw.parse().map_err(|e: cfx_core::CfxError| ConfigError::InvalidEnv {
                    var: ENV_DUPLICATE_IDS.to_string(),
                    detail: e.to_string(),
                })?,
                None => DuplicateIdPolicy::default(),
            },
        };

        Ok(ResolvedConfig {
            catalog_dir,
            session: SessionOptions { duplicate_ids },
        })
    }
}
