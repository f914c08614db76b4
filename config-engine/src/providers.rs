// Configuration sources layered on top of the defaults
use std::path::PathBuf;

use config::{Environment, File};

/// Default prefix for environment overrides
pub const ENV_PREFIX: &str = "CLINIC";

/// Separator between prefix, section and key in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// A configuration source, applied in the order it was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File whose format is inferred from its extension
    File { path: PathBuf, required: bool },
    /// Environment variables `<PREFIX>__<SECTION>__<KEY>`
    Env { prefix: String },
}

impl ConfigSource {
    /// Optional file; a missing file is skipped
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            required: false,
        }
    }

    /// File that must exist
    pub fn required_file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            required: true,
        }
    }

    pub fn env() -> Self {
        Self::env_with_prefix(ENV_PREFIX)
    }

    pub fn env_with_prefix(prefix: impl Into<String>) -> Self {
        Self::Env {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn apply(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        match self {
            Self::File { path, required } => {
                builder.add_source(File::from(path.as_path()).required(*required))
            }
            Self::Env { prefix } => builder.add_source(
                Environment::with_prefix(prefix)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            ),
        }
    }
}
