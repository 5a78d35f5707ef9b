//! Settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML text supplied by the caller
//! 3. Environment variables: `TREEKIT_*` prefix, `__` between section and key

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

pub const ENV_PREFIX: &str = "TREEKIT";

/// Limits applied when decoding the token format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecSettings {
    /// Reject inputs with more tokens than this, None for unbounded
    pub max_tokens: Option<usize>,
}

/// Labels used when rendering trees with termtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Label of the single node shown for an empty tree
    pub empty_label: String,
    /// Label shown in place of a missing binary child
    pub missing_label: String,
    /// Render the missing side of binary nodes that have exactly one child
    pub show_missing: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            empty_label: "Empty tree".into(),
            missing_label: crate::binary::NULL_TOKEN.into(),
            show_missing: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub codec: CodecSettings,
    pub display: DisplaySettings,
}

impl Settings {
    /// Defaults overridden by `TREEKIT_*` environment variables.
    pub fn load() -> TreeResult<Self> {
        Self::build(None)
    }

    /// Defaults overridden by the TOML `text`, then by `TREEKIT_*` environment variables.
    pub fn from_toml_str(text: &str) -> TreeResult<Self> {
        Self::build(Some(text))
    }

    #[instrument(level = "debug")]
    fn build(overrides: Option<&str>) -> TreeResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("display.empty_label", defaults.display.empty_label)
            .map_err(config_err)?
            .set_default("display.missing_label", defaults.display.missing_label)
            .map_err(config_err)?
            .set_default("display.show_missing", defaults.display.show_missing)
            .map_err(config_err)?;

        if let Some(text) = overrides {
            builder = builder.add_source(File::from_str(text, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Show the effective settings as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config(format!("serialize settings: {e}")))
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config(e.to_string())
}
