//! Configuration management

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallbacks for `--region` and `--account`
#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub account: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            account: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Config {
    /// Load configuration from `qident.toml` (optional) and environment
    /// variables such as `QIDENT_DEFAULTS__ACCOUNT`
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("qident").required(false))
            .add_source(
                config::Environment::with_prefix("QIDENT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize::<Config>()?)
    }
}
