use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, DEFAULT_CARRIER_LOCALE, ENV_PREFIX, VCF_EXTENSION};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub card: CardConfig,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    /// Version tag written to every generated record ("3.0" or "4.0").
    pub version: String,
    /// Family-first display names.
    pub eastern_order: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub check_dns: bool,
    pub locale: String,
    /// Carrier names treated as mobile operators when adding phones.
    #[serde(default)]
    pub mobile_carriers: Vec<String>,
    /// E.164 prefix (with leading `+`) to carrier name.
    #[serde(default)]
    pub carrier_prefixes: HashMap<String, String>,
}

impl ValidationConfig {
    /// ## Summary
    /// Returns the configured mobile carriers, or `None` when the list is empty
    /// so that phones keep their base type.
    #[must_use]
    pub fn mobile_carriers(&self) -> Option<&[String]> {
        if self.mobile_carriers.is_empty() {
            None
        } else {
            Some(&self.mobile_carriers)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and environment
    /// variables (`CARDSMITH_CARD__VERSION`, ...). Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_STEM).required(false),
        };

        Ok(Config::builder()
            .set_default("card.version", "4.0")?
            .set_default("card.eastern_order", false)?
            .set_default("validation.check_dns", true)?
            .set_default("validation.locale", DEFAULT_CARRIER_LOCALE)?
            .set_default("validation.mobile_carriers", Vec::<String>::new())?
            .set_default("output.directory", ".")?
            .set_default("output.extension", VCF_EXTENSION)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("validation.mobile_carriers")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and an optional
/// explicit TOML file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load_from(file)
}
