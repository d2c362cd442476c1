use super::AppError;
use config::{Config, Environment};
use ecotrip_core::preference::TripPreferences;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// effective configuration of the command line application.
///
/// built from three layers, later layers winning: the defaults below, an
/// optional TOML file, and `ECOTRIP_*` environment variables where nested
/// keys are separated by a double underscore (`ECOTRIP_PREFERENCES__CHEAPEST=true`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EcoTripConfig {
    /// directory holding one JSON file per stored collection
    pub data_directory: PathBuf,
    /// skip the route provider and use offline gazetteer distances only
    pub offline: bool,
    /// preferences applied when a plan command sets none of its own
    pub preferences: TripPreferences,
}

impl Default for EcoTripConfig {
    fn default() -> Self {
        EcoTripConfig {
            data_directory: PathBuf::from(".ecotrip"),
            offline: false,
            preferences: TripPreferences::planner_default(),
        }
    }
}

impl EcoTripConfig {
    /// loads the configuration, reading `config_file` when given and the
    /// process environment
    pub fn load(config_file: Option<&str>) -> Result<EcoTripConfig, AppError> {
        EcoTripConfig::build(config_file, environment())
    }

    fn build(config_file: Option<&str>, env: Environment) -> Result<EcoTripConfig, AppError> {
        let defaults =
            Config::try_from(&EcoTripConfig::default()).map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed building default configuration"),
                source: e,
            })?;
        let mut builder = Config::builder().add_source(defaults);
        if let Some(f) = config_file {
            log::info!("reading ecotrip configuration from {f}");
            builder = builder.add_source(config::File::new(f, config::FileFormat::Toml));
        }
        let config = builder
            .add_source(env)
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed reading '{}'", config_file.unwrap_or("configuration")),
                source: e,
            })?;
        config
            .try_deserialize::<EcoTripConfig>()
            .map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed decoding configuration"),
                source: e,
            })
    }

    /// the configuration as TOML, as printed by `ecotrip config`
    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ECOTRIP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
