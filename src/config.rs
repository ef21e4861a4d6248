use crate::models::DimensionWeights;
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration for an embedding service
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-dimension weight table. Every dimension defaults to 1.0 (equal
/// weighting); override individual entries in `config/default.toml` or via
/// `SANGAM_SCORING__WEIGHTS__<DIMENSION>`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub age: f64,
    #[serde(default = "default_weight")]
    pub height: f64,
    #[serde(default = "default_weight")]
    pub location: f64,
    #[serde(default = "default_weight")]
    pub religion: f64,
    #[serde(default = "default_weight")]
    pub community: f64,
    #[serde(default = "default_weight")]
    pub sub_community: f64,
    #[serde(default = "default_weight")]
    pub gotra: f64,
    #[serde(default = "default_weight")]
    pub diet: f64,
    #[serde(default = "default_weight")]
    pub marital_status: f64,
    #[serde(default = "default_weight")]
    pub education: f64,
    #[serde(default = "default_weight")]
    pub income: f64,
    #[serde(default = "default_weight")]
    pub smoking: f64,
    #[serde(default = "default_weight")]
    pub drinking: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_weight(),
            height: default_weight(),
            location: default_weight(),
            religion: default_weight(),
            community: default_weight(),
            sub_community: default_weight(),
            gotra: default_weight(),
            diet: default_weight(),
            marital_status: default_weight(),
            education: default_weight(),
            income: default_weight(),
            smoking: default_weight(),
            drinking: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

impl From<WeightsConfig> for DimensionWeights {
    fn from(w: WeightsConfig) -> Self {
        DimensionWeights {
            age: w.age,
            height: w.height,
            location: w.location,
            religion: w.religion,
            community: w.community,
            sub_community: w.sub_community,
            gotra: w.gotra,
            diet: w.diet,
            marital_status: w.marital_status,
            education: w.education,
            income: w.income,
            smoking: w.smoking,
            drinking: w.drinking,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SANGAM_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SANGAM_SCORING__WEIGHTS__RELIGION -> scoring.weights.religion
            .add_source(
                Environment::with_prefix("SANGAM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SANGAM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
