//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields default to the baseline scenario, which reproduces the original
/// dashboard's hardcoded generation constants. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Global simulation parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Crop harvest/cost generation parameters.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Environmental sample distribution parameters.
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// Global simulation parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Random seed. Unset means a fresh entropy seed per process, so runs
    /// are not reproducible.
    pub seed: Option<u64>,
}

/// Crop harvest/cost generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Lower bound of the per-crop-month base harvest draw (kg).
    pub base_min: f64,
    /// Upper bound of the per-crop-month base harvest draw (kg).
    pub base_max: f64,
    /// Fixed monthly cost floor per crop (€).
    pub cost_fixed: f64,
    /// Lower bound of the cost-per-harvested-kg share draw.
    pub cost_share_min: f64,
    /// Upper bound of the cost-per-harvested-kg share draw.
    pub cost_share_max: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_min: 20.0,
            base_max: 100.0,
            cost_fixed: 5.0,
            cost_share_min: 0.5,
            cost_share_max: 1.0,
        }
    }
}

/// Environmental sample distribution parameters (Gaussian mean/std pairs).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Mean air temperature (°C).
    pub temperature_mean: f64,
    /// Temperature standard deviation (°C).
    pub temperature_std: f64,
    /// Mean relative humidity (%).
    pub humidity_mean: f64,
    /// Humidity standard deviation (%).
    pub humidity_std: f64,
    /// Mean precipitation (mm).
    pub precipitation_mean: f64,
    /// Precipitation standard deviation (mm).
    pub precipitation_std: f64,
    /// Mean wind speed (km/h).
    pub wind_mean: f64,
    /// Wind speed standard deviation (km/h).
    pub wind_std: f64,
    /// Mean luminosity (lux).
    pub luminosity_mean: f64,
    /// Luminosity standard deviation (lux).
    pub luminosity_std: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            temperature_mean: 18.0,
            temperature_std: 7.0,
            humidity_mean: 55.0,
            humidity_std: 15.0,
            precipitation_mean: 80.0,
            precipitation_std: 40.0,
            wind_mean: 3.0,
            wind_std: 1.0,
            luminosity_mean: 20000.0,
            luminosity_std: 8000.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generation.base_min"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ScenarioConfig {
    /// Returns the baseline scenario, matching the original dashboard's
    /// hardcoded generation constants.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            generation: GenerationConfig::default(),
            environment: EnvironmentConfig::default(),
        }
    }

    /// Returns the arid preset: hotter, drier, brighter readings with the
    /// same crop generation parameters.
    pub fn arid() -> Self {
        Self {
            environment: EnvironmentConfig {
                temperature_mean: 24.0,
                temperature_std: 6.0,
                humidity_mean: 38.0,
                humidity_std: 10.0,
                precipitation_mean: 35.0,
                precipitation_std: 25.0,
                wind_mean: 4.0,
                wind_std: 1.5,
                luminosity_mean: 24000.0,
                luminosity_std: 7000.0,
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "arid"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "arid" => Ok(Self::arid()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let g = &self.generation;

        if g.base_min < 0.0 {
            errors.push(ConfigError {
                field: "generation.base_min".into(),
                message: "must be >= 0".into(),
            });
        }
        if g.base_min > g.base_max {
            errors.push(ConfigError {
                field: "generation.base_min".into(),
                message: "must be <= generation.base_max".into(),
            });
        }
        if g.cost_fixed < 0.0 {
            errors.push(ConfigError {
                field: "generation.cost_fixed".into(),
                message: "must be >= 0".into(),
            });
        }
        if g.cost_share_min < 0.0 {
            errors.push(ConfigError {
                field: "generation.cost_share_min".into(),
                message: "must be >= 0".into(),
            });
        }
        if g.cost_share_min > g.cost_share_max {
            errors.push(ConfigError {
                field: "generation.cost_share_min".into(),
                message: "must be <= generation.cost_share_max".into(),
            });
        }

        let e = &self.environment;
        for (field, std) in [
            ("environment.temperature_std", e.temperature_std),
            ("environment.humidity_std", e.humidity_std),
            ("environment.precipitation_std", e.precipitation_std),
            ("environment.wind_std", e.wind_std),
            ("environment.luminosity_std", e.luminosity_std),
        ] {
            if std < 0.0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be >= 0".into(),
                });
            }
        }

        errors
    }
}
