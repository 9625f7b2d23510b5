//! Environmental sample generation.

use crate::config::EnvironmentConfig;
use crate::sim::rng::RandomSource;
use crate::sim::types::EnvironmentalSample;

/// Draws one month's environmental reading from the shared random stream.
///
/// Each field is an independent Gaussian draw; precipitation, wind, and
/// luminosity are folded to their absolute value so they stay non-negative.
/// Temperature and humidity are left unclamped.
pub fn draw_sample(rng: &mut dyn RandomSource, cfg: &EnvironmentConfig) -> EnvironmentalSample {
    EnvironmentalSample {
        temperature_c: rng.gaussian(cfg.temperature_mean, cfg.temperature_std),
        relative_humidity_pct: rng.gaussian(cfg.humidity_mean, cfg.humidity_std),
        precipitation_mm: rng.gaussian(cfg.precipitation_mean, cfg.precipitation_std).abs(),
        wind_speed_kmh: rng.gaussian(cfg.wind_mean, cfg.wind_std).abs(),
        luminosity_lux: rng.gaussian(cfg.luminosity_mean, cfg.luminosity_std).abs(),
    }
}
