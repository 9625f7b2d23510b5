//! API response and query types.
//!
//! Field names are camelCase because the browser-side charting code consumes
//! these records directly; the internal snake_case names stay behind the
//! `From` conversions.

use serde::{Deserialize, Serialize};

use crate::sim::crops::Crop;
use crate::sim::types::{EnvironmentalSample, ProductionSummary};

/// One crop with its full year of figures, as consumed by the charts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    /// Display name.
    pub name: &'static str,
    /// Unit sale price (€/kg).
    pub unit_price: f64,
    /// Production cost per month (€).
    pub monthly_cost: [f64; 12],
    /// Harvest per month (kg).
    pub monthly_harvest: [f64; 12],
}

impl From<&Crop> for CropRecord {
    fn from(c: &Crop) -> Self {
        Self {
            name: c.name(),
            unit_price: c.unit_price,
            monthly_cost: c.monthly_cost,
            monthly_harvest: c.monthly_harvest,
        }
    }
}

/// One month's environmental reading.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRecord {
    /// Air temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%).
    pub relative_humidity: f64,
    /// Precipitation (mm).
    pub precipitation: f64,
    /// Wind speed (km/h).
    pub wind_speed: f64,
    /// Luminosity (lux).
    pub luminosity: f64,
}

impl From<EnvironmentalSample> for EnvironmentRecord {
    fn from(s: EnvironmentalSample) -> Self {
        Self {
            temperature: s.temperature_c,
            relative_humidity: s.relative_humidity_pct,
            precipitation: s.precipitation_mm,
            wind_speed: s.wind_speed_kmh,
            luminosity: s.luminosity_lux,
        }
    }
}

/// Aggregated production figures for one period.
///
/// `month` 0 means the annual aggregate, 1-12 a specific month.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    /// Period: 0 for annual, otherwise the month number.
    pub month: u8,
    /// Total harvest (kg).
    pub quantity: f64,
    /// Total water consumption (liters).
    pub water_consumption: f64,
    /// Total production cost (€).
    pub cost: f64,
    /// Total profit (€).
    pub profit: f64,
}

impl From<ProductionSummary> for SummaryRecord {
    fn from(s: ProductionSummary) -> Self {
        Self {
            month: s.scope.number(),
            quantity: s.quantity_kg,
            water_consumption: s.water_liters,
            cost: s.cost_eur,
            profit: s.profit_eur,
        }
    }
}

/// A twelve-value chart series plus its mean threshold line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResponse {
    /// One value per month, January first.
    pub values: [f64; 12],
    /// Arithmetic mean of the values, drawn as the chart threshold.
    pub average: f64,
}

impl SeriesResponse {
    /// Builds a response from a per-month series.
    pub fn new(values: [f64; 12]) -> Self {
        let average = crate::reporting::average(&values);
        Self { values, average }
    }
}

/// Month selection for the per-month endpoints. Defaults to January, like
/// the original dashboard pages.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Calendar month number, 1-12.
    pub month: Option<u8>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
