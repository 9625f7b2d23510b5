//! Core simulation types: months, environmental samples, and summaries.

use std::fmt;

/// A calendar month, guaranteed to be in `1..=12`.
///
/// Month numbers arrive from callers (CLI arguments, query strings), so the
/// range check lives in [`Month::new`] and everything past the boundary works
/// with an always-valid value.
///
/// # Examples
///
/// ```
/// use farm_sim::sim::types::Month;
///
/// let june = Month::new(6).unwrap();
/// assert_eq!(june.number(), 6);
/// assert_eq!(june.index(), 5);
/// assert!(Month::new(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month(u8);

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = {
        let mut months = [Month(1); 12];
        let mut n = 1u8;
        while n <= 12 {
            months[(n - 1) as usize] = Month(n);
            n += 1;
        }
        months
    };

    /// Creates a month from its calendar number.
    ///
    /// # Errors
    ///
    /// Returns [`MonthOutOfRange`] unless `number` is in `1..=12`.
    pub fn new(number: u8) -> Result<Self, MonthOutOfRange> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(MonthOutOfRange { number })
        }
    }

    /// Calendar number, `1..=12`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into the per-month arrays, `0..=11`.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for a month number outside `1..=12`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOutOfRange {
    /// The rejected number.
    pub number: u8,
}

impl fmt::Display for MonthOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month {} is out of range, expected 1..=12", self.number)
    }
}

impl std::error::Error for MonthOutOfRange {}

/// The period a [`ProductionSummary`] covers: one month or the whole year.
///
/// Replaces the `month == 0` sentinel of the wire format; [`Self::number`]
/// converts back for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryScope {
    /// Sum over all twelve months.
    Annual,
    /// A single calendar month.
    Month(Month),
}

impl SummaryScope {
    /// Wire representation: 0 for the annual aggregate, 1..=12 otherwise.
    pub fn number(self) -> u8 {
        match self {
            SummaryScope::Annual => 0,
            SummaryScope::Month(m) => m.number(),
        }
    }
}

/// Simulated weather reading for one month.
///
/// Values are not clamped to realistic bounds; precipitation, wind, and
/// luminosity are generated non-negative, temperature may go below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalSample {
    /// Air temperature (°C).
    pub temperature_c: f64,
    /// Relative humidity (%).
    pub relative_humidity_pct: f64,
    /// Precipitation (mm).
    pub precipitation_mm: f64,
    /// Wind speed (km/h).
    pub wind_speed_kmh: f64,
    /// Luminosity (lux).
    pub luminosity_lux: f64,
}

/// Aggregated production figures across all crops for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionSummary {
    /// Period covered by this summary.
    pub scope: SummaryScope,
    /// Total harvest (kg).
    pub quantity_kg: f64,
    /// Total water consumption (liters).
    pub water_liters: f64,
    /// Total production cost (€).
    pub cost_eur: f64,
    /// Total profit (€).
    pub profit_eur: f64,
}

impl fmt::Display for ProductionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = match self.scope {
            SummaryScope::Annual => "year".to_string(),
            SummaryScope::Month(m) => format!("month {m:>2}"),
        };
        write!(
            f,
            "{period} | harvest={:>9.2} kg  water={:>10.2} L  \
             cost={:>9.2} EUR  profit={:>10.2} EUR",
            self.quantity_kg, self.water_liters, self.cost_eur, self.profit_eur,
        )
    }
}
