//! Crop identities, fixed per-crop tables, and catalog generation.

use std::fmt;

use crate::config::GenerationConfig;
use crate::sim::rng::RandomSource;

/// The closed set of crops the farm grows.
///
/// Free-form crop names only exist at the edges of the system; everything
/// internal keys off this enumeration, which makes the seasonal-profile and
/// water-coefficient lookups total functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKind {
    Pomodoro,
    Limone,
    Uva,
    Olivo,
    GranoDuro,
    Nocciola,
    Pesche,
}

impl CropKind {
    /// All crops, in the fixed catalog order.
    pub const ALL: [CropKind; 7] = [
        CropKind::Pomodoro,
        CropKind::Limone,
        CropKind::Uva,
        CropKind::Olivo,
        CropKind::GranoDuro,
        CropKind::Nocciola,
        CropKind::Pesche,
    ];

    /// Display name, as shown on the dashboard.
    pub fn name(self) -> &'static str {
        match self {
            CropKind::Pomodoro => "Pomodoro",
            CropKind::Limone => "Limone",
            CropKind::Uva => "Uva",
            CropKind::Olivo => "Olivo",
            CropKind::GranoDuro => "Grano Duro",
            CropKind::Nocciola => "Nocciola",
            CropKind::Pesche => "Pesche",
        }
    }

    /// Resolves a display name back to its kind.
    ///
    /// This is the only place a free-form crop string enters the system.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCrop`] for any name outside the fixed catalog.
    pub fn from_name(name: &str) -> Result<Self, UnknownCrop> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| UnknownCrop {
                name: name.to_string(),
            })
    }

    /// Unit sale price (€/kg).
    pub fn unit_price(self) -> f64 {
        match self {
            CropKind::Pomodoro => 2.0,
            CropKind::Limone => 1.5,
            CropKind::Uva => 3.0,
            CropKind::Olivo => 5.0,
            CropKind::GranoDuro => 1.2,
            CropKind::Nocciola => 4.0,
            CropKind::Pesche => 2.5,
        }
    }

    /// Estimated water consumption per kg of product (L/kg).
    pub fn water_l_per_kg(self) -> f64 {
        match self {
            CropKind::Pomodoro => 2.0,
            CropKind::Limone => 1.5,
            CropKind::Uva => 2.5,
            CropKind::Olivo => 3.0,
            CropKind::GranoDuro => 1.2,
            CropKind::Nocciola => 3.5,
            CropKind::Pesche => 2.8,
        }
    }

    /// Hand-authored seasonal intensity weights, one per month, in `[0, 1]`.
    ///
    /// The curves approximate Mediterranean growing seasons: summer-peaking
    /// fruit, a late-spring cereal peak, near-year-round citrus and olive.
    pub fn seasonal_profile(self) -> [f64; 12] {
        match self {
            CropKind::Pomodoro => [0.0, 0.0, 0.1, 0.3, 0.6, 1.0, 1.0, 0.9, 0.6, 0.3, 0.1, 0.0],
            CropKind::Limone => [0.2, 0.2, 0.3, 0.5, 0.7, 0.9, 0.9, 0.8, 0.7, 0.6, 0.4, 0.3],
            CropKind::Uva => [0.0, 0.0, 0.1, 0.2, 0.4, 0.7, 1.0, 1.0, 0.8, 0.5, 0.2, 0.0],
            CropKind::Olivo => [0.3, 0.3, 0.4, 0.5, 0.6, 0.8, 0.9, 0.8, 0.6, 0.5, 0.4, 0.3],
            CropKind::GranoDuro => [0.0, 0.1, 0.3, 0.6, 0.9, 1.0, 0.8, 0.5, 0.2, 0.1, 0.0, 0.0],
            CropKind::Nocciola => [0.1, 0.1, 0.2, 0.4, 0.5, 0.7, 0.8, 0.8, 0.6, 0.4, 0.2, 0.1],
            CropKind::Pesche => [0.0, 0.0, 0.2, 0.5, 0.8, 1.0, 1.0, 0.9, 0.6, 0.3, 0.1, 0.0],
        }
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a crop name outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCrop {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for UnknownCrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown crop \"{}\"", self.name)
    }
}

impl std::error::Error for UnknownCrop {}

/// A simulated crop: identity, unit price, and one year of figures.
///
/// Both arrays are indexed by [`Month::index`](crate::sim::types::Month);
/// entries are always non-negative. Instances are created once by the
/// simulator and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    /// Crop identity.
    pub kind: CropKind,
    /// Unit sale price (€/kg).
    pub unit_price: f64,
    /// Production cost per month (€).
    pub monthly_cost: [f64; 12],
    /// Harvest per month (kg).
    pub monthly_harvest: [f64; 12],
}

impl Crop {
    /// Display name of the crop.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Total harvest over the year (kg).
    pub fn annual_quantity(&self) -> f64 {
        self.monthly_harvest.iter().sum()
    }

    /// Total production cost over the year (€).
    pub fn annual_cost(&self) -> f64 {
        self.monthly_cost.iter().sum()
    }

    /// Annual revenue: total harvest times unit price (€).
    pub fn annual_revenue(&self) -> f64 {
        self.annual_quantity() * self.unit_price
    }

    /// Annual profit: revenue minus cost (€).
    pub fn annual_profit(&self) -> f64 {
        self.annual_revenue() - self.annual_cost()
    }

    /// Average margin per kg produced (€/kg); 0 when nothing was harvested.
    pub fn margin_per_unit(&self) -> f64 {
        let q = self.annual_quantity();
        if q > 0.0 { self.annual_profit() / q } else { 0.0 }
    }
}

/// Generates the full crop catalog from the shared random stream.
///
/// Per crop and month `m` with seasonal weight `w`:
/// a fresh base draw `uniform(base_min, base_max)` scaled by `w` gives the
/// harvest, and the cost is `cost_fixed` plus a uniformly drawn share of the
/// harvest. The base draw is per crop-month, not per crop, so harvests vary
/// across the season beyond the profile shape.
pub fn generate_crops(rng: &mut dyn RandomSource, cfg: &GenerationConfig) -> Vec<Crop> {
    CropKind::ALL
        .into_iter()
        .map(|kind| {
            let profile = kind.seasonal_profile();
            let mut harvest = [0.0; 12];
            let mut cost = [0.0; 12];
            for m in 0..12 {
                let base = rng.uniform(cfg.base_min, cfg.base_max);
                harvest[m] = base * profile[m];
                cost[m] =
                    cfg.cost_fixed + harvest[m] * rng.uniform(cfg.cost_share_min, cfg.cost_share_max);
            }
            Crop {
                kind,
                unit_price: kind.unit_price(),
                monthly_cost: cost,
                monthly_harvest: harvest,
            }
        })
        .collect()
}
