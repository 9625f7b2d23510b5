//! The memoizing simulation engine.
//!
//! [`Simulator`] owns every process-lifetime cache: the crop catalog, the
//! twelve environmental slots, the per-month and annual production summaries,
//! and the water totals. Each cache is a single-assignment [`OnceLock`] cell,
//! so concurrent first readers race to compute exactly one value and nobody
//! can observe a partially built entry. All random draws go through one
//! mutex-guarded stream.

use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::config::ScenarioConfig;
use crate::sim::crops::{self, Crop};
use crate::sim::environment;
use crate::sim::rng::{RandomSource, StdSource};
use crate::sim::types::{EnvironmentalSample, Month, ProductionSummary, SummaryScope};

/// Lazily populated simulation state for one process lifetime.
///
/// Cheap to share behind an `Arc`; every accessor takes `&self`.
pub struct Simulator {
    config: ScenarioConfig,
    rng: Mutex<Box<dyn RandomSource>>,
    crops: OnceLock<Vec<Crop>>,
    environment: [OnceLock<EnvironmentalSample>; 12],
    monthly: [OnceLock<ProductionSummary>; 12],
    annual: OnceLock<ProductionSummary>,
    water: OnceLock<[f64; 12]>,
}

impl Simulator {
    /// Creates a simulator for the given scenario.
    ///
    /// The random stream is seeded from `simulation.seed` when set, otherwise
    /// from OS entropy.
    pub fn new(config: &ScenarioConfig) -> Self {
        let source: Box<dyn RandomSource> = match config.simulation.seed {
            Some(seed) => Box::new(StdSource::from_seed(seed)),
            None => Box::new(StdSource::from_entropy()),
        };
        Self::with_source(config, source)
    }

    /// Creates a simulator drawing from the supplied random source.
    pub fn with_source(config: &ScenarioConfig, source: Box<dyn RandomSource>) -> Self {
        Self {
            config: config.clone(),
            rng: Mutex::new(source),
            crops: OnceLock::new(),
            environment: std::array::from_fn(|_| OnceLock::new()),
            monthly: std::array::from_fn(|_| OnceLock::new()),
            annual: OnceLock::new(),
            water: OnceLock::new(),
        }
    }

    /// Scenario this simulator was built from.
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    // A poisoned lock only means another thread panicked mid-draw; the
    // generator state itself is always valid, so recover it.
    fn rng(&self) -> MutexGuard<'_, Box<dyn RandomSource>> {
        match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The fixed crop catalog, generated on first access.
    ///
    /// Every call returns the same slice, so callers observe one identity for
    /// the life of the process.
    pub fn crops(&self) -> &[Crop] {
        self.crops.get_or_init(|| {
            let mut rng = self.rng();
            crops::generate_crops(rng.as_mut(), &self.config.generation)
        })
    }

    /// Environmental reading for one month, drawn once and cached.
    ///
    /// Each month is an independent cache slot; repeat calls return the
    /// previously generated sample bit for bit.
    pub fn environmental_sample(&self, month: Month) -> EnvironmentalSample {
        *self.environment[month.index()].get_or_init(|| {
            let mut rng = self.rng();
            environment::draw_sample(rng.as_mut(), &self.config.environment)
        })
    }

    /// Total water usage per month across all crops (liters), computed once.
    pub fn monthly_water_totals(&self) -> &[f64; 12] {
        self.water.get_or_init(|| {
            let crops = self.crops();
            std::array::from_fn(|idx| month_water(crops, idx))
        })
    }

    /// Aggregated production figures for one month, cached per month.
    pub fn production_summary(&self, month: Month) -> ProductionSummary {
        *self.monthly[month.index()].get_or_init(|| {
            let crops = self.crops();
            let idx = month.index();
            ProductionSummary {
                scope: SummaryScope::Month(month),
                quantity_kg: month_harvest(crops, idx),
                water_liters: month_water(crops, idx),
                cost_eur: month_cost(crops, idx),
                profit_eur: month_profit(crops, idx),
            }
        })
    }

    /// Annual aggregate: the element-wise sum of all twelve monthly
    /// summaries. Computing it materializes any monthly cache still empty.
    pub fn annual_production_summary(&self) -> ProductionSummary {
        *self.annual.get_or_init(|| {
            let mut total = ProductionSummary {
                scope: SummaryScope::Annual,
                quantity_kg: 0.0,
                water_liters: 0.0,
                cost_eur: 0.0,
                profit_eur: 0.0,
            };
            for month in Month::ALL {
                let s = self.production_summary(month);
                total.quantity_kg += s.quantity_kg;
                total.water_liters += s.water_liters;
                total.cost_eur += s.cost_eur;
                total.profit_eur += s.profit_eur;
            }
            total
        })
    }
}

// Per-month folds over the crop catalog. Both the production summaries and
// the reporting series project from these, so the two profit outputs cannot
// drift apart.

pub(crate) fn month_harvest(crops: &[Crop], idx: usize) -> f64 {
    crops.iter().map(|c| c.monthly_harvest[idx]).sum()
}

pub(crate) fn month_cost(crops: &[Crop], idx: usize) -> f64 {
    crops.iter().map(|c| c.monthly_cost[idx]).sum()
}

pub(crate) fn month_profit(crops: &[Crop], idx: usize) -> f64 {
    crops
        .iter()
        .map(|c| c.monthly_harvest[idx] * c.unit_price - c.monthly_cost[idx])
        .sum()
}

pub(crate) fn month_water(crops: &[Crop], idx: usize) -> f64 {
    crops
        .iter()
        .map(|c| c.monthly_harvest[idx] * c.kind.water_l_per_kg())
        .sum()
}
