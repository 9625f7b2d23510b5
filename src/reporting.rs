//! Presentation-facing aggregation over the simulation engine.

use std::sync::Arc;

use crate::sim::engine::{self, Simulator};

/// Fixed chart axis labels, January through December.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Read-only view the dashboard pages query for their charts.
///
/// Thin wrapper over a shared [`Simulator`]; the series methods fold the
/// cached crop catalog with the same per-month helpers the production
/// summaries use, so chart figures and summary tables always agree.
#[derive(Clone)]
pub struct Dashboard {
    sim: Arc<Simulator>,
}

impl Dashboard {
    /// Creates a dashboard view over a shared simulator.
    pub fn new(sim: Arc<Simulator>) -> Self {
        Self { sim }
    }

    /// The underlying simulator.
    pub fn sim(&self) -> &Simulator {
        &self.sim
    }

    /// Month labels for the chart x-axis.
    pub fn month_names(&self) -> [&'static str; 12] {
        MONTH_LABELS
    }

    /// Total harvest per month across all crops (kg).
    pub fn harvest_series(&self) -> [f64; 12] {
        let crops = self.sim.crops();
        std::array::from_fn(|idx| engine::month_harvest(crops, idx))
    }

    /// Total production cost per month across all crops (€).
    pub fn cost_series(&self) -> [f64; 12] {
        let crops = self.sim.crops();
        std::array::from_fn(|idx| engine::month_cost(crops, idx))
    }

    /// Total profit per month across all crops (€).
    pub fn profit_series(&self) -> [f64; 12] {
        let crops = self.sim.crops();
        std::array::from_fn(|idx| engine::month_profit(crops, idx))
    }
}

/// Arithmetic mean of a slice; 0 for empty input.
///
/// The dashboard draws this as the threshold line on its bar charts.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
