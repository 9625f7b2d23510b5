//! Golden-value tests with the deterministic midpoint source: every draw
//! collapses to a closed-form function of the fixed crop tables.

use farm_sim::config::ScenarioConfig;
use farm_sim::sim::crops::CropKind;
use farm_sim::sim::engine::Simulator;
use farm_sim::sim::rng::MidpointSource;
use farm_sim::sim::types::Month;

fn midpoint_sim() -> Simulator {
    Simulator::with_source(&ScenarioConfig::baseline(), Box::new(MidpointSource))
}

#[test]
fn pomodoro_follows_its_seasonal_profile() {
    // uniform(20, 100) -> base 60, uniform(0.5, 1.0) -> cost share 0.75.
    let sim = midpoint_sim();
    let pomodoro = &sim.crops()[0];
    assert_eq!(pomodoro.kind, CropKind::Pomodoro);

    // June (weight 1.0): full base harvest.
    assert_eq!(pomodoro.monthly_harvest[5], 60.0);
    assert_eq!(pomodoro.monthly_cost[5], 5.0 + 60.0 * 0.75);

    // January (weight 0.0): nothing grows, only the fixed cost remains.
    assert_eq!(pomodoro.monthly_harvest[0], 0.0);
    assert_eq!(pomodoro.monthly_cost[0], 5.0);
}

#[test]
fn every_crop_harvest_is_base_times_weight() {
    let sim = midpoint_sim();
    for crop in sim.crops() {
        let profile = crop.kind.seasonal_profile();
        for m in 0..12 {
            assert_eq!(crop.monthly_harvest[m], 60.0 * profile[m]);
            assert_eq!(crop.monthly_cost[m], 5.0 + crop.monthly_harvest[m] * 0.75);
        }
    }
}

#[test]
fn olivo_water_contribution_uses_its_coefficient() {
    let sim = midpoint_sim();
    let olivo = &sim.crops()[3];
    assert_eq!(olivo.kind, CropKind::Olivo);
    assert_eq!(olivo.kind.water_l_per_kg(), 3.0);

    // January harvest is 60 * 0.3 = 18 kg, so 54 liters of water.
    assert_eq!(olivo.monthly_harvest[0], 18.0);
    let january_total = sim.monthly_water_totals()[0];
    let others: f64 = sim
        .crops()
        .iter()
        .filter(|c| c.kind != CropKind::Olivo)
        .map(|c| c.monthly_harvest[0] * c.kind.water_l_per_kg())
        .sum();
    assert!((january_total - others - 54.0).abs() < 1e-9);
}

#[test]
fn water_coefficient_table_matches_reference() {
    let expected = [
        (CropKind::Pomodoro, 2.0),
        (CropKind::Limone, 1.5),
        (CropKind::Uva, 2.5),
        (CropKind::Olivo, 3.0),
        (CropKind::GranoDuro, 1.2),
        (CropKind::Nocciola, 3.5),
        (CropKind::Pesche, 2.8),
    ];
    for (kind, coeff) in expected {
        assert_eq!(kind.water_l_per_kg(), coeff, "{kind}");
    }
}

#[test]
fn unit_price_table_matches_reference() {
    let expected = [2.0, 1.5, 3.0, 5.0, 1.2, 4.0, 2.5];
    for (kind, price) in CropKind::ALL.into_iter().zip(expected) {
        assert_eq!(kind.unit_price(), price, "{kind}");
    }
}

#[test]
fn june_summary_is_closed_form() {
    let sim = midpoint_sim();
    let june = sim.production_summary(Month::new(6).unwrap());

    // June weights: 1.0, 0.9, 0.7, 0.8, 1.0, 0.7, 1.0 — sum 6.1.
    let weight_sum: f64 = CropKind::ALL
        .into_iter()
        .map(|k| k.seasonal_profile()[5])
        .sum();
    assert!((june.quantity_kg - 60.0 * weight_sum).abs() < 1e-9);

    // Cost: seven fixed floors plus 75% of each crop's harvest.
    assert!((june.cost_eur - (7.0 * 5.0 + 60.0 * weight_sum * 0.75)).abs() < 1e-9);

    let revenue: f64 = CropKind::ALL
        .into_iter()
        .map(|k| 60.0 * k.seasonal_profile()[5] * k.unit_price())
        .sum();
    assert!((june.profit_eur - (revenue - june.cost_eur)).abs() < 1e-9);
}

#[test]
fn environmental_sample_is_the_configured_means() {
    let sim = midpoint_sim();
    let sample = sim.environmental_sample(Month::new(3).unwrap());
    assert_eq!(sample.temperature_c, 18.0);
    assert_eq!(sample.relative_humidity_pct, 55.0);
    assert_eq!(sample.precipitation_mm, 80.0);
    assert_eq!(sample.wind_speed_kmh, 3.0);
    assert_eq!(sample.luminosity_lux, 20000.0);
}
