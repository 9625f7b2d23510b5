//! Farm dashboard simulator entry point — CLI wiring and report printing.

use std::path::Path;
use std::process;
use std::sync::Arc;

use farm_sim::config::ScenarioConfig;
use farm_sim::io::export::export_csv;
use farm_sim::reporting::{Dashboard, average};
use farm_sim::sim::engine::Simulator;
use farm_sim::sim::types::Month;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("farm-sim — Synthetic farm dashboard simulator");
    eprintln!();
    eprintln!("Usage: farm-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, arid)");
    eprintln!("  --seed <u64>        Seed the random stream for a reproducible run");
    eprintln!("  --export <path>     Export production summaries to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve             Start REST API server after the report");
        eprintln!("  --port <u16>        API server port (default: 3000)");
    }
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Prints the per-crop annual balance, monthly summaries, and series means.
fn print_report(dashboard: &Dashboard) {
    let sim = dashboard.sim();

    println!("--- Crop catalog ---");
    for crop in sim.crops() {
        println!(
            "{:<11} | price={:>4.2} EUR/kg  harvest={:>8.2} kg  cost={:>8.2} EUR  \
             profit={:>9.2} EUR  margin={:>5.2} EUR/kg",
            crop.name(),
            crop.unit_price,
            crop.annual_quantity(),
            crop.annual_cost(),
            crop.annual_profit(),
            crop.margin_per_unit(),
        );
    }

    println!("\n--- Production summaries ---");
    for month in Month::ALL {
        println!("{}", sim.production_summary(month));
    }
    println!("{}", sim.annual_production_summary());

    println!("\n--- Series means ---");
    println!("harvest: {:>9.2} kg", average(&dashboard.harvest_series()));
    println!("water:   {:>9.2} L", average(sim.monthly_water_totals()));
    println!("cost:    {:>9.2} EUR", average(&dashboard.cost_series()));
    println!("profit:  {:>9.2} EUR", average(&dashboard.profit_series()));
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply seed override
    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = Some(seed);
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let sim = Arc::new(Simulator::new(&scenario));
    let dashboard = Dashboard::new(Arc::clone(&sim));

    print_report(&dashboard);

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&sim, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Summaries written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;

        let state = Arc::new(farm_sim::api::AppState { dashboard });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(farm_sim::api::serve(state, addr));
    }
}
