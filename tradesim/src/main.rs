use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tradesim_core::{events, simulate_scenario, Objective, ScenarioOverrides, TransportMode};

mod loader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the world data directory
    #[arg(long, default_value = "data")]
    data_path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full scenario simulation and print the result as JSON
    Simulate {
        source: String,
        destination: String,

        /// Optimization objective (cost, time, risk); all three if omitted
        #[arg(long)]
        objective: Option<String>,

        /// Preferred transport mode (land, sea, air); auto-selected if omitted
        #[arg(long)]
        mode: Option<String>,

        /// Path to a JSON cargo manifest array
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Iterated-game horizon override
        #[arg(long)]
        rounds: Option<u32>,

        /// Discount-rate override
        #[arg(long)]
        discount: Option<f64>,

        /// Exogenous-shock override
        #[arg(long)]
        shock: Option<f64>,

        /// Aggression-bias override
        #[arg(long)]
        aggression: Option<f64>,
    },

    /// Sever both routes between two countries and set wartime factors
    DeclareWar { a: String, b: String },

    /// Raise route cost by a percentage
    ImposeTariff { a: String, b: String, percent: f64 },

    /// Ease a route under a new peace treaty, restoring it if severed
    PeaceTreaty { a: String, b: String, percent: f64 },

    /// Switch a route's transport mode, recomputing metrics from base
    SetMode { a: String, b: String, mode: String },

    /// Storm on a sea lane (direct sea routes only)
    SeaStorm { a: String, b: String, severity: f64 },
}

fn parse_objective(name: &str) -> Result<Objective> {
    match name.to_ascii_lowercase().as_str() {
        "cost" => Ok(Objective::Cost),
        "time" => Ok(Objective::Time),
        "risk" => Ok(Objective::Risk),
        other => bail!("unknown objective '{other}' (expected cost, time or risk)"),
    }
}

fn parse_mode(name: &str) -> Result<TransportMode> {
    TransportMode::parse(name)
        .with_context(|| format!("unknown mode '{name}' (expected land, sea or air)"))
}

fn save_world(dir: &std::path::Path, store: &tradesim_core::WorldStore) -> Result<()> {
    let routes = serde_json::to_string_pretty(&store.routes)?;
    std::fs::write(dir.join("routes.json"), routes)?;
    let factors = serde_json::to_string_pretty(&store.factors)?;
    std::fs::write(dir.join("factors.json"), factors)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let mut store = loader::load_world(&args.data_path)?;

    match args.command {
        Command::Simulate {
            source,
            destination,
            objective,
            mode,
            manifest,
            rounds,
            discount,
            shock,
            aggression,
        } => {
            let objectives = match objective.as_deref() {
                Some(name) => vec![parse_objective(name)?],
                None => Objective::ALL.to_vec(),
            };
            let mode = mode.as_deref().map(parse_mode).transpose()?;
            let manifest = manifest
                .as_deref()
                .map(loader::load_manifest)
                .transpose()?;
            let overrides = ScenarioOverrides {
                rounds,
                discount,
                shock,
                aggression,
            };

            let mut results = std::collections::BTreeMap::new();
            for objective in objectives {
                if let Some(result) = simulate_scenario(
                    &store,
                    &source,
                    &destination,
                    Some(&overrides),
                    mode,
                    manifest.as_deref(),
                    objective,
                ) {
                    results.insert(objective.as_str(), result);
                }
            }
            if results.is_empty() {
                bail!("no viable route from {source} to {destination}");
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }

        Command::DeclareWar { a, b } => {
            let changed = events::declare_war(&mut store, &a, &b);
            save_world(&args.data_path, &store)?;
            log::info!("war declared ({} routes severed: {})", a, changed);
        }

        Command::ImposeTariff { a, b, percent } => {
            if !events::impose_tariff(&mut store, &a, &b, percent) {
                bail!("no route or path from {a} to {b}");
            }
            save_world(&args.data_path, &store)?;
        }

        Command::PeaceTreaty { a, b, percent } => {
            let defaults = loader::load_default_routes(&args.data_path)?;
            if !events::broker_peace_treaty(&mut store, &a, &b, percent, &defaults) {
                bail!("no route from {a} to {b} and no default to restore");
            }
            save_world(&args.data_path, &store)?;
        }

        Command::SetMode { a, b, mode } => {
            let mode = parse_mode(&mode)?;
            if !events::set_route_mode(&mut store, &a, &b, mode) {
                bail!("no route or path from {a} to {b}");
            }
            save_world(&args.data_path, &store)?;
        }

        Command::SeaStorm { a, b, severity } => {
            if !events::trigger_sea_storm(&mut store, &a, &b, severity) {
                bail!("no direct sea route from {a} to {b}");
            }
            save_world(&args.data_path, &store)?;
        }
    }

    Ok(())
}
