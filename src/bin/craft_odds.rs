//! craft-odds: command-line front end for the odds engine.
//!
//! Usage:
//!   craft-odds odds -t "Maximum Life" -t "Fire Resistance" --base body_armour
//!   craft-odds simulate -t "Maximum Life" --trials 100000 --seed 42
//!   craft-odds efficiency -t "Attack Speed" -t "Critical Strike Chance" --base weapon
//!   craft-odds compare -t "Maximum Life" --budget 5000 --prior guaranteed_seed=0.8
//!   craft-odds catalog
//!
//! Set RUST_LOG (e.g. `RUST_LOG=craftodds=debug`) for diagnostics on stderr.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use craftodds::{Catalog, Method, OddsEngine, Query, SimConfig};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "craft-odds")]
#[command(about = "Probability and cost estimates for weighted item modification", long_about = None)]
struct Cli {
    /// Attribute catalog JSON file (uses the built-in catalog if not specified)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Goal {
    /// Target attribute name (repeat for several)
    #[arg(short, long = "target", required = true)]
    targets: Vec<String>,

    /// Item base type
    #[arg(short, long = "base", default_value = "body_armour")]
    base_type: String,

    /// Source level of the item
    #[arg(short, long, default_value_t = 86)]
    level: u32,

    /// Modification method
    #[arg(short, long, default_value = "broad_reroll")]
    method: Method,

    /// Skip targets that cannot be resolved instead of failing
    #[arg(long)]
    skip_unresolved: bool,
}

impl Goal {
    fn query(&self) -> Query {
        let query = Query::new(&self.targets, &self.base_type, self.level, self.method);
        if self.skip_unresolved {
            query.skip_unresolved()
        } else {
            query
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analytic probability, cost and confidence for one goal
    Odds {
        #[command(flatten)]
        goal: Goal,
    },

    /// Monte Carlo check of the analytic numbers
    Simulate {
        #[command(flatten)]
        goal: Goal,

        /// Number of trials
        #[arg(long, default_value_t = 10_000)]
        trials: u32,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many seconds
        #[arg(long)]
        time_budget: Option<f64>,

        /// Draw each attribute independently instead of the combined chance
        #[arg(long)]
        independent: bool,

        /// Run on one thread
        #[arg(long)]
        sequential: bool,
    },

    /// Score every attribute and 2/3-attribute combination
    Efficiency {
        #[command(flatten)]
        goal: Goal,
    },

    /// Rank all methods against a budget
    Compare {
        #[command(flatten)]
        goal: Goal,

        /// Budget in cost units
        #[arg(long)]
        budget: f64,

        /// Observed success rate for a method, as METHOD=RATE (repeatable)
        #[arg(long = "prior", value_parser = parse_prior)]
        priors: Vec<(Method, f64)>,
    },

    /// List the attributes in the catalog
    Catalog,
}

fn parse_prior(s: &str) -> std::result::Result<(Method, f64), String> {
    let (method, rate) = s
        .split_once('=')
        .ok_or_else(|| format!("expected METHOD=RATE, got '{s}'"))?;
    let rate: f64 = rate
        .trim()
        .parse()
        .map_err(|e| format!("invalid rate '{rate}': {e}"))?;
    Ok((method.parse()?, rate))
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("Invalid catalog: {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let engine = OddsEngine::new(&catalog);

    match cli.command {
        Commands::Odds { goal } => {
            let result = engine.calculate_probability(&goal.query())?;
            print_report(cli.json, result.to_json(), result.to_text());
        }

        Commands::Simulate {
            goal,
            trials,
            seed,
            time_budget,
            independent,
            sequential,
        } => {
            if trials == 0 {
                bail!("--trials must be at least 1");
            }
            let mut config = SimConfig::default().with_trials(trials);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(secs) = time_budget {
                let budget = Duration::try_from_secs_f64(secs)
                    .with_context(|| format!("Invalid time budget: {secs}"))?;
                config = config.with_time_budget(budget);
            }
            if sequential {
                config = config.sequential();
            }

            let result = engine.calculate_probability(&goal.query())?;
            let sim = if independent {
                engine.simulate_independent(&result, &config)?
            } else {
                engine.simulate(&result, &config)?
            };

            if cli.json {
                println!("{}", sim.to_json());
            } else {
                print!("{}", result.to_text());
                print!("{}", sim.to_text());
                if let Some(deviation) = sim.deviation_from(result.expected_attempts) {
                    println!("  Deviation from expected: {:+.1}%", deviation * 100.0);
                }
            }
        }

        Commands::Efficiency { goal } => {
            let report = engine.analyze_efficiency_with_method(
                &goal.targets,
                &goal.base_type,
                goal.level,
                goal.method,
            )?;
            print_report(cli.json, report.to_json(), report.to_text());
        }

        Commands::Compare {
            goal,
            budget,
            priors,
        } => {
            let priors: HashMap<Method, f64> = priors.into_iter().collect();
            let ranked = engine.compare_methods(
                &goal.targets,
                &goal.base_type,
                goal.level,
                budget,
                &priors,
            )?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                println!("{:<18} {:>12} {:>12} {:>12} {:>7}  budget", "method", "probability", "attempts", "cost", "score");
                for a in &ranked {
                    println!(
                        "{:<18} {:>12.6} {:>12.1} {:>12.1} {:>7.3}  {}",
                        a.method.id(),
                        a.probability,
                        a.expected_attempts,
                        a.expected_cost,
                        a.score,
                        if a.within_budget { "✓" } else { "✗" }
                    );
                }
            }
        }

        Commands::Catalog => {
            if cli.json {
                println!("{}", catalog.to_json()?);
            } else {
                for name in catalog.names() {
                    if let Some(def) = catalog.get(name) {
                        println!(
                            "{:<28} {:<9} {} tiers{}",
                            def.name,
                            def.category.name(),
                            def.tiers.len(),
                            if def.seedable { ", seedable" } else { "" }
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_report(json: bool, as_json: String, as_text: String) {
    if json {
        println!("{as_json}");
    } else {
        print!("{as_text}");
    }
}
