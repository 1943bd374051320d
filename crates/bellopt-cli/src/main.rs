//! Bellopt command-line interface.
//!
//! Two entry points into the CHSH violation search:
//!
//! - `bellopt optimize` — one see-saw run at a fixed detector efficiency;
//! - `bellopt sweep`    — descending efficiency sweep with many parallel
//!   restarts per candidate, reporting the lowest efficiency at which a
//!   violation of the classical bound was found.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use bellopt_core::{CHOP_THRESHOLD, DetectorModel, LOCAL_BOUND, Op4};
use bellopt_search::{SweepConfig, find_minimal_efficiency};
use bellopt_seesaw::{SeesawConfig, SeesawOptimizer};

/// Bellopt - CHSH violation search under imperfect detectors
#[derive(Parser)]
#[command(name = "bellopt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// The state the detector registers when it fails to fire.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ErrorStateKind {
    /// Both qubits relax to |00⟩⟨00|.
    Ground,
    /// The maximally mixed state I/4.
    Mixed,
}

impl ErrorStateKind {
    fn state(self) -> Op4 {
        match self {
            ErrorStateKind::Ground => Op4::ground_projector(),
            ErrorStateKind::Mixed => Op4::maximally_mixed(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one see-saw optimization at a fixed detector efficiency
    Optimize {
        /// Detector efficiency μ in [0, 1]
        #[arg(short, long, default_value = "1.0")]
        efficiency: f64,

        /// RNG seed for the random initial settings
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Relative-improvement stopping tolerance
        #[arg(long, default_value = "1e-4")]
        tolerance: f64,

        /// Hard cap on see-saw cycles
        #[arg(long, default_value = "200")]
        max_cycles: usize,

        /// Detector failure state
        #[arg(long, value_enum, default_value = "ground")]
        error_state: ErrorStateKind,

        /// Emit the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sweep detector efficiencies downward to find the violation threshold
    Sweep {
        /// Highest candidate efficiency
        #[arg(long, default_value = "0.43")]
        from: f64,

        /// Lowest candidate efficiency
        #[arg(long, default_value = "0.41")]
        to: f64,

        /// Step between candidates
        #[arg(long, default_value = "0.01")]
        step: f64,

        /// See-saw restarts per candidate
        #[arg(short, long, default_value = "5000")]
        restarts: usize,

        /// Sweep seed; every restart stream derives from it
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Relative-improvement stopping tolerance
        #[arg(long, default_value = "1e-4")]
        tolerance: f64,

        /// Hard cap on see-saw cycles per restart
        #[arg(long, default_value = "200")]
        max_cycles: usize,

        /// Detector failure state
        #[arg(long, value_enum, default_value = "ground")]
        error_state: ErrorStateKind,

        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Optimize {
            efficiency,
            seed,
            tolerance,
            max_cycles,
            error_state,
            json,
        } => optimize(efficiency, seed, tolerance, max_cycles, error_state, json),

        Commands::Sweep {
            from,
            to,
            step,
            restarts,
            seed,
            tolerance,
            max_cycles,
            error_state,
            json,
        } => sweep(
            from, to, step, restarts, seed, tolerance, max_cycles, error_state, json,
        ),
    }
}

fn optimize(
    efficiency: f64,
    seed: u64,
    tolerance: f64,
    max_cycles: usize,
    error_state: ErrorStateKind,
    json: bool,
) -> anyhow::Result<()> {
    let detector = DetectorModel::new(efficiency, error_state.state())?;
    let optimizer = SeesawOptimizer::new(detector).with_config(SeesawConfig {
        tolerance,
        max_cycles,
    });
    let outcome = optimizer.run(&mut StdRng::seed_from_u64(seed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let verdict = if outcome.value > LOCAL_BOUND {
        style("violates the classical bound").green()
    } else {
        style("no violation").yellow()
    };
    println!(
        "CHSH value {:.6} after {} cycles ({verdict})",
        outcome.value, outcome.cycles
    );
    println!("State:\n{}", outcome.state.chop(CHOP_THRESHOLD));
    let settings = outcome.settings.chop(CHOP_THRESHOLD);
    println!("A1:\n{}", settings.a1);
    println!("A2:\n{}", settings.a2);
    println!("B1:\n{}", settings.b1);
    println!("B2:\n{}", settings.b2);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn sweep(
    from: f64,
    to: f64,
    step: f64,
    restarts: usize,
    seed: u64,
    tolerance: f64,
    max_cycles: usize,
    error_state: ErrorStateKind,
    json: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!(step > 0.0, "--step must be positive");
    anyhow::ensure!(from >= to, "--from must not be below --to");

    let mut efficiencies = Vec::new();
    let mut mu = from;
    while mu >= to - 1e-12 {
        efficiencies.push(mu);
        mu -= step;
    }

    let config = SweepConfig {
        efficiencies,
        restarts,
        classical_bound: LOCAL_BOUND,
        seed,
        seesaw: SeesawConfig {
            tolerance,
            max_cycles,
        },
        error_state: error_state.state(),
    };
    let report = find_minimal_efficiency(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for candidate in &report.candidates {
        match candidate.violation {
            Some(value) => println!(
                "μ = {:.4}: {} (CHSH {:.6}, restart {}, {} failed restarts)",
                candidate.efficiency,
                style("violation").green(),
                value,
                candidate.winning_restart.unwrap_or(0),
                candidate.failed_restarts,
            ),
            None => println!(
                "μ = {:.4}: {} ({} restarts, {} failed)",
                candidate.efficiency,
                style("no violation").yellow(),
                candidate.restart_budget,
                candidate.failed_restarts,
            ),
        }
    }

    match report.best {
        Some(best) => {
            let best = best.chopped(CHOP_THRESHOLD);
            println!();
            println!("Lowest efficiency with a violation: {:.4}", best.efficiency);
            println!("Resulting CHSH value: {:.6}", best.value);
            println!("Obtained with the state:\n{}", best.state);
            let s = &best.settings;
            println!("And measurement settings:");
            println!("A1:\n{}", s.a1);
            println!("A2:\n{}", s.a2);
            println!("B1:\n{}", s.b1);
            println!("B2:\n{}", s.b2);
        }
        None => println!("{}", style("No threshold found in range").yellow()),
    }
    Ok(())
}
