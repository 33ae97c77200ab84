//! driftrate CLI.
//!
//! Commands:
//! - field: 2D dS/dt field over (ΔN, ΔD)
//! - slices: threshold curves over ΔN at fixed ΔD values
//! - endogenous: curve over ΔD at a fixed ΔN
//! - drift: forward Euler integration of S(t) under a sinusoidal ΔN
//! - minimize: gradient-descent comparison trace
//! - compare: drift trajectory next to the minimization trace

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use driftrate_core::constants::{
    DEFAULT_A, DEFAULT_BETA, DEFAULT_DRIFT_STEPS, DEFAULT_DT, DEFAULT_ENDOGENOUS_DELTA_N,
    DEFAULT_EPS, DEFAULT_ETA, DEFAULT_FIELD_RESOLUTION, DEFAULT_K, DEFAULT_MIN_STEPS,
    DEFAULT_N_CRIT, DEFAULT_P, DEFAULT_SLICE_DELTA_D,
};
use driftrate_core::drift::integrate_drift;
use driftrate_core::field::sample_field;
use driftrate_core::minimize::minimize;
use driftrate_core::slices::{sample_endogenous, sample_threshold_slices, Curve};
use driftrate_core::summary::{first_crossing_below, SeriesSummary};
use driftrate_core::{Parameters, ParamsResult};

#[derive(Parser)]
#[command(name = "driftrate")]
#[command(version)]
#[command(about = "Sample and integrate the drift-rate response model")]
struct Cli {
    #[command(flatten)]
    model: ModelArgs,

    /// Print every n-th row of long tables
    #[arg(long, default_value_t = 20, global = true)]
    every: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Model parameter overrides.
#[derive(Args)]
struct ModelArgs {
    /// Amplitude scale A
    #[arg(long, default_value_t = DEFAULT_A, global = true)]
    a: f64,

    /// Logistic steepness k
    #[arg(long, default_value_t = DEFAULT_K, global = true, allow_hyphen_values = true)]
    k: f64,

    /// Logistic threshold centre N_crit
    #[arg(long, default_value_t = DEFAULT_N_CRIT, global = true, allow_hyphen_values = true)]
    n_crit: f64,

    /// Suppression exponent p
    #[arg(long, default_value_t = DEFAULT_P, global = true)]
    p: f64,

    /// Suppression floor eps
    #[arg(long, default_value_t = DEFAULT_EPS, global = true)]
    eps: f64,

    /// Linear ΔD coupling beta
    #[arg(long, default_value_t = DEFAULT_BETA, global = true, allow_hyphen_values = true)]
    beta: f64,
}

impl ModelArgs {
    fn parameters(&self) -> ParamsResult<Parameters> {
        Parameters::new(self.a, self.k, self.n_crit, self.p, self.eps, self.beta)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the dS/dt field over the unit square
    Field {
        /// Samples per axis
        #[arg(long, default_value_t = DEFAULT_FIELD_RESOLUTION)]
        n: usize,
    },

    /// Threshold curves over ΔN for fixed ΔD values
    Slices {
        /// ΔD values (comma-separated)
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SLICE_DELTA_D.to_vec())]
        delta_d: Vec<f64>,
    },

    /// dS/dt over ΔD for a fixed ΔN
    Endogenous {
        /// Fixed ΔN
        #[arg(long, default_value_t = DEFAULT_ENDOGENOUS_DELTA_N)]
        delta_n: f64,
    },

    /// Integrate S(t) under ΔN(t) = 0.5 + 0.3·sin(t), ΔD = 0.5
    Drift {
        /// Number of time samples
        #[arg(long, default_value_t = DEFAULT_DRIFT_STEPS)]
        steps: usize,

        /// Euler step
        #[arg(long, default_value_t = DEFAULT_DT)]
        dt: f64,
    },

    /// Gradient-descent trace on x²/2
    Minimize {
        /// Number of iterations
        #[arg(long, default_value_t = DEFAULT_MIN_STEPS)]
        steps: usize,

        /// Learning rate
        #[arg(long, default_value_t = DEFAULT_ETA)]
        eta: f64,
    },

    /// Summarise the drift trajectory next to the minimization trace
    Compare {
        #[arg(long, default_value_t = DEFAULT_DRIFT_STEPS)]
        steps: usize,

        #[arg(long, default_value_t = DEFAULT_DT)]
        dt: f64,

        #[arg(long, default_value_t = DEFAULT_ETA)]
        eta: f64,
    },
}

fn print_curve(label: &str, curve: &Curve, every: usize) {
    println!("{label:>8} | {:>14}", "dS/dt");
    println!("---------|---------------");
    for (i, (x, y)) in curve.points().enumerate() {
        if i % every == 0 || i + 1 == curve.len() {
            println!("{x:>8.4} | {y:>14.6}");
        }
    }
}

fn print_summary(name: &str, values: &[f64]) {
    match SeriesSummary::of(values) {
        Some(s) => println!(
            "{name:<12} n={:<6} min={:>12.6} max={:>12.6} mean={:>12.6} last={:>12.6}",
            s.len, s.min, s.max, s.mean, s.last
        ),
        None => println!("{name:<12} (empty)"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = match cli.model.parameters() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid model parameters: {e}");
            return ExitCode::FAILURE;
        }
    };
    let every = cli.every.max(1);
    info!(?params, "model parameters");

    match cli.command {
        Commands::Field { n } => {
            let field = sample_field(n, &params);
            let stride = (n / 10).max(1);
            println!("dS/dt field, {} x {} (rows: ΔD, columns: ΔN)", n, n);
            print!("{:>8} |", "ΔD \\ ΔN");
            for x in field.delta_n.iter().step_by(stride) {
                print!(" {x:>10.3}");
            }
            println!();
            // highest ΔD first, as it would appear on a plot
            for j in (0..field.n_rows()).step_by(stride).rev() {
                let Some(row) = field.row(j) else { continue };
                print!("{:>8.3} |", field.delta_d[j]);
                for v in row.iter().step_by(stride) {
                    print!(" {v:>10.3}");
                }
                println!();
            }
            if let Some((lo, hi)) = field.range() {
                println!("\nrange: [{lo:.6}, {hi:.6}]");
            }
        }

        Commands::Slices { delta_d } => {
            let slices = sample_threshold_slices(&delta_d, &params);
            for slice in &slices {
                println!("\nΔD = {}", slice.delta_d);
                print_curve("ΔN", &slice.curve, every);
            }
        }

        Commands::Endogenous { delta_n } => {
            let curve = sample_endogenous(delta_n, &params);
            println!("Endogenous dS/dt over ΔD (ΔN = {delta_n})");
            print_curve("ΔD", &curve, every);
        }

        Commands::Drift { steps, dt } => {
            let traj = integrate_drift(steps, dt, &params);
            println!("   t     |   ΔN   |     dS/dt      |       S");
            println!("---------|--------|----------------|---------------");
            for i in (0..traj.len()).filter(|i| i % every == 0 || i + 1 == traj.len()) {
                println!(
                    "{:>8.3} | {:>6.3} | {:>14.6} | {:>14.6}",
                    traj.t[i], traj.delta_n[i], traj.dsdt[i], traj.s[i]
                );
            }
        }

        Commands::Minimize { steps, eta } => {
            let trace = minimize(steps, eta);
            println!("  iter  |     x        |   x²/2");
            println!("--------|--------------|------------");
            for i in (0..trace.len()).filter(|i| i % every == 0 || i + 1 == trace.len()) {
                println!(
                    "{:>7} | {:>12.8} | {:>12.8}",
                    i, trace.state[i], trace.objective[i]
                );
            }
        }

        Commands::Compare { steps, dt, eta } => {
            let traj = integrate_drift(steps, dt, &params);
            let trace = minimize(steps, eta);
            print_summary("dS/dt", &traj.dsdt);
            print_summary("S(t)", &traj.s);
            print_summary("x (descent)", &trace.state);
            match first_crossing_below(&trace.state, 0.5) {
                Some(i) => println!("descent halves its state after {i} iterations"),
                None => println!("descent never halves its state"),
            }
        }
    }

    ExitCode::SUCCESS
}
