//! Terminal consumer for the M/M/m engines
//!
//! Validates the interactive parameter bounds, invokes both estimators
//! with identical parameters, and renders the paired results: the key
//! metrics (ρ, theoretical L, empirical mean) plus an overlaid text
//! chart of the two distributions.

use clap::Parser;
use simple_logger::SimpleLogger;

use mmm_queue_core_rs::{
    simulate, solve_theoretical, QueueParameters, RngManager, SimulationOutcome,
    StationaryDistribution, TheoreticalSolution,
};

const BAR_WIDTH: usize = 30;
const MAX_CHART_ROWS: usize = 30;
/// States where both series fall below this probability are not charted
const DISPLAY_FLOOR: f64 = 5e-4;

#[derive(Parser, Debug)]
#[command(
    name = "mmm-queue",
    version,
    about = "Compare the closed-form and simulated steady state of an M/M/m queue"
)]
struct Args {
    /// Arrival rate lambda (customers per unit time), at least 0.1
    #[arg(long, default_value_t = 4.0, value_parser = parse_rate)]
    arrival_rate: f64,

    /// Per-server service rate mu, at least 0.1
    #[arg(long, default_value_t = 2.0, value_parser = parse_rate)]
    service_rate: f64,

    /// Number of parallel servers
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..=10))]
    servers: u64,

    /// Number of simulated transitions
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1_000..=50_000))]
    transitions: u64,

    /// RNG seed; derived from the clock (and printed) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the paired results as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn parse_rate(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|err| format!("not a number: {err}"))?;
    if !value.is_finite() || value < 0.1 {
        return Err(format!("rate must be at least 0.1, got {value}"));
    }
    Ok(value)
}

fn main() {
    SimpleLogger::new().init().unwrap();

    let args = Args::parse();
    let params = match QueueParameters::new(
        args.arrival_rate,
        args.service_rate,
        args.servers as usize,
    ) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("invalid parameters: {err}");
            std::process::exit(2);
        }
    };

    let seed = args.seed.unwrap_or_else(RngManager::entropy_seed);
    let theory = solve_theoretical(&params);
    let outcome = match simulate(&params, args.transitions as usize, seed) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(2);
        }
    };

    if args.json {
        print_json(&params, seed, &theory, &outcome);
    } else {
        print_report(&params, seed, &theory, &outcome);
    }
}

fn print_json(
    params: &QueueParameters,
    seed: u64,
    theory: &TheoreticalSolution,
    outcome: &SimulationOutcome,
) {
    let report = serde_json::json!({
        "parameters": params,
        "seed": seed,
        "theoretical": theory,
        "empirical": outcome,
        "total_variation_distance": theory
            .distribution
            .total_variation_distance(&outcome.distribution),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}

fn print_report(
    params: &QueueParameters,
    seed: u64,
    theory: &TheoreticalSolution,
    outcome: &SimulationOutcome,
) {
    let rho = params.utilization();
    println!(
        "M/M/{} queue  lambda = {}  mu = {}",
        params.servers(),
        params.arrival_rate(),
        params.service_rate()
    );
    println!(
        "utilization rho = {:.3}{}",
        rho,
        if rho >= 1.0 {
            "  (UNSTABLE: no stationary distribution)"
        } else {
            ""
        }
    );
    println!(
        "seed = {}  transitions = {}  analysis window = {}",
        seed, outcome.transitions, outcome.window_len
    );
    println!();

    if theory.is_degenerate() {
        println!("theoretical  no stable result (L diverges)");
    } else {
        println!(
            "theoretical  P0 = {:.4}  L = {:.4}",
            theory.empty_probability, theory.mean_in_system
        );
    }
    println!("empirical    mean = {:.4}", outcome.mean_in_system);
    if !theory.is_degenerate() {
        println!(
            "total variation distance = {:.4}",
            theory
                .distribution
                .total_variation_distance(&outcome.distribution)
        );
    }
    println!();
    print!(
        "{}",
        render_overlay(&theory.distribution, &outcome.distribution)
    );
}

/// Overlay both series as horizontal bars, one row per state
fn render_overlay(theory: &StationaryDistribution, empirical: &StationaryDistribution) -> String {
    let rows = chart_rows(theory, empirical);
    if rows == 0 {
        return String::new();
    }

    let peak = (0..rows)
        .map(|n| theory.probability(n).max(empirical.probability(n)))
        .fold(0.0f64, f64::max);
    if peak <= 0.0 {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  n  {:<width$}  {:<width$}\n",
        "theoretical",
        "empirical",
        width = BAR_WIDTH + 8
    ));
    for n in 0..rows {
        let t = theory.probability(n);
        let e = empirical.probability(n);
        out.push_str(&format!(
            "{:>3}  {:.4} {:<width$}  {:.4} {:<width$}\n",
            n,
            t,
            bar(t, peak),
            e,
            bar(e, peak),
            width = BAR_WIDTH + 1
        ));
    }
    out
}

/// Number of chart rows: through the last state either series can show
fn chart_rows(theory: &StationaryDistribution, empirical: &StationaryDistribution) -> usize {
    let longest = theory.len().max(empirical.len());
    (0..longest)
        .rev()
        .find(|&n| theory.probability(n) >= DISPLAY_FLOOR || empirical.probability(n) >= DISPLAY_FLOOR)
        .map_or(0, |n| (n + 1).min(MAX_CHART_ROWS))
}

fn bar(probability: f64, peak: f64) -> String {
    let filled = ((probability / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}
