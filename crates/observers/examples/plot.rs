//! Interactive plots of theta-rule solutions.
//!
//! Each mode solves the decay equation and opens a plot window comparing the
//! numerical solution with the exact one.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- exact
//! cargo run --example plot --features plot -- exact 0.5
//! cargo run --example plot --features plot -- schemes
//! cargo run --example plot --features plot -- dt CN 1.25 0.75 0.5 0.1
//! ```
//!
//! # Modes
//!
//! - **exact [dt]** — Backward Euler with `I = 1, a = 2, T = 4` against the
//!   exact solution. Defaults to `dt = 0.2`.
//!
//! - **schemes** — Forward Euler, Backward Euler, and Crank-Nicolson on the
//!   same mesh, together with the exact solution.
//!
//! - **dt SCHEME dt...** — One scheme for several step sizes. Try `FE` with
//!   `dt = 1.25` to see the explicit scheme oscillate.

use std::error::Error;

use decay_core::{Parameters, Scheme, TimeMesh, exact::exact_solution};
use decay_observers::{PlotObserver, ShowConfig};
use decay_solvers::theta_rule;

const INITIAL: f64 = 1.0;
const RATE: f64 = 2.0;
const END_TIME: f64 = 4.0;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = args.first().map_or("exact", String::as_str);

    match mode {
        "exact" => {
            let dt = args
                .get(1)
                .map(|arg| arg.parse::<f64>())
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size, expected a number, e.g. 0.1");
                    std::process::exit(1);
                })
                .unwrap_or(0.2);
            exact(dt)
        }
        "schemes" => schemes(),
        "dt" => {
            let scheme: Scheme = args.get(1).map_or("CN", String::as_str).parse()?;
            let dt_values = args[2.min(args.len())..]
                .iter()
                .map(|arg| arg.parse::<f64>())
                .collect::<Result<Vec<_>, _>>()?;
            let dt_values = if dt_values.is_empty() {
                vec![1.25, 0.75, 0.5, 0.1]
            } else {
                dt_values
            };
            compare_dt(scheme, &dt_values)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [exact [dt] | schemes | dt SCHEME dt...]");
            std::process::exit(1);
        }
    }
}

/// Exact solution sampled on a fine mesh of 1001 points.
fn exact_curve() -> Result<Vec<[f64; 2]>, Box<dyn Error>> {
    let points = TimeMesh::uniform(END_TIME, END_TIME / 1000.0)?
        .points()
        .into_iter()
        .map(|t| [t, exact_solution(t, INITIAL, RATE)])
        .collect();
    Ok(points)
}

fn exact(dt: f64) -> Result<(), Box<dyn Error>> {
    let params = Parameters::new(INITIAL, RATE, END_TIME, dt, Scheme::BackwardEuler.theta())?;

    let mut plot = PlotObserver::new();
    plot.begin_curve("numerical");
    let solution = theta_rule::solve(&params, &mut plot);
    plot.add_curve("exact", exact_curve()?);

    println!("Error norm: {}", solution.error_norm());

    plot.show(
        ShowConfig::new()
            .title(format!("theta = 1, dt = {dt}"))
            .legend()
            .markers(),
    )?;
    Ok(())
}

fn schemes() -> Result<(), Box<dyn Error>> {
    let params = Parameters::new(INITIAL, RATE, END_TIME, 0.2, 0.0)?;

    let mut plot = PlotObserver::new();
    for scheme in [Scheme::ForwardEuler, Scheme::BackwardEuler, Scheme::CrankNicolson] {
        let theta = scheme.theta();
        plot.begin_curve(format!("theta = {}", theta.value()));
        theta_rule::solve(&params.with_theta(theta), &mut plot);
    }
    plot.add_curve("exact", exact_curve()?);

    plot.show(ShowConfig::new().title("Theta-rule schemes").legend().markers())?;
    Ok(())
}

fn compare_dt(scheme: Scheme, dt_values: &[f64]) -> Result<(), Box<dyn Error>> {
    let base = Parameters::new(INITIAL, RATE, END_TIME, dt_values[0], scheme.theta())?;

    let mut plot = PlotObserver::new();
    for &dt in dt_values {
        plot.begin_curve(format!("dt = {dt}"));
        theta_rule::solve(&base.with_dt(dt)?, &mut plot);
    }
    plot.add_curve("exact", exact_curve()?);

    plot.show(
        ShowConfig::new()
            .title(format!("theta = {}", scheme.theta().value()))
            .legend(),
    )?;
    Ok(())
}
