//! Runs theta-rule decay experiments from the command line.
//!
//! ```text
//! decay positional 1.0 2.0 4.0 BE 0.4 0.2 0.1
//! decay options --I 1.0 --a 2.0 --T 4.0 --scheme CN --dt 0.4 0.2 0.1
//! decay --log-file decay.log options --dt 0.5
//! ```
//!
//! For each step size the solver runs once and the discrete L2 error against
//! the exact solution is reported, followed by the observed convergence rates.

mod cli;
mod logging;
mod report;

use std::error::Error;

use clap::Parser;
use decay_observers::TracingObserver;
use decay_solvers::{sweep, theta_rule};
use tracing::info;

use crate::{
    cli::Cli,
    report::{Report, SolutionTable},
};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let experiment = cli.command.into_experiment();
    let base = experiment.parameters()?;
    info!(
        initial = base.initial(),
        rate = base.rate(),
        end_time = base.requested_end_time(),
        scheme = %experiment.scheme,
        "starting experiment"
    );

    let mut tracer = TracingObserver::new();
    let entries = sweep::sweep_observed(&base, &experiment.dt_values, &mut tracer)?;
    if cli.show_solution {
        for &dt in &experiment.dt_values {
            let solution = theta_rule::solve_unobserved(&base.with_dt(dt)?);
            println!("{}", SolutionTable(&solution));
        }
    }

    let rates = sweep::convergence_rates(&entries);
    print!("{}", Report::new(experiment.scheme, &entries, &rates));

    Ok(())
}
