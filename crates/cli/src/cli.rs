use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use decay_core::{ParameterError, Parameters, Scheme};
use thiserror::Error;

/// Solve u' = -a*u, u(0) = I with the theta-rule and report error norms.
#[derive(Debug, Parser)]
#[command(name = "decay", version)]
pub struct Cli {
    /// Write debug logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print t, u and the exact solution at every mesh point.
    #[arg(long, global = true)]
    pub show_solution: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read I, a, T, the scheme name and step sizes as positional arguments.
    Positional(PositionalArgs),

    /// Read parameters from option-value pairs, with defaults.
    Options(OptionArgs),
}

#[derive(Debug, Args)]
pub struct PositionalArgs {
    /// Initial condition, u(0).
    #[arg(value_name = "I", allow_negative_numbers = true)]
    initial: f64,

    /// Coefficient in the ODE.
    #[arg(value_name = "a", allow_negative_numbers = true)]
    rate: f64,

    /// End time of the simulation.
    #[arg(value_name = "T")]
    end_time: f64,

    /// Scheme name: FE, BE or CN.
    #[arg(value_name = "SCHEME")]
    scheme: Scheme,

    /// Time step values.
    #[arg(value_name = "DT", required = true, num_args = 1..)]
    dt_values: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Initial condition, u(0).
    #[arg(
        long = "I",
        visible_alias = "initial_condition",
        value_name = "I",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    initial: f64,

    /// Coefficient in the ODE.
    #[arg(long = "a", value_name = "a", default_value_t = 1.0, allow_negative_numbers = true)]
    rate: f64,

    /// End time of the simulation.
    #[arg(long = "T", visible_alias = "stop_time", value_name = "T", default_value_t = 1.0)]
    end_time: f64,

    /// Scheme name: FE, BE or CN.
    #[arg(long, default_value = "CN")]
    scheme: Scheme,

    /// Time step values.
    #[arg(
        long = "dt",
        visible_alias = "time_step_values",
        value_name = "dt",
        num_args = 1..,
        default_values_t = [1.0]
    )]
    dt_values: Vec<f64>,
}

/// A fully resolved experiment: one problem, one scheme, several step sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub initial: f64,
    pub rate: f64,
    pub end_time: f64,
    pub scheme: Scheme,
    pub dt_values: Vec<f64>,
}

/// Errors that can occur when turning arguments into solver parameters.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("at least one time step value is required")]
    NoStepSizes,

    #[error(transparent)]
    Parameters(#[from] ParameterError),
}

impl Command {
    /// Resolves either argument style into an [`Experiment`].
    pub fn into_experiment(self) -> Experiment {
        match self {
            Self::Positional(args) => Experiment {
                initial: args.initial,
                rate: args.rate,
                end_time: args.end_time,
                scheme: args.scheme,
                dt_values: args.dt_values,
            },
            Self::Options(args) => Experiment {
                initial: args.initial,
                rate: args.rate,
                end_time: args.end_time,
                scheme: args.scheme,
                dt_values: args.dt_values,
            },
        }
    }
}

impl Experiment {
    /// Validates the experiment and returns parameters for its first step size.
    ///
    /// Parameters for the remaining step sizes are derived with
    /// [`Parameters::with_dt`].
    pub fn parameters(&self) -> Result<Parameters, ExperimentError> {
        let dt = *self.dt_values.first().ok_or(ExperimentError::NoStepSizes)?;
        let params = Parameters::new(
            self.initial,
            self.rate,
            self.end_time,
            dt,
            self.scheme.theta(),
        )?;
        Ok(params)
    }
}
