//! Reusable observers for the theta-rule decay solver.
//!
//! Observers receive one event per mesh point while a solve runs. This crate
//! provides the common ones, so callers get logging and data collection
//! without touching the solver.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for solver events ([`StepRecord`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — logs each step through `tracing`
//! - [`Recorder`] — collects `(t, u)` pairs for reporting
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for drawing solutions via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`StepRecord`]: traits::StepRecord

pub mod traits;

mod logging;
mod recorder;

#[cfg(feature = "plot")]
mod plot;

pub use logging::TracingObserver;
pub use recorder::Recorder;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
