//! Plotting observer for comparing decay solutions.
//!
//! See [`PlotObserver`] for usage.

use decay_core::Observer;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::traits::StepRecord;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("theta = 0.5").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no
    /// markers on numerical curves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            markers: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each curve by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Marks every mesh point of observed curves with a circle.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One named series of `[t, u]` points.
struct Curve {
    name: String,
    points: Vec<[f64; 2]>,
    observed: bool,
}

/// An observer that collects solution curves and displays them via egui.
///
/// Each solve is recorded into its own curve: call
/// [`begin_curve`][PlotObserver::begin_curve] with a name, then pass
/// `&mut PlotObserver` as the solver observer. Reference curves such as the
/// exact solution on a fine mesh are added with
/// [`add_curve`][PlotObserver::add_curve].
///
/// # Example
///
/// ```ignore
/// let mut plot = PlotObserver::new();
/// for scheme in Scheme::ALL {
///     plot.begin_curve(format!("theta={}", scheme.theta().value()));
///     theta_rule::solve(&params.with_theta(scheme.theta()), &mut plot);
/// }
/// plot.add_curve("exact", exact_points);
/// plot.show(ShowConfig::new().title("Schemes").legend().markers())?;
/// ```
#[derive(Default)]
pub struct PlotObserver {
    curves: Vec<Curve>,
}

impl PlotObserver {
    /// Creates an empty `PlotObserver`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new observed curve; subsequent events are recorded into it.
    pub fn begin_curve(&mut self, name: impl Into<String>) -> &mut Self {
        self.curves.push(Curve {
            name: name.into(),
            points: Vec::new(),
            observed: true,
        });
        self
    }

    /// Adds a complete reference curve that is not produced by a solver.
    pub fn add_curve(&mut self, name: impl Into<String>, points: Vec<[f64; 2]>) -> &mut Self {
        self.curves.push(Curve {
            name: name.into(),
            points,
            observed: false,
        });
        self
    }

    /// Records a single point into the current curve.
    ///
    /// Starts an unnamed curve if none has been started.
    pub fn record(&mut self, t: f64, u: f64) {
        if self.curves.is_empty() {
            self.begin_curve("");
        }
        if let Some(curve) = self.curves.last_mut() {
            curve.points.push([t, u]);
        }
    }

    /// Returns the number of curves collected so far.
    #[must_use]
    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    /// Opens a blocking egui window displaying all collected curves.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let curves = self.curves;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    curves,
                    legend: config.legend,
                    markers: config.markers,
                }))
            }),
        )
    }
}

impl<E: StepRecord, A> Observer<E, A> for PlotObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.time(), event.value());
        None
    }
}

/// Allows `&mut PlotObserver` to be passed to solvers that take an observer by
/// value, so [`PlotObserver::show`] can be called after the solves complete.
impl<E: StepRecord, A> Observer<E, A> for &mut PlotObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected curves.
struct PlotApp {
    curves: Vec<Curve>,
    legend: bool,
    markers: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("decay_plot").x_axis_label("t").y_axis_label("u");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for curve in &self.curves {
                    let line: PlotPoints = curve.points.iter().copied().collect();
                    plot_ui.line(Line::new(line).name(&curve.name));

                    if self.markers && curve.observed {
                        let marks: PlotPoints = curve.points.iter().copied().collect();
                        plot_ui.points(Points::new(marks).radius(3.0).name(&curve.name));
                    }
                }
            });
        });
    }
}
