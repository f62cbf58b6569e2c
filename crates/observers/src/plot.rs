//! Plotting observer for visualizing trajectories.
//!
//! See [`PlotObserver`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rotorsim_core::Observer;
use rotorsim_solvers::transient::fixed_step::Event;

use crate::traits::Tabular;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Twin rotor").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects one trace per state column and displays them
/// against time via egui.
///
/// The const generic `N` is the number of traces and matches the state's
/// [`Tabular<N>`][Tabular] row.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<6>::for_state::<TwinRotorState>();
/// fixed_step::solve(&problem, &Rk4, initial, &config, &mut obs);
/// obs.show(ShowConfig::new().title("Twin rotor").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Creates a `PlotObserver` named after the state's column headers.
    pub fn for_state<S: Tabular<N>>() -> Self {
        Self::new(S::HEADERS)
    }

    /// Records one point on every trace.
    pub fn record(&mut self, time: f64, row: [f64; N]) {
        for (trace, y) in self.data.iter_mut().zip(row) {
            trace.push([time, y]);
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                }))
            }),
        )
    }
}

impl<S, A, const N: usize> Observer<Event<S>, A> for PlotObserver<N>
where
    S: Tabular<N>,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        self.record(event.time, event.state.row());
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run.
impl<S, A, const N: usize> Observer<Event<S>, A> for &mut PlotObserver<N>
where
    S: Tabular<N>,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        (**self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory").x_axis_label("t [s]");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
