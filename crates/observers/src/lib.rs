//! Reusable observers for rotorsim simulations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! turn solver events into output or monitoring decisions.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits ([`Tabular`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TableWriter`] — writes one fixed-width text row per event
//! - [`NonFiniteGuard`] — stops a run as soon as the state diverges
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rotorsim_core::Observer
//! [`Tabular`]: traits::Tabular
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;
mod table;

#[cfg(feature = "plot")]
mod plot;

pub use guard::NonFiniteGuard;
pub use table::TableWriter;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
