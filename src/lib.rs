//! listing-chart-rs: dataset windowing and chart-view building for
//! product-listing analytics.
//!
//! The crate owns an immutable snapshot of a listing's history (sales rank,
//! buy-box price, per-seller inventory), a working copy shaped by trailing
//! date windows, and the active graph selection. Every render turns the
//! working copy into labeled, styled series for an external rendering
//! backend; the backend, the host page, and the data producer stay outside
//! this crate.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::ChartEngine;
pub use core::{DayPoint, GraphKind, ListingDataset};
pub use error::{ChartError, ChartResult};
