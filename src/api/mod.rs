mod engine;
mod json_contract;
mod view_builder;

pub use engine::ChartEngine;
pub use json_contract::{ListingDatasetPayload, RawDayPoint};
pub use view_builder::{build_chart_frame, y_axis_title};
