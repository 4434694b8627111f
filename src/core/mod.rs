pub mod dataset;
pub mod types;
pub mod windowing;

pub use dataset::ListingDataset;
pub use types::{DayPoint, GraphKind};
pub use windowing::{latest_day, latest_day_across, points_on_or_after, trailing_cutoff};
