use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily sample: a calendar day on the x axis, a measured value on the
/// y axis. No time-of-day component exists anywhere in listing history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    pub x: NaiveDate,
    pub y: f64,
}

impl DayPoint {
    #[must_use]
    pub const fn new(x: NaiveDate, y: f64) -> Self {
        Self { x, y }
    }
}

/// Graph kinds selectable by the host application.
///
/// The set is closed on purpose: adding a kind forces every match in the
/// view builder and the windowing path to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphKind {
    #[default]
    SalesRank,
    BuyBox,
    Inventory,
}
