use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::core::windowing::{latest_day, latest_day_across};
use crate::core::{DayPoint, GraphKind};

/// Chartable history of one product listing.
///
/// The engine keeps two values of this type: an immutable snapshot taken at
/// construction and a working copy whose slices are overwritten by trailing
/// window filters. The snapshot is the only filter source, so repeated
/// filters never compound.
///
/// Seller order in `inventory` is the producer's insertion order; it drives
/// both series order and palette assignment for the inventory graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDataset {
    pub sales_rank: Vec<DayPoint>,
    pub buy_box: Vec<DayPoint>,
    pub inventory: IndexMap<String, Vec<DayPoint>>,
    pub brand: String,
}

impl ListingDataset {
    /// True when no graph kind has a single point to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sales_rank.is_empty()
            && self.buy_box.is_empty()
            && self.inventory.values().all(Vec::is_empty)
    }

    /// Latest calendar day in the slice backing `kind`.
    ///
    /// For the inventory graph the max is taken across all sellers, so one
    /// seller that kept reporting anchors the window for everyone.
    #[must_use]
    pub fn latest_day_for(&self, kind: GraphKind) -> Option<NaiveDate> {
        match kind {
            GraphKind::SalesRank => latest_day(&self.sales_rank),
            GraphKind::BuyBox => latest_day(&self.buy_box),
            GraphKind::Inventory => {
                latest_day_across(self.inventory.values().map(Vec::as_slice))
            }
        }
    }
}
