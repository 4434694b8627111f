use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{DayPoint, ListingDataset};
use crate::error::{ChartError, ChartResult};

/// Wire shape of the dataset object the host page injects before the chart
/// initializes, exactly as the listing-analytics backend emits it.
///
/// Point entries are accepted loosely; canonicalization decides what
/// survives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingDatasetPayload {
    #[serde(rename = "chartSalesRank")]
    pub chart_sales_rank: Vec<RawDayPoint>,
    #[serde(rename = "chartBuyBox")]
    pub chart_buy_box: Vec<RawDayPoint>,
    #[serde(rename = "chartInventory")]
    pub chart_inventory: IndexMap<String, Vec<RawDayPoint>>,
    pub brand: String,
}

/// One loosely typed point entry. Real payloads contain entries with a
/// missing or unparseable coordinate; those are dropped, not fatal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDayPoint {
    pub x: Option<String>,
    pub y: Option<f64>,
}

impl ListingDataset {
    /// Parses the injected dataset JSON and canonicalizes every series.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: ListingDatasetPayload = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset payload: {e}")))?;
        Ok(Self::from_payload(payload))
    }

    /// Canonicalizes an already-deserialized payload.
    ///
    /// Malformed entries are dropped per point; a seller emptied by that
    /// keeps its (empty) entry so it still shows up as a series.
    #[must_use]
    pub fn from_payload(payload: ListingDatasetPayload) -> Self {
        let sales_rank = canonicalize_points(&payload.chart_sales_rank, "salesRank");
        let buy_box = canonicalize_points(&payload.chart_buy_box, "buyBox");

        let mut inventory = IndexMap::with_capacity(payload.chart_inventory.len());
        for (seller_id, raw) in &payload.chart_inventory {
            inventory.insert(seller_id.clone(), canonicalize_points(raw, seller_id));
        }

        debug!(
            sales_rank_points = sales_rank.len(),
            buy_box_points = buy_box.len(),
            sellers = inventory.len(),
            "ingested dataset payload"
        );

        Self {
            sales_rank,
            buy_box,
            inventory,
            brand: payload.brand,
        }
    }
}

fn canonicalize_points(raw: &[RawDayPoint], series: &str) -> Vec<DayPoint> {
    let mut points = Vec::with_capacity(raw.len());
    let mut dropped = 0_usize;

    for entry in raw {
        let day = entry
            .x
            .as_deref()
            .and_then(|text| text.parse::<NaiveDate>().ok());
        match (day, entry.y) {
            (Some(x), Some(y)) if y.is_finite() => points.push(DayPoint::new(x, y)),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            series,
            dropped,
            kept = points.len(),
            "dropped malformed points during ingestion"
        );
    }
    points
}
