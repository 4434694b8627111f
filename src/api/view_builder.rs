use smallvec::SmallVec;
use tracing::trace;

use crate::core::{GraphKind, ListingDataset};
use crate::render::{ChartFrame, Color, SeriesSpec, TimeAxisConfig, ValueAxisConfig, palette_color};

const SALES_RANK_LABEL: &str = "Sales Rank";
const BUY_BOX_LABEL: &str = "Buy Box";

const SALES_RANK_LINE: Color = Color::rgb(1.0, 0.0, 0.0);
const BUY_BOX_LINE: Color = Color::rgb(0.0, 0.0, 1.0);
// Shared light-green area fill under every inventory series.
const INVENTORY_FILL: Color = Color::rgba(0.702, 0.808, 0.702, 0.2);

/// Y-axis title for the active graph.
#[must_use]
pub fn y_axis_title(kind: GraphKind) -> &'static str {
    match kind {
        GraphKind::SalesRank => "BSR",
        GraphKind::BuyBox => "Buy Box Price ($)",
        GraphKind::Inventory => "Stock (Units)",
    }
}

/// Builds the scene for the active graph from the working dataset.
///
/// Series are rebuilt from scratch on every call and own their data, so a
/// backend may hold the frame across later engine mutations.
#[must_use]
pub fn build_chart_frame(dataset: &ListingDataset, kind: GraphKind) -> ChartFrame {
    let mut series: SmallVec<[SeriesSpec; 8]> = SmallVec::new();

    match kind {
        GraphKind::SalesRank => series.push(SeriesSpec {
            label: SALES_RANK_LABEL.to_owned(),
            points: dataset.sales_rank.clone(),
            line_color: SALES_RANK_LINE,
            fill_color: SALES_RANK_LINE.with_alpha(0.2),
            stepped: true,
        }),
        GraphKind::BuyBox => series.push(SeriesSpec {
            label: BUY_BOX_LABEL.to_owned(),
            points: dataset.buy_box.clone(),
            line_color: BUY_BOX_LINE,
            fill_color: BUY_BOX_LINE.with_alpha(0.2),
            stepped: true,
        }),
        GraphKind::Inventory => {
            for (position, (seller_id, points)) in dataset.inventory.iter().enumerate() {
                series.push(SeriesSpec {
                    label: seller_id.clone(),
                    points: points.clone(),
                    line_color: palette_color(position),
                    fill_color: INVENTORY_FILL,
                    stepped: true,
                });
            }
        }
    }

    trace!(?kind, series_count = series.len(), "built chart frame");

    ChartFrame {
        series,
        x_axis: TimeAxisConfig::default(),
        y_axis: ValueAxisConfig::titled(y_axis_title(kind)),
    }
}
