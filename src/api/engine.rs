use tracing::{debug, warn};

use crate::core::{GraphKind, ListingDataset, points_on_or_after, trailing_cutoff};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::view_builder::build_chart_frame;

/// Main orchestration facade consumed by host applications.
///
/// Owns the immutable full dataset, the working copy read by renders, and
/// the active graph selection. One engine drives one chart widget; hosts may
/// construct several independent engines on the same page.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    full: ListingDataset,
    working: ListingDataset,
    selection: GraphKind,
}

impl<R: Renderer> ChartEngine<R> {
    /// Takes the one-time snapshot of the host-supplied dataset and renders
    /// the initial sales-rank graph.
    ///
    /// Fails when the dataset has nothing to draw; the host is expected to
    /// report that and skip chart setup entirely.
    pub fn new(renderer: R, dataset: ListingDataset) -> ChartResult<Self> {
        if dataset.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let working = dataset.clone();
        let mut engine = Self {
            renderer,
            full: dataset,
            working,
            selection: GraphKind::SalesRank,
        };
        engine.render()?;
        Ok(engine)
    }

    /// Switches the active graph and re-renders.
    ///
    /// The date window is untouched: whatever trailing filter was last
    /// applied to the newly selected slice stays in effect, and a slice that
    /// was never filtered shows its full range.
    pub fn select_graph(&mut self, kind: GraphKind) -> ChartResult<()> {
        self.selection = kind;
        debug!(?kind, "graph selected");
        self.render()
    }

    /// Restricts the active graph's working slice to the trailing `days`
    /// calendar days and re-renders.
    ///
    /// The cutoff is anchored at the latest day present in the full
    /// dataset's slice for the active graph, never at the wall clock, and
    /// always filters from the full snapshot so repeated calls do not
    /// compound. An empty slice leaves the working copy as it was.
    pub fn apply_window(&mut self, days: u32) -> ChartResult<()> {
        let Some(latest) = self.full.latest_day_for(self.selection) else {
            warn!(kind = ?self.selection, "no data to filter for active graph");
            return Ok(());
        };

        let cutoff = trailing_cutoff(latest, days);
        debug!(kind = ?self.selection, days, %cutoff, "applying trailing window");

        match self.selection {
            GraphKind::SalesRank => {
                self.working.sales_rank = points_on_or_after(&self.full.sales_rank, cutoff);
            }
            GraphKind::BuyBox => {
                self.working.buy_box = points_on_or_after(&self.full.buy_box, cutoff);
            }
            GraphKind::Inventory => {
                // One global cutoff, each seller filtered independently. A
                // seller whose history ends before the cutoff keeps an empty
                // entry rather than disappearing.
                for (seller_id, points) in &self.full.inventory {
                    self.working
                        .inventory
                        .insert(seller_id.clone(), points_on_or_after(points, cutoff));
                }
            }
        }

        self.render()
    }

    /// Rebuilds the scene from the working dataset and hands it to the
    /// backend. Pure given the working dataset and the selection.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_chart_frame(&self.working, self.selection);
        frame.validate()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn graph_kind(&self) -> GraphKind {
        self.selection
    }

    /// The immutable snapshot taken at construction.
    #[must_use]
    pub fn full_dataset(&self) -> &ListingDataset {
        &self.full
    }

    /// The live copy currently backing renders.
    #[must_use]
    pub fn working_dataset(&self) -> &ListingDataset {
        &self.working
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.full.brand
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
