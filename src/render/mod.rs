mod axis;
mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use axis::{DAY_DATE_FORMAT, TimeAxisConfig, TimeAxisUnit, ValueAxisConfig};
pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;
pub use palette::{SELLER_PALETTE, palette_color};
pub use primitives::{Color, SeriesSpec};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ChartFrame` and own widget
/// lifecycle, including destroying a previous chart instance before drawing
/// the new one. The engine never keeps a reference into a handed-off frame.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
