use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::{SeriesSpec, TimeAxisConfig, ValueAxisConfig};

/// Backend-agnostic scene for one chart draw pass: the finalized series list
/// plus both axis contracts.
///
/// A default frame is the defensive empty render: no series, generic axis
/// titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub series: SmallVec<[SeriesSpec; 8]>,
    pub x_axis: TimeAxisConfig,
    pub y_axis: ValueAxisConfig,
}

impl ChartFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if self.y_axis.title.is_empty() {
            return Err(ChartError::InvalidData(
                "y-axis title must not be empty".to_owned(),
            ));
        }
        for spec in &self.series {
            spec.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
