use serde::{Deserialize, Serialize};

use crate::core::DayPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same hue with a different alpha; used for translucent area fills.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw spec for one labeled series handed to a backend.
///
/// Ephemeral: rebuilt from the working dataset on every render, never held
/// across engine mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub points: Vec<DayPoint>,
    pub line_color: Color,
    pub fill_color: Color,
    pub stepped: bool,
}

impl SeriesSpec {
    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "series label must not be empty".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.fill_color.validate()?;
        if let Some(point) = self.points.iter().find(|point| !point.y.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has a non-finite value at {}",
                self.label, point.x
            )));
        }
        Ok(())
    }
}
