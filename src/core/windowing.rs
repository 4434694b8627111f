use chrono::{Days, NaiveDate};

use crate::core::DayPoint;

/// Returns the latest calendar day across a set of points.
///
/// Computed as an explicit max so callers never depend on input ordering.
#[must_use]
pub fn latest_day(points: &[DayPoint]) -> Option<NaiveDate> {
    points.iter().map(|point| point.x).max()
}

/// Returns the latest calendar day across several series, e.g. all sellers'
/// inventory histories. Sellers may stop reporting on different days; the
/// result is the newest day any of them reached.
#[must_use]
pub fn latest_day_across<'a, I>(series: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a [DayPoint]>,
{
    series.into_iter().filter_map(latest_day).max()
}

/// Cutoff day for a trailing window of `days` calendar days ending at
/// `latest`. Day arithmetic only; saturates at the calendar floor.
#[must_use]
pub fn trailing_cutoff(latest: NaiveDate, days: u32) -> NaiveDate {
    latest
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns points whose day falls on or after `cutoff`, preserving the
/// relative order of the input.
#[must_use]
pub fn points_on_or_after(points: &[DayPoint], cutoff: NaiveDate) -> Vec<DayPoint> {
    points
        .iter()
        .copied()
        .filter(|point| point.x >= cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(ymd: (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).expect("valid date")
    }

    #[test]
    fn latest_day_ignores_input_order() {
        let points = vec![
            DayPoint::new(day((2024, 3, 10)), 1.0),
            DayPoint::new(day((2024, 3, 2)), 2.0),
            DayPoint::new(day((2024, 3, 7)), 3.0),
        ];
        assert_eq!(latest_day(&points), Some(day((2024, 3, 10))));
    }

    #[test]
    fn latest_day_across_spans_all_series() {
        let early = vec![DayPoint::new(day((2024, 1, 5)), 4.0)];
        let late = vec![DayPoint::new(day((2024, 2, 1)), 9.0)];
        let empty: Vec<DayPoint> = Vec::new();

        let result = latest_day_across(
            [early.as_slice(), late.as_slice(), empty.as_slice()],
        );
        assert_eq!(result, Some(day((2024, 2, 1))));
    }

    #[test]
    fn latest_day_across_empty_series_is_none() {
        let empty: Vec<DayPoint> = Vec::new();
        assert_eq!(latest_day_across([empty.as_slice()]), None);
    }

    #[test]
    fn trailing_cutoff_uses_calendar_days() {
        assert_eq!(
            trailing_cutoff(day((2024, 1, 15)), 7),
            day((2024, 1, 8)),
        );
        // Month boundary.
        assert_eq!(
            trailing_cutoff(day((2024, 3, 2)), 5),
            day((2024, 2, 26)),
        );
    }

    #[test]
    fn points_on_or_after_is_inclusive_and_order_preserving() {
        let latest = day((2024, 6, 20));
        let points = vec![
            DayPoint::new(day((2024, 6, 10)), 1.0),
            DayPoint::new(day((2024, 6, 15)), 2.0),
            DayPoint::new(day((2024, 6, 19)), 3.0),
            DayPoint::new(latest, 4.0),
        ];

        let filtered = points_on_or_after(&points, trailing_cutoff(latest, 5));
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].x, day((2024, 6, 15)));
        assert_eq!(filtered[1].x, day((2024, 6, 19)));
        assert_eq!(filtered[2].x, latest);
    }
}
