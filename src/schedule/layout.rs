//! Timeline layout: one shared vertical ruler per week, pixel geometry per
//! show block.

use chrono::{NaiveDateTime, Timelike};

use super::week::{DayColumn, Show};

/// Vertical scale of the timetable.
pub const PIXELS_PER_MINUTE: f32 = 0.6;
/// Space reserved above the first block for the day header.
pub const HEADER_OFFSET_PX: f32 = 40.0;
/// Header space plus a small bottom margin, added to every scaled column.
pub const COLUMN_MARGIN_PX: f32 = 42.0;
/// Fixed height of a column with no qualifying shows.
pub const EMPTY_COLUMN_HEIGHT_PX: f32 = 72.0;

/// The earliest start hour and latest end hour seen anywhere in one week.
///
/// All seven columns of a week are scaled against this single bound, so
/// hour marks would line up across days if drawn. The default is inverted
/// (`23 > 0`) and means "no shows, no scale".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTimeBound {
    pub earliest_hour: u32,
    pub latest_hour: u32,
}

impl Default for WeekTimeBound {
    fn default() -> Self {
        Self {
            earliest_hour: 23,
            latest_hour: 0,
        }
    }
}

impl WeekTimeBound {
    /// False while the bound is still the inverted default; such a bound
    /// carries no usable scale and columns fall back to a fixed height.
    pub fn has_scale(&self) -> bool {
        self.earliest_hour <= self.latest_hour
    }

    fn observe(&mut self, show: &Show) {
        self.earliest_hour = self.earliest_hour.min(show.start.hour());
        self.latest_hour = self.latest_hour.max(show.end.hour());
    }
}

/// First pass: widen the bound over every show of every non-empty day.
/// Must run to completion before any geometry is computed, since offsets
/// are relative to the week scale rather than each day's own.
pub fn week_bound(days: &[DayColumn]) -> WeekTimeBound {
    let mut bound = WeekTimeBound::default();
    for day in days.iter().filter(|day| !day.is_empty()) {
        for show in &day.shows {
            bound.observe(show);
        }
    }
    bound
}

/// Pixel geometry for one show block on the shared week scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowGeometry {
    pub top_offset_px: f32,
    pub height_px: f32,
}

/// Second pass: position one show against the week bound.
///
/// The start offset is rounded while the duration is floored: since
/// `floor(a) + floor(b) <= floor(a + b)`, back-to-back shows stay flush
/// without ever overlapping by a rounding error.
pub fn show_geometry(show: &Show, bound: &WeekTimeBound) -> ShowGeometry {
    let origin = (bound.earliest_hour * 60) as f32;
    let start_minutes = minutes_since_midnight(show.start) - origin;
    let end_minutes = minutes_since_midnight(show.end) - origin;

    let top_offset_px = (start_minutes * PIXELS_PER_MINUTE).round() + HEADER_OFFSET_PX;
    let height_px = ((end_minutes - start_minutes) * PIXELS_PER_MINUTE)
        .floor()
        .max(0.0);

    ShowGeometry {
        top_offset_px,
        height_px,
    }
}

/// Shared height for every non-empty column in the week. The extra hour
/// gives the final hour's shows room to render in full.
pub fn column_height(bound: &WeekTimeBound) -> f32 {
    if !bound.has_scale() {
        return EMPTY_COLUMN_HEIGHT_PX;
    }
    let span_minutes = ((bound.latest_hour - bound.earliest_hour + 1) * 60) as f32;
    span_minutes * PIXELS_PER_MINUTE + COLUMN_MARGIN_PX
}

fn minutes_since_midnight(instant: NaiveDateTime) -> f32 {
    (instant.hour() * 60 + instant.minute()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn show(start: (u32, u32), end: (u32, u32)) -> Show {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Show {
            name: "Test Show".to_string(),
            description: None,
            start: date.and_hms_opt(start.0, start.1, 0).unwrap(),
            end: date.and_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    fn day(shows: Vec<Show>) -> DayColumn {
        DayColumn {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            weekday_index: 0,
            shows,
        }
    }

    #[test]
    fn bound_spans_earliest_start_to_latest_end() {
        let days = vec![
            day(vec![show((9, 0), (11, 0))]),
            day(vec![]),
            day(vec![show((8, 30), (10, 0)), show((20, 0), (22, 45))]),
        ];

        let bound = week_bound(&days);
        assert_eq!(bound.earliest_hour, 8);
        assert_eq!(bound.latest_hour, 22);
        assert!(bound.has_scale());
        assert!(bound.earliest_hour <= bound.latest_hour);
    }

    #[test]
    fn empty_week_keeps_the_inverted_default() {
        let bound = week_bound(&[day(vec![]), day(vec![])]);
        assert_eq!(bound.earliest_hour, 23);
        assert_eq!(bound.latest_hour, 0);
        assert!(!bound.has_scale());
        assert_eq!(column_height(&bound), EMPTY_COLUMN_HEIGHT_PX);
    }

    #[test]
    fn column_height_pads_the_final_hour() {
        let bound = WeekTimeBound {
            earliest_hour: 8,
            latest_hour: 22,
        };
        // (22 - 8 + 1) * 60 * 0.6 + 42
        assert_eq!(column_height(&bound), 582.0);
    }

    #[test]
    fn geometry_matches_the_worked_example() {
        let bound = WeekTimeBound {
            earliest_hour: 8,
            latest_hour: 22,
        };
        let geometry = show_geometry(&show((8, 0), (9, 30)), &bound);
        assert_eq!(geometry.top_offset_px, 40.0);
        assert_eq!(geometry.height_px, 54.0);
    }

    #[test_case((8, 0), (9, 0), 36.0; "one hour")]
    #[test_case((9, 5), (9, 47), 25.0; "floor of 25.2")]
    #[test_case((10, 0), (10, 1), 0.0; "sub-pixel duration")]
    fn height_is_the_floored_scaled_duration(start: (u32, u32), end: (u32, u32), expected: f32) {
        let bound = WeekTimeBound {
            earliest_hour: 8,
            latest_hour: 22,
        };
        let geometry = show_geometry(&show(start, end), &bound);
        assert_eq!(geometry.height_px, expected);
        assert!(geometry.height_px >= 0.0);
    }

    #[test]
    fn back_to_back_shows_never_overlap() {
        let bound = WeekTimeBound {
            earliest_hour: 7,
            latest_hour: 23,
        };
        // Awkward minute values so the scaled offsets land between pixels.
        let boundaries = [
            (7, 0),
            (8, 25),
            (9, 47),
            (11, 1),
            (13, 33),
            (17, 59),
            (21, 7),
        ];
        for pair in boundaries.windows(2) {
            let first = show_geometry(&show(pair[0], pair[1]), &bound);
            let second = show_geometry(&show(pair[1], (23, 0)), &bound);
            assert!(
                first.top_offset_px + first.height_px <= second.top_offset_px,
                "blocks {:?} -> {:?} overlap",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn geometry_is_a_pure_function_of_show_and_bound() {
        let bound = WeekTimeBound {
            earliest_hour: 6,
            latest_hour: 23,
        };
        let subject = show((6, 40), (8, 15));
        assert_eq!(
            show_geometry(&subject, &bound),
            show_geometry(&subject, &bound)
        );
    }
}
