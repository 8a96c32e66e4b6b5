mod content;
mod layout;
mod popover;
mod week;

pub use content::{decode_entities, split_hosted_by, ShowContent, NO_DESCRIPTION};
pub use layout::{
    column_height, show_geometry, week_bound, ShowGeometry, WeekTimeBound, COLUMN_MARGIN_PX,
    EMPTY_COLUMN_HEIGHT_PX, HEADER_OFFSET_PX, PIXELS_PER_MINUTE,
};
pub use popover::{
    box_width_for, is_mobile_width, place_for_pointer, place_for_touch, Anchor, BlockId,
    PopoverPlacement, PopoverState, MOBILE_BREAKPOINT, POPOVER_WIDTH,
};
pub use week::{DayColumn, Show, TwoWeekSchedule, WeekSchedule, DAY_NAMES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::WeekInfo;
    use crate::config::ClockFormat;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    /// A realistic two-week feed: filler slots, a hosted show, an entity in
    /// a name, back-to-back morning programs, and a sparse next week.
    fn sample_feed() -> WeekInfo {
        serde_json::from_str(
            r#"{
                "monday": [
                    {"name": "90mil Radio", "start_timestamp": "2024-01-01 00:00:00", "end_timestamp": "2024-01-01 08:00:00"},
                    {"name": "Morning Drift hosted by Ada", "description": "Slow starts &amp; slower tempos", "start_timestamp": "2024-01-01 08:00:00", "end_timestamp": "2024-01-01 09:30:00"},
                    {"name": "Talk &amp; Tone", "start_timestamp": "2024-01-01 09:30:00", "end_timestamp": "2024-01-01 11:00:00"}
                ],
                "wednesday": [
                    {"name": "Evening Static", "description": "Noise hour", "start_timestamp": "2024-01-03 21:00:00", "end_timestamp": "2024-01-03 22:45:00"}
                ],
                "nextfriday": [
                    {"name": "Weekend Warmup", "start_timestamp": "2024-01-12 18:00:00", "end_timestamp": "2024-01-12 20:00:00"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn whole_feed_builds_a_consistent_fortnight() {
        // 2024-01-01 is a Monday.
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = TwoWeekSchedule::from_feed(&sample_feed(), today, "90mil Radio");

        let this_week = &schedule.weeks[0];
        assert_eq!(this_week.bound.earliest_hour, 8);
        assert_eq!(this_week.bound.latest_hour, 22);
        assert!(this_week.bound.has_scale());
        assert_eq!(column_height(&this_week.bound), 582.0);
        assert_eq!(this_week.first_day_with_shows(), Some(0));

        // Next week's scale is its own: 18:00-20:00 only.
        let next_week = &schedule.weeks[1];
        assert_eq!(next_week.bound.earliest_hour, 18);
        assert_eq!(next_week.bound.latest_hour, 20);
        assert_eq!(next_week.first_day_with_shows(), Some(4));
    }

    #[test]
    fn back_to_back_feed_shows_render_flush() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = TwoWeekSchedule::from_feed(&sample_feed(), today, "90mil Radio");

        let monday = &schedule.weeks[0].days[0];
        assert_eq!(monday.shows.len(), 2);

        let bound = &schedule.weeks[0].bound;
        let first = show_geometry(&monday.shows[0], bound);
        let second = show_geometry(&monday.shows[1], bound);
        assert_eq!(first.top_offset_px, 40.0);
        assert_eq!(first.height_px, 54.0);
        assert!(first.top_offset_px + first.height_px <= second.top_offset_px);
    }

    #[test]
    fn feed_content_is_normalized_for_display() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let schedule = TwoWeekSchedule::from_feed(&sample_feed(), today, "90mil Radio");
        let monday = &schedule.weeks[0].days[0];

        let hosted = ShowContent::from_show(&monday.shows[0], ClockFormat::Hour24);
        assert_eq!(hosted.title, "Morning Drift");
        assert_eq!(hosted.host.as_deref(), Some("Ada"));
        assert_eq!(hosted.time_range, "08:00 - 09:30");
        assert_eq!(hosted.description, "Slow starts & slower tempos");

        let plain = ShowContent::from_show(&monday.shows[1], ClockFormat::Hour24);
        assert_eq!(plain.title, "Talk & Tone");
        assert_eq!(plain.host, None);
        assert_eq!(plain.description, NO_DESCRIPTION);
    }
}
