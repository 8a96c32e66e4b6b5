//! Domain model: shows, day columns, and two-week schedule construction.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::api::{parse_timestamp, ShowRecord, WeekInfo};

use super::layout::{week_bound, WeekTimeBound};

/// Canonical display order, matching the feed's key order.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One scheduled program with parsed instants.
#[derive(Debug, Clone)]
pub struct Show {
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One calendar day's rendering unit. Built fresh per schedule build and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub weekday_index: usize,
    pub shows: Vec<Show>,
}

impl DayColumn {
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.weekday_index]
    }
}

/// Seven Monday-through-Sunday columns sharing one time bound.
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    pub days: Vec<DayColumn>,
    pub bound: WeekTimeBound,
}

impl WeekSchedule {
    /// Index of the column the strip should scroll to after layout.
    pub fn first_day_with_shows(&self) -> Option<usize> {
        self.days.iter().position(|day| !day.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct TwoWeekSchedule {
    pub weeks: [WeekSchedule; 2],
}

impl TwoWeekSchedule {
    /// Build both weeks from the raw feed. `today` anchors the calendar:
    /// the current week's column for today's weekday lands on `today`
    /// itself. Filler slots named exactly `station_name` are dropped here,
    /// before any layout sees them.
    pub fn from_feed(info: &WeekInfo, today: NaiveDate, station_name: &str) -> Self {
        Self {
            weeks: [
                build_week(info, 0, today, station_name),
                build_week(info, 1, today, station_name),
            ],
        }
    }
}

fn build_week(info: &WeekInfo, offset: usize, today: NaiveDate, station_name: &str) -> WeekSchedule {
    let today_index = today.weekday().num_days_from_monday() as i64;

    let mut days = Vec::with_capacity(7);
    for weekday in 0..7 {
        let day_difference = weekday as i64 - today_index + offset as i64 * 7;
        days.push(DayColumn {
            date: today + Duration::days(day_difference),
            weekday_index: weekday as usize,
            shows: collect_shows(info.day(offset, weekday as usize), station_name),
        });
    }

    let bound = week_bound(&days);
    WeekSchedule { days, bound }
}

fn collect_shows(records: &[ShowRecord], station_name: &str) -> Vec<Show> {
    records
        .iter()
        .filter(|record| record.name != station_name)
        .filter_map(|record| {
            let (Some(start), Some(end)) = (
                parse_timestamp(&record.start_timestamp),
                parse_timestamp(&record.end_timestamp),
            ) else {
                log::warn!(
                    "skipping show {:?} with unparseable timestamps ({:?} - {:?})",
                    record.name,
                    record.start_timestamp,
                    record.end_timestamp
                );
                return None;
            };

            Some(Show {
                name: record.name.clone(),
                description: record.description.clone(),
                start,
                end,
            })
        })
        .collect()
}
