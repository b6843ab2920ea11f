//! Calendar view model backing the reminder popup.
//!
//! The widget is initialized lazily the first time the calendar is opened
//! and reused afterwards; reopening only refetches the event feed. Dates
//! are compared at day granularity, and reminder creation is rejected for
//! any date strictly before today before the user is ever prompted.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A reminder event as served by the `/reminders` feed.
///
/// Dates travel as `YYYY-MM-DD` strings; entries that fail to parse are
/// skipped rather than failing the whole feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderEvent {
    pub title: String,
    pub date: String,
}

/// Returns true when a reminder may be created for `date`: today or any
/// later day. Yesterday and earlier are rejected.
pub fn can_add_reminder(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Month caption, e.g. "August 2026".
pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Calendar widget state: the visible month plus the reminder titles
/// bucketed by day.
#[derive(Debug, Default)]
pub struct CalendarState {
    month: Option<NaiveDate>,
    events: BTreeMap<NaiveDate, Vec<String>>,
}

impl CalendarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.month.is_some()
    }

    /// First-open initialization: points the view at today's month. Later
    /// calls are no-ops so the visible month survives reopening.
    pub fn initialize(&mut self, today: NaiveDate) {
        if self.month.is_none() {
            self.month = Some(first_of_month(today));
        }
    }

    /// The first day of the visible month, once initialized.
    pub fn visible_month(&self) -> Option<NaiveDate> {
        self.month
    }

    /// Jumps the view to the month containing `date`.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.month = Some(first_of_month(date));
    }

    /// Moves the visible month forward (positive) or back (negative).
    pub fn advance_months(&mut self, delta: i32) {
        if let Some(month) = self.month {
            let total = month.year() * 12 + month.month0() as i32 + delta;
            let year = total.div_euclid(12);
            let month0 = total.rem_euclid(12) as u32;
            self.month = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
        }
    }

    /// Replaces the event buckets from a freshly fetched feed.
    pub fn load_events(&mut self, feed: Vec<ReminderEvent>) {
        self.events.clear();
        for event in feed {
            if let Ok(date) = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d") {
                self.events.entry(date).or_default().push(event.title);
            }
        }
    }

    /// Reminder titles attached to a given day.
    pub fn events_on(&self, date: NaiveDate) -> &[String] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All event days in the visible month, in order.
    pub fn event_days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.events.iter()
    }

    /// The visible month as week rows starting on Sunday; days outside
    /// the month are `None`.
    pub fn month_weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.month else {
            return Vec::new();
        };

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = first.weekday().num_days_from_sunday() as usize;

        let mut day = first;
        loop {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }

            let next = day + Duration::days(1);
            if next.month() != first.month() {
                break;
            }
            day = next;
        }

        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
