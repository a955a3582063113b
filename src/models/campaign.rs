//! Campaign calendar model.
//!
//! Defines the campaign date range, per-date calendar events, and the
//! derivation of the candidate date pool: the subset of campaign dates
//! eligible to host any store activity.
//!
//! # Date Model
//! Dates are `chrono::NaiveDate` — no time zone; the consumer decides which
//! local calendar the campaign runs in. Weekdays use ISO numbering:
//! 1 = Monday .. 7 = Sunday.
//!
//! # Precedence
//! A blocking event removes a date from the pool regardless of weekday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// ISO weekday number of a date (1 = Monday .. 7 = Sunday).
#[inline]
pub fn iso_weekday(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// A calendar event attached to a single date.
///
/// Only events that block scheduling affect the candidate pool; other
/// events (e.g. a regional promotion) are carried for display but ignored
/// by the pool filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateEvent {
    /// Event label (e.g. "public holiday").
    pub name: String,
    /// Whether the date is closed for scheduling.
    pub blocks_scheduling: bool,
}

impl DateEvent {
    /// Creates an event that blocks scheduling on its date.
    pub fn blocking(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks_scheduling: true,
        }
    }

    /// Creates a display-only event.
    pub fn informational(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks_scheduling: false,
        }
    }
}

/// A time-bounded campaign during which stores host in-store activities.
///
/// Carries the inclusive date range and at most one calendar event per
/// date. The candidate date pool is derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campaign {
    /// Campaign identifier.
    pub id: String,
    /// First day of the campaign (inclusive).
    pub start: NaiveDate,
    /// Last day of the campaign (inclusive).
    pub end: NaiveDate,
    /// Calendar events, at most one per date.
    pub events: BTreeMap<NaiveDate, DateEvent>,
}

impl Campaign {
    /// Creates a campaign over the inclusive range [start, end].
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            events: BTreeMap::new(),
        }
    }

    /// Attaches a calendar event to a date, replacing any existing one.
    pub fn with_event(mut self, date: NaiveDate, event: DateEvent) -> Self {
        self.events.insert(date, event);
        self
    }

    /// Blocks a date for scheduling under the given label.
    pub fn with_blocked(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.events.insert(date, DateEvent::blocking(name));
        self
    }

    /// Whether a date lies within the campaign range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether a date carries a blocking event.
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.events
            .get(&date)
            .map_or(false, |e| e.blocks_scheduling)
    }

    /// Iterates every date in the campaign range, in order.
    ///
    /// Empty when the range is inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Derives the candidate date pool: campaign dates whose weekday is in
    /// `host_weekdays` and that carry no blocking event, in chronological
    /// order.
    pub fn candidate_dates(&self, host_weekdays: &BTreeSet<u8>) -> Vec<NaiveDate> {
        self.days()
            .filter(|d| host_weekdays.contains(&iso_weekday(*d)) && !self.is_blocked(*d))
            .collect()
    }
}
