//! Per-store weekday rules.
//!
//! An `ActivitySetting` restricts which ISO weekdays (1 = Monday ..
//! 7 = Sunday) a store may host on. `forbidden_days` always wins; a
//! non-empty `allowed_days` additionally limits the store to exactly those
//! weekdays. A store without a setting is unrestricted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::campaign::iso_weekday;

/// Weekday rules for a single store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySetting {
    /// If non-empty, the store may ONLY host on these weekdays.
    pub allowed_days: BTreeSet<u8>,
    /// The store may NEVER host on these weekdays.
    pub forbidden_days: BTreeSet<u8>,
}

impl ActivitySetting {
    /// Creates an unrestricted setting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allowed weekdays.
    pub fn with_allowed_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.allowed_days = days.into_iter().collect();
        self
    }

    /// Sets the forbidden weekdays.
    pub fn with_forbidden_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.forbidden_days = days.into_iter().collect();
        self
    }

    /// Whether this setting imposes no restriction at all.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_days.is_empty() && self.forbidden_days.is_empty()
    }

    /// Whether the store may host on the given ISO weekday.
    pub fn permits_weekday(&self, weekday: u8) -> bool {
        if self.forbidden_days.contains(&weekday) {
            return false;
        }
        self.allowed_days.is_empty() || self.allowed_days.contains(&weekday)
    }

    /// Whether the store may host on the given date.
    #[inline]
    pub fn permits_date(&self, date: NaiveDate) -> bool {
        self.permits_weekday(iso_weekday(date))
    }
}
