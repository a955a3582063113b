//! Schedule (result) model.
//!
//! The scheduler returns a structured partial result: stores that received
//! an activity date and stores that could not be placed, each with a
//! failure reason. Partial success is the expected common outcome, not an
//! error — the caller summarizes `unplaced` to the operator before
//! persisting `placements`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which pass produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPass {
    /// All constraints enforced, including supervisor spacing.
    Strict,
    /// Supervisor same-day and adjacent-day exclusion dropped.
    Relaxed,
}

/// A store-to-date assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    /// Assigned store ID.
    pub store_id: String,
    /// Activity date.
    pub date: NaiveDate,
    /// Pass that produced this placement.
    pub pass: PlacementPass,
}

impl Placement {
    /// Creates a strict-pass placement.
    pub fn strict(store_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            store_id: store_id.into(),
            date,
            pass: PlacementPass::Strict,
        }
    }

    /// Creates a relaxed-pass placement.
    pub fn relaxed(store_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            store_id: store_id.into(),
            date,
            pass: PlacementPass::Relaxed,
        }
    }
}

/// Why a store could not be placed.
///
/// When several reasons apply across the scanned dates, the most specific
/// one is reported: weekday rules over capacity over supervisor conflicts
/// over the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementFailure {
    /// No eligible date remains in the campaign window.
    NoDateAvailable,
    /// Every otherwise-eligible date collides with another activity of the
    /// same supervisor on the same or an adjacent day.
    SupervisorConflict,
    /// Every date permitted by the weekday rules is already at capacity.
    CapacityExhausted,
    /// The store's weekday rules reject every candidate date.
    WeekdayRestricted,
}

impl PlacementFailure {
    /// Specificity rank used to pick the reported reason (higher wins).
    pub(crate) fn specificity(self) -> u8 {
        match self {
            Self::NoDateAvailable => 0,
            Self::SupervisorConflict => 1,
            Self::CapacityExhausted => 2,
            Self::WeekdayRestricted => 3,
        }
    }

    /// Operator-facing description.
    pub fn description(self) -> &'static str {
        match self {
            Self::NoDateAvailable => "no eligible date remains in the campaign window",
            Self::SupervisorConflict => {
                "every eligible date collides with another activity of the same supervisor"
            }
            Self::CapacityExhausted => {
                "every eligible date is already at capacity, even after relaxing supervisor spacing"
            }
            Self::WeekdayRestricted => "the store's weekday rules reject every candidate date",
        }
    }
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A store left without an activity date after both passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnplacedStore {
    /// Store ID.
    pub store_id: String,
    /// Failure classification.
    pub failure: PlacementFailure,
    /// Human-readable reason.
    pub message: String,
}

impl UnplacedStore {
    /// Creates an unplaced record with the failure's default message.
    pub fn new(store_id: impl Into<String>, failure: PlacementFailure) -> Self {
        Self {
            store_id: store_id.into(),
            failure,
            message: failure.description().to_string(),
        }
    }
}

/// A complete scheduling result.
///
/// Every input store appears in exactly one of `placements` or `unplaced`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySchedule {
    /// Store-to-date assignments from both passes.
    pub placements: Vec<Placement>,
    /// Stores that failed both passes.
    pub unplaced: Vec<UnplacedStore>,
}

impl ActivitySchedule {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement.
    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Records an unplaced store.
    pub fn add_unplaced(&mut self, unplaced: UnplacedStore) {
        self.unplaced.push(unplaced);
    }

    /// Finds the placement for a given store.
    pub fn placement_for_store(&self, store_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.store_id == store_id)
    }

    /// Returns all placements on a given date.
    pub fn placements_on(&self, date: NaiveDate) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.date == date).collect()
    }

    /// Number of placements per date, for dates with at least one.
    pub fn load_by_date(&self) -> BTreeMap<NaiveDate, usize> {
        let mut load = BTreeMap::new();
        for p in &self.placements {
            *load.entry(p.date).or_insert(0) += 1;
        }
        load
    }

    /// Number of placed stores.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of unplaced stores.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Total stores accounted for (placed + unplaced).
    pub fn store_count(&self) -> usize {
        self.placements.len() + self.unplaced.len()
    }

    /// Whether every store received a date.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}
