//! Scheduling domain models.
//!
//! Core data types for campaign activity scheduling: the campaign
//! calendar, the store roster, per-store weekday rules, and the
//! structured scheduling result.

mod campaign;
mod schedule;
mod setting;
mod store;

pub use campaign::{iso_weekday, Campaign, DateEvent};
pub use schedule::{ActivitySchedule, Placement, PlacementFailure, PlacementPass, UnplacedStore};
pub use setting::ActivitySetting;
pub use store::{Store, UNASSIGNED_SUPERVISOR};
