//! Campaign activity scheduling for store networks.
//!
//! Assigns each store in a campaign one activity date under hard
//! constraints: hosted weekdays, per-store weekday rules, per-date
//! capacity, and supervisor spacing (no same-supervisor activities on the
//! same or adjacent days). A relaxed fallback pass trades supervisor
//! spacing for coverage, and stores that still cannot be placed are
//! reported with a reason instead of failing the run.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Campaign`, `Store`, `ActivitySetting`,
//!   `ActivitySchedule`, `Placement`, `UnplacedStore`
//! - **`scheduler`**: the two-pass greedy engine and outcome KPIs
//! - **`validation`**: input integrity checks (date range, duplicate IDs,
//!   weekday bounds, orphan settings)
//!
//! # Architecture
//!
//! A pure in-process library: no I/O, no persistence, no concurrency.
//! The caller resolves campaign, roster, settings, and calendar events
//! from storage, invokes the scheduler, and persists the resulting
//! placements after operator confirmation.

pub mod models;
pub mod scheduler;
pub mod validation;
