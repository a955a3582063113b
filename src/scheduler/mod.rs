//! Greedy two-pass scheduler and outcome KPIs.
//!
//! # Algorithm
//!
//! `ActivityScheduler` places stores in request order with a strict pass
//! (weekday rules, day capacity, supervisor same-day and adjacent-day
//! exclusion) and retries the leftovers with a relaxed pass (supervisor
//! spacing dropped). Greedy and non-backtracking by design.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes the outcome for the operator-facing
//! confirmation step: placement rate, relaxed-pass fallbacks, daily load,
//! and residual supervisor conflicts.

mod greedy;
mod kpi;

pub use greedy::{
    ActivityScheduler, ScheduleError, ScheduleRequest, DEFAULT_DAY_CAPACITY,
    DEFAULT_HOST_WEEKDAYS,
};
pub use kpi::ScheduleKpi;
