//! Schedule outcome metrics (KPIs).
//!
//! Computes the figures the operator sees before confirming a schedule:
//! how many stores were placed, how often the relaxed pass had to step in,
//! and how the placements spread across dates and supervisors.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | placed / total stores |
//! | Relaxed Placements | placements produced by the fallback pass |
//! | Peak Daily Load | most placements on any single date |
//! | Same-Day Conflicts | same-supervisor pairs sharing a date |
//! | Adjacent-Day Conflicts | same-supervisor pairs one day apart |
//!
//! Conflict counts are zero whenever the strict pass placed everything;
//! non-zero values quantify what the relaxed pass gave up.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{ActivitySchedule, PlacementPass, Store};

/// Schedule outcome indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Stores in the request.
    pub total_stores: usize,
    /// Stores that received a date.
    pub placed: usize,
    /// Stores that failed both passes.
    pub unplaced: usize,
    /// placed / total (1.0 for an empty roster).
    pub placement_rate: f64,
    /// Placements produced by the relaxed pass.
    pub relaxed_placements: usize,
    /// Placements per date.
    pub load_by_date: BTreeMap<NaiveDate, usize>,
    /// Most placements on any single date.
    pub peak_daily_load: usize,
    /// Same-supervisor placement pairs sharing a date.
    pub same_day_conflicts: usize,
    /// Same-supervisor placement pairs exactly one day apart.
    pub adjacent_day_conflicts: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the store roster it was built for.
    ///
    /// Stores missing from `stores` (not normally possible) count under the
    /// unassigned-supervisor group.
    pub fn calculate(schedule: &ActivitySchedule, stores: &[Store]) -> Self {
        let group_of: HashMap<&str, &str> = stores
            .iter()
            .map(|s| (s.id.as_str(), s.supervisor_group()))
            .collect();

        let load_by_date = schedule.load_by_date();
        let peak_daily_load = load_by_date.values().copied().max().unwrap_or(0);

        // Supervisor-group placement counts per date.
        let mut group_on_date: BTreeMap<NaiveDate, HashMap<&str, usize>> = BTreeMap::new();
        for p in &schedule.placements {
            let group = group_of
                .get(p.store_id.as_str())
                .copied()
                .unwrap_or(crate::models::UNASSIGNED_SUPERVISOR);
            *group_on_date.entry(p.date).or_default().entry(group).or_insert(0) += 1;
        }

        let mut same_day_conflicts = 0;
        let mut adjacent_day_conflicts = 0;
        for (&date, groups) in &group_on_date {
            for (group, &n) in groups {
                same_day_conflicts += n * (n - 1) / 2;
                // Count each adjacent pair once, from the earlier date.
                if let Some(next) = date.succ_opt() {
                    if let Some(m) = group_on_date.get(&next).and_then(|g| g.get(group)) {
                        adjacent_day_conflicts += n * m;
                    }
                }
            }
        }

        let placed = schedule.placement_count();
        let unplaced = schedule.unplaced_count();
        let total_stores = stores.len();
        let placement_rate = if total_stores == 0 {
            1.0
        } else {
            placed as f64 / total_stores as f64
        };
        let relaxed_placements = schedule
            .placements
            .iter()
            .filter(|p| p.pass == PlacementPass::Relaxed)
            .count();

        Self {
            total_stores,
            placed,
            unplaced,
            placement_rate,
            relaxed_placements,
            load_by_date,
            peak_daily_load,
            same_day_conflicts,
            adjacent_day_conflicts,
        }
    }

    /// Whether every store was placed.
    pub fn fully_placed(&self) -> bool {
        self.unplaced == 0
    }

    /// Whether no supervisor shares a date or adjacent dates.
    pub fn is_conflict_free(&self) -> bool {
        self.same_day_conflicts == 0 && self.adjacent_day_conflicts == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Placement, PlacementFailure, UnplacedStore};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store(id: &str, supervisor: &str) -> Store {
        Store::new(id).with_supervisor(supervisor)
    }

    #[test]
    fn test_kpi_basic() {
        let stores = vec![store("a", "sup-1"), store("b", "sup-2")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::strict("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::strict("b", date(2024, 3, 6)));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert_eq!(kpi.total_stores, 2);
        assert_eq!(kpi.placed, 2);
        assert_eq!(kpi.unplaced, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.relaxed_placements, 0);
        assert_eq!(kpi.peak_daily_load, 1);
        assert!(kpi.fully_placed());
        assert!(kpi.is_conflict_free());
    }

    #[test]
    fn test_kpi_partial_placement() {
        let stores = vec![store("a", "sup-1"), store("b", "sup-1"), store("c", "sup-1")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::strict("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::relaxed("b", date(2024, 3, 2)));
        schedule.add_unplaced(UnplacedStore::new("c", PlacementFailure::CapacityExhausted));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert_eq!(kpi.placed, 2);
        assert_eq!(kpi.unplaced, 1);
        assert!((kpi.placement_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.relaxed_placements, 1);
        assert!(!kpi.fully_placed());
    }

    #[test]
    fn test_kpi_same_day_conflicts() {
        // Two sup-1 stores on one date = one conflicting pair.
        let stores = vec![store("a", "sup-1"), store("b", "sup-1"), store("c", "sup-2")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::strict("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::relaxed("b", date(2024, 3, 2)));
        schedule.add_placement(Placement::strict("c", date(2024, 3, 2)));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert_eq!(kpi.same_day_conflicts, 1);
        assert_eq!(kpi.adjacent_day_conflicts, 0);
        assert!(!kpi.is_conflict_free());
        assert_eq!(kpi.peak_daily_load, 3);
    }

    #[test]
    fn test_kpi_adjacent_day_conflicts() {
        let stores = vec![store("a", "sup-1"), store("b", "sup-1")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::strict("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::relaxed("b", date(2024, 3, 3)));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert_eq!(kpi.same_day_conflicts, 0);
        assert_eq!(kpi.adjacent_day_conflicts, 1);
        assert!(!kpi.is_conflict_free());
    }

    #[test]
    fn test_kpi_gap_is_not_adjacent() {
        let stores = vec![store("a", "sup-1"), store("b", "sup-1")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::strict("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::strict("b", date(2024, 3, 6)));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert!(kpi.is_conflict_free());
    }

    #[test]
    fn test_kpi_unassigned_group_conflicts() {
        // Both stores fall under the unassigned sentinel group.
        let stores = vec![Store::new("a"), Store::new("b")];
        let mut schedule = ActivitySchedule::new();
        schedule.add_placement(Placement::relaxed("a", date(2024, 3, 2)));
        schedule.add_placement(Placement::relaxed("b", date(2024, 3, 2)));

        let kpi = ScheduleKpi::calculate(&schedule, &stores);
        assert_eq!(kpi.same_day_conflicts, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&ActivitySchedule::new(), &[]);
        assert_eq!(kpi.total_stores, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.peak_daily_load, 0);
        assert!(kpi.fully_placed());
        assert!(kpi.is_conflict_free());
    }
}
