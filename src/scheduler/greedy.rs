//! Two-pass greedy activity scheduler.
//!
//! # Algorithm
//!
//! 1. Build the candidate date pool: campaign dates on a hosted weekday
//!    with no blocking event. An empty pool is terminal.
//! 2. Strict pass, stores in input order: place each store on the first
//!    pool date that passes its weekday rules, has spare capacity, and
//!    hosts no same-supervisor activity on the same or an adjacent day.
//! 3. Relaxed pass over the leftovers, same order: supervisor spacing is
//!    dropped; weekday rules and capacity still hold.
//!
//! Greedy and non-backtracking: earlier stores get first pick of dates and
//! are never revisited to make room for later ones, so a globally better
//! assignment may exist. The pass structure encodes the operational
//! preference for placing a store on a suboptimal day over leaving it
//! unscheduled.
//!
//! # Complexity
//! O(s * d) where s = stores, d = candidate dates.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::error::Error;
use std::fmt;

use chrono::NaiveDate;

use crate::models::{
    ActivitySchedule, ActivitySetting, Campaign, Placement, PlacementFailure, Store, UnplacedStore,
};

/// Weekdays eligible to host an activity unless overridden:
/// Wednesday, Saturday, Sunday (ISO numbers).
pub const DEFAULT_HOST_WEEKDAYS: [u8; 3] = [3, 6, 7];

/// Activities allowed on a single date unless overridden.
pub const DEFAULT_DAY_CAPACITY: usize = 2;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Campaign window and calendar events.
    pub campaign: Campaign,
    /// Stores in placement-priority order (first store gets first pick).
    pub stores: Vec<Store>,
    /// Per-store weekday rules (sparse; absent = unrestricted).
    pub settings: HashMap<String, ActivitySetting>,
    /// Weekdays eligible to host any activity.
    pub host_weekdays: BTreeSet<u8>,
    /// Maximum activities on a single date.
    pub max_per_day: usize,
}

impl ScheduleRequest {
    /// Creates a request with the default host weekdays and day capacity.
    pub fn new(campaign: Campaign, stores: Vec<Store>) -> Self {
        Self {
            campaign,
            stores,
            settings: HashMap::new(),
            host_weekdays: DEFAULT_HOST_WEEKDAYS.into_iter().collect(),
            max_per_day: DEFAULT_DAY_CAPACITY,
        }
    }

    /// Attaches a weekday rule to a store.
    pub fn with_setting(mut self, store_id: impl Into<String>, setting: ActivitySetting) -> Self {
        self.settings.insert(store_id.into(), setting);
        self
    }

    /// Overrides the hosted weekdays.
    pub fn with_host_weekdays(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.host_weekdays = days.into_iter().collect();
        self
    }

    /// Overrides the per-date capacity.
    pub fn with_max_per_day(mut self, max_per_day: usize) -> Self {
        self.max_per_day = max_per_day;
        self
    }
}

/// Terminal scheduling failure.
///
/// Per-store placement failures are not errors; they are reported inside
/// the result. Only an empty candidate pool aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No campaign date is on a hosted weekday and free of blocking events.
    EmptyCandidatePool {
        /// Campaign start.
        start: NaiveDate,
        /// Campaign end.
        end: NaiveDate,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidatePool { start, end } => write!(
                f,
                "no date between {start} and {end} falls on a hosted weekday without a blocking event"
            ),
        }
    }
}

impl Error for ScheduleError {}

/// Per-date bookkeeping for one scheduler invocation.
///
/// Seeded only for candidate-pool dates. Lookups for any other date (e.g.
/// an adjacency probe on a neighbor outside the pool) report an empty day.
#[derive(Debug, Default)]
struct DayLedger {
    load: HashMap<NaiveDate, usize>,
    supervisors: HashMap<NaiveDate, HashSet<String>>,
}

impl DayLedger {
    fn seeded(pool: &[NaiveDate]) -> Self {
        let mut ledger = Self::default();
        for &date in pool {
            ledger.load.insert(date, 0);
            ledger.supervisors.insert(date, HashSet::new());
        }
        ledger
    }

    fn load_on(&self, date: NaiveDate) -> usize {
        self.load.get(&date).copied().unwrap_or(0)
    }

    fn has_supervisor(&self, date: NaiveDate, group: &str) -> bool {
        self.supervisors
            .get(&date)
            .map_or(false, |s| s.contains(group))
    }

    /// Whether the group is booked one calendar day before or after.
    fn has_adjacent_supervisor(&self, date: NaiveDate, group: &str) -> bool {
        date.pred_opt()
            .map_or(false, |d| self.has_supervisor(d, group))
            || date
                .succ_opt()
                .map_or(false, |d| self.has_supervisor(d, group))
    }

    fn record(&mut self, date: NaiveDate, group: &str) {
        *self.load.entry(date).or_insert(0) += 1;
        self.supervisors
            .entry(date)
            .or_default()
            .insert(group.to_string());
    }
}

/// Two-pass greedy activity scheduler.
///
/// Deterministic: identical inputs always produce identical placements,
/// since stores are scanned in input order and dates in chronological
/// order.
///
/// # Example
///
/// ```
/// use campaign_schedule::models::{Campaign, Store};
/// use campaign_schedule::scheduler::{ActivityScheduler, ScheduleRequest};
/// use chrono::NaiveDate;
///
/// let campaign = Campaign::new(
///     "spring-2024",
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// let stores = vec![
///     Store::new("s-001").with_supervisor("sup-1"),
///     Store::new("s-002").with_supervisor("sup-1"),
/// ];
/// let request = ScheduleRequest::new(campaign, stores);
///
/// let schedule = ActivityScheduler::new().schedule(&request).unwrap();
/// assert!(schedule.is_complete());
/// assert_eq!(schedule.placement_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActivityScheduler;

impl ActivityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules every store in the request.
    ///
    /// Returns the partial result in all cases except an empty candidate
    /// date pool. Every input store ends up in exactly one of
    /// `placements` or `unplaced`.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ActivitySchedule, ScheduleError> {
        let pool = request.campaign.candidate_dates(&request.host_weekdays);
        if pool.is_empty() {
            return Err(ScheduleError::EmptyCandidatePool {
                start: request.campaign.start,
                end: request.campaign.end,
            });
        }

        let mut ledger = DayLedger::seeded(&pool);
        let mut schedule = ActivitySchedule::new();
        let mut leftovers: Vec<usize> = Vec::new();

        for (idx, store) in request.stores.iter().enumerate() {
            let setting = request.settings.get(&store.id);
            match find_date(store, setting, &pool, &ledger, request.max_per_day, true) {
                Ok(date) => {
                    ledger.record(date, store.supervisor_group());
                    schedule.add_placement(Placement::strict(&store.id, date));
                }
                Err(_) => leftovers.push(idx),
            }
        }

        for idx in leftovers {
            let store = &request.stores[idx];
            let setting = request.settings.get(&store.id);
            match find_date(store, setting, &pool, &ledger, request.max_per_day, false) {
                Ok(date) => {
                    ledger.record(date, store.supervisor_group());
                    schedule.add_placement(Placement::relaxed(&store.id, date));
                }
                Err(failure) => schedule.add_unplaced(UnplacedStore::new(&store.id, failure)),
            }
        }

        Ok(schedule)
    }
}

/// Finds the first pool date admitting the store, or the most specific
/// failure seen across the scan.
fn find_date(
    store: &Store,
    setting: Option<&ActivitySetting>,
    pool: &[NaiveDate],
    ledger: &DayLedger,
    max_per_day: usize,
    strict: bool,
) -> Result<NaiveDate, PlacementFailure> {
    let mut failure = PlacementFailure::NoDateAvailable;
    for &date in pool {
        match rejection(store, setting, date, ledger, max_per_day, strict) {
            None => return Ok(date),
            Some(f) if f.specificity() > failure.specificity() => failure = f,
            Some(_) => {}
        }
    }
    Err(failure)
}

/// Why `date` cannot host `store`, or `None` if it can.
///
/// Check order: weekday rules, capacity, then (strict only) same-day and
/// adjacent-day supervisor exclusion.
fn rejection(
    store: &Store,
    setting: Option<&ActivitySetting>,
    date: NaiveDate,
    ledger: &DayLedger,
    max_per_day: usize,
    strict: bool,
) -> Option<PlacementFailure> {
    if let Some(setting) = setting {
        if !setting.permits_date(date) {
            return Some(PlacementFailure::WeekdayRestricted);
        }
    }
    if ledger.load_on(date) >= max_per_day {
        return Some(PlacementFailure::CapacityExhausted);
    }
    if strict {
        let group = store.supervisor_group();
        if ledger.has_supervisor(date, group) || ledger.has_adjacent_supervisor(date, group) {
            return Some(PlacementFailure::SupervisorConflict);
        }
    }
    None
}
