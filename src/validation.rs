//! Input validation for scheduling requests.
//!
//! Checks structural integrity of the campaign, roster, and settings
//! before scheduling. Detects:
//! - Inverted campaign date ranges
//! - Duplicate store IDs
//! - Weekday values outside 1..=7 (settings and host-weekday policy)
//! - Settings referencing unknown stores
//! - Settings whose allowed days are all forbidden
//! - Zero day capacity

use crate::scheduler::ScheduleRequest;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Campaign end precedes campaign start.
    InvertedDateRange,
    /// Two stores share the same ID.
    DuplicateId,
    /// A weekday number is outside 1..=7.
    InvalidWeekday,
    /// A setting references a store that is not in the roster.
    UnknownStore,
    /// A setting's allowed days are all forbidden; the store can never
    /// be placed.
    UnsatisfiableSetting,
    /// The per-date capacity is zero.
    ZeroDayCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. Campaign start does not exceed campaign end
/// 2. Per-date capacity is at least 1
/// 3. Host weekdays are within 1..=7
/// 4. No duplicate store IDs
/// 5. Every setting references a store in the roster
/// 6. Setting weekdays are within 1..=7
/// 7. No setting forbids its entire allowed set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.campaign.end < request.campaign.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedDateRange,
            format!(
                "campaign ends {} before it starts {}",
                request.campaign.end, request.campaign.start
            ),
        ));
    }

    if request.max_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDayCapacity,
            "per-date capacity is zero; no store can be placed",
        ));
    }

    for &day in &request.host_weekdays {
        if !(1..=7).contains(&day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeekday,
                format!("host weekday {day} is outside 1..=7"),
            ));
        }
    }

    let mut store_ids = HashSet::new();
    for store in &request.stores {
        if !store_ids.insert(store.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate store ID: {}", store.id),
            ));
        }
    }

    for (store_id, setting) in &request.settings {
        if !store_ids.contains(store_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStore,
                format!("Setting references unknown store '{store_id}'"),
            ));
        }

        for &day in setting.allowed_days.iter().chain(&setting.forbidden_days) {
            if !(1..=7).contains(&day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!("Setting for store '{store_id}' uses weekday {day} outside 1..=7"),
                ));
            }
        }

        if !setting.allowed_days.is_empty()
            && setting.allowed_days.is_subset(&setting.forbidden_days)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsatisfiableSetting,
                format!("Store '{store_id}' forbids every weekday it allows"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
