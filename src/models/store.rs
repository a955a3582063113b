//! Store model.
//!
//! Stores are the units being scheduled: each receives exactly one
//! activity date, or is reported as unplaced. The order of stores in the
//! request is the placement priority.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grouping key for stores with no supervisor on record.
///
/// Stores under this sentinel mutually exclude each other on the same and
/// adjacent days, exactly like a real supervisor group.
pub const UNASSIGNED_SUPERVISOR: &str = "unassigned";

/// A store that hosts at most one activity per campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    /// Unique store identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Supervisor responsible for this store. `None` = unassigned.
    pub supervisor_id: Option<String>,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl Store {
    /// Creates a new store with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            supervisor_id: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the store name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the responsible supervisor.
    pub fn with_supervisor(mut self, supervisor_id: impl Into<String>) -> Self {
        self.supervisor_id = Some(supervisor_id.into());
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Grouping key used by the supervisor exclusion rules.
    ///
    /// Falls back to [`UNASSIGNED_SUPERVISOR`] when no supervisor is set.
    pub fn supervisor_group(&self) -> &str {
        self.supervisor_id.as_deref().unwrap_or(UNASSIGNED_SUPERVISOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_builder() {
        let s = Store::new("s-104")
            .with_name("Riverside Mall")
            .with_supervisor("sup-7")
            .with_attribute("region", "north");

        assert_eq!(s.id, "s-104");
        assert_eq!(s.name, "Riverside Mall");
        assert_eq!(s.supervisor_id.as_deref(), Some("sup-7"));
        assert_eq!(s.attributes.get("region"), Some(&"north".to_string()));
    }

    #[test]
    fn test_supervisor_group() {
        let assigned = Store::new("a").with_supervisor("sup-1");
        assert_eq!(assigned.supervisor_group(), "sup-1");

        let unassigned = Store::new("b");
        assert_eq!(unassigned.supervisor_group(), UNASSIGNED_SUPERVISOR);
    }
}
