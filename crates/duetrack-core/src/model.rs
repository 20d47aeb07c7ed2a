//! Domain types for projects and deliverables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::urgency::UrgencyTier;

/// A named grouping of deliverables.
///
/// Names are unique (case-sensitive); the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// A single due-dated obligation owned by a project.
///
/// Immutable after creation. `frequency` is an opaque label ("M", "Q",
/// "A", ...) and is never interpreted computationally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deliverable {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub due_date: NaiveDate,
    pub frequency: Option<String>,
    pub project_manager: String,
}

/// Fields required to create a deliverable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeliverable {
    pub project_id: i64,
    pub description: String,
    pub due_date: NaiveDate,
    pub frequency: Option<String>,
    pub project_manager: String,
}

/// A deliverable joined to its project name and annotated with the
/// computed urgency, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverableView {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub frequency: Option<String>,
    pub project_manager: String,
    pub day_offset: i64,
    pub tier: UrgencyTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliverable_serialization() {
        let deliverable = Deliverable {
            id: 1,
            project_id: 7,
            description: "Quarterly compliance report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            frequency: Some("Q".to_string()),
            project_manager: "R. Vance".to_string(),
        };

        let json = serde_json::to_string(&deliverable).unwrap();
        assert!(json.contains("\"2026-03-31\""));
        let decoded: Deliverable = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, deliverable);
    }

    #[test]
    fn frequency_is_optional() {
        let json = r#"{
            "id": 2,
            "project_id": 7,
            "description": "Annual summary",
            "due_date": "2026-12-01",
            "frequency": null,
            "project_manager": "R. Vance"
        }"#;
        let decoded: Deliverable = serde_json::from_str(json).unwrap();
        assert!(decoded.frequency.is_none());
    }
}
