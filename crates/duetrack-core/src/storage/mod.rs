mod config;
pub mod deliverable_db;

pub use config::{Config, DashboardConfig};
pub use deliverable_db::DeliverableDb;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::{Deliverable, NewDeliverable, Project};

/// Durable record of projects and their deliverables.
///
/// Injected into the aggregation functions so the read logic never
/// owns a connection; lifecycle belongs to the caller.
pub trait DeliverableStore {
    /// Look up a project by id, `StoreError::ProjectNotFound` if absent.
    fn find_project(&self, id: i64) -> Result<Project>;

    /// All projects, ordered by name.
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Create a project, resolving a duplicate name to the existing
    /// project's identity so bulk imports are re-runnable.
    fn create_project(&self, name: &str) -> Result<Project>;

    /// Create a deliverable under an existing project.
    fn create_deliverable(&self, new: &NewDeliverable) -> Result<Deliverable>;

    /// A project's deliverables ordered by due date (ties by id).
    ///
    /// `StoreError::ProjectNotFound` if the project does not exist;
    /// empty if it exists but owns nothing.
    fn deliverables_by_project(&self, project_id: i64) -> Result<Vec<Deliverable>>;

    /// All deliverables (with their project's name) due on or before
    /// `today + days`, ordered by due date (ties by id).
    ///
    /// The window has no lower bound: overdue rows are always included.
    fn deliverables_due_within(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<(Deliverable, String)>>;
}

/// Returns `~/.config/duetrack[-dev]/` based on DUETRACK_ENV, or the
/// directory named by DUETRACK_DATA_DIR when set.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DUETRACK_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DUETRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("duetrack-dev")
    } else {
        base_dir.join("duetrack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
