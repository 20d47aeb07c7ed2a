//! Bulk import of deliverable rows.
//!
//! Consumes rows already extracted from a spreadsheet export, creates
//! projects idempotently (a duplicate name resolves to the existing
//! project), normalizes due dates, and inserts deliverables. The same
//! file can be imported twice without creating duplicate projects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dates::{normalize, RawDate};
use crate::error::{Result, ValidationError};
use crate::model::NewDeliverable;
use crate::storage::DeliverableStore;

/// One row of source data, as exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecord {
    pub project: String,
    pub description: String,
    pub due_date: RawDate,
    #[serde(default)]
    pub frequency: Option<String>,
    pub project_manager: String,
}

/// Counts reported after a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub projects_created: usize,
    pub deliverables_created: usize,
}

/// An import failure, tied to the offending record when there is one.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Listing existing projects failed before any record was read.
    #[error("import preload failed: {0}")]
    Preload(#[source] crate::error::CoreError),

    /// A record failed validation or insertion; `index` is zero-based.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: crate::error::CoreError,
    },
}

/// Import records into the store.
///
/// Each record is validated and its due date normalized before any
/// store mutation for that record; the first failure aborts the import
/// and reports the offending record's index.
pub fn import_records<S: DeliverableStore + ?Sized>(
    store: &S,
    records: &[ImportRecord],
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();
    // Project name -> id, preloaded so re-runs count zero creations
    // and each new name is created at most once per run.
    let mut project_ids: HashMap<String, i64> = store
        .list_projects()
        .map_err(ImportError::Preload)?
        .into_iter()
        .map(|p| (p.name, p.id))
        .collect();

    for (index, record) in records.iter().enumerate() {
        import_one(store, record, &mut project_ids, &mut summary)
            .map_err(|source| ImportError::Record { index, source })?;
    }
    Ok(summary)
}

fn import_one<S: DeliverableStore + ?Sized>(
    store: &S,
    record: &ImportRecord,
    project_ids: &mut HashMap<String, i64>,
    summary: &mut ImportSummary,
) -> Result<()> {
    if record.project.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "project" }.into());
    }
    let due_date = normalize(&record.due_date)?;

    let project_id = match project_ids.get(&record.project) {
        Some(id) => *id,
        None => {
            let project = store.create_project(&record.project)?;
            summary.projects_created += 1;
            project_ids.insert(record.project.clone(), project.id);
            project.id
        }
    };

    store.create_deliverable(&NewDeliverable {
        project_id,
        description: record.description.clone(),
        due_date,
        frequency: record.frequency.clone(),
        project_manager: record.project_manager.clone(),
    })?;
    summary.deliverables_created += 1;
    Ok(())
}
