//! Bulk import from a JSON export.

use std::path::Path;

use duetrack_core::{DeliverableDb, ImportRecord};

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(file)?;
    let records: Vec<ImportRecord> = serde_json::from_str(&raw)?;

    let db = DeliverableDb::open()?;
    let summary = duetrack_core::import_records(&db, &records)?;

    println!("Imported {} deliverable(s)", summary.deliverables_created);
    println!("Created {} new project(s)", summary.projects_created);
    Ok(())
}
