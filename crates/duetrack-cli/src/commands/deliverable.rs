//! Deliverable management commands for CLI.

use clap::Subcommand;
use duetrack_core::{DeliverableDb, DeliverableStore, NewDeliverable, RawDate};

#[derive(Subcommand)]
pub enum DeliverableAction {
    /// Add a deliverable to a project
    Add {
        /// Project ID
        #[arg(long)]
        project: i64,
        /// What is owed
        #[arg(long)]
        description: String,
        /// Due date as M/D/YYYY
        #[arg(long)]
        due: String,
        /// Opaque frequency label (e.g. M, Q, A)
        #[arg(long)]
        frequency: Option<String>,
        /// Responsible project manager
        #[arg(long)]
        manager: String,
    },
    /// List a project's deliverables ordered by due date
    List {
        /// Project ID
        project: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DeliverableAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = DeliverableDb::open()?;

    match action {
        DeliverableAction::Add {
            project,
            description,
            due,
            frequency,
            manager,
        } => {
            let due_date = duetrack_core::normalize(&RawDate::Text(due))?;
            let deliverable = db.create_deliverable(&NewDeliverable {
                project_id: project,
                description,
                due_date,
                frequency,
                project_manager: manager,
            })?;
            println!("Deliverable created: {}", deliverable.id);
            println!("{}", serde_json::to_string_pretty(&deliverable)?);
        }
        DeliverableAction::List { project, json } => {
            let views = duetrack_core::project_deliverables(&db, project, chrono::Utc::now())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                let colors = duetrack_core::Config::load()?.dashboard.show_colors;
                super::print_views(&views, colors);
            }
        }
    }
    Ok(())
}
