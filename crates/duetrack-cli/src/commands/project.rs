//! Project management commands for CLI.

use clap::Subcommand;
use duetrack_core::{DeliverableDb, DeliverableStore};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project (idempotent by name)
    Create {
        /// Project name
        name: String,
    },
    /// List all projects
    List,
    /// Show a single project with its deliverables
    Show {
        /// Project ID
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = DeliverableDb::open()?;

    match action {
        ProjectAction::Create { name } => {
            let project = db.create_project(&name)?;
            println!("Project: {} (id {})", project.name, project.id);
        }
        ProjectAction::List => {
            let projects = db.list_projects()?;
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        ProjectAction::Show { id, json } => {
            let project = db.find_project(id)?;
            let views = duetrack_core::project_deliverables(&db, id, chrono::Utc::now())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                let colors = duetrack_core::Config::load()?.dashboard.show_colors;
                println!("{} -- {} deliverables", project.name, views.len());
                super::print_views(&views, colors);
            }
        }
    }
    Ok(())
}
