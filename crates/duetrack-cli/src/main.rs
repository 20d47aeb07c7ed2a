use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "duetrack", version, about = "DueTrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Deliverable management
    Deliverable {
        #[command(subcommand)]
        action: commands::deliverable::DeliverableAction,
    },
    /// Deliverables due within a horizon (overdue always included)
    Upcoming {
        /// Horizon in days
        #[arg(long, default_value_t = duetrack_core::dashboard::DEFAULT_UPCOMING_DAYS)]
        days: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Urgent subset of the horizon: overdue plus due within 7 days
    Urgent {
        /// Horizon in days (defaults to the configured dashboard window)
        #[arg(long)]
        days: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Bulk import deliverables from a JSON export
    Import {
        /// Path to a JSON array of import records
        file: std::path::PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Project { action } => commands::project::run(action),
        Commands::Deliverable { action } => commands::deliverable::run(action),
        Commands::Upcoming { days, json } => commands::dashboard::run_upcoming(days, json),
        Commands::Urgent { days, json } => commands::dashboard::run_urgent(days, json),
        Commands::Import { file } => commands::import::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
