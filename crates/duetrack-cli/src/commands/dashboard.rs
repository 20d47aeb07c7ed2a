//! Horizon and urgent-subset listings.

use duetrack_core::{Config, DeliverableDb};

pub fn run_upcoming(days: i64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = DeliverableDb::open()?;
    let views = duetrack_core::upcoming(&db, days, chrono::Utc::now())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        let colors = Config::load()?.dashboard.show_colors;
        println!("{} deliverable(s) due within {days} day(s)", views.len());
        super::print_views(&views, colors);
    }
    Ok(())
}

pub fn run_urgent(days: Option<i64>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let days = days.unwrap_or(config.dashboard.window_days);
    let db = DeliverableDb::open()?;
    let views = duetrack_core::urgent_within(&db, days, chrono::Utc::now())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        println!("{} urgent deliverable(s) in the {days}-day window", views.len());
        super::print_views(&views, config.dashboard.show_colors);
    }
    Ok(())
}
