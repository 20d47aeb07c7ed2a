pub mod dashboard;
pub mod deliverable;
pub mod import;
pub mod project;

use duetrack_core::{DeliverableView, UrgencyTier};

/// ANSI color for a tier, tracking the dashboard palette.
fn tier_ansi(tier: UrgencyTier) -> &'static str {
    match tier {
        UrgencyTier::Overdue => "\x1b[31m",
        UrgencyTier::Urgent => "\x1b[33m",
        UrgencyTier::Near => "\x1b[34m",
        UrgencyTier::Normal => "\x1b[0m",
    }
}

/// Print classified rows as a table, optionally colorized by tier.
pub(crate) fn print_views(views: &[DeliverableView], colors: bool) {
    for v in views {
        let due = v.due_date.format("%Y-%m-%d");
        let frequency = v.frequency.as_deref().unwrap_or("-");
        if colors {
            println!(
                "{}{:<10} {:>4}d  [{}] {} -- {} ({}){}",
                tier_ansi(v.tier),
                due,
                v.day_offset,
                v.tier.as_str(),
                v.description,
                v.project_name,
                frequency,
                "\x1b[0m",
            );
        } else {
            println!(
                "{:<10} {:>4}d  [{}] {} -- {} ({})",
                due,
                v.day_offset,
                v.tier.as_str(),
                v.description,
                v.project_name,
                frequency,
            );
        }
    }
}
