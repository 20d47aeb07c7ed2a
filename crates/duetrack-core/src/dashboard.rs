//! Aggregation queries over the deliverable store.
//!
//! Stateless reads: the store returns rows ordered by due date, the
//! classifier annotates each row independently of storage. The urgent
//! subset is always derived by filtering one `upcoming` fetch, never
//! by a second store query, so the two views cannot disagree about
//! what counts as urgent.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Deliverable, DeliverableView};
use crate::storage::DeliverableStore;
use crate::urgency::{classify, UrgencyTier};

/// Default horizon for the upcoming listing.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Default horizon fetched for the urgent dashboard view.
pub const DEFAULT_DASHBOARD_DAYS: i64 = 14;

fn annotate(deliverable: Deliverable, project_name: String, now: DateTime<Utc>) -> DeliverableView {
    let c = classify(deliverable.due_date, now);
    DeliverableView {
        id: deliverable.id,
        project_id: deliverable.project_id,
        project_name,
        description: deliverable.description,
        due_date: deliverable.due_date,
        frequency: deliverable.frequency,
        project_manager: deliverable.project_manager,
        day_offset: c.day_offset,
        tier: c.tier,
    }
}

/// A project's deliverables, classified for display.
///
/// Ordered by due date ascending, ties by id. Fails with
/// `StoreError::ProjectNotFound` for an unknown project; a project
/// with no deliverables yields an empty sequence.
pub fn project_deliverables<S: DeliverableStore + ?Sized>(
    store: &S,
    project_id: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DeliverableView>> {
    let project = store.find_project(project_id)?;
    let deliverables = store.deliverables_by_project(project_id)?;
    Ok(deliverables
        .into_iter()
        .map(|d| annotate(d, project.name.clone(), now))
        .collect())
}

/// All deliverables due within `days` of now, classified for display.
///
/// The window is open-ended below: overdue deliverables appear in
/// every horizon, whatever `days` is.
pub fn upcoming<S: DeliverableStore + ?Sized>(
    store: &S,
    days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DeliverableView>> {
    let rows = store.deliverables_due_within(days, now.date_naive())?;
    Ok(rows
        .into_iter()
        .map(|(d, project_name)| annotate(d, project_name, now))
        .collect())
}

/// The urgent subset of the `days` window: overdue rows plus anything
/// due within 7 days.
///
/// Derived from a single [`upcoming`] fetch plus classification.
pub fn urgent_within<S: DeliverableStore + ?Sized>(
    store: &S,
    days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DeliverableView>> {
    let views = upcoming(store, days, now)?;
    Ok(views
        .into_iter()
        .filter(|v| matches!(v.tier, UrgencyTier::Overdue | UrgencyTier::Urgent))
        .collect())
}
