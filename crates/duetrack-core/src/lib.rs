//! # DueTrack Core Library
//!
//! This library provides the core business logic for DueTrack, a
//! tracker for recurring organizational deliverables grouped under
//! named projects. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Urgency Classifier**: a pure function over a due date and a
//!   reference time that assigns a discrete urgency tier
//! - **Storage**: SQLite-based project/deliverable storage behind the
//!   [`DeliverableStore`] trait, and TOML-based configuration
//! - **Dashboard**: stateless aggregation reads (by project, upcoming
//!   horizon, urgent subset) over an injected store
//! - **Import**: idempotent bulk loading of exported rows, with
//!   spreadsheet due-date normalization
//!
//! ## Key Components
//!
//! - [`classify`]: urgency tier and day offset for one due date
//! - [`DeliverableDb`]: SQLite store implementation
//! - [`dashboard`]: aggregation queries
//! - [`import_records`]: bulk import

pub mod dashboard;
pub mod dates;
pub mod error;
pub mod import;
pub mod model;
pub mod storage;
pub mod urgency;

pub use dashboard::{project_deliverables, upcoming, urgent_within};
pub use dates::{normalize, RawDate};
pub use error::{ConfigError, CoreError, DateError, StoreError, ValidationError};
pub use import::{import_records, ImportRecord, ImportSummary};
pub use model::{Deliverable, DeliverableView, NewDeliverable, Project};
pub use storage::{Config, DeliverableDb, DeliverableStore};
pub use urgency::{classify, Classification, UrgencyTier};
