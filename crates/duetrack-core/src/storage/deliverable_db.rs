//! SQLite-based storage for projects and deliverables.
//!
//! Due dates are persisted as `YYYY-MM-DD` TEXT, so lexicographic
//! comparison in SQL matches calendar order. Every listing query
//! orders by `due_date, id` so ties resolve by creation order
//! regardless of storage engine internals.

use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::{DateError, Result, StoreError, ValidationError};
use crate::model::{Deliverable, NewDeliverable, Project};
use crate::storage::DeliverableStore;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest storable due date.
///
/// Due dates compare as TEXT, which only matches calendar order while
/// `%Y` stays four digits; years outside 0..=9999 get a sign prefix
/// that sorts before every digit.
fn max_due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Parse a stored `YYYY-MM-DD` column value.
fn parse_due_date(idx: usize, s: &str) -> std::result::Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(s, DUE_DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Build a Deliverable from a `SELECT id, project_id, description,
/// due_date, frequency, project_manager` row.
fn row_to_deliverable(row: &rusqlite::Row) -> std::result::Result<Deliverable, rusqlite::Error> {
    let due_date_str: String = row.get(3)?;
    Ok(Deliverable {
        id: row.get(0)?,
        project_id: row.get(1)?,
        description: row.get(2)?,
        due_date: parse_due_date(3, &due_date_str)?,
        frequency: row.get(4)?,
        project_manager: row.get(5)?,
    })
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field }.into());
    }
    Ok(())
}

/// SQLite database for deliverable storage.
///
/// Stores projects and their deliverables.
pub struct DeliverableDb {
    conn: Connection,
}

impl DeliverableDb {
    /// Open the database at `~/.config/duetrack/duetrack.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("duetrack.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate().map_err(StoreError::from)?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::from)?;
        let db = Self { conn };
        db.migrate().map_err(StoreError::from)?;
        Ok(db)
    }

    fn migrate(&self) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS projects (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS deliverables (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id      INTEGER NOT NULL REFERENCES projects(id),
                description     TEXT NOT NULL,
                due_date        TEXT NOT NULL,
                frequency       TEXT,
                project_manager TEXT NOT NULL
            );

            -- Create indexes for common query patterns
            CREATE INDEX IF NOT EXISTS idx_deliverables_due_date ON deliverables(due_date);
            CREATE INDEX IF NOT EXISTS idx_deliverables_project_id ON deliverables(project_id);",
        )?;
        Ok(())
    }

    /// Insert a project row, mapping a UNIQUE violation to
    /// `StoreError::DuplicateProject`.
    fn insert_project(&self, name: &str) -> std::result::Result<Project, StoreError> {
        let inserted = self
            .conn
            .execute("INSERT INTO projects (name) VALUES (?1)", params![name]);
        match inserted {
            Ok(_) => Ok(Project {
                id: self.conn.last_insert_rowid(),
                name: name.to_string(),
            }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateProject {
                    name: name.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_project_by_name(&self, name: &str) -> std::result::Result<Option<Project>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM projects WHERE name = ?1")?;
        let project = stmt
            .query_row(params![name], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(project)
    }
}

impl DeliverableStore for DeliverableDb {
    fn find_project(&self, id: i64) -> Result<Project> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM projects WHERE id = ?1")
            .map_err(StoreError::from)?;
        let project = stmt
            .query_row(params![id], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(StoreError::from)?;
        project.ok_or_else(|| StoreError::ProjectNotFound { id }.into())
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM projects ORDER BY name")
            .map_err(StoreError::from)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(StoreError::from)?;
        let mut projects = Vec::new();
        for row in rows {
            projects.push(row.map_err(StoreError::from)?);
        }
        Ok(projects)
    }

    fn create_project(&self, name: &str) -> Result<Project> {
        require_non_empty("name", name)?;
        match self.insert_project(name) {
            Ok(project) => Ok(project),
            // Idempotent create: a duplicate name resolves to the
            // existing project's identity.
            Err(StoreError::DuplicateProject { .. }) => self
                .find_project_by_name(name)
                .map_err(Into::into)
                .and_then(|found| {
                    found.ok_or_else(|| {
                        StoreError::Query(format!("project '{name}' vanished after conflict"))
                            .into()
                    })
                }),
            Err(e) => Err(e.into()),
        }
    }

    fn create_deliverable(&self, new: &NewDeliverable) -> Result<Deliverable> {
        require_non_empty("description", &new.description)?;
        require_non_empty("project_manager", &new.project_manager)?;
        if new.due_date.year() < 0 || new.due_date > max_due_date() {
            return Err(DateError::Malformed {
                input: new.due_date.to_string(),
            }
            .into());
        }
        // Project must exist before any insert.
        self.find_project(new.project_id)?;

        self.conn
            .execute(
                "INSERT INTO deliverables (project_id, description, due_date, frequency, project_manager)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    new.project_id,
                    new.description,
                    new.due_date.format(DUE_DATE_FORMAT).to_string(),
                    new.frequency,
                    new.project_manager,
                ],
            )
            .map_err(StoreError::from)?;

        Ok(Deliverable {
            id: self.conn.last_insert_rowid(),
            project_id: new.project_id,
            description: new.description.clone(),
            due_date: new.due_date,
            frequency: new.frequency.clone(),
            project_manager: new.project_manager.clone(),
        })
    }

    fn deliverables_by_project(&self, project_id: i64) -> Result<Vec<Deliverable>> {
        self.find_project(project_id)?;

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, project_id, description, due_date, frequency, project_manager
                 FROM deliverables
                 WHERE project_id = ?1
                 ORDER BY due_date, id",
            )
            .map_err(StoreError::from)?;
        let rows = stmt
            .query_map(params![project_id], row_to_deliverable)
            .map_err(StoreError::from)?;
        let mut deliverables = Vec::new();
        for row in rows {
            deliverables.push(row.map_err(StoreError::from)?);
        }
        Ok(deliverables)
    }

    fn deliverables_due_within(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<(Deliverable, String)>> {
        // Horizon is caller-supplied with no declared bound; clamp
        // instead of overflowing. Past the upper edge the window means
        // everything, below the lower edge nothing can match.
        let horizon = match chrono::Duration::try_days(days)
            .and_then(|delta| today.checked_add_signed(delta))
        {
            Some(h) => h.min(max_due_date()),
            None if days >= 0 => max_due_date(),
            None => return Ok(Vec::new()),
        };
        let mut stmt = self
            .conn
            .prepare(
                "SELECT d.id, d.project_id, d.description, d.due_date, d.frequency, d.project_manager, p.name
                 FROM deliverables d
                 JOIN projects p ON d.project_id = p.id
                 WHERE d.due_date <= ?1
                 ORDER BY d.due_date, d.id",
            )
            .map_err(StoreError::from)?;
        let rows = stmt
            .query_map(
                params![horizon.format(DUE_DATE_FORMAT).to_string()],
                |row| {
                    let deliverable = row_to_deliverable(row)?;
                    let project_name: String = row.get(6)?;
                    Ok((deliverable, project_name))
                },
            )
            .map_err(StoreError::from)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(StoreError::from)?);
        }
        Ok(results)
    }
}
