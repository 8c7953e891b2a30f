/// SQLite implementation of the habit store
///
/// This is the reference backend. The connection is wrapped in a mutex so
/// the store can be shared across the async reload paths; individual calls
/// are short synchronous queries.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};

use crate::dates::DAY_FORMAT;
use crate::domain::{Category, Habit, HabitId, HabitLog, HabitPatch, LogId, UserId};
use crate::store::{migrations, HabitStore, StoreError};

/// SQLite-backed store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the database file and run any pending migrations
    pub fn new(db_path: PathBuf) -> Result<Self, StoreError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StoreError::Unavailable(format!("Failed to open database: {}", e)))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StoreError::Unavailable(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite store initialized at: {:?}", db_path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(format!("Failed to open database: {}", e)))?;
        migrations::initialize_database(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection mutex poisoned".to_string()))
    }

    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let id = parse_uuid_column(row, 0, HabitId::from_string)?;
        let owner = parse_uuid_column(row, 1, UserId::from_string)?;

        let category_str: String = row.get(4)?;
        let created_at = parse_datetime_column(row, 8)?;
        let updated_at = parse_datetime_column(row, 9)?;

        Ok(Habit::from_existing(
            id,
            owner,
            row.get(2)?, // title
            row.get(3)?, // description
            Category::parse(&category_str),
            row.get(5)?, // target_frequency
            row.get(6)?, // color
            row.get(7)?, // icon
            created_at,
            updated_at,
            row.get(10)?, // is_active
        ))
    }

    fn log_from_row(row: &Row<'_>) -> rusqlite::Result<HabitLog> {
        let id = parse_uuid_column(row, 0, LogId::from_string)?;
        let habit_id = parse_uuid_column(row, 1, HabitId::from_string)?;
        let owner = parse_uuid_column(row, 2, UserId::from_string)?;

        let completed_on_str: String = row.get(3)?;
        let completed_on = NaiveDate::parse_from_str(&completed_on_str, DAY_FORMAT)
            .map_err(|_| invalid_column(3, "Invalid date"))?;

        let created_at = parse_datetime_column(row, 5)?;

        Ok(HabitLog::from_existing(
            id,
            habit_id,
            owner,
            completed_on,
            row.get(4)?, // notes
            created_at,
        ))
    }

    fn get_habit(conn: &Connection, id: &HabitId) -> Result<Habit, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, owner, title, description, category, target_frequency, color, icon,
                    created_at, updated_at, is_active
             FROM habits WHERE id = ?1",
        )?;

        match stmt.query_row(params![id.to_string()], Self::habit_from_row) {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StoreError::NotFound(format!("habit {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn invalid_column(index: usize, message: &str) -> rusqlite::Error {
    rusqlite::Error::InvalidColumnType(index, message.to_string(), rusqlite::types::Type::Text)
}

fn parse_uuid_column<T>(
    row: &Row<'_>,
    index: usize,
    parse: impl Fn(&str) -> Result<T, uuid::Error>,
) -> rusqlite::Result<T> {
    let s: String = row.get(index)?;
    parse(&s).map_err(|_| invalid_column(index, "Invalid UUID"))
}

fn parse_datetime_column(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    let s: String = row.get(index)?;
    Ok(DateTime::parse_from_rfc3339(&s)
        .map_err(|_| invalid_column(index, "Invalid datetime"))?
        .with_timezone(&Utc))
}

#[async_trait]
impl HabitStore for SqliteStore {
    /// Active habits for the owner, newest first
    async fn list_habits(&self, owner: &UserId) -> Result<Vec<Habit>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, title, description, category, target_frequency, color, icon,
                    created_at, updated_at, is_active
             FROM habits
             WHERE owner = ?1 AND is_active = 1
             ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![owner.to_string()], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in rows {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// Completion logs for the owner dated `since` or later
    async fn list_logs(&self, owner: &UserId, since: NaiveDate) -> Result<Vec<HabitLog>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, habit_id, owner, completed_on, notes, created_at
             FROM habit_logs
             WHERE owner = ?1 AND completed_on >= ?2",
        )?;

        let rows = stmt.query_map(
            params![owner.to_string(), since.format(DAY_FORMAT).to_string()],
            Self::log_from_row,
        )?;

        let mut logs = Vec::new();
        for log in rows {
            logs.push(log?);
        }

        Ok(logs)
    }

    async fn insert_habit(&self, habit: &Habit) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO habits (
                id, owner, title, description, category, target_frequency, color, icon,
                created_at, updated_at, is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                habit.id.to_string(),
                habit.owner.to_string(),
                habit.title,
                habit.description,
                habit.category.display_name(),
                habit.target_frequency,
                habit.color,
                habit.icon,
                habit.created_at.to_rfc3339(),
                habit.updated_at.to_rfc3339(),
                habit.is_active
            ],
        )?;

        tracing::debug!("Created habit: {} ({})", habit.title, habit.id);
        Ok(())
    }

    /// Apply a partial update, bumping updated_at
    async fn update_habit(&self, id: &HabitId, patch: &HabitPatch) -> Result<(), StoreError> {
        patch.validate()?;

        let conn = self.lock()?;
        let mut habit = Self::get_habit(&conn, id)?;

        if let Some(ref title) = patch.title {
            habit.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            habit.description = description.clone();
        }
        if let Some(ref category) = patch.category {
            habit.category = category.clone();
        }
        if let Some(ref target_frequency) = patch.target_frequency {
            habit.target_frequency = target_frequency.clone();
        }
        if let Some(ref color) = patch.color {
            habit.color = color.clone();
        }
        if let Some(ref icon) = patch.icon {
            habit.icon = icon.clone();
        }
        if let Some(is_active) = patch.is_active {
            habit.is_active = is_active;
        }
        habit.updated_at = Utc::now();

        let rows_affected = conn.execute(
            "UPDATE habits SET
                title = ?2,
                description = ?3,
                category = ?4,
                target_frequency = ?5,
                color = ?6,
                icon = ?7,
                updated_at = ?8,
                is_active = ?9
             WHERE id = ?1",
            params![
                id.to_string(),
                habit.title,
                habit.description,
                habit.category.display_name(),
                habit.target_frequency,
                habit.color,
                habit.icon,
                habit.updated_at.to_rfc3339(),
                habit.is_active
            ],
        )?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(format!("habit {}", id)));
        }

        tracing::debug!("Updated habit: {} ({})", habit.title, id);
        Ok(())
    }

    async fn insert_log(&self, log: &HabitLog) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO habit_logs (
                id, habit_id, owner, completed_on, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                log.id.to_string(),
                log.habit_id.to_string(),
                log.owner.to_string(),
                log.completed_on.format(DAY_FORMAT).to_string(),
                log.notes,
                log.created_at.to_rfc3339()
            ],
        )?;

        tracing::debug!("Created log {} for habit {}", log.id, log.habit_id);
        Ok(())
    }

    async fn delete_log(&self, id: &LogId) -> Result<(), StoreError> {
        let conn = self.lock()?;
        let rows_affected = conn.execute(
            "DELETE FROM habit_logs WHERE id = ?1",
            params![id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(format!("log {}", id)));
        }

        tracing::debug!("Deleted log {}", id);
        Ok(())
    }
}
