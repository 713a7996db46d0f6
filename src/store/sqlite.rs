// ABOUTME: SQLite-backed workout store using sqlx
// ABOUTME: Schema migration, validated inserts, soft delete, and filtered reads of sets and exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::{SetQuery, WorkoutStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, WeightUnit, WorkoutSet};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Executor, QueryBuilder, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Connections opened for file-backed databases
const FILE_POOL_SIZE: u32 = 5;

/// `SQLite` workout store
///
/// Ids are stored as TEXT UUIDs. Timestamps are stored as fixed-width RFC 3339
/// TEXT (microsecond precision, `Z` suffix) so string order matches time order.
#[derive(Clone)]
pub struct SqliteWorkoutStore {
    pool: SqlitePool,
}

impl SqliteWorkoutStore {
    /// Connect to `database_url`, creating the database file if needed, and migrate
    ///
    /// In-memory URLs get a single-connection pool so every query sees the same database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or migration fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::config_invalid(format!("Invalid database URL '{database_url}'"))
                    .with_source(e)
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            FILE_POOL_SIZE
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool);
        store.migrate().await?;
        info!(database_url, "Connected workout store");
        Ok(store)
    }

    /// Wrap an existing pool without migrating
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                deleted_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sets (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                exercise_id TEXT NOT NULL REFERENCES exercises(id),
                reps INTEGER NOT NULL CHECK (reps > 0),
                weight REAL CHECK (weight IS NULL OR weight > 0),
                unit TEXT CHECK (unit IS NULL OR unit IN ('lbs', 'kg')),
                performed_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_sets_user_performed ON workout_sets(user_id, performed_at)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_sets_exercise ON workout_sets(exercise_id, performed_at)",
        )
        .execute(&self.pool)
        .await?;

        debug!("Workout store schema is up to date");
        Ok(())
    }

    /// Insert or replace an exercise
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, or a database error
    pub async fn insert_exercise(&self, exercise: &Exercise) -> AppResult<()> {
        exercise.validate()?;
        write_exercise(&self.pool, exercise).await
    }

    /// Insert or replace a logged set
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed sets, or a database error (including
    /// a foreign-key failure when the exercise does not exist)
    pub async fn insert_set(&self, set: &WorkoutSet) -> AppResult<()> {
        set.validate()?;
        write_set(&self.pool, set).await
    }

    /// Mark an exercise deleted; its sets are kept
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist or is already deleted
    pub async fn soft_delete_exercise(
        &self,
        exercise_id: Uuid,
        deleted_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE exercises SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(encode_timestamp(deleted_at))
        .bind(exercise_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Exercise {exercise_id}")));
        }
        Ok(())
    }

    /// Fetch one exercise by id, deleted or not
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row decoding fails
    pub async fn get_exercise(&self, exercise_id: Uuid) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            "SELECT id, user_id, name, created_at, deleted_at FROM exercises WHERE id = ?",
        )
        .bind(exercise_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_exercise).transpose()
    }
}

#[async_trait]
impl WorkoutStore for SqliteWorkoutStore {
    async fn sets_for_user(&self, user_id: Uuid, query: &SetQuery) -> AppResult<Vec<WorkoutSet>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, user_id, exercise_id, reps, weight, unit, performed_at \
             FROM workout_sets WHERE user_id = ",
        );
        builder.push_bind(user_id.to_string());

        if let Some(exercise_id) = query.exercise_id {
            builder.push(" AND exercise_id = ");
            builder.push_bind(exercise_id.to_string());
        }
        if let Some(after) = query.performed_after {
            builder.push(" AND performed_at >= ");
            builder.push_bind(encode_timestamp(after));
        }
        if let Some(before) = query.performed_before {
            builder.push(" AND performed_at < ");
            builder.push_bind(encode_timestamp(before));
        }
        builder.push(" ORDER BY performed_at ASC, id ASC");

        let rows = builder.build().fetch_all(&self.pool).await?;
        let sets = rows.iter().map(row_to_set).collect::<AppResult<Vec<_>>>()?;

        debug!(%user_id, count = sets.len(), "Fetched sets");
        Ok(sets)
    }

    async fn exercises_for_user(
        &self,
        user_id: Uuid,
        include_deleted: bool,
    ) -> AppResult<Vec<Exercise>> {
        let sql = if include_deleted {
            "SELECT id, user_id, name, created_at, deleted_at FROM exercises \
             WHERE user_id = ? ORDER BY created_at ASC, id ASC"
        } else {
            "SELECT id, user_id, name, created_at, deleted_at FROM exercises \
             WHERE user_id = ? AND deleted_at IS NULL ORDER BY created_at ASC, id ASC"
        };

        let rows = sqlx::query(sql)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        let exercises = rows
            .iter()
            .map(row_to_exercise)
            .collect::<AppResult<Vec<_>>>()?;

        debug!(%user_id, count = exercises.len(), include_deleted, "Fetched exercises");
        Ok(exercises)
    }
}

/// Upsert an exercise row without validating it
pub(super) async fn write_exercise<'c, E>(executor: E, exercise: &Exercise) -> AppResult<()>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query(
        r"
        INSERT OR REPLACE INTO exercises (id, user_id, name, created_at, deleted_at)
        VALUES (?, ?, ?, ?, ?)
        ",
    )
    .bind(exercise.id.to_string())
    .bind(exercise.user_id.to_string())
    .bind(exercise.name.trim().to_owned())
    .bind(encode_timestamp(exercise.created_at))
    .bind(exercise.deleted_at.map(encode_timestamp))
    .execute(executor)
    .await?;

    Ok(())
}

/// Upsert a set row without validating it
pub(super) async fn write_set<'c, E>(executor: E, set: &WorkoutSet) -> AppResult<()>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query(
        r"
        INSERT OR REPLACE INTO workout_sets
            (id, user_id, exercise_id, reps, weight, unit, performed_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(set.id.to_string())
    .bind(set.user_id.to_string())
    .bind(set.exercise_id.to_string())
    .bind(i64::from(set.reps))
    .bind(set.weight)
    .bind(set.unit.map(|unit| unit.as_str()))
    .bind(encode_timestamp(set.performed_at))
    .execute(executor)
    .await?;

    Ok(())
}

fn encode_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(column: &str, raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            AppError::database(format!("Invalid timestamp in column {column}: '{raw}'"))
                .with_source(e)
        })
}

fn decode_uuid(column: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| {
        AppError::database(format!("Invalid UUID in column {column}: '{raw}'")).with_source(e)
    })
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let created_at: String = row.try_get("created_at")?;
    let deleted_at: Option<String> = row.try_get("deleted_at")?;

    Ok(Exercise {
        id: decode_uuid("id", &id)?,
        user_id: decode_uuid("user_id", &user_id)?,
        name: row.try_get("name")?,
        created_at: decode_timestamp("created_at", &created_at)?,
        deleted_at: deleted_at
            .as_deref()
            .map(|raw| decode_timestamp("deleted_at", raw))
            .transpose()?,
    })
}

fn row_to_set(row: &SqliteRow) -> AppResult<WorkoutSet> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let exercise_id: String = row.try_get("exercise_id")?;
    let reps: i64 = row.try_get("reps")?;
    let unit: Option<String> = row.try_get("unit")?;
    let performed_at: String = row.try_get("performed_at")?;

    Ok(WorkoutSet {
        id: decode_uuid("id", &id)?,
        user_id: decode_uuid("user_id", &user_id)?,
        exercise_id: decode_uuid("exercise_id", &exercise_id)?,
        reps: u32::try_from(reps)
            .map_err(|_| AppError::database(format!("Invalid reps value {reps}")))?,
        weight: row.try_get("weight")?,
        unit: unit.as_deref().map(WeightUnit::parse).transpose()?,
        performed_at: decode_timestamp("performed_at", &performed_at)?,
    })
}
