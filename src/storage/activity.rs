//! Activity storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;

use super::core::SqliteStorage;
use super::types::{Activity, ActivityPatch, NewActivity};

impl SqliteStorage {
    /// Get every activity, in storage order.
    pub async fn get_all_activities(&self) -> Result<Vec<Activity>, StorageError> {
        let rows = sqlx::query("SELECT id, name, description FROM activities")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT activities", format!("{e}")))?;

        let mut activities = Vec::with_capacity(rows.len());
        for row in &rows {
            activities.push(Self::row_to_activity(row)?);
        }

        Ok(activities)
    }

    /// Get an activity by ID.
    pub async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>, StorageError> {
        let row = sqlx::query("SELECT id, name, description FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT activities by id", format!("{e}")))?;

        row.as_ref().map(Self::row_to_activity).transpose()
    }

    /// Get an activity by exact name.
    pub async fn get_activity_by_name(&self, name: &str) -> Result<Option<Activity>, StorageError> {
        let row = sqlx::query("SELECT id, name, description FROM activities WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT activities by name", format!("{e}")))?;

        row.as_ref().map(Self::row_to_activity).transpose()
    }

    /// Insert an activity.
    ///
    /// If the name is already taken the insert is skipped and
    /// [`StorageError::NameConflict`] is returned; the existing row is left
    /// untouched.
    pub async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, StorageError> {
        let row = sqlx::query(
            "INSERT INTO activities (name, description) VALUES (?, ?)
             ON CONFLICT (name) DO NOTHING
             RETURNING id, name, description",
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::write_error("INSERT activities", &activity.name, &e))?;

        let Some(row) = row else {
            tracing::warn!(name = %activity.name, "activity insert ignored: name already exists");
            return Err(StorageError::NameConflict {
                name: activity.name.clone(),
            });
        };

        let created = Self::row_to_activity(&row)?;
        tracing::debug!(id = created.id, name = %created.name, "activity created");
        Ok(created)
    }

    /// Apply a partial update to an activity.
    ///
    /// Returns `Ok(None)` without touching the database when the patch is
    /// empty. Only the columns set in the patch appear in the statement.
    pub async fn update_activity(
        &self,
        id: i64,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, StorageError> {
        let fields = patch.fields();
        if fields.is_empty() {
            tracing::debug!(id, "activity update skipped: empty patch");
            return Ok(None);
        }

        let assignments: String = fields
            .iter()
            .map(|(field, _)| format!("\"{}\" = ?", field.column()))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE activities SET {assignments} WHERE id = ? RETURNING id, name, description"
        );

        let mut query = sqlx::query(&sql);
        for (_, value) in &fields {
            query = query.bind(*value);
        }

        let conflict_name = patch.name.as_deref().unwrap_or_default();
        let row = query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::write_error("UPDATE activities", conflict_name, &e))?;

        let Some(row) = row else {
            return Err(StorageError::ActivityNotFound { id });
        };

        let updated = Self::row_to_activity(&row)?;
        tracing::debug!(id, columns = fields.len(), "activity updated");
        Ok(Some(updated))
    }

    /// Convert a database row to an `Activity`.
    fn row_to_activity(row: &sqlx::sqlite::SqliteRow) -> Result<Activity, StorageError> {
        Ok(Activity {
            id: Self::column(row, "id")?,
            name: Self::column(row, "name")?,
            description: Self::column(row, "description")?,
        })
    }
}
