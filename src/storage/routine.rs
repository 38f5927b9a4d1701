//! Routine link operations.
//!
//! Routines themselves belong to another module; this file only reads the
//! `routine_activities` links to decorate routines with their activities.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::ActivityStore;

use super::core::SqliteStorage;
use super::types::{RoutineActivity, RoutineRef, RoutineWithActivities};

impl SqliteStorage {
    /// Get every activity linked to any of the given routines.
    ///
    /// Issues a single statement with one placeholder per id. Returns an
    /// empty list without querying when `routine_ids` is empty.
    pub async fn get_routine_activities(
        &self,
        routine_ids: &[i64],
    ) -> Result<Vec<RoutineActivity>, StorageError> {
        if routine_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: String = routine_ids
            .iter()
            .map(|_| "?")
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            r#"SELECT activities.id, activities.name, activities.description,
                   routine_activities.duration, routine_activities.count,
                   routine_activities.id AS "routineActivityId",
                   routine_activities."routineId"
               FROM activities
               JOIN routine_activities ON routine_activities."activityId" = activities.id
               WHERE routine_activities."routineId" IN ({placeholders})"#
        );

        let mut query = sqlx::query(&sql);
        for id in routine_ids {
            query = query.bind(*id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT routine_activities", format!("{e}")))?;

        let mut activities = Vec::with_capacity(rows.len());
        for row in &rows {
            activities.push(Self::row_to_routine_activity(row)?);
        }

        Ok(activities)
    }

    /// Decorate routines with their activities; see
    /// [`attach_activities_to_routines`].
    pub async fn attach_activities_to_routines<R: RoutineRef + Send>(
        &self,
        routines: Vec<R>,
    ) -> Result<Vec<RoutineWithActivities<R>>, StorageError> {
        attach_activities_to_routines(self, routines).await
    }

    /// Convert a joined row to a `RoutineActivity`.
    fn row_to_routine_activity(
        row: &sqlx::sqlite::SqliteRow,
    ) -> Result<RoutineActivity, StorageError> {
        Ok(RoutineActivity {
            id: Self::column(row, "id")?,
            name: Self::column(row, "name")?,
            description: Self::column(row, "description")?,
            duration: Self::column(row, "duration")?,
            count: Self::column(row, "count")?,
            routine_activity_id: Self::column(row, "routineActivityId")?,
            routine_id: Self::column(row, "routineId")?,
        })
    }
}

/// Attach to every routine the activities linked to it.
///
/// Performs exactly one storage round trip whatever the number of routines,
/// and none when `routines` is empty. Output order follows input order; a
/// routine without links gets an empty `activities` list.
pub async fn attach_activities_to_routines<S, R>(
    store: &S,
    routines: Vec<R>,
) -> Result<Vec<RoutineWithActivities<R>>, StorageError>
where
    S: ActivityStore + ?Sized,
    R: RoutineRef + Send,
{
    if routines.is_empty() {
        return Ok(Vec::new());
    }

    let routine_ids: Vec<i64> = routines.iter().map(|r| r.routine_id()).collect();
    let rows = store.get_routine_activities(&routine_ids).await?;

    tracing::debug!(
        routines = routine_ids.len(),
        rows = rows.len(),
        "attaching activities to routines"
    );

    Ok(group_by_routine(routines, &rows))
}

/// Pair every routine with the rows whose `routine_id` matches it.
///
/// Rows keep their relative order. Rows for routines not in `routines` are
/// dropped.
#[must_use]
pub fn group_by_routine<R: RoutineRef>(
    routines: Vec<R>,
    rows: &[RoutineActivity],
) -> Vec<RoutineWithActivities<R>> {
    routines
        .into_iter()
        .map(|routine| {
            let id = routine.routine_id();
            let activities = rows
                .iter()
                .filter(|row| row.routine_id == id)
                .cloned()
                .collect();
            RoutineWithActivities {
                routine,
                activities,
            }
        })
        .collect()
}
