//! Storage types for database operations.
//!
//! This module defines the rows read from and written to the database:
//! - [`Activity`]: A row of the `activities` table
//! - [`RoutineActivity`]: An activity joined with its routine link
//! - [`NewActivity`]: Insert payload
//! - [`ActivityPatch`]: Allow-listed partial update
//! - [`RoutineRef`] / [`RoutineWithActivities`]: Routines owned elsewhere,
//!   decorated with their activities

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Activity stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    /// Storage-generated identifier.
    pub id: i64,
    /// Unique, human-readable label.
    pub name: String,
    /// Free text description.
    pub description: String,
}

impl Activity {
    /// Create an activity row.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Activity joined with one of its `routine_activities` links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineActivity {
    /// Activity identifier.
    pub id: i64,
    /// Activity name.
    pub name: String,
    /// Activity description.
    pub description: String,
    /// Duration recorded on the link.
    pub duration: Option<i64>,
    /// Repetition count recorded on the link.
    pub count: Option<i64>,
    /// Identifier of the link row itself.
    pub routine_activity_id: i64,
    /// Routine the link belongs to.
    pub routine_id: i64,
}

impl RoutineActivity {
    /// The activity part of this joined row.
    #[must_use]
    pub fn activity(&self) -> Activity {
        Activity::new(self.id, &self.name, &self.description)
    }
}

/// Payload for inserting an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    /// Unique name.
    pub name: String,
    /// Description.
    pub description: String,
}

impl NewActivity {
    /// Create an insert payload.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Columns of `activities` that a patch may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityField {
    /// The `name` column.
    Name,
    /// The `description` column.
    Description,
}

impl ActivityField {
    /// Column name in the `activities` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    /// Resolve a column name against the allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidField`] for `id` and for any column
    /// that is not part of the allow-list.
    pub fn from_column(column: &str) -> Result<Self, StorageError> {
        match column {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "id" => Err(StorageError::InvalidField {
                field: column.to_string(),
                reason: "column is immutable".to_string(),
            }),
            other => Err(StorageError::InvalidField {
                field: other.to_string(),
                reason: "unknown column".to_string(),
            }),
        }
    }
}

/// Partial update of an activity.
///
/// Only `name` and `description` can be set. An empty patch is valid and
/// makes [`update_activity`](crate::storage::SqliteStorage::update_activity)
/// a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPatch {
    /// New name, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActivityPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build a patch from arbitrary `(column, value)` pairs.
    ///
    /// Later pairs for the same column win.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidField`] if a pair targets `id` or a
    /// column outside the allow-list.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, StorageError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut patch = Self::new();
        for (column, value) in fields {
            match ActivityField::from_column(column.as_ref())? {
                ActivityField::Name => patch.name = Some(value.into()),
                ActivityField::Description => patch.description = Some(value.into()),
            }
        }
        Ok(patch)
    }

    /// Returns true if no column is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// The set columns with their new values, in column order.
    #[must_use]
    pub fn fields(&self) -> Vec<(ActivityField, &str)> {
        let mut fields = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            fields.push((ActivityField::Name, name.as_str()));
        }
        if let Some(description) = &self.description {
            fields.push((ActivityField::Description, description.as_str()));
        }
        fields
    }
}

/// A routine owned outside this crate, identified by its id.
pub trait RoutineRef {
    /// Identifier of the routine in the `routines` table.
    fn routine_id(&self) -> i64;
}

impl<T: RoutineRef + ?Sized> RoutineRef for &T {
    fn routine_id(&self) -> i64 {
        (**self).routine_id()
    }
}

/// A routine decorated with the activities linked to it.
///
/// Serializes as the routine's own fields plus an `activities` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineWithActivities<R> {
    /// The routine as passed in.
    #[serde(flatten)]
    pub routine: R,
    /// Linked activities, in storage order.
    pub activities: Vec<RoutineActivity>,
}
