//! Trait definitions for mockable dependencies.
//!
//! This module defines [`ActivityStore`], the repository abstraction over
//! activities and their routine links.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically for testing.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::{Activity, ActivityPatch, NewActivity, RoutineActivity};

/// Activity repository trait for mocking.
///
/// This trait abstracts database operations to allow for
/// dependency injection and testing with mock implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Get every activity.
    ///
    /// Order is whatever the storage returns.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_all_activities(&self) -> Result<Vec<Activity>, StorageError>;

    /// Get an activity by ID.
    ///
    /// Returns `None` if the activity doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>, StorageError>;

    /// Get an activity by exact name.
    ///
    /// Returns `None` if no activity has that name.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_activity_by_name(&self, name: &str) -> Result<Option<Activity>, StorageError>;

    /// Get the activities linked to any of the given routines.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_routine_activities(
        &self,
        routine_ids: &[i64],
    ) -> Result<Vec<RoutineActivity>, StorageError>;

    /// Insert an activity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NameConflict`] if the name is taken, or
    /// [`StorageError`] if the database operation fails.
    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, StorageError>;

    /// Apply a partial update to an activity.
    ///
    /// Returns `Ok(None)` when the patch is empty and nothing was done.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ActivityNotFound`] if no activity has `id`,
    /// [`StorageError::NameConflict`] if the new name is taken, or
    /// [`StorageError`] if the database operation fails.
    async fn update_activity(
        &self,
        id: i64,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, StorageError>;
}
