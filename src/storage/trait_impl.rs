//! `ActivityStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::ActivityStore;

use super::core::SqliteStorage;
use super::types::{Activity, ActivityPatch, NewActivity, RoutineActivity};

#[async_trait]
impl ActivityStore for SqliteStorage {
    async fn get_all_activities(&self) -> Result<Vec<Activity>, StorageError> {
        Self::get_all_activities(self).await
    }

    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>, StorageError> {
        Self::get_activity_by_id(self, id).await
    }

    async fn get_activity_by_name(&self, name: &str) -> Result<Option<Activity>, StorageError> {
        Self::get_activity_by_name(self, name).await
    }

    async fn get_routine_activities(
        &self,
        routine_ids: &[i64],
    ) -> Result<Vec<RoutineActivity>, StorageError> {
        Self::get_routine_activities(self, routine_ids).await
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, StorageError> {
        Self::create_activity(self, activity).await
    }

    async fn update_activity(
        &self,
        id: i64,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, StorageError> {
        Self::update_activity(self, id, patch).await
    }
}

/// Blanket implementation for `Arc<SqliteStorage>` to allow sharing storage across threads.
#[async_trait]
impl ActivityStore for Arc<SqliteStorage> {
    async fn get_all_activities(&self) -> Result<Vec<Activity>, StorageError> {
        self.as_ref().get_all_activities().await
    }

    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>, StorageError> {
        self.as_ref().get_activity_by_id(id).await
    }

    async fn get_activity_by_name(&self, name: &str) -> Result<Option<Activity>, StorageError> {
        self.as_ref().get_activity_by_name(name).await
    }

    async fn get_routine_activities(
        &self,
        routine_ids: &[i64],
    ) -> Result<Vec<RoutineActivity>, StorageError> {
        self.as_ref().get_routine_activities(routine_ids).await
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, StorageError> {
        self.as_ref().create_activity(activity).await
    }

    async fn update_activity(
        &self,
        id: i64,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, StorageError> {
        self.as_ref().update_activity(id, patch).await
    }
}
