//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Activity CRUD operations
//! - Routine link lookups and grouping
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Every variable value is bound as a statement parameter.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `activity`: Activity CRUD operations
//! - `routine`: Routine link lookups and [`attach_activities_to_routines`]
//! - `trait_impl`: `ActivityStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use activity_store::storage::{NewActivity, SqliteStorage};
//!
//! let storage = SqliteStorage::new("./data/activities.db").await?;
//! let run = storage.create_activity(&NewActivity::new("Run", "Go outside")).await?;
//! ```

mod activity;
mod core;
mod routine;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use routine::{attach_activities_to_routines, group_by_routine};
pub use types::{
    Activity, ActivityField, ActivityPatch, NewActivity, RoutineActivity, RoutineRef,
    RoutineWithActivities,
};
