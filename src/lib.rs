//! Activity Store
//!
//! A `SQLite`-backed repository for activities and the routines that use
//! them.
//!
//! # Features
//!
//! - Activity CRUD with a unique-name insert that never overwrites
//! - Allow-listed partial updates (`name`, `description`)
//! - One-query decoration of routines with their linked activities
//! - Explicit outcomes: missing rows, name conflicts and storage failures
//!   are distinct values, never swallowed
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./data/activities.db ./activity-store
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ActivityStore   ┌────────────────┐   sqlx pool   ┌────────┐
//! │   Caller    │──────────────────▶│ SqliteStorage  │──────────────▶│ SQLite │
//! └─────────────┘                   └────────────────┘               └────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod test_utils;
