//! Workflow integration tests.
//!
//! These tests run multi-step scenarios against a file database, with
//! routines and links seeded directly through the shared pool.

mod routine_workflow;
