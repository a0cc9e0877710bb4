//! Core library components.
//!
//! This module contains the reusable logic for path resolution, environment
//! materialization, and database access.

pub mod constants;
pub mod exec;
pub mod password;
pub mod path;
pub mod resolve;
pub mod store;
