//! Storage-side core of the catalog.
//!
//! Contains configuration, startup (database connection and migrations), the error
//! types, the repositories of the data layer and the services that wrap every write in
//! a single transaction. The storage handle is always passed in explicitly.

#![warn(missing_docs)]

/// Runtime configuration read from the environment.
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
/// Logging setup and database connection.
pub mod startup;
