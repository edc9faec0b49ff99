//! Star Wars catalog data model.
//!
//! [`model`] holds the serializable DTOs, [`server`] the storage side: configuration,
//! startup, repositories, services and errors.

pub mod model;
pub mod server;
