//! Shared test utilities for the holocron workspace.
//!
//! Tests either use the table macros for a quick in-memory SQLite database
//! ([`test_setup_with_tables!`], [`test_setup_with_catalog_tables!`]) or the declarative
//! [`TestBuilder`] when fixtures should be inserted up front. Row fixtures are reached
//! through [`TestSetup::catalog`], [`TestSetup::user`] and [`TestSetup::favorite`].

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_catalog_tables, test_setup_with_tables, TestBuilder,
        TestError, TestSetup,
    };
}
