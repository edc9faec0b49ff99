//! Declarative test builder.
//!
//! Queues tables and fixture rows, then creates them in order during [`TestBuilder::build`].

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::catalog_tables, TestSetup};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use holocron_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), holocron_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_catalog_tables()
///     .with_planet("Tatooine")
///     .with_user("a@b.com")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    planets: Vec<String>,
    species: Vec<String>,
    vehicles: Vec<String>,
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            planets: Vec::new(),
            species: Vec::new(),
            vehicles: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables, referenced tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a planet with the provided name.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a species with the provided name.
    pub fn with_species(mut self, name: impl Into<String>) -> Self {
        self.species.push(name.into());
        self
    }

    /// Insert a vehicle with the provided name.
    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Insert a user with the provided email.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Database ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();
        if self.include_catalog_tables {
            all_tables.extend(catalog_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        for name in self.species {
            setup.catalog().insert_species(&name).await?;
        }

        for name in self.vehicles {
            setup.catalog().insert_vehicle(&name).await?;
        }

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
