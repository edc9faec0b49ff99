use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database for a single test.
///
/// The SQLite pool holds a single connection, so every statement of a test runs on
/// the same database and foreign keys are enforced.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create table statements for every catalog table, referenced tables first.
pub fn catalog_tables() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Species),
        schema.create_table_from_entity(entity::prelude::Planet),
        schema.create_table_from_entity(entity::prelude::Character),
        schema.create_table_from_entity(entity::prelude::Vehicle),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::FavoritePlanet),
        schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
        schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_tables($crate::setup::catalog_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
