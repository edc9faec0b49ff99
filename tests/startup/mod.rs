use holocron::server::startup::init_tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Statement};

use super::*;

/// Expect all catalog tables to exist after connecting
#[tokio::test]
async fn connect_applies_migrations() -> Result<(), Error> {
    let db = migrated_db().await?;

    let rows = db
        .query_all_raw(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        ))
        .await?;
    let tables: Vec<String> = rows
        .iter()
        .filter_map(|row| row.try_get::<String>("", "name").ok())
        .collect();

    for table in [
        "character",
        "favorite_characters",
        "favorite_planets",
        "favorite_vehicles",
        "planet",
        "species",
        "user",
        "vehicle",
    ] {
        assert!(tables.iter().any(|t| t == table), "missing table {}", table);
    }

    Ok(())
}

/// Expect connecting twice to the same database to leave the schema untouched
#[tokio::test]
async fn migrations_are_idempotent() -> Result<(), Error> {
    let db = migrated_db().await?;

    let result = Migrator::up(&db, None).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Expect the second subscriber installation to fail with a logging error
#[test]
fn tracing_installs_once() {
    let first = init_tracing();
    let second = init_tracing();

    assert!(first.is_ok());
    assert!(matches!(second, Err(Error::LoggingError(_))));
}
