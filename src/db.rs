use crate::errors::{ErrorKind, Result};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Opens the database at `url` (a file path or `:memory:`).
pub fn establish(url: &str) -> Result<SqliteConnection> {
    let mut connection = SqliteConnection::establish(url)?;
    // SQLite leaves foreign key enforcement off unless asked per connection.
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut connection)?;
    Ok(connection)
}

/// Applies pending migrations and returns the versions that ran.
pub fn run_migrations(connection: &mut SqliteConnection) -> Result<Vec<String>> {
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ErrorKind::Migration(e.to_string()))?;

    let versions: Vec<String> = applied.iter().map(|v| v.to_string()).collect();
    for version in &versions {
        info!("applied migration {}", version);
    }
    Ok(versions)
}

pub fn establish_and_migrate(url: &str) -> Result<SqliteConnection> {
    let mut connection = establish(url)?;
    run_migrations(&mut connection)?;
    Ok(connection)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let mut connection = establish(":memory:").unwrap();
        let first = run_migrations(&mut connection).unwrap();
        assert_eq!(first.len(), 4);

        let second = run_migrations(&mut connection).unwrap();
        assert!(second.is_empty());
    }
}
