use crate::storage::migrations::{has_trivia_schema, run_migrations};
use crate::storage::register_functions;
use crate::DbConnection;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Opens (creating if needed) the SQLite database at `db_path` and brings its
/// schema up to date.
pub fn open_database(db_path: &Path) -> anyhow::Result<DbConnection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    prepare(Connection::open(db_path)?)
}

pub fn open_in_memory_database() -> anyhow::Result<DbConnection> {
    prepare(Connection::open_in_memory()?)
}

fn prepare(mut conn: Connection) -> anyhow::Result<DbConnection> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    register_functions(&conn)?;

    let fresh = !has_trivia_schema(&conn)?;
    run_migrations(&mut conn)?;
    if fresh {
        info!("Created trivia schema and seeded categories");
    }

    Ok(Arc::new(Mutex::new(conn)))
}
