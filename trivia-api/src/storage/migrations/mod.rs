use refinery::embed_migrations;

// Embed migrations from the migrations directory
embed_migrations!("src/storage/migrations");

/// Run the trivia schema migrations on a SQLite connection.
///
/// Creates `categories` and `questions` and seeds the standard categories.
/// Safe to call on every start; applied versions are tracked in
/// `refinery_schema_history`.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}

/// Check if the trivia tables exist in database
pub fn has_trivia_schema(conn: &rusqlite::Connection) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('categories', 'questions')",
    )?;
    let count = stmt.query_map([], |_| Ok(()))?.count();
    Ok(count == 2)
}
