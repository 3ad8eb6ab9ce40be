use log::{debug, error};
use rusqlite::{Connection, Result};

refinery::embed_migrations!("migrations");

/// Opens the SQLite database at `db_path` and brings its schema up to
/// date before handing the connection out. Migration failures surface as
/// a rusqlite error so callers deal with a single error type.
pub fn init_connection(db_path: &str) -> Result<Connection> {
    let mut conn = Connection::open(db_path)?;

    if let Err(e) = migrations::runner().run(&mut conn) {
        error!("Schema migration failed: {}", e);
        return Err(rusqlite::Error::ExecuteReturnedResults);
    }
    debug!("Schema is up to date for {}", db_path);

    Ok(conn)
}
