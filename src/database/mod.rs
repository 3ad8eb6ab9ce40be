pub mod connection;
pub mod sessions;

use crate::session::{SessionRecord, SessionSummary};
use chrono::Utc;
use rusqlite::{Connection, Result};

pub use sessions::SessionsRepository;

/// The history keeps only this many most-recent sessions
pub const HISTORY_LIMIT: i32 = 10;

/// Main Database struct providing access to the session history
pub struct Database {
    pub conn: Connection,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Self> {
        let conn = connection::init_connection(db_path)?;
        Ok(Database { conn })
    }

    /// Saves a finished session and prunes the history to the cap
    pub fn save_session(
        &self,
        operation: &str,
        difficulty: &str,
        summary: &SessionSummary,
    ) -> Result<i64> {
        let repo = SessionsRepository::new(&self.conn, Box::new(Utc::now));
        let id = repo.insert(operation, difficulty, summary)?;
        repo.prune(HISTORY_LIMIT)?;
        Ok(id)
    }

    pub fn get_session(&self, session_id: i64) -> Result<Option<SessionRecord>> {
        let repo = SessionsRepository::new(&self.conn, Box::new(Utc::now));
        repo.get(session_id)
    }

    pub fn get_recent_sessions(&self, limit: i32) -> Result<Vec<SessionRecord>> {
        let repo = SessionsRepository::new(&self.conn, Box::new(Utc::now));
        repo.get_recent(limit)
    }

    pub fn count_sessions(&self) -> Result<i64> {
        let repo = SessionsRepository::new(&self.conn, Box::new(Utc::now));
        repo.count()
    }
}
