use crate::row_factories::SessionRowFactory;
use crate::session::{SessionRecord, SessionSummary};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

pub struct SessionsRepository<'a> {
    conn: &'a Connection,
    get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> SessionsRepository<'a> {
    pub fn new(
        conn: &'a Connection,
        get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
    ) -> Self {
        SessionsRepository {
            conn,
            get_current_time,
        }
    }

    pub fn insert(
        &self,
        operation: &str,
        difficulty: &str,
        summary: &SessionSummary,
    ) -> Result<i64> {
        let finished_at = (self.get_current_time)().to_rfc3339();
        self.conn.execute(
            "INSERT INTO sessions (finished_at, operation, difficulty, total_problems,
                                   correct_answers, incorrect_answers, accuracy_percentage,
                                   best_streak, average_time_seconds)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                finished_at,
                operation,
                difficulty,
                summary.total_problems,
                summary.correct_answers,
                summary.incorrect_answers,
                summary.accuracy_percentage,
                summary.best_streak,
                summary.average_time_seconds,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, session_id: i64) -> Result<Option<SessionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, finished_at, operation, difficulty, total_problems,
                    correct_answers, incorrect_answers, accuracy_percentage,
                    best_streak, average_time_seconds
             FROM sessions WHERE id = ?1",
        )?;

        let mut rows = stmt.query([session_id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(SessionRowFactory::from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn get_recent(&self, limit: i32) -> Result<Vec<SessionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, finished_at, operation, difficulty, total_problems,
                    correct_answers, incorrect_answers, accuracy_percentage,
                    best_streak, average_time_seconds
             FROM sessions
             ORDER BY finished_at DESC, id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map([limit], SessionRowFactory::from_row)?;

        let mut sessions = Vec::new();
        for session_result in rows {
            sessions.push(session_result?);
        }
        Ok(sessions)
    }

    /// Deletes everything but the `keep` most recent sessions
    pub fn prune(&self, keep: i32) -> Result<usize> {
        self.conn.execute(
            "DELETE FROM sessions
             WHERE id NOT IN (
                 SELECT id FROM sessions
                 ORDER BY finished_at DESC, id DESC
                 LIMIT ?1
             )",
            [keep],
        )
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(count)
    }
}
