use crate::session::SessionRecord;
use rusqlite::Row;

/// Factory for creating SessionRecord objects from database rows
pub struct SessionRowFactory;

impl SessionRowFactory {
    /// Creates a SessionRecord from a database row
    /// Expected columns: id, finished_at, operation, difficulty,
    ///                   total_problems, correct_answers, incorrect_answers,
    ///                   accuracy_percentage, best_streak, average_time_seconds
    pub fn from_row(row: &Row) -> rusqlite::Result<SessionRecord> {
        Ok(SessionRecord {
            id: row.get(0)?,
            finished_at: row.get(1)?,
            operation: row.get(2)?,
            difficulty: row.get(3)?,
            total_problems: row.get(4)?,
            correct_answers: row.get(5)?,
            incorrect_answers: row.get(6)?,
            accuracy_percentage: row.get(7)?,
            best_streak: row.get(8)?,
            average_time_seconds: row.get(9)?,
        })
    }
}
