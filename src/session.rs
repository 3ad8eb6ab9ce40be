use chrono::{DateTime, Utc};

/// Running counters mutated by the caller after each answer. The
/// generation components never touch this state.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub streak: i32,
    pub best_streak: i32,
    pub total_problems: i32,
    pub total_time_seconds: f64,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats::default()
    }

    pub fn record_answer(&mut self, is_correct: bool, time_spent_seconds: f64) {
        self.total_problems += 1;
        self.total_time_seconds += time_spent_seconds;
        if is_correct {
            self.correct_count += 1;
            self.streak += 1;
            if self.streak > self.best_streak {
                self.best_streak = self.streak;
            }
        } else {
            self.incorrect_count += 1;
            self.streak = 0;
        }
    }

    pub fn average_time_seconds(&self) -> f64 {
        if self.total_problems > 0 {
            self.total_time_seconds / self.total_problems as f64
        } else {
            0.0
        }
    }

    pub fn accuracy_percentage(&self) -> f64 {
        if self.total_problems > 0 {
            (self.correct_count as f64 / self.total_problems as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Summary derived from the stats at session end, in the shape persisted
/// to the history table
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub total_problems: i32,
    pub correct_answers: i32,
    pub incorrect_answers: i32,
    pub accuracy_percentage: f64,
    pub best_streak: i32,
    pub average_time_seconds: f64,
}

impl SessionSummary {
    pub fn from_stats(stats: &SessionStats) -> Self {
        SessionSummary {
            total_problems: stats.total_problems,
            correct_answers: stats.correct_count,
            incorrect_answers: stats.incorrect_count,
            accuracy_percentage: stats.accuracy_percentage(),
            best_streak: stats.best_streak,
            average_time_seconds: stats.average_time_seconds(),
        }
    }
}

/// One saved history row
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: i64,
    pub finished_at: DateTime<Utc>,
    pub operation: String,
    pub difficulty: String,
    pub total_problems: i32,
    pub correct_answers: i32,
    pub incorrect_answers: i32,
    pub accuracy_percentage: f64,
    pub best_streak: i32,
    pub average_time_seconds: f64,
}
