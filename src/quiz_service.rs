use crate::database::Database;
use crate::difficulty::{Difficulty, InvalidRangeError};
use crate::distractors::generate_options;
use crate::generator::generate;
use crate::hints::{HintStep, compose_hints};
use crate::operations::{OperationKind, Problem};
use crate::session::{SessionRecord, SessionStats, SessionSummary};
use log::info;
use std::sync::Arc;

/// Everything the caller needs to present one question
#[derive(Debug, Clone)]
pub struct Round {
    pub problem: Problem,
    pub options: Vec<i32>,
    pub hints: Vec<HintStep>,
}

/// Result of answering a single question
#[derive(Debug, Clone)]
pub struct QuestionResult {
    pub problem: Problem,
    pub user_answer: i32,
    pub is_correct: bool,
    pub time_spent: f64,
}

/// Service layer for quiz operations, decoupled from the front end
pub struct QuizService {
    db: Arc<Database>,
}

impl QuizService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Builds one round: a fresh problem, its shuffled option set and,
    /// when hint mode is on, the explanatory steps
    pub fn build_round(
        &self,
        kind: OperationKind,
        difficulty: Difficulty,
        hints_enabled: bool,
    ) -> Result<Round, InvalidRangeError> {
        let problem = generate(kind, difficulty)?;
        let options = generate_options(problem.answer, difficulty.range(), problem.operation);
        let hints = if hints_enabled {
            compose_hints(
                problem.operation,
                problem.operand1,
                problem.operand2,
                problem.answer,
            )
        } else {
            Vec::new()
        };

        Ok(Round {
            problem,
            options,
            hints,
        })
    }

    /// Checks a user's answer to a question
    pub fn process_answer(
        &self,
        problem: &Problem,
        user_answer: i32,
        time_spent: f64,
    ) -> QuestionResult {
        let is_correct = problem.check_answer(user_answer);

        info!(
            "Answer submitted: {} -> {} ({}, {:.1}s)",
            problem.text,
            user_answer,
            if is_correct { "correct" } else { "incorrect" },
            time_spent
        );

        QuestionResult {
            problem: problem.clone(),
            user_answer,
            is_correct,
            time_spent,
        }
    }

    /// Persists the finished session's summary; the history keeps only the
    /// most recent sessions
    pub fn complete_session(
        &self,
        kind: OperationKind,
        difficulty: Difficulty,
        stats: &SessionStats,
    ) -> rusqlite::Result<SessionSummary> {
        let summary = SessionSummary::from_stats(stats);
        let session_id = self
            .db
            .save_session(kind.as_str(), difficulty.as_str(), &summary)?;

        info!(
            "Session {} saved: {}/{} correct ({:.0}%), best streak {}",
            session_id,
            summary.correct_answers,
            summary.total_problems,
            summary.accuracy_percentage,
            summary.best_streak
        );

        Ok(summary)
    }

    /// Fetches the saved session history, newest first
    pub fn fetch_history(&self) -> rusqlite::Result<Vec<SessionRecord>> {
        self.db.get_recent_sessions(crate::database::HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> QuizService {
        let db = Arc::new(Database::new(":memory:").unwrap());
        QuizService::new(db)
    }

    #[test]
    fn test_build_round_options_contain_answer() {
        let service = create_service();
        for _ in 0..20 {
            let round = service
                .build_round(OperationKind::Mixed, Difficulty::Easy, false)
                .unwrap();
            assert_eq!(round.options.len(), 4);
            assert!(round.options.contains(&round.problem.answer));
            assert!(round.hints.is_empty());
        }
    }

    #[test]
    fn test_build_round_with_hints_for_division() {
        let service = create_service();
        let round = service
            .build_round(OperationKind::Division, Difficulty::Hard, true)
            .unwrap();
        // Division always has at least the divisibility and fact steps
        assert!(round.hints.len() >= 2);
    }

    #[test]
    fn test_process_answer_correct() {
        let service = create_service();
        let round = service
            .build_round(OperationKind::Addition, Difficulty::Easy, false)
            .unwrap();

        let result = service.process_answer(&round.problem, round.problem.answer, 1.2);
        assert!(result.is_correct);
        assert_eq!(result.user_answer, round.problem.answer);
        assert_eq!(result.time_spent, 1.2);
    }

    #[test]
    fn test_process_answer_incorrect() {
        let service = create_service();
        let round = service
            .build_round(OperationKind::Addition, Difficulty::Easy, false)
            .unwrap();

        let result = service.process_answer(&round.problem, round.problem.answer + 1, 3.4);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_complete_session_persists_summary() {
        let service = create_service();
        let mut stats = SessionStats::new();
        stats.record_answer(true, 2.0);
        stats.record_answer(true, 2.0);
        stats.record_answer(false, 4.0);

        let summary = service
            .complete_session(OperationKind::Mixed, Difficulty::Medium, &stats)
            .unwrap();
        assert_eq!(summary.total_problems, 3);

        let history = service.fetch_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].operation, "mixed");
        assert_eq!(history[0].difficulty, "medium");
        assert_eq!(history[0].correct_answers, 2);
    }

    #[test]
    fn test_fetch_history_is_capped() {
        let service = create_service();
        let mut stats = SessionStats::new();
        stats.record_answer(true, 1.0);

        for _ in 0..15 {
            service
                .complete_session(OperationKind::Life, Difficulty::Life, &stats)
                .unwrap();
        }

        assert_eq!(service.fetch_history().unwrap().len(), 10);
    }
}
