use math_trainer::database::Database;
use math_trainer::difficulty::Difficulty;
use math_trainer::generator::generate;
use math_trainer::operations::{OperationKind, ResolvedOperation};
use math_trainer::quiz_service::QuizService;
use math_trainer::session::SessionStats;
use std::sync::Arc;

fn create_service() -> QuizService {
    let db = Arc::new(Database::new(":memory:").unwrap());
    QuizService::new(db)
}

#[test]
fn test_full_session_workflow() {
    let service = create_service();
    let mut stats = SessionStats::new();

    for _ in 0..10 {
        let round = service
            .build_round(OperationKind::Mixed, Difficulty::Medium, true)
            .unwrap();

        // Answer by picking the correct option, as the front end would
        let position = round
            .options
            .iter()
            .position(|&o| o == round.problem.answer)
            .expect("Options must contain the correct answer");
        let result = service.process_answer(&round.problem, round.options[position], 1.5);

        assert!(result.is_correct);
        stats.record_answer(result.is_correct, result.time_spent);
    }

    let summary = service
        .complete_session(OperationKind::Mixed, Difficulty::Medium, &stats)
        .unwrap();
    assert_eq!(summary.total_problems, 10);
    assert_eq!(summary.correct_answers, 10);
    assert_eq!(summary.accuracy_percentage, 100.0);
    assert_eq!(summary.best_streak, 10);
    assert_eq!(summary.average_time_seconds, 1.5);

    let history = service.fetch_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].operation, "mixed");
    assert_eq!(history[0].difficulty, "medium");
    assert_eq!(history[0].total_problems, 10);
}

#[test]
fn test_session_with_wrong_answers() {
    let service = create_service();
    let mut stats = SessionStats::new();

    for i in 0..4 {
        let round = service
            .build_round(OperationKind::Addition, Difficulty::Easy, false)
            .unwrap();
        // Miss every other question
        let answer = if i % 2 == 0 {
            round.problem.answer
        } else {
            *round
                .options
                .iter()
                .find(|&&o| o != round.problem.answer)
                .expect("Options must contain a distractor")
        };
        let result = service.process_answer(&round.problem, answer, 2.0);
        assert_eq!(result.is_correct, i % 2 == 0);
        stats.record_answer(result.is_correct, result.time_spent);
    }

    let summary = service
        .complete_session(OperationKind::Addition, Difficulty::Easy, &stats)
        .unwrap();
    assert_eq!(summary.correct_answers, 2);
    assert_eq!(summary.incorrect_answers, 2);
    assert_eq!(summary.accuracy_percentage, 50.0);
    assert_eq!(summary.best_streak, 1);
}

#[test]
fn test_history_keeps_only_most_recent_sessions() {
    let service = create_service();
    let mut stats = SessionStats::new();
    stats.record_answer(true, 1.0);

    for _ in 0..15 {
        service
            .complete_session(OperationKind::Division, Difficulty::Hard, &stats)
            .unwrap();
    }

    let history = service.fetch_history().unwrap();
    assert_eq!(history.len(), 10);
    // Newest first
    for window in history.windows(2) {
        assert!(window[0].id > window[1].id);
    }
}

#[test]
fn test_division_problems_divide_evenly_across_tiers() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..100 {
            let problem = generate(OperationKind::Division, difficulty).unwrap();
            assert_eq!(problem.operation, ResolvedOperation::Division);
            assert!(problem.operand2 >= 2);
            assert_eq!(problem.operand1 % problem.operand2, 0);
            assert_eq!(problem.operand1 / problem.operand2, problem.answer);
        }
    }
}

#[test]
fn test_rounds_always_have_four_valid_options() {
    let service = create_service();
    for kind in [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
        OperationKind::Life,
    ] {
        let difficulty = if kind == OperationKind::Life {
            Difficulty::Life
        } else {
            Difficulty::Medium
        };
        for _ in 0..50 {
            let round = service.build_round(kind, difficulty, false).unwrap();

            assert_eq!(round.options.len(), 4);
            assert!(round.options.contains(&round.problem.answer));
            // Subtraction can legitimately answer 0; distractors never do
            assert!(round.options.iter().all(|&o| o >= 0));
            assert!(
                round
                    .options
                    .iter()
                    .filter(|&&o| o != round.problem.answer)
                    .all(|&o| o > 0)
            );

            let mut unique = round.options.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }
}

#[test]
fn test_zero_answer_subtraction_rounds_are_well_formed() {
    // Medium subtraction draws num2 up to num1, so num1 == num2 and an
    // answer of 0 come up every few rounds
    let service = create_service();
    let mut saw_zero = false;
    for _ in 0..300 {
        let round = service
            .build_round(OperationKind::Subtraction, Difficulty::Medium, false)
            .unwrap();
        if round.problem.answer == 0 {
            saw_zero = true;
            assert_eq!(round.options.len(), 4);
            assert!(round.options.contains(&0));
            assert!(round.options.iter().filter(|&&o| o != 0).all(|&o| o > 0));
        }
    }
    assert!(saw_zero, "300 medium subtraction rounds never answered 0");
}

#[test]
fn test_hints_only_produced_when_enabled() {
    let service = create_service();
    for _ in 0..20 {
        let without = service
            .build_round(OperationKind::Division, Difficulty::Hard, false)
            .unwrap();
        assert!(without.hints.is_empty());

        let with = service
            .build_round(OperationKind::Division, Difficulty::Hard, true)
            .unwrap();
        assert!(with.hints.len() >= 2);
    }
}
