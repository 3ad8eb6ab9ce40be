use crate::difficulty::Difficulty;
use crate::operations::OperationKind;
use crate::quiz_service::{QuizService, Round};
use crate::session::{SessionRecord, SessionStats, SessionSummary};
use crate::time_format::{format_average_seconds, format_clock};
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Runs one interactive practice session and saves its summary
pub fn run_session(
    service: &QuizService,
    kind: OperationKind,
    difficulty: Difficulty,
    question_count: u32,
    hints_enabled: bool,
) -> Result<(), Box<dyn Error>> {
    let header = format!(
        "Practicing {} at {} difficulty ({} questions)",
        kind.as_str(),
        difficulty.as_str(),
        question_count
    );
    println!("{}", header.bold());

    let mut stats = SessionStats::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    for number in 1..=question_count {
        let round = service.build_round(kind, difficulty, hints_enabled)?;
        print_round(number, question_count, &round);

        let started = Instant::now();
        let choice = read_choice(&mut input, round.options.len())?;
        let time_spent = started.elapsed().as_secs_f64();

        let result = service.process_answer(&round.problem, round.options[choice], time_spent);
        stats.record_answer(result.is_correct, time_spent);

        if result.is_correct {
            let feedback = format!("Correct! Streak: {}", stats.streak);
            println!("{}", feedback.green());
        } else {
            let feedback = format!("Wrong. The answer was {}.", round.problem.answer);
            println!("{}", feedback.red());
        }
    }

    let summary = service.complete_session(kind, difficulty, &stats)?;
    print_summary(&summary, stats.total_time_seconds);
    Ok(())
}

fn print_round(number: u32, total: u32, round: &Round) {
    println!();
    println!(
        "Question {}/{}: {}",
        number,
        total,
        round.problem.text.bold()
    );
    for (idx, option) in round.options.iter().enumerate() {
        println!("  {}) {}", idx + 1, option);
    }
    for hint in &round.hints {
        println!("{}", hint.title.cyan());
        for line in hint.body.lines() {
            println!("    {}", line);
        }
    }
}

fn read_choice(input: &mut impl BufRead, option_count: usize) -> io::Result<usize> {
    loop {
        print!("Your answer (1-{}): ", option_count);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the session finished",
            ));
        }

        match parse_choice(&line, option_count) {
            Some(choice) => return Ok(choice),
            None => println!("Please enter a number between 1 and {}.", option_count),
        }
    }
}

/// Parses a 1-based menu choice into a 0-based option index
fn parse_choice(line: &str, option_count: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=option_count).contains(n))
        .map(|n| n - 1)
}

fn print_summary(summary: &SessionSummary, total_time_seconds: f64) {
    println!();
    println!("{}", "Session results".bold());
    println!("Correct answers: {}", summary.correct_answers);
    println!("Incorrect answers: {}", summary.incorrect_answers);
    println!("Accuracy: {:.0}%", summary.accuracy_percentage);
    println!("Best streak: {}", summary.best_streak);
    println!(
        "Average time per problem: {}",
        format_average_seconds(summary.average_time_seconds)
    );
    println!("Session time: {}", format_clock(total_time_seconds));
}

/// Prints the saved session history, newest first
pub fn print_history(records: &[SessionRecord]) {
    if records.is_empty() {
        println!("No saved sessions yet.");
        return;
    }

    println!("{}", "Session history".bold());
    for record in records {
        println!();
        println!(
            "{}  {} / {}",
            record.finished_at.format("%Y-%m-%d %H:%M"),
            record.operation,
            record.difficulty
        );
        println!(
            "  {} correct, {} incorrect ({:.0}%), best streak {}, {} per problem",
            record.correct_answers,
            record.incorrect_answers,
            record.accuracy_percentage,
            record.best_streak,
            format_average_seconds(record.average_time_seconds)
        );
    }
}
