use math_trainer::database::{Database, HISTORY_LIMIT};
use math_trainer::time_format::format_average_seconds;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <database_file>", args[0]);
        eprintln!();
        eprintln!("Prints a report of the saved practice sessions.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  <database_file>  Path to the SQLite database file");
        eprintln!();
        eprintln!("Example: {} ~/math_trainer.db", args[0]);
        std::process::exit(1);
    }

    let db_path = &args[1];

    let db = match Database::new(db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    let records = match db.get_recent_sessions(HISTORY_LIMIT) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error fetching session history: {}", e);
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        println!("No sessions found in the database.");
        return;
    }

    println!("Practice Session Report");
    println!("=======================");
    println!();

    let mut total_problems = 0;
    let mut total_correct = 0;

    for record in &records {
        println!(
            "{}  {} / {}",
            record.finished_at.format("%Y-%m-%d %H:%M"),
            record.operation,
            record.difficulty
        );
        println!("{}", "-".repeat(60));
        println!(
            "  Problems: {} ({} correct, {} incorrect)",
            record.total_problems, record.correct_answers, record.incorrect_answers
        );
        println!("  Accuracy: {:.0}%", record.accuracy_percentage);
        println!("  Best streak: {}", record.best_streak);
        println!(
            "  Average time: {}",
            format_average_seconds(record.average_time_seconds)
        );
        println!();

        total_problems += record.total_problems;
        total_correct += record.correct_answers;
    }

    println!("Totals across {} sessions", records.len());
    println!("{}", "-".repeat(60));
    println!("  Problems answered: {}", total_problems);
    if total_problems > 0 {
        println!(
            "  Overall accuracy: {:.0}%",
            total_correct as f64 / total_problems as f64 * 100.0
        );
    }
}
