use math_trainer::cli::Args;
use math_trainer::console;
use math_trainer::database_factory::{DatabaseConfig, DatabaseFactory};
use math_trainer::quiz_service::QuizService;
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse_args();
    let kind = args.validate_operation()?;
    let difficulty = args.validate_difficulty()?;

    let config = DatabaseConfig::from_args(&args);
    let db = Arc::new(DatabaseFactory::create(config)?);
    let service = QuizService::new(db);

    if args.history {
        let records = service.fetch_history()?;
        console::print_history(&records);
        return Ok(());
    }

    console::run_session(&service, kind, difficulty, args.questions, args.hints)
}
