use crate::difficulty::Difficulty;
use crate::operations::OperationKind;
use clap::Parser;
use std::path::PathBuf;

/// Arithmetic practice quiz for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "Math Trainer")]
#[command(about = "Practice arithmetic with multiple-choice problems", long_about = None)]
#[command(version)]
pub struct Args {
    /// Operation to practice
    #[arg(
        long,
        default_value = "mixed",
        help = "Operation: addition, subtraction, multiplication, division, mixed or life"
    )]
    pub operation: String,

    /// Difficulty tier
    #[arg(
        long,
        default_value = "easy",
        help = "Difficulty: easy, medium, hard or life"
    )]
    pub difficulty: String,

    /// Number of questions in the session
    #[arg(long, default_value_t = 10)]
    pub questions: u32,

    /// Show step-by-step hints for each problem
    #[arg(long)]
    pub hints: bool,

    /// Print the saved session history and exit
    #[arg(long)]
    pub history: bool,

    /// Use in-memory database for testing
    #[arg(long, help = "Use in-memory database for testing")]
    pub test: bool,

    /// Custom database file path
    #[arg(long, value_name = "PATH", help = "Use custom database file path")]
    pub db_path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the operation argument
    pub fn validate_operation(&self) -> Result<OperationKind, String> {
        OperationKind::from_str(&self.operation).ok_or_else(|| {
            format!(
                "Unknown operation '{}'. Expected addition, subtraction, multiplication, division, mixed or life",
                self.operation
            )
        })
    }

    /// Validate the difficulty argument
    pub fn validate_difficulty(&self) -> Result<Difficulty, String> {
        Difficulty::from_str(&self.difficulty).ok_or_else(|| {
            format!(
                "Unknown difficulty '{}'. Expected easy, medium, hard or life",
                self.difficulty
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(operation: &str, difficulty: &str) -> Args {
        Args {
            operation: operation.to_string(),
            difficulty: difficulty.to_string(),
            questions: 10,
            hints: false,
            history: false,
            test: false,
            db_path: None,
        }
    }

    #[test]
    fn test_validate_operation_valid() {
        let args = args_with("division", "easy");
        assert_eq!(args.validate_operation(), Ok(OperationKind::Division));
    }

    #[test]
    fn test_validate_operation_invalid() {
        let args = args_with("modulo", "easy");
        let err = args.validate_operation().unwrap_err();
        assert!(err.contains("Unknown operation 'modulo'"));
    }

    #[test]
    fn test_validate_difficulty_valid() {
        let args = args_with("mixed", "hard");
        assert_eq!(args.validate_difficulty(), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_validate_difficulty_invalid() {
        let args = args_with("mixed", "extreme");
        let err = args.validate_difficulty().unwrap_err();
        assert!(err.contains("Unknown difficulty 'extreme'"));
    }

    #[test]
    fn test_defaults_are_valid() {
        let args = args_with("mixed", "easy");
        assert!(args.validate_operation().is_ok());
        assert!(args.validate_difficulty().is_ok());
        assert_eq!(args.questions, 10);
        assert!(!args.hints);
        assert!(!args.test);
        assert!(args.db_path.is_none());
    }

    #[test]
    fn test_db_path_argument() {
        let mut args = args_with("addition", "easy");
        args.db_path = Some(PathBuf::from("/tmp/trainer.db"));
        assert_eq!(
            args.db_path.as_deref(),
            Some(PathBuf::from("/tmp/trainer.db").as_path())
        );
    }
}
