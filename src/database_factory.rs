use crate::cli::Args;
use crate::database::Database;
use rusqlite::Result;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Whether to use an in-memory database
    pub is_test_mode: bool,
    /// Custom database file path (ignored in test mode)
    pub custom_path: Option<String>,
}

impl DatabaseConfig {
    /// Builds the configuration from parsed command-line arguments
    pub fn from_args(args: &Args) -> Self {
        DatabaseConfig {
            is_test_mode: args.test,
            custom_path: args.db_path.as_ref().map(|p| p.display().to_string()),
        }
    }

    /// Gets the effective database path
    pub fn get_path(&self) -> &str {
        if self.is_test_mode {
            ":memory:"
        } else {
            self.custom_path.as_deref().unwrap_or("math_trainer.db")
        }
    }
}

/// Factory for creating Database instances
pub struct DatabaseFactory;

impl DatabaseFactory {
    /// Creates a database with the specified configuration
    pub fn create(config: DatabaseConfig) -> Result<Database> {
        Database::new(config.get_path())
    }
}
