pub mod cli;
pub mod console;
pub mod database;
pub mod database_factory;
pub mod difficulty;
pub mod distractors;
pub mod factors;
pub mod generator;
pub mod hints;
pub mod operations;
pub mod quiz_service;
pub mod row_factories;
pub mod session;
pub mod time_format;
