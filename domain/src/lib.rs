pub mod error;
pub mod generator;
pub mod models;
pub mod prompt;
pub mod retry;
