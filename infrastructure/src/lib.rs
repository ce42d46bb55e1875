pub mod answer_cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hf_client;
pub mod search;
pub mod vectorizer;
