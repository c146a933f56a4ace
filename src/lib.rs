pub mod config;
pub mod interview;
pub mod output;
pub mod scoring;
