// src/lib.rs
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod money;
pub mod report;
pub mod traits;
pub mod twilio;
