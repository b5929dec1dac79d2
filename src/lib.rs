pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod report;
pub mod system;
