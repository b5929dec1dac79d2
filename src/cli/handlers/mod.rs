// src/cli/handlers/mod.rs

// This module contains the logic for each CLI action.

pub mod commons;
pub mod doctor;
pub mod exec;
pub mod init;
pub mod list;
pub mod run;
