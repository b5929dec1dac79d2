// src/core/mod.rs

pub mod config_resolver;
pub mod fallback;
