// src/constants.rs

/// The name of the command configuration file.
pub const CONFIG_FILENAME: &str = "config.json";

/// The name of the directory the configuration file is expected to live in.
pub const RESOURCES_DIR: &str = "resources";

/// Placeholder used for the working directory when the `pwd` probe fails.
/// The candidate paths built from it are still attempted as literal paths.
pub const UNKNOWN_WORKDIR: &str = "unknown";

/// Prompt appended to interactive commands so the spawned window stays open.
pub const CLOSE_PROMPT: &str = "Press Enter to close...";
