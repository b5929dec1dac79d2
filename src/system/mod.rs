//! # System Interaction Layer
//!
//! This module provides abstractions for interacting with the underlying operating system.
//! It serves as a boundary between the core application logic and the specifics of process
//! management, platform probing, and terminal emulators.
//!
//! ## Modules
//!
//! - **`platform`**: Runtime detection of the host OS family, with a process-lifetime
//!   cache so the probe subprocess runs at most once.
//! - **`terminal`**: Construction of the platform-appropriate invocation that opens a
//!   new terminal window, including the Linux emulator fallback chain.
//! - **`executor`**: Spawning of interactive (detached) and background (captured)
//!   commands through the platform shell, with structured outcomes.

pub mod executor;
pub mod platform;
pub mod terminal;
