// src/system/platform.rs

//! Runtime detection of the host operating system.
//!
//! Detection asks the running system instead of trusting the compile-time
//! target, so a binary carried onto an unexpected host still picks the
//! right terminal strategy. `uname -s` settles Unix-likes; when that
//! cannot even spawn, a `cmd` executable on PATH is taken as Windows.

use crate::models::PlatformKind;
use std::process::Command;
use std::sync::OnceLock;

/// Probes the host platform. Infallible: anything unrecognized or
/// unprobeable is [`PlatformKind::Unknown`].
pub fn detect() -> PlatformKind {
    match Command::new("uname").arg("-s").output() {
        Ok(output) => {
            let kernel = String::from_utf8_lossy(&output.stdout)
                .trim()
                .to_lowercase();
            if kernel.contains("darwin") {
                PlatformKind::MacOS
            } else if kernel.contains("linux") {
                PlatformKind::Linux
            } else {
                log::debug!("uname reported unrecognized kernel: '{}'", kernel);
                PlatformKind::Unknown
            }
        }
        Err(e) => {
            log::debug!("uname probe failed to spawn: {}", e);
            if which::which("cmd").is_ok() {
                PlatformKind::Windows
            } else {
                PlatformKind::Unknown
            }
        }
    }
}

/// Process-lifetime memo of the detected platform.
///
/// Detection spawns a subprocess, so the result is probed once and reused.
/// The cache is plain state: whoever needs platform awareness constructs
/// one (or receives one) and passes it down. Safe to share across threads.
#[derive(Debug, Default)]
pub struct PlatformCache {
    detected: OnceLock<PlatformKind>,
}

impl PlatformCache {
    pub fn new() -> Self {
        Self {
            detected: OnceLock::new(),
        }
    }

    /// A cache pre-seeded with a known platform. [`detect`] never runs.
    pub fn preset(platform: PlatformKind) -> Self {
        let detected = OnceLock::new();
        let _ = detected.set(platform);
        Self { detected }
    }

    /// The platform, probing on first use and memoized afterwards.
    pub fn get(&self) -> PlatformKind {
        *self.detected.get_or_init(detect)
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_the_host_platform() {
        let detected = detect();
        if cfg!(target_os = "linux") {
            assert_eq!(detected, PlatformKind::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(detected, PlatformKind::MacOS);
        } else if cfg!(target_os = "windows") {
            assert_eq!(detected, PlatformKind::Windows);
        }
    }

    #[test]
    fn test_cache_returns_a_stable_answer() {
        let cache = PlatformCache::new();
        assert_eq!(cache.get(), cache.get());
    }

    #[test]
    fn test_preset_cache_skips_detection() {
        let cache = PlatformCache::preset(PlatformKind::Windows);
        assert_eq!(cache.get(), PlatformKind::Windows);

        let cache = PlatformCache::preset(PlatformKind::Unknown);
        assert_eq!(cache.get(), PlatformKind::Unknown);
    }
}
