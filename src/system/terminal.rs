// src/system/terminal.rs

//! Builds the platform-appropriate shell invocation that opens a new
//! terminal window running a command.

use crate::{constants::CLOSE_PROMPT, core::fallback, models::PlatformKind};

/// Checks whether a binary can be launched. The production probe consults
/// PATH; tests substitute a fake to script availability.
pub trait BinaryProbe {
    fn is_available(&self, binary: &str) -> bool;
}

/// PATH-backed probe used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl BinaryProbe for PathProbe {
    fn is_available(&self, binary: &str) -> bool {
        which::which(binary).is_ok()
    }
}

/// Linux terminal emulators in preference order, paired with the flag that
/// hands the rest of the line over to the command.
pub(crate) const LINUX_TERMINALS: &[(&str, &str)] = &[
    ("gnome-terminal", "--"),
    ("konsole", "-e"),
    ("xterm", "-e"),
    ("x-terminal-emulator", "-e"),
];

/// Builds the invocation that opens a terminal window running `command`.
///
/// Total over every [`PlatformKind`] and never returns an empty string.
/// On Linux the emulator candidates are probed in order and the first one
/// present wins; if none probes, the `xterm` form is returned anyway so
/// the caller still has something to attempt.
pub fn build_invocation(command: &str, platform: PlatformKind) -> String {
    build_invocation_with(command, platform, &PathProbe)
}

/// Same as [`build_invocation`], with the availability probe injected.
pub fn build_invocation_with(
    command: &str,
    platform: PlatformKind,
    probe: &dyn BinaryProbe,
) -> String {
    match platform {
        PlatformKind::Linux => linux_invocation(command, probe),
        PlatformKind::MacOS => format!(
            "osascript -e 'tell application \"Terminal\" to do script \"{}\"'",
            escape_single_quoted(&escape_applescript(command))
        ),
        // `/k` keeps the spawned window open once the command finishes.
        PlatformKind::Windows => format!("start cmd /k \"{}\"", escape_cmd(command)),
        // Unrecognized hosts get the gnome-terminal form without probing.
        PlatformKind::Unknown => bash_window("gnome-terminal", "--", command),
    }
}

fn linux_invocation(command: &str, probe: &dyn BinaryProbe) -> String {
    let probed = fallback::first_success(LINUX_TERMINALS, |&(binary, separator)| {
        if probe.is_available(binary) {
            Ok(bash_window(binary, separator, command))
        } else {
            log::debug!("Terminal candidate '{}' is not on PATH.", binary);
            Err(())
        }
    });
    probed.unwrap_or_else(|_| bash_window("xterm", "-e", command))
}

/// One `<emulator> <flag> bash -c "…"` window. The trailing prompt-and-read
/// keeps the window open until the user dismisses it.
fn bash_window(binary: &str, separator: &str, command: &str) -> String {
    format!(
        "{} {} bash -c \"{}; echo '{}'; read\"",
        binary,
        separator,
        escape_double_quoted(command),
        CLOSE_PROMPT
    )
}

/// Escapes a command for interpolation inside a double-quoted POSIX shell
/// context. The intermediate shell that parses the invocation unwraps these
/// escapes, so the inner `bash -c` receives the command byte-for-byte.
fn escape_double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`")
}

/// Escapes a command for an AppleScript string literal.
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes a command for interpolation inside a single-quoted POSIX shell
/// context.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\'', "'\\''")
}

/// Escapes a command for a double-quoted `cmd.exe` argument.
fn escape_cmd(text: &str) -> String {
    text.replace('%', "%%").replace('"', "\"\"")
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Scripted availability, recording every probe in order.
    struct FakeProbe {
        available: Vec<&'static str>,
        probed: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        fn with(available: &[&'static str]) -> Self {
            Self {
                available: available.to_vec(),
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl BinaryProbe for FakeProbe {
        fn is_available(&self, binary: &str) -> bool {
            self.probed.borrow_mut().push(binary.to_string());
            self.available.contains(&binary)
        }
    }

    #[test]
    fn test_linux_prefers_the_first_available_emulator() {
        let probe = FakeProbe::with(&["gnome-terminal", "konsole", "xterm"]);
        let invocation = build_invocation_with("df -h", PlatformKind::Linux, &probe);
        assert_eq!(
            invocation,
            "gnome-terminal -- bash -c \"df -h; echo 'Press Enter to close...'; read\""
        );
        // Once gnome-terminal probes, the rest of the chain is untouched.
        assert_eq!(*probe.probed.borrow(), ["gnome-terminal"]);
    }

    #[test]
    fn test_linux_walks_down_to_the_only_available_candidate() {
        let probe = FakeProbe::with(&["x-terminal-emulator"]);
        let invocation = build_invocation_with("df -h", PlatformKind::Linux, &probe);
        assert!(invocation.starts_with("x-terminal-emulator -e bash -c "));
        assert_eq!(
            *probe.probed.borrow(),
            ["gnome-terminal", "konsole", "xterm", "x-terminal-emulator"]
        );
    }

    #[test]
    fn test_linux_exhausted_chain_still_yields_xterm() {
        let probe = FakeProbe::with(&[]);
        let invocation = build_invocation_with("df -h", PlatformKind::Linux, &probe);
        assert_eq!(
            invocation,
            "xterm -e bash -c \"df -h; echo 'Press Enter to close...'; read\""
        );
    }

    #[test]
    fn test_unknown_platform_uses_the_default_linux_form() {
        let probe = FakeProbe::with(&[]);
        let invocation = build_invocation_with("df -h", PlatformKind::Unknown, &probe);
        assert!(invocation.starts_with("gnome-terminal -- bash -c "));
        // Unknown hosts are not probed at all.
        assert!(probe.probed.borrow().is_empty());
    }

    #[test]
    fn test_macos_osascript_template() {
        let invocation = build_invocation_with(
            "ssh admin@prod-server.com",
            PlatformKind::MacOS,
            &FakeProbe::with(&[]),
        );
        assert_eq!(
            invocation,
            "osascript -e 'tell application \"Terminal\" to do script \"ssh admin@prod-server.com\"'"
        );
    }

    #[test]
    fn test_windows_start_template_keeps_the_window_open() {
        let invocation = build_invocation_with(
            "ssh admin@prod-server.com",
            PlatformKind::Windows,
            &FakeProbe::with(&[]),
        );
        assert_eq!(invocation, "start cmd /k \"ssh admin@prod-server.com\"");
    }

    #[test]
    fn test_invocation_is_never_empty() {
        let probe = FakeProbe::with(&[]);
        for platform in [
            PlatformKind::Linux,
            PlatformKind::MacOS,
            PlatformKind::Windows,
            PlatformKind::Unknown,
        ] {
            assert!(!build_invocation_with("true", platform, &probe).is_empty());
        }
    }

    #[test]
    fn test_double_quote_context_preserves_shell_characters() {
        let probe = FakeProbe::with(&["gnome-terminal"]);
        let invocation =
            build_invocation_with("echo \"hi\" $HOME `date`", PlatformKind::Linux, &probe);
        assert_eq!(
            invocation,
            "gnome-terminal -- bash -c \"echo \\\"hi\\\" \\$HOME \\`date\\`; echo 'Press Enter to close...'; read\""
        );
    }

    #[test]
    fn test_macos_escapes_quotes_through_both_layers() {
        let probe = FakeProbe::with(&[]);

        let invocation = build_invocation_with("echo 'hi'", PlatformKind::MacOS, &probe);
        assert_eq!(
            invocation,
            "osascript -e 'tell application \"Terminal\" to do script \"echo '\\''hi'\\''\"'"
        );

        let invocation = build_invocation_with("say \"done\"", PlatformKind::MacOS, &probe);
        assert_eq!(
            invocation,
            "osascript -e 'tell application \"Terminal\" to do script \"say \\\"done\\\"\"'"
        );
    }

    #[test]
    fn test_cmd_escaping_doubles_percent_and_quotes() {
        let invocation = build_invocation_with(
            "echo \"load\" at 100%",
            PlatformKind::Windows,
            &FakeProbe::with(&[]),
        );
        assert_eq!(invocation, "start cmd /k \"echo \"\"load\"\" at 100%%\"");
    }
}
