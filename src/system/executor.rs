// src/system/executor.rs

use crate::{
    models::{ExecMode, ExecStatus, ExecutionOutcome, PlatformKind},
    report::{Reporter, Severity},
    system::{platform::PlatformCache, terminal},
};
use std::process::{Command, Stdio};

/// Runs configured commands, either detached in a freshly opened terminal
/// window or synchronously in the background with output captured.
///
/// The executor owns the process-lifetime [`PlatformCache`]: the first
/// invocation probes the host once and every later one reuses the answer.
/// Execution never panics and never returns `Err`; anything that goes
/// wrong at launch is folded into the returned [`ExecutionOutcome`].
#[derive(Debug, Default)]
pub struct Executor {
    platform: PlatformCache,
}

impl Executor {
    pub fn new() -> Self {
        Self {
            platform: PlatformCache::new(),
        }
    }

    /// An executor pinned to a known platform, skipping detection.
    pub fn with_platform(platform: PlatformKind) -> Self {
        Self {
            platform: PlatformCache::preset(platform),
        }
    }

    /// The platform this executor targets, detecting on first use.
    pub fn platform(&self) -> PlatformKind {
        self.platform.get()
    }

    /// Executes one command, announcing what runs and how it went through
    /// the reporter.
    ///
    /// Interactive success means the terminal window was launched; what
    /// happens inside it is the window's business. Background success
    /// means the command ran to completion, regardless of its exit code
    /// or stderr. Only launch-level errors produce a `Failure` outcome.
    pub fn execute(
        &self,
        title: &str,
        command: &str,
        interactive: bool,
        reporter: &mut dyn Reporter,
    ) -> ExecutionOutcome {
        let mode = if interactive {
            ExecMode::Interactive
        } else {
            ExecMode::Background
        };
        reporter.report(Severity::Loading, &format!("Executing: {}", title));
        reporter.report(Severity::Loading, &format!("Command: {}", command));
        reporter.report(Severity::Loading, &format!("Mode: {}", mode));

        match mode {
            ExecMode::Interactive => self.execute_interactive(command, reporter),
            ExecMode::Background => self.execute_background(command, reporter),
        }
    }

    fn execute_interactive(&self, command: &str, reporter: &mut dyn Reporter) -> ExecutionOutcome {
        let platform = self.platform.get();
        let invocation = terminal::build_invocation(command, platform);
        log::debug!("Terminal invocation: {}", invocation);

        match spawn_detached(platform, &invocation) {
            Ok(()) => {
                reporter.report(
                    Severity::Success,
                    "✓ Command launched in new terminal window",
                );
                reporter.report(
                    Severity::Success,
                    "The terminal window should open separately for interaction",
                );
                ExecutionOutcome {
                    mode: ExecMode::Interactive,
                    status: ExecStatus::Success,
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    error: None,
                }
            }
            Err(e) => {
                reporter.report(Severity::Error, &format!("✗ Command failed:\n{}", e));
                reporter.report(
                    Severity::Error,
                    &format!("Try running this command manually in a terminal:\n{}", command),
                );
                ExecutionOutcome {
                    mode: ExecMode::Interactive,
                    status: ExecStatus::Failure,
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn execute_background(&self, command: &str, reporter: &mut dyn Reporter) -> ExecutionOutcome {
        let platform = self.platform.get();
        let output = shell_command(platform, command).stdin(Stdio::null()).output();

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                let exit_code = output.status.code();

                reporter.report(
                    Severity::Success,
                    &format!("✓ Command completed successfully:\n\n{}", stdout),
                );
                if !stderr.is_empty() {
                    reporter.report(Severity::Error, &format!("\nWarnings/Errors:\n{}", stderr));
                }
                if let Some(code) = exit_code {
                    if code != 0 {
                        reporter.report(Severity::Error, &format!("Command exited with code {}", code));
                    }
                }

                ExecutionOutcome {
                    mode: ExecMode::Background,
                    status: ExecStatus::Success,
                    stdout,
                    stderr,
                    exit_code,
                    error: None,
                }
            }
            Err(e) => {
                reporter.report(Severity::Error, &format!("✗ Command failed:\n{}", e));
                ExecutionOutcome {
                    mode: ExecMode::Background,
                    status: ExecStatus::Failure,
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Spawns an invocation through the platform shell with every stream
/// detached. The child handle is dropped on purpose: the window owns its
/// own lifetime and is never waited on.
fn spawn_detached(platform: PlatformKind, invocation: &str) -> std::io::Result<()> {
    shell_command(platform, invocation)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| ())
}

/// The shell that interprets command lines on this platform: `cmd /C` on
/// Windows, `sh -c` everywhere else (Unknown hosts get `sh` as well).
fn shell_command(platform: PlatformKind, command_line: &str) -> Command {
    let mut command = match platform {
        PlatformKind::Windows => {
            let mut c = Command::new("cmd");
            c.arg("/C");
            c
        }
        _ => {
            let mut c = Command::new("sh");
            c.arg("-c");
            c
        }
    };
    command.arg(command_line);
    command
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::RecordingReporter;

    #[test]
    fn test_background_captures_stdout_and_exit_code() {
        let executor = Executor::new();
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Echo", "echo hello", false, &mut reporter);

        assert_eq!(outcome.mode, ExecMode::Background);
        assert_eq!(outcome.status, ExecStatus::Success);
        assert_eq!(outcome.stdout.trim(), "hello");
        assert_eq!(outcome.exit_code, Some(0));
        assert!(outcome.error.is_none());

        assert!(reporter.contains("Executing: Echo"));
        assert!(reporter.contains("Command: echo hello"));
        assert!(reporter.contains("Mode: Background"));
        assert!(reporter.contains("✓ Command completed successfully:"));
    }

    #[test]
    fn test_background_stderr_is_captured_but_not_fatal() {
        let executor = Executor::new();
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Warn", "echo oops >&2", false, &mut reporter);

        assert_eq!(outcome.status, ExecStatus::Success);
        assert_eq!(outcome.stderr.trim(), "oops");
        assert!(reporter.contains("Warnings/Errors:"));
    }

    #[test]
    fn test_background_nonzero_exit_stays_success() {
        let executor = Executor::new();
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Exit", "exit 7", false, &mut reporter);

        assert_eq!(outcome.status, ExecStatus::Success);
        assert_eq!(outcome.exit_code, Some(7));
        assert!(reporter.contains("Command exited with code 7"));
    }

    #[test]
    fn test_interactive_success_is_the_spawn_itself() {
        let executor = Executor::new();
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Window", "true", true, &mut reporter);

        assert_eq!(outcome.mode, ExecMode::Interactive);
        assert_eq!(outcome.status, ExecStatus::Success);
        assert!(outcome.stdout.is_empty());
        assert!(reporter.contains("Mode: Interactive (new terminal)"));
        assert!(reporter.contains("✓ Command launched in new terminal window"));
    }

    #[cfg(unix)]
    #[test]
    fn test_background_launch_error_is_a_failure() {
        // A Windows-pinned executor on a Unix host cannot find `cmd`.
        let executor = Executor::with_platform(PlatformKind::Windows);
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Cross", "echo hi", false, &mut reporter);

        assert_eq!(outcome.status, ExecStatus::Failure);
        assert!(outcome.error.is_some());
        assert_eq!(outcome.exit_code, None);
        assert!(reporter.contains("✗ Command failed:"));
    }

    #[cfg(unix)]
    #[test]
    fn test_interactive_launch_error_suggests_a_manual_run() {
        let executor = Executor::with_platform(PlatformKind::Windows);
        let mut reporter = RecordingReporter::default();
        let outcome = executor.execute("Cross", "echo hi", true, &mut reporter);

        assert_eq!(outcome.mode, ExecMode::Interactive);
        assert_eq!(outcome.status, ExecStatus::Failure);
        assert!(outcome.error.is_some());
        assert!(reporter.contains("Try running this command manually in a terminal:"));
    }
}
