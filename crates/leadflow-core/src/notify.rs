//! Port to the external messaging/scheduling tool.
//!
//! The core never spawns processes directly; everything goes through the
//! [`Notifier`] trait so the engines stay free of process-invocation
//! concerns. [`CommandNotifier`] binds the port to whatever CLI tool the
//! workspace config names.

use std::cell::RefCell;
use std::process::{Command, Stdio};

use crate::config::MessengerConfig;
use crate::error::{CrmError, Result};

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

pub trait Notifier {
    /// Register a named, schedule-tagged job whose payload is sending
    /// `message` to the configured recipient when it fires.
    fn schedule_job(&self, name: &str, schedule: &str, message: &str) -> Result<()>;

    /// Send a message to the configured recipient right now.
    fn send_message(&self, message: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// CommandNotifier
// ---------------------------------------------------------------------------

/// Shells out to the external tool (`<program> cron create ...` /
/// `<program> message send ...`). The program is located via `which` before
/// every call; a zero exit status signals success, anything else surfaces as
/// [`CrmError::External`] with captured stderr.
pub struct CommandNotifier {
    program: String,
    recipient: String,
}

impl CommandNotifier {
    pub fn new(cfg: &MessengerConfig) -> Self {
        Self {
            program: cfg.program.clone(),
            recipient: cfg.recipient.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn send_command(&self, message: &str) -> String {
        format!(
            "{} message send --target={} --message={}",
            self.program,
            shell_quote(&self.recipient),
            shell_quote(message)
        )
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        if !self.is_available() {
            return Err(CrmError::MessengerNotFound(self.program.clone()));
        }
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CrmError::SpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CrmError::External {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl Notifier for CommandNotifier {
    fn schedule_job(&self, name: &str, schedule: &str, message: &str) -> Result<()> {
        let command = self.send_command(message);
        self.run(&[
            "cron", "create", "--name", name, "--schedule", schedule, "--command", &command,
        ])
    }

    fn send_message(&self, message: &str) -> Result<()> {
        self.run(&[
            "message",
            "send",
            "--target",
            &self.recipient,
            "--message",
            message,
        ])
    }
}

/// Single-quote a value for embedding in the scheduled job's command string.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

// ---------------------------------------------------------------------------
// NullNotifier
// ---------------------------------------------------------------------------

/// Records everything and talks to nothing. Backs `--dry-run` and the tests.
#[derive(Default)]
pub struct NullNotifier {
    pub jobs: RefCell<Vec<(String, String, String)>>,
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for NullNotifier {
    fn schedule_job(&self, name: &str, schedule: &str, message: &str) -> Result<()> {
        self.jobs.borrow_mut().push((
            name.to_string(),
            schedule.to_string(),
            message.to_string(),
        ));
        Ok(())
    }

    fn send_message(&self, message: &str) -> Result<()> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_notifier_records() {
        let n = NullNotifier::default();
        n.schedule_job("job-1", "0 9 1 3 *", "hello").unwrap();
        n.send_message("direct").unwrap();
        assert_eq!(n.jobs.borrow().len(), 1);
        assert_eq!(n.jobs.borrow()[0].1, "0 9 1 3 *");
        assert_eq!(n.messages.borrow()[0], "direct");
    }

    #[test]
    fn missing_program_is_reported_before_spawning() {
        let notifier = CommandNotifier::new(&MessengerConfig {
            program: "definitely-not-a-real-binary-xyz".to_string(),
            recipient: "Tyler".to_string(),
        });
        assert!(!notifier.is_available());
        assert!(matches!(
            notifier.send_message("hi"),
            Err(CrmError::MessengerNotFound(_))
        ));
        assert!(matches!(
            notifier.schedule_job("job", "0 9 1 3 *", "hi"),
            Err(CrmError::MessengerNotFound(_))
        ));
    }

    #[test]
    fn nonzero_exit_surfaces_as_external_error() {
        let notifier = CommandNotifier::new(&MessengerConfig {
            program: "false".to_string(),
            recipient: "Tyler".to_string(),
        });
        assert!(matches!(
            notifier.send_message("hi"),
            Err(CrmError::External { .. })
        ));
    }

    #[test]
    fn send_command_quotes_message() {
        let notifier = CommandNotifier::new(&MessengerConfig {
            program: "openclaw".to_string(),
            recipient: "Tyler".to_string(),
        });
        let cmd = notifier.send_command("it's due");
        assert!(cmd.starts_with("openclaw message send --target='Tyler'"));
        assert!(cmd.contains(r"'it'\''s due'"));
    }
}
