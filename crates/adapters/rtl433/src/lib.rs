//! # rfbridge-adapter-rtl433
//!
//! Subprocess adapter — spawns the external rtl_433 decoder and exposes its
//! standard output as a [`LineSource`].
//!
//! ## Responsibilities
//! - Spawn the decoder with JSON line output enabled
//! - Deliver each stdout line at most once, in emission order
//! - End the source when the subprocess terminates (no restart — process
//!   supervision is an external concern)
//!
//! ## Dependency rule
//! Depends on `rfbridge-app` for the port trait. The decoding of line
//! *content* is not this crate's business — it ships raw text upstream.

mod config;
mod error;

pub use config::Rtl433Config;
pub use error::Rtl433Error;

use std::io;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

use rfbridge_app::ports::LineSource;

/// A running decoder subprocess, readable line by line.
///
/// Holding this value keeps the child alive; dropping it kills the child
/// (`kill_on_drop`). When the child exits on its own, `next_line` returns
/// `Ok(None)` and never yields again.
pub struct Rtl433Process {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

impl Rtl433Process {
    /// Spawn the decoder subprocess and capture its stdout.
    ///
    /// stderr is inherited so the decoder's own status output stays visible
    /// in the service logs.
    ///
    /// # Errors
    ///
    /// Returns [`Rtl433Error::Spawn`] when the program cannot be started and
    /// [`Rtl433Error::MissingStdout`] when no stdout pipe was set up.
    pub fn spawn(config: &Rtl433Config) -> Result<Self, Rtl433Error> {
        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(Rtl433Error::Spawn)?;

        let stdout = child.stdout.take().ok_or(Rtl433Error::MissingStdout)?;

        tracing::info!(
            program = %config.program,
            pid = child.id(),
            "decoder subprocess started"
        );

        Ok(Self {
            child,
            lines: BufReader::new(stdout).lines(),
        })
    }

    /// OS process id of the child, if it is still running.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

impl LineSource for Rtl433Process {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(script: &str) -> Rtl433Config {
        Rtl433Config {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[tokio::test]
    async fn should_deliver_lines_in_emission_order_then_end() {
        let config = scripted("printf 'first\\nsecond\\n'");
        let mut source = Rtl433Process::spawn(&config).unwrap();

        assert_eq!(source.next_line().await.unwrap(), Some("first".to_string()));
        assert_eq!(source.next_line().await.unwrap(), Some("second".to_string()));
        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_end_immediately_for_silent_subprocess() {
        let config = scripted("exit 0");
        let mut source = Rtl433Process::spawn(&config).unwrap();

        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_report_spawn_failure_for_missing_program() {
        let config = Rtl433Config {
            program: "definitely-not-a-real-program".to_string(),
            args: Vec::new(),
        };
        let result = Rtl433Process::spawn(&config);
        assert!(matches!(result, Err(Rtl433Error::Spawn(_))));
    }

    #[tokio::test]
    async fn should_expose_pid_while_running() {
        let config = scripted("sleep 5");
        let source = Rtl433Process::spawn(&config).unwrap();
        assert!(source.id().is_some());
    }
}
