//! Running the generator process

use colored::Colorize;
use std::ffi::OsString;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

use super::command::render;

/// Generator failures, each aborting the run
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to start generator '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("generator '{program}' {status}{}", stderr_excerpt(.stderr))]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

fn stderr_excerpt(stderr: &str) -> String {
    match stderr.trim().lines().last() {
        Some(line) if !line.trim().is_empty() => format!(": {}", line.trim()),
        _ => String::new(),
    }
}

/// Outcome of one generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    /// A successful, silent run
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into a [`GeneratorError::Failed`]
    pub fn check(self, program: &str) -> Result<Self, GeneratorError> {
        if self.is_success() {
            return Ok(self);
        }

        let status = match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "was terminated by a signal".to_string(),
        };
        Err(GeneratorError::Failed {
            program: program.to_string(),
            status,
            stderr: self.stderr,
        })
    }
}

/// Launches the generator
pub trait Invoker {
    /// Run `program` with `args` to completion
    fn invoke(&mut self, program: &str, args: &[OsString]) -> Result<Invocation, GeneratorError>;
}

/// Runs the generator as a blocking child process
#[derive(Debug, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, program: &str, args: &[OsString]) -> Result<Invocation, GeneratorError> {
        debug!("Running: {}", render(program, args));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GeneratorError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let invocation = Invocation {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in invocation.stdout.lines() {
            debug!("generator: {}", line);
        }
        for line in invocation.stderr.lines() {
            debug!("generator stderr: {}", line);
        }

        Ok(invocation)
    }
}

/// Prints generator command lines instead of running them
#[derive(Debug, Default)]
pub struct DryRunInvoker {
    /// Rendered command lines, in order
    pub commands: Vec<String>,
}

impl Invoker for DryRunInvoker {
    fn invoke(&mut self, program: &str, args: &[OsString]) -> Result<Invocation, GeneratorError> {
        let line = render(program, args);
        println!("{} {}", "[DRY RUN]".yellow(), line);
        self.commands.push(line);
        Ok(Invocation::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_success() {
        assert!(Invocation::success().check("gen").is_ok());
    }

    #[test]
    fn test_check_failure_keeps_stderr() {
        let invocation = Invocation {
            code: Some(2),
            stdout: String::new(),
            stderr: "Traceback (most recent call last):\nKeyError: 'track'\n".to_string(),
        };
        let err = invocation.check("python").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exited with status 2"));
        assert!(message.ends_with("KeyError: 'track'"));
        assert!(matches!(err, GeneratorError::Failed { stderr, .. } if stderr.contains("Traceback")));
    }

    #[test]
    fn test_check_signal() {
        let invocation = Invocation {
            code: None,
            ..Default::default()
        };
        let err = invocation.check("python").unwrap_err();
        assert_eq!(err.to_string(), "generator 'python' was terminated by a signal");
    }

    #[test]
    fn test_dry_run_records_commands() {
        let mut invoker = DryRunInvoker::default();
        let args = vec![OsString::from("--noise"), OsString::from("0")];
        let invocation = invoker.invoke("python", &args).unwrap();
        assert!(invocation.is_success());
        assert_eq!(invoker.commands, vec!["python --noise 0".to_string()]);
    }

    #[test]
    fn test_spawn_missing_program() {
        let err = ProcessInvoker::new()
            .invoke("rand-playlist-no-such-generator", &[])
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_captures_output_and_status() {
        let args = vec![
            OsString::from("-c"),
            OsString::from("echo made; echo broken >&2; exit 3"),
        ];
        let invocation = ProcessInvoker::new().invoke("sh", &args).unwrap();
        assert_eq!(invocation.code, Some(3));
        assert_eq!(invocation.stdout.trim(), "made");
        assert_eq!(invocation.stderr.trim(), "broken");
        assert!(invocation.check("sh").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_success() {
        let invocation = ProcessInvoker::new()
            .invoke("sh", &[OsString::from("-c"), OsString::from("exit 0")])
            .unwrap();
        assert!(invocation.is_success());
    }
}
