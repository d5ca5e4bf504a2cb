//! Shared test utilities for driving the release sequence without real
//! `mvn` or `git` processes.

use crate::error::{ReleaseError, Result};
use crate::executor::CommandExecutor;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::{ExitStatus, Output};

/// Creates an `ExitStatus` from an exit code (Unix implementation).
#[cfg(unix)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    ExitStatus::from_raw(code << 8)
}

/// Creates an `ExitStatus` from an exit code (Windows implementation).
#[cfg(windows)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;

    ExitStatus::from_raw(code as u32)
}

/// Creates a successful command `Output` with empty stdout and stderr.
#[must_use]
pub fn success_output() -> Output {
    Output {
        status: exit_status(0),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

/// Creates a failed command `Output` with the given stderr message.
#[must_use]
pub fn failure_output(stderr: &str) -> Output {
    Output {
        status: exit_status(1),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

/// Creates a failed command `Output` that reports only on stdout, as `mvn`
/// and `git commit` do.
#[must_use]
pub fn stdout_failure_output(stdout: &str) -> Output {
    Output {
        status: exit_status(1),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

/// Represents an expected command invocation.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The program to execute (e.g. "git").
    pub program: &'static str,
    /// The arguments to pass to the program.
    pub args: Vec<&'static str>,
    /// The result to return when this command is invoked.
    pub result: Result<Output>,
}

impl ExpectedCall {
    /// An expected call that succeeds.
    #[must_use]
    pub fn succeeding(program: &'static str, args: &[&'static str]) -> Self {
        Self {
            program,
            args: args.to_vec(),
            result: Ok(success_output()),
        }
    }

    /// An expected call that exits non-zero with `stderr`.
    #[must_use]
    pub fn failing(program: &'static str, args: &[&'static str], stderr: &str) -> Self {
        Self {
            program,
            args: args.to_vec(),
            result: Ok(failure_output(stderr)),
        }
    }

    /// An expected call that exits non-zero with `stdout` and empty stderr.
    #[must_use]
    pub fn failing_on_stdout(program: &'static str, args: &[&'static str], stdout: &str) -> Self {
        Self {
            program,
            args: args.to_vec(),
            result: Ok(stdout_failure_output(stdout)),
        }
    }
}

/// A stub implementation of `CommandExecutor`.
///
/// Holds the expected invocations in order and returns their predefined
/// results. Any invocation that was not expected, or arrives out of order,
/// yields [`ReleaseError::StubMismatch`].
#[derive(Debug)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
    received: RefCell<Vec<String>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
            received: RefCell::new(Vec::new()),
        }
    }

    /// Returns every invocation received so far, formatted as command lines.
    #[must_use]
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }

    /// Asserts that all expected command invocations have been consumed.
    ///
    /// # Panics
    ///
    /// Panics if there are remaining expected calls that were not invoked.
    pub fn assert_finished(&self) {
        let remaining = self.expected.borrow();
        assert!(
            remaining.is_empty(),
            "expected no further command invocations, {} remain: {:?}",
            remaining.len(),
            remaining.iter().map(|c| c.args.join(" ")).collect::<Vec<_>>()
        );
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        let line = format!("{program} {}", args.join(" "));
        self.received.borrow_mut().push(line.clone());

        let Some(call) = self.expected.borrow_mut().pop_front() else {
            return Err(ReleaseError::StubMismatch {
                message: format!("unexpected command invocation: {line}"),
            });
        };

        if call.program != program || call.args.as_slice() != args {
            return Err(ReleaseError::StubMismatch {
                message: format!(
                    "expected `{} {}`, received `{line}`",
                    call.program,
                    call.args.join(" ")
                ),
            });
        }

        call.result
    }
}
