//! Clipboard test program.
//!
//! Opens a small window and exercises the clipboard:
//! Ctrl+C writes a fixed string, Ctrl+V prints the current contents, Escape quits.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clipkit::session::{self, SessionConfig};
use cli::Invocation;

/// How the program ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Act on the command line. `open` runs the session and is only called for
/// [`Invocation::Run`].
fn run<F>(invocation: Invocation, out: &mut impl Write, err: &mut impl Write, open: F) -> Status
where
    F: FnOnce() -> Result<(), session::Error>,
{
    match invocation {
        Invocation::Run => {}
        Invocation::Help => {
            let _ = cli::write_usage(out);
            return Status::Success;
        }
        Invocation::Invalid(reason) => {
            log::debug!("bad command line: {reason}");
            let _ = cli::write_usage(out);
            return Status::Failure;
        }
    }

    match open() {
        Ok(()) => Status::Success,
        Err(e) => {
            log::error!("{e:?}");
            let _ = writeln!(err, "{e}");
            Status::Failure
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let invocation = cli::parse(std::env::args_os());
    run(invocation, &mut io::stdout(), &mut io::stderr(), || {
        session::run_desktop(&SessionConfig::default())
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(
        invocation: Invocation,
        result: Result<(), session::Error>,
    ) -> (Status, bool, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut opened = false;
        let status = run(invocation, &mut out, &mut err, || {
            opened = true;
            result
        });
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        (status, opened, out, err)
    }

    #[test]
    fn help_prints_usage_without_opening_a_window() {
        let (status, opened, out, err) = run_with(cli::parse(["clipboard", "-h"]), Ok(()));
        assert_eq!(status, Status::Success);
        assert!(!opened);
        assert_eq!(out, "Usage: clipboard [-h]\n");
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_flag_prints_usage_and_fails() {
        let (status, opened, out, _) = run_with(cli::parse(["clipboard", "-z"]), Ok(()));
        assert_eq!(status, Status::Failure);
        assert!(!opened);
        assert_eq!(out, "Usage: clipboard [-h]\n");
    }

    #[test]
    fn init_failure_is_reported_and_fails() {
        let (status, opened, out, err) = run_with(
            Invocation::Run,
            Err(session::Error::Init("no display".into())),
        );
        assert_eq!(status, Status::Failure);
        assert!(opened);
        assert!(out.is_empty());
        assert_eq!(err, "Failed to initialize GLFW: no display\n");
    }

    #[test]
    fn closed_session_succeeds() {
        let (status, opened, out, err) = run_with(Invocation::Run, Ok(()));
        assert_eq!(status, Status::Success);
        assert!(opened);
        assert!(out.is_empty() && err.is_empty());
    }
}
