//! Where the session writes what it observes.

use std::io::Write;

/// Output sink for session messages and the library error hook.
pub trait Reporter {
    /// Write an informational line to standard output.
    fn message(&mut self, line: &str);

    /// Report a non-fatal, library-internal error to the diagnostic stream.
    fn error(&mut self, description: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn message(&mut self, line: &str) {
        (**self).message(line);
    }

    fn error(&mut self, description: &str) {
        (**self).error(description);
    }
}

/// Writes messages to stdout and errors to stderr, mirroring both to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdReporter;

impl Reporter for StdReporter {
    fn message(&mut self, line: &str) {
        log::debug!("{line}");
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
        let _ = stdout.flush();
    }

    fn error(&mut self, description: &str) {
        log::debug!("error hook: {description}");
        eprintln!("{}", error_line(description));
    }
}

/// Format a library error the way the error hook prints it.
#[must_use]
pub fn error_line(description: &str) -> String {
    format!("Error in {description}")
}
