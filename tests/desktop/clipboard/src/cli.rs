use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

pub const USAGE: &str = "Usage: clipboard [-h]";

/// Options are read left to right and stop at the first operand, so `-h`
/// wins over anything after it and operands are never inspected.
#[derive(Parser, Debug)]
#[command(name = "clipboard", disable_help_flag = true, override_usage = "clipboard [-h]")]
struct Cli {
    /// Print usage and exit
    #[arg(short = 'h', action = ArgAction::Help)]
    help: Option<bool>,

    /// Ignored
    #[arg(num_args = 1.., trailing_var_arg = true)]
    operands: Vec<OsString>,
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Run the interactive session.
    Run,
    /// `-h`: print usage and succeed.
    Help,
    /// An unrecognized option: print usage and fail.
    Invalid(String),
}

pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            if !cli.operands.is_empty() {
                log::debug!("ignoring operands: {:?}", cli.operands);
            }
            Invocation::Run
        }
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Invocation::Help,
        Err(e) => Invocation::Invalid(e.kind().to_string()),
    }
}

pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{USAGE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_runs_the_session() {
        assert_eq!(parse(["clipboard"]), Invocation::Run);
    }

    #[test]
    fn dash_h_asks_for_help() {
        assert_eq!(parse(["clipboard", "-h"]), Invocation::Help);
    }

    #[test]
    fn unknown_flag_is_invalid() {
        assert!(matches!(parse(["clipboard", "-z"]), Invocation::Invalid(_)));
        assert!(matches!(parse(["clipboard", "--help"]), Invocation::Invalid(_)));
    }

    #[test]
    fn options_are_processed_in_order() {
        assert_eq!(parse(["clipboard", "-h", "-z"]), Invocation::Help);
        assert!(matches!(parse(["clipboard", "-z", "-h"]), Invocation::Invalid(_)));
    }

    #[test]
    fn operands_end_option_parsing() {
        assert_eq!(parse(["clipboard", "extra"]), Invocation::Run);
        assert_eq!(parse(["clipboard", "extra", "-z"]), Invocation::Run);
        assert_eq!(parse(["clipboard", "extra", "-h"]), Invocation::Run);
        assert_eq!(parse(["clipboard", "--", "-z"]), Invocation::Run);
    }

    #[test]
    fn usage_line_matches_program_name() {
        let mut out = Vec::new();
        write_usage(&mut out).unwrap();
        assert_eq!(out, b"Usage: clipboard [-h]\n");
    }
}
