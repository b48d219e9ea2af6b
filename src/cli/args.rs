//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::ExecutionContext;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "delimcheck")]
#[command(author, version, about = "Check that (), [] and {} are correctly nested and closed", long_about = None)]
pub struct Args {
    /// What to check; starts the interactive loop when omitted
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output verdicts as JSON, one object per line
    #[arg(long, global = true, env = "DELIMCHECK_JSON")]
    pub json: bool,

    /// Suppress banner, prompt and farewell in the interactive loop
    #[arg(short, long, global = true, env = "DELIMCHECK_QUIET")]
    pub quiet: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Exit with status 1 if any expression is not balanced
    #[arg(long, global = true)]
    pub fail_on_incorrect: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Check each expression given on the command line
    Check {
        /// Expressions to check
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Check every line of a file
    File {
        /// Path to a file with one expression per line
        path: PathBuf,
    },

    /// Start the interactive loop (type 'sair' to quit)
    Repl {
        /// Read plain stdin lines even on a terminal
        #[arg(long)]
        plain: bool,
    },
}

impl Args {
    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext {
            output_format: if self.json { OutputFormat::Json } else { OutputFormat::Human },
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_subcommand() {
        let args = Args::try_parse_from(["delimcheck"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.execution_context().output_format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_check() {
        let args = Args::try_parse_from(["delimcheck", "check", "(a)", "[b", "--json"]).unwrap();
        match args.command {
            Some(SubCommand::Check { ref expressions }) => {
                assert_eq!(expressions, &vec!["(a)".to_string(), "[b".to_string()]);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(args.execution_context().output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_check_requires_expression() {
        assert!(Args::try_parse_from(["delimcheck", "check"]).is_err());
    }

    #[test]
    fn test_parse_file_and_flags() {
        let args =
            Args::try_parse_from(["delimcheck", "-q", "-v", "--fail-on-incorrect", "file", "exprs.txt"])
                .unwrap();
        let ctx = args.execution_context();
        assert!(ctx.quiet);
        assert!(ctx.verbose);
        assert!(args.fail_on_incorrect);
        match args.command {
            Some(SubCommand::File { path }) => assert_eq!(path, PathBuf::from("exprs.txt")),
            _ => panic!("Expected File command"),
        }
    }

    #[test]
    fn test_parse_repl_plain() {
        let args = Args::try_parse_from(["delimcheck", "repl", "--plain"]).unwrap();
        assert!(matches!(args.command, Some(SubCommand::Repl { plain: true })));
    }
}
