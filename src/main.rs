//! Delimcheck CLI - check brackets in expressions

use clap::Parser;
use std::io::{self, Write};

use delimcheck::cli::{Args, SubCommand};
use delimcheck::{check_expression, format_output, repl, CheckSummary, DelimError, ScriptRunner};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> delimcheck::Result<()> {
    let ctx = args.execution_context();

    let summary = match args.command {
        Some(SubCommand::Check { ref expressions }) => {
            let mut stdout = io::stdout().lock();
            let mut summary = CheckSummary::default();
            for expression in expressions {
                let report = check_expression(expression);
                summary.record(&report);
                writeln!(stdout, "{}", format_output(&report, &ctx.output_format)?)?;
            }
            if ctx.verbose {
                eprintln!("{}", summary);
            }
            summary
        }

        Some(SubCommand::File { ref path }) => ScriptRunner::new(&ctx).run_file(path)?.summary,

        Some(SubCommand::Repl { plain }) => repl::run(&ctx, plain)?,

        None => repl::run(&ctx, false)?,
    };

    if args.fail_on_incorrect && summary.incorrect() > 0 {
        return Err(DelimError::Unbalanced(summary.incorrect()));
    }

    Ok(())
}
