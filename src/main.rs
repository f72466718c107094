use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::{fs, io, path::PathBuf};
use straightline::{eval, maxargs, parser, prog};
use tracing::{debug, Level};

/// Straight-line program interpreter
#[derive(Parser, Debug)]
struct Args {
    /// Program to run; the built-in sample program when omitted
    file_name: Option<PathBuf>,
    /// Only report the widest print statement, do not run the program
    #[arg(long)]
    analyze_only: bool,
    /// Log to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    let program = match &args.file_name {
        Some(file_name) => {
            let src = fs::read_to_string(file_name)
                .with_context(|| format!("failed to read {}", file_name.display()))?;
            parser::parse(&src)?
        }
        None => prog::prog(),
    };
    debug!(%program, "loaded");

    let stdout = io::stdout();
    if args.analyze_only {
        maxargs::report(&program, stdout.lock())?;
    } else {
        let env = eval::run(&program, stdout.lock())?;
        debug!(?env, "finished");
    }
    Ok(())
}
