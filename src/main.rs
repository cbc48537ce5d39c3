use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ls8_cpu::Ls8Machine;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Runs a program on the LS-8 virtual CPU.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Program file with one binary byte per line.
    program: PathBuf,

    /// Exit status reported when the program halts. Use 1 for the legacy behaviour.
    #[arg(long, default_value_t = 0)]
    halt_status: u8,

    /// Log every instruction before it executes.
    #[arg(long)]
    trace: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.trace {
            return LevelFilter::TRACE;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            // Usage errors exit 1; --help and --version are not errors.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let stderr_format = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(args.log_level());
    tracing_subscriber::registry().with(stderr_format).init();

    let result = run(&args);
    if let Err(err) = &result {
        eprintln!("error: {:#}", err);
    }
    ExitCode::from(exit_status(&result, args.halt_status))
}

/// A halted program exits with `halt_status`; any failure exits 1.
fn exit_status(result: &Result<()>, halt_status: u8) -> u8 {
    match result {
        Ok(()) => halt_status,
        Err(_) => 1,
    }
}

fn run(args: &Args) -> Result<()> {
    let mut machine = Ls8Machine::new(io::stdout().lock());
    machine
        .load_file(&args.program)
        .with_context(|| format!("failed to load '{}'", args.program.display()))?;
    let summary = machine.run()?;
    tracing::info!(
        "program halted after {} instructions, exiting with status {}",
        summary.instructions_executed,
        args.halt_status
    );
    Ok(())
}
