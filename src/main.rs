use acyclic::cli::{self, Cli, Commands};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Check { tokens }) => cli::check(tokens, &mut out),
        Some(Commands::Order { tokens }) => cli::order(tokens, &mut out),
        Some(Commands::Dump { tokens }) => cli::dump(tokens, &mut out),
        Some(Commands::Version) => {
            writeln!(out, "acyclic v{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        None => {
            writeln!(out, "Acyclic - DAG checker and topological sorter")?;
            writeln!(out, "Run 'acyclic order a->b b->c' to order a graph")?;
            writeln!(out, "Run 'acyclic --help' for more information")?;
            Ok(())
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v` flags.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
