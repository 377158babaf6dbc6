use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};

use hexarr_core::{ArrayLiteral, is_hex_byte};

const PROMPT: &str = "Please enter hex values (separated by whitespace): ";

#[derive(Debug, Parser)]
#[command(
    name = "hexarr",
    version,
    about = "Format whitespace-separated hex bytes as a C array initializer"
)]
struct Cli {
    /// Log token diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the literal; logs must stay off it.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn run(mut input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush().context("flushing prompt")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("reading hex values from stdin")?;
    if n == 0 {
        tracing::debug!("stdin closed before a line was entered");
    }

    let literal = ArrayLiteral::parse(&line);
    if literal.is_empty() {
        tracing::debug!("no hex values entered, printing empty array");
    }
    for (i, tok) in literal.tokens().iter().enumerate() {
        if !is_hex_byte(tok) {
            tracing::debug!(index = i, token = %tok, "token is not a hex byte, passing through");
        }
    }
    tracing::debug!(count = literal.count(), "formatted array");

    let formatted = literal.into_formatted();
    writeln!(out, "{}", formatted.rendered)?;
    writeln!(out, "{}", formatted.length_line())?;
    out.flush()?;

    Ok(())
}
