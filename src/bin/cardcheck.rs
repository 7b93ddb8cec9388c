//! CLI tool for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Read one card number from stdin
//! echo "4539 1488 0343 6467" | cardcheck
//!
//! # Or pass it as an argument, with the rejection reason
//! cardcheck --explain 1234567890123
//!
//! # Check every line of a file and summarize
//! cardcheck --lines < numbers.txt
//!
//! # Generate test numbers
//! cardcheck generate --brand amex --count 3
//! ```
//!
//! An invalid card is a normal result: the exit status is 0 either way. A
//! non-zero status means stdin or stdout failed.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use cardcheck::{check, generate, mask, BatchSummary, Brand, Verdict};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(
    author,
    version,
    about = "Validate card numbers (Luhn) and identify the issuing network",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Card number to check. Read from stdin when omitted.
    card_number: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Include the reason an invalid number was rejected
    #[arg(long)]
    explain: bool,

    /// Check every line of stdin and print a summary
    #[arg(long, conflicts_with = "card_number")]
    lines: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: Brand,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One checked input as written in JSON output.
#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Trailing line of `--lines --output json`.
#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a BatchSummary,
}

impl Report {
    fn new(raw: &str, explain: bool) -> Self {
        let result = check(raw);
        let verdict = Verdict::from(&result);
        let reason = match &result {
            Err(e) if explain => Some(e.to_string()),
            _ => None,
        };

        match &result {
            Ok(card) => tracing::debug!(card = %card, "card accepted"),
            Err(e) => tracing::debug!(card = %mask::mask_string(raw), reason = %e, "card rejected"),
        }

        Self {
            verdict,
            masked: result.ok().map(|card| card.masked()),
            reason,
        }
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        match self.verdict {
            Verdict::Valid(brand) => {
                writeln!(out, "Valid: yes")?;
                writeln!(out, "Brand: {}", brand)?;
            }
            Verdict::Invalid => {
                writeln!(out, "Valid: no")?;
                if let Some(reason) = &self.reason {
                    writeln!(out, "Reason: {}", reason)?;
                }
            }
        }
        Ok(())
    }

    fn write_line(&self, out: &mut impl Write, raw: &str) -> io::Result<()> {
        let shown = self.masked.clone().unwrap_or_else(|| mask::mask_string(raw));
        match (self.verdict, &self.reason) {
            (Verdict::Valid(brand), _) => writeln!(out, "{}: valid ({})", shown, brand),
            (Verdict::Invalid, Some(reason)) => writeln!(out, "{}: invalid ({})", shown, reason),
            (Verdict::Invalid, None) => writeln!(out, "{}: invalid", shown),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "I/O failure");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Commands::Generate { brand, count }) = cli.command {
        return cmd_generate(&mut out, brand, count);
    }

    if cli.lines {
        return cmd_lines(&mut out, cli.output, cli.explain);
    }

    let raw = match cli.card_number {
        Some(number) => number,
        None => read_one_line()?,
    };
    cmd_check(&mut out, &raw, cli.output, cli.explain)
}

fn read_one_line() -> io::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Card number: ");
        io::stderr().flush()?;
    }

    let mut buf = Vec::new();
    let line = read_lossy_line(&mut stdin.lock(), &mut buf)?.unwrap_or_default();
    tracing::info!(bytes = buf.len(), "read card number from stdin");
    Ok(line)
}

/// Reads up to and including the next `\n`. Bytes that are not UTF-8 become
/// U+FFFD, which the validator rejects like any other stray character.
fn read_lossy_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn cmd_check(out: &mut impl Write, raw: &str, output: OutputFormat, explain: bool) -> io::Result<()> {
    let report = Report::new(raw, explain);
    match output {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

fn cmd_lines(out: &mut impl Write, output: OutputFormat, explain: bool) -> io::Result<()> {
    let mut summary = BatchSummary::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    while let Some(line) = read_lossy_line(&mut input, &mut buf)? {
        let line = line.trim_end_matches(['\n', '\r']);
        let report = Report::new(line, explain);
        summary.record(report.verdict);

        match output {
            OutputFormat::Text => report.write_line(out, line)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
    }

    tracing::info!(
        total = summary.total(),
        valid = summary.valid(),
        "finished checking lines"
    );

    match output {
        OutputFormat::Text => {
            writeln!(
                out,
                "Checked {}: {} valid, {} invalid",
                summary.total(),
                summary.valid(),
                summary.invalid()
            )?;
            for (brand, count) in summary.brands() {
                writeln!(out, "  {}: {}", brand, count)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &SummaryLine { summary: &summary })?;
            writeln!(out)
        }
    }
}

fn cmd_generate(out: &mut impl Write, brand: Brand, count: usize) -> io::Result<()> {
    for card in generate::generate_cards(brand, count) {
        writeln!(out, "{}", card)?;
    }
    Ok(())
}
