//! Page-Fetcher main entry point
//!
//! This is the interactive command-line shell around [`page_fetcher::fetch`].

use anyhow::Context;
use clap::Parser;
use page_fetcher::output::OutputFormat;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter URL to scrape: ";

/// Page-Fetcher: fetch a page and report its title and links
///
/// Without a URL argument the program prompts for one on standard input.
/// A failed request is reported on standard output and still exits with 0.
#[derive(Parser, Debug)]
#[command(name = "page-fetcher")]
#[command(version = "1.0.0")]
#[command(about = "Fetch a web page and report its title and links", long_about = None)]
struct Cli {
    /// URL to fetch (prompted for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let url = match cli.url {
        Some(url) => url,
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            prompt_for_url(&mut stdin.lock(), &mut stdout)?
        }
    };

    let outcome = page_fetcher::fetch(&url).await;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut stdout = io::stdout().lock();
    format
        .write(&outcome, &mut stdout)
        .context("Failed to write result")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("page_fetcher=warn,error"),
                1 => EnvFilter::new("page_fetcher=info,warn"),
                2 => EnvFilter::new("page_fetcher=debug,info"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Writes the prompt and reads one line as the URL
///
/// Only the line terminator is stripped. End of input before any line is an
/// error, so the process exits non-zero without fetching. An empty line is
/// still passed through and fails as a request error.
fn prompt_for_url(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<String> {
    write!(output, "{}", PROMPT).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;
    if read == 0 {
        anyhow::bail!("No URL entered: standard input was closed");
    }

    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
