// ABOUTME: CLI binary for the article extractor.
// ABOUTME: Scrapes one URL (or a local HTML file) and prints the article record as JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use credible_extractor::logging::init_logging;
use credible_extractor::options::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use credible_extractor::{ArticleRecord, Client, ParseError, DEFAULT_URL};
use tracing::error;

/// Printed to stdout instead of a record when scraping fails.
const FAILURE_LINE: &str = "Scraping failed. Check the URL and your network connection.";

#[derive(Parser, Debug)]
#[command(name = "extractor")]
#[command(about = "Fetch a web page and print its article metadata as JSON")]
struct Args {
    /// Page to scrape
    #[arg(default_value = DEFAULT_URL)]
    url: String,

    /// Parse this HTML file instead of fetching; the URL is only echoed
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

async fn run(args: &Args) -> Result<ArticleRecord, ParseError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .user_agent(args.user_agent.as_str())
        .build();

    match &args.html {
        Some(path) => client.scrape_file(path, &args.url),
        None => client.scrape(&args.url).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let record = match run(&args).await {
        Ok(record) => record,
        Err(e) => {
            error!("{}", e);
            println!("{}", FAILURE_LINE);
            return ExitCode::from(1);
        }
    };

    let output_str = match record.to_json_pretty() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error serializing record: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Some(output_path) = &args.output {
        if let Err(e) = fs::write(output_path, &output_str) {
            eprintln!("error writing to {:?}: {}", output_path, e);
            return ExitCode::from(1);
        }
    } else {
        println!("{}", output_str);
    }

    ExitCode::SUCCESS
}
