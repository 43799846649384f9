#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod errors;
mod generators;
mod search;
mod template;
mod types;
mod webdriver;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const _EXIT_COMMAND_ERROR: i32 = 1;
const _EXIT_SELECTOR_NOT_FOUND: i32 = 2;
const _EXIT_EXTRACTION_FAILED: i32 = 3;
const _EXIT_WEBDRIVER_FAILED: i32 = 4;
const _EXIT_SESSION_CLOSED: i32 = 5;

use crate::commands::utils::BrowserOpts;
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "domscout")]
#[command(about = "Generator-driven selector search for headless browsers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the DOM with generated candidate selectors until one's text
    /// matches the target
    Search {
        /// URL to search on
        url: String,

        /// Selector template containing one placeholder (e.g., "#row-{n}")
        template: String,

        /// Text to look for (case-insensitive substring match)
        target: String,

        /// Placeholder token inside the template
        #[arg(long, default_value = "{n}")]
        placeholder: String,

        /// Value generator: odd, even, int, or int:N
        #[arg(short, long, default_value = "int")]
        generator: String,

        /// Start value for the int generator
        #[arg(long)]
        start: Option<u64>,

        #[command(flatten)]
        opts: BrowserOpts,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Check whether exactly one element matches a selector
    Exists {
        /// URL to check
        url: String,

        /// CSS selector for the element
        selector: String,

        #[command(flatten)]
        opts: BrowserOpts,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Read the text content of an element
    Text {
        /// URL to read from
        url: String,

        /// CSS selector for the element
        selector: String,

        #[command(flatten)]
        opts: BrowserOpts,

        /// Output format
        #[arg(short, long, default_value = "simple")]
        format: OutputFormat,
    },

    /// Click an element
    Click {
        /// URL to navigate to
        url: String,

        /// CSS selector for the element
        selector: String,

        #[command(flatten)]
        opts: BrowserOpts,
    },

    /// Type text into an element
    Type {
        /// URL to navigate to
        url: String,

        /// CSS selector for the input element
        selector: String,

        /// Text to type
        text: String,

        /// Clear the field before typing
        #[arg(long, default_value = "false")]
        clear: bool,

        #[command(flatten)]
        opts: BrowserOpts,
    },

    /// Capture a PNG screenshot of the page or one element
    Screenshot {
        /// URL to capture
        url: String,

        /// CSS selector to capture only one element
        #[arg(long)]
        selector: Option<String>,

        /// Output file path
        #[arg(short, long, default_value = "screenshot.png")]
        output: String,

        #[command(flatten)]
        opts: BrowserOpts,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    // Handle exit codes based on error type
    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            // Convert to our error type to get proper exit code
            let scout_err: errors::ScoutError = err.into();

            // Output JSON error to stdout for programmatic consumption
            let error_json = match scout_err.envelope() {
                Some(envelope) => json!({
                    "error": true,
                    "exit_code": scout_err.exit_code(),
                    "envelope": envelope,
                }),
                None => json!({
                    "error": true,
                    "message": scout_err.to_string(),
                    "exit_code": scout_err.exit_code(),
                }),
            };
            println!(
                "{}",
                serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
            );

            // Also log to stderr for human reading
            eprintln!("Error: {}", scout_err);
            std::process::exit(scout_err.exit_code());
        }
    }
}

async fn run() -> Result<()> {
    // Initialize tracing to stderr (so JSON output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domscout=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // Output logs to stderr
                .with_target(false), // Don't show target module in logs
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            url,
            template,
            target,
            placeholder,
            generator,
            start,
            opts,
            format,
        } => {
            commands::search::handle_search(
                url,
                template,
                target,
                placeholder,
                generator,
                start,
                opts,
                format,
            )
            .await?
        }

        Commands::Exists {
            url,
            selector,
            opts,
            format,
        } => commands::exists::handle_exists(url, selector, opts, format).await?,

        Commands::Text {
            url,
            selector,
            opts,
            format,
        } => commands::text::handle_text(url, selector, opts, format).await?,

        Commands::Click {
            url,
            selector,
            opts,
        } => commands::click::handle_click(url, selector, opts).await?,

        Commands::Type {
            url,
            selector,
            text,
            clear,
            opts,
        } => commands::r#type::handle_type(url, selector, text, clear, opts).await?,

        Commands::Screenshot {
            url,
            selector,
            output,
            opts,
        } => commands::screenshot::handle_screenshot(url, selector, output, opts).await?,
    }

    Ok(())
}
