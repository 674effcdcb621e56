use anyhow::Result;
use clap::Parser;
use plating_cli::{EXIT_INVALID_COMMAND_LINE, dispatch, dump_config, prepare};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chromium-plating")]
#[command(author, version, long_about = None)]
#[command(
    about = "Open URLs in the Chromium profile they belong to",
    long_about = "chromium-plating matches a URL against the patterns in its configuration file \
                  and launches the browser with the matching profile selected. Register it as the \
                  default browser to route links to different profiles."
)]
struct Cli {
    /// URL to open (exactly one; anything else prints the configuration)
    ///
    /// Options must come before the URL; everything from the first URL on is
    /// taken verbatim, including values starting with '-'.
    #[arg(value_name = "URL", trailing_var_arg = true, allow_hyphen_values = true)]
    urls: Vec<String>,

    /// Use this configuration file instead of the platform default
    #[arg(long, value_name = "FILE", env = "CHROMIUM_PLATING_CONFIG")]
    config: Option<PathBuf>,

    /// Print the browser command line instead of launching it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let prepared = prepare(cli.config)?;

    let [url] = cli.urls.as_slice() else {
        eprintln!("Usage: {} <URL>", program_name());
        dump_config(&prepared, &mut io::stdout().lock())?;
        std::process::exit(EXIT_INVALID_COMMAND_LINE);
    };

    let outcome = dispatch(&prepared.config, url, cli.dry_run)?;
    if cli.dry_run {
        println!("{}", outcome.command_line());
    }

    Ok(())
}

fn program_name() -> String {
    std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "chromium-plating".to_string())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(
                "chromium_plating=debug,plating_cli=debug,plating_core=debug,plating_browser=debug",
            )
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
