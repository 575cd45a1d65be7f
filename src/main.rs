use clap::Parser;
use diary::application::{list_entries, OpenEntryService};
use diary::cli::{format_entry_list, Cli};
use diary::domain::{DateRequest, DateResolver};
use diary::error::DiaryError;
use diary::infrastructure::{Config, DiaryRepository, JinjaRenderer, TwoTimerParser};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling log verbosity (e.g., DIARY_LOG=debug)
const LOG_ENV: &str = "DIARY_LOG";

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    // Configuration is validated before any date is looked at
    let config = Config::from_env(cli.dir.as_deref(), cli.editor.as_deref())?;

    if cli.list {
        let repo = DiaryRepository::new(config.diary_dir.clone());
        let entries = list_entries(&repo, cli.limit)?;
        println!("{}", format_entry_list(&entries).trim_end());
        return Ok(());
    }

    let resolver = DateResolver::with_local_clock(TwoTimerParser);
    let service = OpenEntryService::new(&config, resolver, JinjaRenderer);
    service.execute(&DateRequest::from_words(&cli.date), !cli.print)?;
    Ok(())
}
