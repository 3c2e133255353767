use cadence_core::db;
use cadence_core::error::CoreError;
use cadence_core::recurrence::Scheduler;
use cadence_core::repository::SqliteRepository;
use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::new().context("Invalid configuration")?;
    let today = util::resolve_today(cli.today.as_deref())?;
    let scheduler = Scheduler::new(config.scheduler_config());

    // Pure date arithmetic; no database needed.
    if let Commands::NextDate(command) = cli.command {
        return commands::next_date::next_date(&scheduler, command, today);
    }

    tracing::debug!(database = %config.database_path, "Opening database");
    let db_pool = db::establish_connection(&config.database_path).await?;
    let repository = SqliteRepository::new(db_pool, scheduler);

    match cli.command {
        // Handled above.
        Commands::NextDate(_) => Ok(()),
        Commands::Add(command) => commands::add::add_task(&repository, command, today).await,
        Commands::List(command) => {
            commands::list::list_tasks(&repository, command, &config, today).await
        }
        Commands::Show(command) => commands::show::show_task(&repository, command, today).await,
        Commands::Edit(command) => commands::edit::edit_task(&repository, command, today).await,
        Commands::Done(command) => commands::done::done_task(&repository, command, today).await,
        Commands::Delete(command) => commands::delete::delete_task(&repository, command).await,
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(e @ CoreError::NotFound(_)) => {
            eprintln!("{} {}", "Error:".style(error_style), e);
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::InvalidDate(s)) => {
            eprintln!("{} Invalid date: {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::Parse(e)) => {
            eprintln!("{} Invalid repeat rule: {}", "Error:".style(error_style), e);
        }
        Some(CoreError::Validation(e)) => {
            eprintln!("{} Invalid repeat rule: {}", "Error:".style(error_style), e);
        }
        Some(CoreError::Calc(e)) => {
            eprintln!("{} Cannot schedule: {}", "Error:".style(error_style), e);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
