//! marquee CLI
//!
//! Command-line interface for the cinema-facility registry: cinemas,
//! rooms, equipment, inventory, tasks, events, maintenance, and reports.

use clap::Parser;

mod cli_types;
mod commands;
mod error;
mod settings;

use cli_types::{Cli, Commands};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Plain message-only output; level prefixes only for warnings and errors.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            use std::io::Write;
            match record.level() {
                log::Level::Info => writeln!(buf, "{}", record.args()),
                level => writeln!(buf, "{}: {}", level.to_string().to_lowercase(), record.args()),
            }
        })
        .init();
}

/// Blank spacer line in normal output.
pub(crate) fn log_blank() {
    log::info!("");
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands operate on the settings file, not the database.
        Commands::Config { action } => commands::config::run(action, cli.db),

        command => {
            let conn = commands::open_connection(cli.db)?;
            match command {
                Commands::Cinema { action } => commands::cinema::run(&conn, action),
                Commands::Room { action } => commands::room::run(&conn, action),
                Commands::Equipment { action } => commands::equipment::run(&conn, action),
                Commands::Inventory { action } => commands::inventory::run(&conn, action),
                Commands::Task { action } => commands::task::run(&conn, action),
                Commands::Event { action } => commands::event::run(&conn, action),
                Commands::History { action } => commands::history::run(&conn, action),
                Commands::Record { action } => commands::record::run(&conn, action),
                Commands::Impact { action } => commands::impact::run(&conn, action),
                Commands::Setting { action } => commands::setting::run(&conn, action),
                Commands::Stats => commands::stats::run(&conn),
                Commands::Report { action } => commands::report::run(&conn, action),
                Commands::Seed { demo, fixtures } => commands::seed::run(&conn, demo, fixtures),
                Commands::Reset { yes } => commands::reset::run(&conn, yes),
                Commands::Config { .. } => unreachable!("handled above"),
            }
        }
    }
}
