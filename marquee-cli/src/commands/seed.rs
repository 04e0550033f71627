use std::path::PathBuf;

use marquee_facility::time::now_ms;
use marquee_facility::yaml::load_fixtures;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::error::CliError;

pub(crate) fn run(
    conn: &Connection,
    demo: bool,
    fixtures: Option<PathBuf>,
) -> Result<(), CliError> {
    if !demo && fixtures.is_none() {
        return Err(CliError::invalid("pass --demo and/or --fixtures <dir>"));
    }

    if demo {
        let stats = marquee_db::seed_demo(conn, now_ms())?;
        log::info!(
            "{} Demo data: {} cinemas, {} rooms, {} equipment, {} tasks, {} events",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            stats.cinemas,
            stats.rooms,
            stats.equipment,
            stats.tasks,
            stats.events,
        );
    }

    if let Some(dir) = fixtures {
        let loaded = load_fixtures(&dir)?;
        if loaded.is_empty() {
            log::warn!("No fixture files found in {}", dir.display());
            return Ok(());
        }
        let stats = marquee_db::seed_from_fixtures(conn, &loaded)?;
        log::info!(
            "{} Fixtures from {}: {} cinemas, {} rooms, {} equipment, {} inventory items",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            dir.display(),
            stats.cinemas,
            stats.rooms,
            stats.equipment,
            stats.inventory,
        );
    }

    Ok(())
}
