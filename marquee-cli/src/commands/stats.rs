use marquee_facility::time::now_ms;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::error::CliError;

pub(crate) fn run(conn: &Connection) -> Result<(), CliError> {
    let stats = marquee_db::facility_stats(conn, now_ms())?;

    log::info!(
        "{}",
        "Facility Dashboard".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Cinemas:            {:>6}", stats.cinemas);
    log::info!("  Rooms:              {:>6}", stats.rooms);
    log::info!("  Active rooms:       {:>6}", stats.active_rooms);
    log::info!("  Availability:       {:>5}%", stats.availability);
    log::info!("  Equipment:          {:>6}", stats.equipment);
    log::info!("  Critical alerts:    {:>6}", stats.critical_equipment);
    log::info!("  Open tasks:         {:>6}", stats.open_tasks);
    log::info!("  Upcoming events:    {:>6}", stats.upcoming_events);
    log::info!("  Unresolved impacts: {:>6}", stats.unresolved_impacts);
    log::info!("  Low-stock items:    {:>6}", stats.low_stock_items);

    if stats.critical_equipment > 0 {
        crate::log_blank();
        log::info!(
            "  {} Run 'marquee equipment alerts' for the critical list.",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    Ok(())
}
