use marquee_facility::alerts::availability_percent;
use marquee_facility::types::RoomStatus;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::CinemaAction;
use crate::commands::{dash, require_cinema};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: CinemaAction) -> Result<(), CliError> {
    match action {
        CinemaAction::Add { name, location } => {
            let id = marquee_db::insert_cinema(conn, &name, &location)?;
            log::info!(
                "{} Cinema #{} '{}' added",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                name,
            );
            Ok(())
        }

        CinemaAction::List => {
            let cinemas = marquee_db::list_cinemas(conn)?;
            if cinemas.is_empty() {
                log::info!(
                    "{}",
                    "No cinemas registered. Add one with 'marquee cinema add'."
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
                return Ok(());
            }

            for cinema in &cinemas {
                let rooms = marquee_db::rooms_for_cinema(conn, cinema.id)?;
                let active = rooms
                    .iter()
                    .filter(|r| r.status == RoomStatus::Active)
                    .count();
                log::info!(
                    "  #{:<4} {} {} ({} rooms, {} active, {}%)",
                    cinema.id,
                    cinema.name.if_supports_color(Stdout, |t| t.bold()),
                    format!("[{}]", cinema.location).if_supports_color(Stdout, |t| t.dimmed()),
                    rooms.len(),
                    active,
                    availability_percent(active, rooms.len()),
                );
            }
            Ok(())
        }

        CinemaAction::Show { id } => {
            let cinema = require_cinema(conn, id)?;
            log::info!(
                "{} {}",
                cinema.name.if_supports_color(Stdout, |t| t.bold()),
                format!("({})", cinema.location).if_supports_color(Stdout, |t| t.dimmed()),
            );
            crate::log_blank();

            let rooms = marquee_db::rooms_for_cinema(conn, id)?;
            if rooms.is_empty() {
                log::info!("  {}", "No rooms.".if_supports_color(Stdout, |t| t.dimmed()));
            }
            for room in &rooms {
                log::info!(
                    "  #{:<4} {:<16} {:<12} {}",
                    room.id,
                    dash(room.name.as_deref()),
                    room.status.as_str(),
                    dash(room.screen_type.as_deref()),
                );
            }

            let low = marquee_db::low_stock_items(conn, id)?;
            if !low.is_empty() {
                crate::log_blank();
                log::info!(
                    "  {} {} item(s) at or below minimum stock",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    low.len(),
                );
            }
            Ok(())
        }

        CinemaAction::Edit { id, name, location } => {
            let cinema = require_cinema(conn, id)?;
            let name = name.unwrap_or(cinema.name);
            let location = location.unwrap_or(cinema.location);
            marquee_db::update_cinema(conn, id, &name, &location)?;
            log::info!(
                "{} Cinema #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        CinemaAction::Rm { id } => {
            marquee_db::remove_cinema(conn, id)?;
            log::info!(
                "{} Cinema #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
    }
}
