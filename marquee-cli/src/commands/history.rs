use marquee_facility::time::{now_ms, DAY_MS};
use marquee_facility::types::MaintenanceEntry;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::HistoryAction;
use crate::commands::{dash, dash_date, date_arg_or_now, opt_date_arg, require_room};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: HistoryAction) -> Result<(), CliError> {
    match action {
        HistoryAction::Add {
            room,
            kind,
            description,
            date,
            technician,
            cost,
            notes,
            parts,
        } => {
            // Cinema ownership follows the room
            let room_row = require_room(conn, room)?;
            let entry = MaintenanceEntry {
                id: 0,
                room_id: room,
                cinema_id: room_row.cinema_id,
                date: date_arg_or_now(date.as_deref())?,
                kind,
                description,
                technician,
                cost,
                notes,
                parts_used: parts,
                created_at: String::new(),
            };
            let id = marquee_db::insert_history_entry(conn, &entry)?;
            log::info!(
                "{} Maintenance entry #{} logged for room #{}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                room,
            );
            Ok(())
        }

        HistoryAction::List { room, cinema } => {
            let entries = match (room, cinema) {
                (Some(room_id), _) => marquee_db::history_for_room(conn, room_id)?,
                (None, Some(cinema_id)) => marquee_db::history_for_cinema(conn, cinema_id)?,
                (None, None) => {
                    return Err(CliError::invalid("pass --room or --cinema"));
                }
            };

            if entries.is_empty() {
                log::info!(
                    "{}",
                    "No maintenance history.".if_supports_color(Stdout, |t| t.dimmed()),
                );
                return Ok(());
            }
            for entry in &entries {
                let parts = if entry.parts_used.is_empty() {
                    String::new()
                } else {
                    format!("[{}]", entry.parts_used.join(", "))
                };
                log::info!(
                    "  #{:<4} {} {:<16} room #{:<4} {} {} {}",
                    entry.id,
                    dash_date(Some(entry.date)),
                    entry.kind.as_str(),
                    entry.room_id,
                    entry.description,
                    dash(entry.technician.as_deref()).if_supports_color(Stdout, |t| t.dimmed()),
                    parts.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            Ok(())
        }

        HistoryAction::Edit {
            id,
            date,
            kind,
            description,
            technician,
            cost,
            notes,
        } => {
            let mut entry = marquee_db::get_history_entry(conn, id)?
                .ok_or_else(|| CliError::invalid(format!("Maintenance entry {id} not found")))?;
            if let Some(v) = opt_date_arg(date.as_deref())? {
                entry.date = v;
            }
            if let Some(v) = kind {
                entry.kind = v;
            }
            if let Some(v) = description {
                entry.description = v;
            }
            if let Some(v) = technician {
                entry.technician = Some(v);
            }
            if let Some(v) = cost {
                entry.cost = Some(v);
            }
            if let Some(v) = notes {
                entry.notes = Some(v);
            }
            marquee_db::update_history_entry(conn, &entry)?;
            log::info!(
                "{} Maintenance entry #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        HistoryAction::Rm { id } => {
            marquee_db::remove_history_entry(conn, id)?;
            log::info!(
                "{} Maintenance entry #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        HistoryAction::Stats { cinema, days } => {
            let since = days.map(|d| now_ms() - d * DAY_MS);
            let stats = marquee_db::maintenance_stats(conn, cinema, since)?;

            let window = match days {
                Some(d) => format!("last {d} days"),
                None => "all time".to_string(),
            };
            log::info!(
                "{}",
                format!("Maintenance statistics ({window})")
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            crate::log_blank();
            log::info!("  Interventions:     {:>6}", stats.total);
            log::info!("  Preventive A:      {:>6}", stats.preventive_a);
            log::info!("  Preventive B:      {:>6}", stats.preventive_b);
            log::info!("  Preventive C:      {:>6}", stats.preventive_c);
            log::info!("  Lamp replacements: {:>6}", stats.lamp_replacements);
            log::info!("  Corrective:        {:>6}", stats.corrective);
            log::info!("  Total cost:        {:>9.2}", stats.total_cost);
            Ok(())
        }
    }
}
