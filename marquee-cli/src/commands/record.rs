use marquee_facility::time::{format_datetime, now_ms};
use marquee_facility::types::{EventStatus, MaintenanceRecord};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::RecordAction;
use crate::commands::{dash, opt_datetime_arg, require_room};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: RecordAction) -> Result<(), CliError> {
    match action {
        RecordAction::Add {
            room,
            equipment,
            task,
            kind,
            category,
            description,
            start,
            technician,
            cost,
            downtime_minutes,
            notes,
        } => {
            let room_row = require_room(conn, room)?;
            let start_time = opt_datetime_arg(start.as_deref())?.unwrap_or_else(now_ms);

            let record = MaintenanceRecord {
                id: 0,
                cinema_id: room_row.cinema_id,
                room_id: room,
                equipment_id: equipment,
                task_id: task,
                kind,
                category,
                description,
                start_time,
                end_time: None,
                status: EventStatus::Scheduled,
                technician,
                cost,
                downtime_minutes,
                notes,
                parts_used: vec![],
                created_at: String::new(),
            };
            let id = marquee_db::insert_record(conn, &record)?;
            log::info!(
                "{} Work order #{} opened on room #{}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                room,
            );
            Ok(())
        }

        RecordAction::List { room, cinema } => {
            let records = match (room, cinema) {
                (Some(room_id), _) => marquee_db::records_for_room(conn, room_id)?,
                (None, Some(cinema_id)) => marquee_db::records_for_cinema(conn, cinema_id)?,
                (None, None) => {
                    return Err(CliError::invalid("pass --room or --cinema"));
                }
            };

            if records.is_empty() {
                log::info!("{}", "No work orders.".if_supports_color(Stdout, |t| t.dimmed()));
                return Ok(());
            }
            for record in &records {
                log::info!(
                    "  #{:<4} {:<12} {:<14} {:<12} room #{:<4} {} {}",
                    record.id,
                    record.kind.as_str(),
                    record.category.as_str(),
                    record.status.as_str(),
                    record.room_id,
                    format_datetime(record.start_time).if_supports_color(Stdout, |t| t.dimmed()),
                    dash(record.technician.as_deref()).if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            Ok(())
        }

        RecordAction::Status { id, status } => {
            marquee_db::update_record_status(conn, id, status)?;
            log::info!(
                "{} Work order #{} is now {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                status.as_str().if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }

        RecordAction::Edit {
            id,
            description,
            end,
            technician,
            cost,
            downtime_minutes,
            notes,
        } => {
            let mut record = marquee_db::get_record(conn, id)?
                .ok_or_else(|| CliError::invalid(format!("Work order {id} not found")))?;
            if let Some(v) = description {
                record.description = v;
            }
            if let Some(v) = opt_datetime_arg(end.as_deref())? {
                record.end_time = Some(v);
            }
            if let Some(v) = technician {
                record.technician = Some(v);
            }
            if let Some(v) = cost {
                record.cost = Some(v);
            }
            if let Some(v) = downtime_minutes {
                record.downtime_minutes = Some(v);
            }
            if let Some(v) = notes {
                record.notes = Some(v);
            }
            marquee_db::update_record(conn, &record)?;
            log::info!(
                "{} Work order #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        RecordAction::Rm { id } => {
            marquee_db::remove_record(conn, id)?;
            log::info!(
                "{} Work order #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
    }
}
