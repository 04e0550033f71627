use marquee_facility::time::{format_datetime, parse_datetime_ms};
use marquee_facility::types::{Event, EventStatus};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::EventAction;
use crate::commands::{dash, opt_date_arg, opt_datetime_arg, require_cinema};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: EventAction) -> Result<(), CliError> {
    match action {
        EventAction::Add {
            cinema,
            room,
            title,
            description,
            start,
            end,
            kind,
            assigned_to,
            priority,
        } => {
            require_cinema(conn, cinema)?;
            let start_time = parse_datetime_ms(&start)?;
            let end_time = parse_datetime_ms(&end)?;
            if end_time <= start_time {
                return Err(CliError::invalid("event end must be after its start"));
            }

            let event = Event {
                id: 0,
                cinema_id: cinema,
                room_id: room,
                title,
                description,
                start_time,
                end_time,
                kind,
                status: EventStatus::Scheduled,
                assigned_to,
                priority,
                created_at: String::new(),
            };
            let id = marquee_db::insert_event(conn, &event)?;
            log::info!(
                "{} Event #{} '{}' scheduled for {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                event.title,
                format_datetime(start_time),
            );
            Ok(())
        }

        EventAction::List { cinema, from, to } => {
            let events = match (opt_date_arg(from.as_deref())?, opt_date_arg(to.as_deref())?) {
                (Some(from), Some(to)) => marquee_db::events_in_window(conn, from, to)?,
                (None, None) => match cinema {
                    Some(id) => marquee_db::events_for_cinema(conn, id)?,
                    None => marquee_db::list_events(conn)?,
                },
                _ => {
                    return Err(CliError::invalid("--from and --to must be used together"));
                }
            };

            // Window queries still honor the cinema filter
            let events: Vec<_> = events
                .into_iter()
                .filter(|e| cinema.is_none_or(|c| e.cinema_id == c))
                .collect();

            if events.is_empty() {
                log::info!("{}", "No events.".if_supports_color(Stdout, |t| t.dimmed()));
                return Ok(());
            }
            for event in &events {
                log::info!(
                    "  #{:<4} {:<32} {:<12} {:<12} {}",
                    event.id,
                    event.title,
                    event.kind.as_str(),
                    event.status.as_str(),
                    format_datetime(event.start_time).if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            Ok(())
        }

        EventAction::Show { id } => {
            let event = get_event(conn, id)?;
            log::info!(
                "{} {}",
                format!("Event #{id}").if_supports_color(Stdout, |t| t.bold()),
                event.title,
            );
            if let Some(ref description) = event.description {
                log::info!("  {}", description);
            }
            log::info!(
                "  When:      {} - {}",
                format_datetime(event.start_time),
                format_datetime(event.end_time),
            );
            log::info!(
                "  Type:      {} ({})",
                event.kind.as_str(),
                event.status.as_str(),
            );
            log::info!("  Cinema:    #{}", event.cinema_id);
            if let Some(room) = event.room_id {
                log::info!("  Room:      #{room}");
            }
            log::info!("  Assigned:  {}", dash(event.assigned_to.as_deref()));
            if let Some(priority) = event.priority {
                log::info!("  Priority:  {}", priority.as_str());
            }
            Ok(())
        }

        EventAction::Edit {
            id,
            title,
            description,
            start,
            end,
            kind,
            assigned_to,
            priority,
        } => {
            let mut event = get_event(conn, id)?;
            if let Some(v) = title {
                event.title = v;
            }
            if let Some(v) = description {
                event.description = Some(v);
            }
            if let Some(v) = opt_datetime_arg(start.as_deref())? {
                event.start_time = v;
            }
            if let Some(v) = opt_datetime_arg(end.as_deref())? {
                event.end_time = v;
            }
            if let Some(v) = kind {
                event.kind = v;
            }
            if let Some(v) = assigned_to {
                event.assigned_to = Some(v);
            }
            if let Some(v) = priority {
                event.priority = Some(v);
            }
            if event.end_time <= event.start_time {
                return Err(CliError::invalid("event end must be after its start"));
            }
            marquee_db::update_event(conn, &event)?;
            log::info!(
                "{} Event #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        EventAction::Status { id, status } => {
            marquee_db::update_event_status(conn, id, status)?;
            log::info!(
                "{} Event #{} is now {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                status.as_str().if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }

        EventAction::Rm { id } => {
            marquee_db::remove_event(conn, id)?;
            log::info!(
                "{} Event #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
    }
}

fn get_event(conn: &Connection, id: i64) -> Result<Event, CliError> {
    marquee_db::get_event(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Event {id} not found")))
}
