use marquee_facility::time::now_ms;
use marquee_facility::types::SessionImpact;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::ImpactAction;
use crate::commands::{dash, dash_date, date_arg_or_now, require_room};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: ImpactAction) -> Result<(), CliError> {
    match action {
        ImpactAction::Add {
            room,
            date,
            time,
            movie,
            impact,
            cause,
            description,
            delay_minutes,
            affected_customers,
            refund_amount,
        } => {
            let room_row = require_room(conn, room)?;
            let record = SessionImpact {
                id: 0,
                cinema_id: room_row.cinema_id,
                room_id: room,
                date: date_arg_or_now(date.as_deref())?,
                session_time: time,
                movie_title: movie,
                impact,
                cause,
                description,
                delay_minutes,
                affected_customers,
                refund_amount,
                resolved: false,
                resolution_time: None,
                created_at: String::new(),
            };
            let id = marquee_db::insert_impact(conn, &record)?;
            log::info!(
                "{} Session impact #{} recorded ({} due to {})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                record.impact.as_str(),
                record.cause.as_str(),
            );
            Ok(())
        }

        ImpactAction::List { cinema, unresolved } => {
            let impacts = if unresolved {
                marquee_db::unresolved_impacts(conn, Some(cinema))?
            } else {
                marquee_db::impacts_for_cinema(conn, cinema)?
            };

            if impacts.is_empty() {
                log::info!(
                    "{}",
                    "No session impacts.".if_supports_color(Stdout, |t| t.dimmed()),
                );
                return Ok(());
            }
            for record in &impacts {
                let mark = if record.resolved {
                    format!("{}", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
                } else {
                    format!("{}", "\u{2718}".if_supports_color(Stdout, |t| t.red()))
                };
                log::info!(
                    "  {} #{:<4} {} {} {:<11} {:<11} room #{:<4} {}",
                    mark,
                    record.id,
                    dash_date(Some(record.date)),
                    record.session_time,
                    record.impact.as_str(),
                    record.cause.as_str(),
                    record.room_id,
                    dash(record.movie_title.as_deref()).if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            Ok(())
        }

        ImpactAction::Resolve { id } => {
            marquee_db::resolve_impact(conn, id, now_ms())?;
            log::info!(
                "{} Session impact #{} resolved",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        ImpactAction::Rm { id } => {
            marquee_db::remove_impact(conn, id)?;
            log::info!(
                "{} Session impact #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
    }
}
