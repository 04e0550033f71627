use marquee_facility::alerts::{room_alerts, AlertLevel};
use marquee_facility::time::now_ms;
use marquee_facility::types::{PreventiveSchedule, ProjectorLamp, Room, RoomStatus};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::{RoomAction, RoomFields};
use crate::commands::{dash, dash_date, date_arg_or_now, parse_seating, require_cinema, require_room};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: RoomAction) -> Result<(), CliError> {
    match action {
        RoomAction::Add {
            cinema,
            status,
            reason,
            fields,
        } => run_add(conn, cinema, status, reason, fields),
        RoomAction::List { cinema } => run_list(conn, cinema),
        RoomAction::Show { id } => run_show(conn, id),
        RoomAction::Edit { id, fields } => run_edit(conn, id, fields),
        RoomAction::Rm { id } => {
            marquee_db::remove_room(conn, id)?;
            log::info!(
                "{} Room #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
        RoomAction::Status { id, status, reason } => {
            marquee_db::update_room_status(conn, id, status, reason.as_deref())?;
            log::info!(
                "{} Room #{} is now {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                status.as_str().if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }
        RoomAction::LampHours { id, hours } => {
            let room = require_room(conn, id)?;
            if room.lamp.is_none() {
                log::warn!("Room #{id} has no projector lamp configured; nothing to update");
                return Ok(());
            }
            marquee_db::update_lamp_hours(conn, id, hours)?;
            let room = require_room(conn, id)?;
            if let Some(lamp) = &room.lamp {
                log::info!(
                    "{} Lamp counter set to {} h ({:.0}% of rated life)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    hours,
                    lamp.usage_percent(),
                );
            }
            Ok(())
        }
        RoomAction::LampReplace { id, model, max_hours } => {
            let room = require_room(conn, id)?;
            if room.lamp.is_none() {
                log::warn!("Room #{id} has no projector lamp configured; nothing to replace");
                return Ok(());
            }
            marquee_db::replace_projector_lamp(
                conn,
                id,
                model.as_deref(),
                max_hours,
                now_ms(),
            )?;
            log::info!(
                "{} Lamp replaced on room #{}; hour counter reset",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
        RoomAction::Preventive { id, tier, date } => {
            let date = date_arg_or_now(date.as_deref())?;
            marquee_db::record_preventive(conn, id, tier, date)?;
            let room = require_room(conn, id)?;
            let next = match tier {
                marquee_facility::PreventiveTier::A => room.preventive.next_a,
                marquee_facility::PreventiveTier::B => room.preventive.next_b,
                marquee_facility::PreventiveTier::C => room.preventive.next_c,
            };
            log::info!(
                "{} Preventive {} recorded for room #{}; next due {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                tier,
                id,
                dash_date(next),
            );
            Ok(())
        }
        RoomAction::Overdue => {
            let rooms = marquee_db::rooms_overdue_preventive(conn, now_ms())?;
            if rooms.is_empty() {
                log::info!(
                    "{}",
                    "No rooms overdue for preventive maintenance."
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
                return Ok(());
            }
            for room in &rooms {
                log::info!(
                    "  {} #{:<4} {} (cinema #{}) next A {} / B {} / C {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    room.id,
                    dash(room.name.as_deref()),
                    room.cinema_id,
                    dash_date(room.preventive.next_a),
                    dash_date(room.preventive.next_b),
                    dash_date(room.preventive.next_c),
                );
            }
            Ok(())
        }
    }
}

/// Apply shared field flags on top of an existing room value.
fn apply_fields(room: &mut Room, fields: RoomFields) -> Result<(), CliError> {
    if let Some(name) = fields.name {
        room.name = Some(name);
    }
    if let Some(location) = fields.location {
        room.location = Some(location);
    }
    if let Some(screen_type) = fields.screen_type {
        room.screen_type = Some(screen_type);
    }
    if let Some(sound_system) = fields.sound_system {
        room.sound_system = Some(sound_system);
    }
    if let Some(ref seating) = fields.seating {
        room.seating = Some(parse_seating(seating)?);
    }

    if let Some(model) = fields.lamp_model {
        let max_hours = fields
            .lamp_max_hours
            .or(room.lamp.as_ref().map(|l| l.max_hours))
            .ok_or_else(|| CliError::invalid("--lamp-model requires --lamp-max-hours"))?;
        let current = fields
            .lamp_hours
            .or(room.lamp.as_ref().map(|l| l.current_hours))
            .unwrap_or(0);
        let replaced_at = room.lamp.as_ref().map(|l| l.replaced_at).unwrap_or(now_ms());
        room.lamp = Some(ProjectorLamp {
            model,
            current_hours: current,
            max_hours,
            replaced_at,
        });
    } else if fields.lamp_hours.is_some() || fields.lamp_max_hours.is_some() {
        let Some(lamp) = room.lamp.as_mut() else {
            return Err(CliError::invalid(
                "room has no lamp; pass --lamp-model to configure one",
            ));
        };
        if let Some(hours) = fields.lamp_hours {
            lamp.current_hours = hours;
        }
        if let Some(max) = fields.lamp_max_hours {
            lamp.max_hours = max;
        }
    }

    Ok(())
}

fn run_add(
    conn: &Connection,
    cinema: i64,
    status: RoomStatus,
    reason: Option<String>,
    fields: RoomFields,
) -> Result<(), CliError> {
    require_cinema(conn, cinema)?;

    let mut room = Room {
        id: 0,
        cinema_id: cinema,
        name: None,
        location: None,
        status,
        status_reason: reason,
        screen_type: None,
        sound_system: None,
        seating: None,
        lamp: None,
        preventive: PreventiveSchedule::default(),
        created_at: String::new(),
    };
    apply_fields(&mut room, fields)?;

    let id = marquee_db::insert_room(conn, &room)?;
    log::info!(
        "{} Room #{} added to cinema #{}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
        cinema,
    );
    Ok(())
}

fn run_list(conn: &Connection, cinema: Option<i64>) -> Result<(), CliError> {
    let rooms = match cinema {
        Some(id) => marquee_db::rooms_for_cinema(conn, id)?,
        None => marquee_db::list_rooms(conn)?,
    };

    if rooms.is_empty() {
        log::info!("{}", "No rooms.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for room in &rooms {
        let lamp = match &room.lamp {
            Some(lamp) => format!("lamp {:.0}%", lamp.usage_percent()),
            None => String::new(),
        };
        log::info!(
            "  #{:<4} {:<16} cinema #{:<3} {:<12} {} {}",
            room.id,
            dash(room.name.as_deref()),
            room.cinema_id,
            room.status.as_str(),
            dash(room.screen_type.as_deref()),
            lamp.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

fn run_show(conn: &Connection, id: i64) -> Result<(), CliError> {
    let room = require_room(conn, id)?;

    log::info!(
        "{} {}",
        format!("Room #{id}").if_supports_color(Stdout, |t| t.bold()),
        dash(room.name.as_deref()),
    );
    log::info!("  Cinema:   #{}", room.cinema_id);
    log::info!(
        "  Status:   {}{}",
        room.status.as_str(),
        room.status_reason
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default(),
    );
    log::info!("  Screen:   {}", dash(room.screen_type.as_deref()));
    log::info!("  Sound:    {}", dash(room.sound_system.as_deref()));
    if let Some(seating) = room.seating {
        log::info!(
            "  Seats:    {} ({} standard, {} premium, {} VIP)",
            seating.total(),
            seating.standard,
            seating.premium,
            seating.vip,
        );
    }
    if let Some(lamp) = &room.lamp {
        log::info!(
            "  Lamp:     {} {}/{} h ({:.0}%)",
            lamp.model,
            lamp.current_hours,
            lamp.max_hours,
            lamp.usage_percent(),
        );
    }
    log::info!(
        "  Preventive: A last {} next {} | B last {} next {} | C last {} next {}",
        dash_date(room.preventive.last_a),
        dash_date(room.preventive.next_a),
        dash_date(room.preventive.last_b),
        dash_date(room.preventive.next_b),
        dash_date(room.preventive.last_c),
        dash_date(room.preventive.next_c),
    );

    let alerts = room_alerts(&room, now_ms());
    if !alerts.is_empty() {
        crate::log_blank();
        for alert in &alerts {
            let mark = match alert.level {
                AlertLevel::Critical => {
                    format!("{}", "\u{2718}".if_supports_color(Stdout, |t| t.red()))
                }
                AlertLevel::Warning => {
                    format!("{}", "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()))
                }
            };
            log::info!("  {} {}", mark, alert.message);
        }
    }

    let equipment = marquee_db::equipment_for_room(conn, id)?;
    if !equipment.is_empty() {
        crate::log_blank();
        log::info!("{}", "Equipment:".if_supports_color(Stdout, |t| t.bold()));
        for eq in &equipment {
            log::info!(
                "  #{:<4} {:<28} {:<11} {}",
                eq.id,
                eq.name,
                eq.category.as_str(),
                eq.status.as_str(),
            );
        }
    }

    let history = marquee_db::history_for_room(conn, id)?;
    if !history.is_empty() {
        crate::log_blank();
        log::info!(
            "{}",
            "Recent maintenance:".if_supports_color(Stdout, |t| t.bold()),
        );
        for entry in history.iter().take(5) {
            log::info!(
                "  {} {:<16} {}",
                dash_date(Some(entry.date)),
                entry.kind.as_str(),
                entry.description,
            );
        }
    }

    Ok(())
}

fn run_edit(conn: &Connection, id: i64, fields: RoomFields) -> Result<(), CliError> {
    let mut room = require_room(conn, id)?;
    apply_fields(&mut room, fields)?;
    marquee_db::update_room(conn, &room)?;
    log::info!(
        "{} Room #{} updated",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    Ok(())
}
