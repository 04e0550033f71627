use marquee_facility::time::now_ms;
use marquee_facility::types::{Equipment, EquipmentCategory, EquipmentStatus};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::{EquipmentAction, EquipmentFields};
use crate::commands::{dash, dash_date, opt_date_arg, require_room};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: EquipmentAction) -> Result<(), CliError> {
    match action {
        EquipmentAction::Add {
            room,
            name,
            description,
            category,
            fields,
        } => run_add(conn, room, name, description, category, fields),
        EquipmentAction::List { room, cinema } => run_list(conn, room, cinema),
        EquipmentAction::Show { id } => run_show(conn, id),
        EquipmentAction::Edit {
            id,
            name,
            description,
            category,
            status,
            last_maintenance,
            fields,
        } => run_edit(conn, id, name, description, category, status, last_maintenance, fields),
        EquipmentAction::Rm { id } => {
            marquee_db::remove_equipment(conn, id)?;
            log::info!(
                "{} Equipment #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
        EquipmentAction::Alerts { cinema } => run_alerts(conn, cinema),
    }
}

/// Apply shared attribute flags on top of an existing equipment value.
fn apply_fields(eq: &mut Equipment, fields: EquipmentFields) -> Result<(), CliError> {
    if let Some(v) = fields.ip_address {
        eq.ip_address = Some(v);
    }
    if let Some(v) = opt_date_arg(fields.install_date.as_deref())? {
        eq.install_date = Some(v);
    }
    if let Some(v) = fields.cost {
        eq.cost = Some(v);
    }
    if let Some(v) = opt_date_arg(fields.next_maintenance.as_deref())? {
        eq.next_maintenance = Some(v);
    }
    if let Some(v) = fields.serial_number {
        eq.serial_number = Some(v);
    }
    if let Some(v) = fields.model {
        eq.model = Some(v);
    }
    if let Some(v) = fields.manufacturer {
        eq.manufacturer = Some(v);
    }
    if let Some(v) = fields.lumens {
        eq.lumens = Some(v);
    }
    if let Some(v) = fields.resolution {
        eq.resolution = Some(v);
    }
    if let Some(v) = fields.lamp_hours {
        eq.lamp_hours = Some(v);
    }
    if let Some(v) = fields.max_lamp_hours {
        eq.max_lamp_hours = Some(v);
    }
    if let Some(v) = fields.channels {
        eq.channels = Some(v);
    }
    if let Some(v) = fields.power {
        eq.power = Some(v);
    }
    if let Some(v) = fields.frequency {
        eq.frequency = Some(v);
    }
    if let Some(v) = fields.capacity_btu {
        eq.capacity_btu = Some(v);
    }
    if let Some(v) = fields.temperature_range {
        eq.temperature_range = Some(v);
    }
    if let Some(v) = fields.mac_address {
        eq.mac_address = Some(v);
    }
    if let Some(v) = fields.ip_range {
        eq.ip_range = Some(v);
    }
    if let Some(v) = fields.port_count {
        eq.port_count = Some(v);
    }
    Ok(())
}

fn run_add(
    conn: &Connection,
    room: i64,
    name: String,
    description: String,
    category: EquipmentCategory,
    fields: EquipmentFields,
) -> Result<(), CliError> {
    // Cinema ownership follows the room
    let room_row = require_room(conn, room)?;

    let mut eq = Equipment {
        id: 0,
        room_id: room,
        cinema_id: room_row.cinema_id,
        name,
        description,
        category,
        status: EquipmentStatus::Operational,
        ip_address: None,
        install_date: None,
        cost: None,
        last_maintenance: None,
        next_maintenance: None,
        serial_number: None,
        model: None,
        manufacturer: None,
        lumens: None,
        resolution: None,
        lamp_hours: None,
        max_lamp_hours: None,
        channels: None,
        power: None,
        frequency: None,
        capacity_btu: None,
        temperature_range: None,
        mac_address: None,
        ip_range: None,
        port_count: None,
        created_at: String::new(),
    };
    apply_fields(&mut eq, fields)?;

    let id = marquee_db::insert_equipment(conn, &eq)?;
    log::info!(
        "{} Equipment #{} '{}' installed in room #{}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
        eq.name,
        room,
    );
    Ok(())
}

fn run_list(conn: &Connection, room: Option<i64>, cinema: Option<i64>) -> Result<(), CliError> {
    let equipment = match (room, cinema) {
        (Some(room_id), _) => marquee_db::equipment_for_room(conn, room_id)?,
        (None, Some(cinema_id)) => marquee_db::equipment_for_cinema(conn, cinema_id)?,
        (None, None) => {
            return Err(CliError::invalid("pass --room or --cinema"));
        }
    };

    if equipment.is_empty() {
        log::info!("{}", "No equipment.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for eq in &equipment {
        log::info!(
            "  #{:<4} {:<28} {:<11} {:<12} room #{}",
            eq.id,
            eq.name.if_supports_color(Stdout, |t| t.bold()),
            eq.category.as_str(),
            eq.status.as_str(),
            eq.room_id,
        );
    }
    Ok(())
}

fn run_show(conn: &Connection, id: i64) -> Result<(), CliError> {
    let eq = marquee_db::get_equipment(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Equipment {id} not found")))?;

    log::info!(
        "{} {}",
        format!("Equipment #{id}").if_supports_color(Stdout, |t| t.bold()),
        eq.name,
    );
    log::info!("  {}", eq.description);
    log::info!("  Category:     {}", eq.category.as_str());
    log::info!("  Status:       {}", eq.status.as_str());
    log::info!("  Room:         #{} (cinema #{})", eq.room_id, eq.cinema_id);
    log::info!(
        "  Model:        {} / {}",
        dash(eq.manufacturer.as_deref()),
        dash(eq.model.as_deref()),
    );
    log::info!("  Serial:       {}", dash(eq.serial_number.as_deref()));
    log::info!("  Installed:    {}", dash_date(eq.install_date));
    log::info!(
        "  Service:      last {} / next {}",
        dash_date(eq.last_maintenance),
        dash_date(eq.next_maintenance),
    );

    match eq.category {
        EquipmentCategory::Projection => {
            if let (Some(hours), Some(max)) = (eq.lamp_hours, eq.max_lamp_hours) {
                let percent = if max > 0 {
                    (hours as f64 / max as f64) * 100.0
                } else {
                    0.0
                };
                log::info!("  Lamp:         {hours}/{max} h ({percent:.0}%)");
            }
            if let Some(lumens) = eq.lumens {
                log::info!("  Lumens:       {lumens}");
            }
            if let Some(ref resolution) = eq.resolution {
                log::info!("  Resolution:   {resolution}");
            }
        }
        EquipmentCategory::Sound => {
            if let Some(channels) = eq.channels {
                log::info!("  Channels:     {channels}");
            }
            if let Some(power) = eq.power {
                log::info!("  Power:        {power} W");
            }
            if let Some(ref frequency) = eq.frequency {
                log::info!("  Frequency:    {frequency}");
            }
        }
        EquipmentCategory::Climate => {
            if let Some(btu) = eq.capacity_btu {
                log::info!("  Capacity:     {btu} BTU");
            }
            if let Some(ref range) = eq.temperature_range {
                log::info!("  Temp range:   {range}");
            }
        }
        EquipmentCategory::Network => {
            if let Some(ref mac) = eq.mac_address {
                log::info!("  MAC:          {mac}");
            }
            if let Some(ref range) = eq.ip_range {
                log::info!("  IP range:     {range}");
            }
            if let Some(ports) = eq.port_count {
                log::info!("  Ports:        {ports}");
            }
        }
        _ => {}
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_edit(
    conn: &Connection,
    id: i64,
    name: Option<String>,
    description: Option<String>,
    category: Option<EquipmentCategory>,
    status: Option<EquipmentStatus>,
    last_maintenance: Option<String>,
    fields: EquipmentFields,
) -> Result<(), CliError> {
    let mut eq = marquee_db::get_equipment(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Equipment {id} not found")))?;

    if let Some(v) = name {
        eq.name = v;
    }
    if let Some(v) = description {
        eq.description = v;
    }
    if let Some(v) = category {
        eq.category = v;
    }
    if let Some(v) = status {
        eq.status = v;
    }
    if let Some(v) = opt_date_arg(last_maintenance.as_deref())? {
        eq.last_maintenance = Some(v);
    }
    apply_fields(&mut eq, fields)?;

    marquee_db::update_equipment(conn, &eq)?;
    log::info!(
        "{} Equipment #{} updated",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    Ok(())
}

fn run_alerts(conn: &Connection, cinema: Option<i64>) -> Result<(), CliError> {
    let flagged = marquee_db::critical_equipment(conn, cinema, now_ms())?;

    if flagged.is_empty() {
        log::info!(
            "{}",
            "No equipment needs attention.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{} equipment alert(s):", flagged.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for eq in &flagged {
        let lamp = match (eq.lamp_hours, eq.max_lamp_hours) {
            (Some(hours), Some(max)) if max > 0 => {
                format!("lamp {:.0}%", (hours as f64 / max as f64) * 100.0)
            }
            _ => String::new(),
        };
        log::info!(
            "  {} #{:<4} {:<28} {:<11} next {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            eq.id,
            eq.name,
            eq.status.as_str(),
            dash_date(eq.next_maintenance),
            lamp.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
