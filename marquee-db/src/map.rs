//! Row-to-struct mapping shared by operations and queries.
//!
//! Column lists are kept next to their mappers; every SELECT over an entity
//! table must use the matching list so positional `row.get` calls line up.

use marquee_facility::types::*;
use rusqlite::Row;

pub(crate) const CINEMA_COLS: &str = "id, name, location, created_at";

pub(crate) const ROOM_COLS: &str = "id, cinema_id, name, location, status, status_reason, \
     screen_type, sound_system, seating_standard, seating_premium, seating_vip, \
     lamp_model, lamp_current_hours, lamp_max_hours, lamp_replaced_at, \
     last_preventive_a, last_preventive_b, last_preventive_c, \
     next_preventive_a, next_preventive_b, next_preventive_c, created_at";

pub(crate) const EQUIPMENT_COLS: &str = "id, room_id, cinema_id, name, description, category, status, \
     ip_address, install_date, cost, last_maintenance, next_maintenance, \
     serial_number, model, manufacturer, lumens, resolution, lamp_hours, \
     max_lamp_hours, channels, power, frequency, capacity_btu, \
     temperature_range, mac_address, ip_range, port_count, created_at";

pub(crate) const INVENTORY_COLS: &str = "id, cinema_id, name, description, quantity, category, \
     location, min_quantity, cost, supplier, notes, created_at";

pub(crate) const TASK_COLS: &str = "id, cinema_id, room_id, equipment_id, title, description, \
     priority, status, assigned_to, due_date, category, estimated_hours, \
     actual_hours, cost, created_at";

pub(crate) const EVENT_COLS: &str = "id, cinema_id, room_id, title, description, start_time, \
     end_time, kind, status, assigned_to, priority, created_at";

pub(crate) const HISTORY_COLS: &str = "id, room_id, cinema_id, date, kind, description, technician, \
     cost, notes, parts_used, created_at";

pub(crate) const RECORD_COLS: &str = "id, cinema_id, room_id, equipment_id, task_id, kind, category, \
     description, start_time, end_time, status, technician, cost, \
     downtime_minutes, notes, parts_used, created_at";

pub(crate) const IMPACT_COLS: &str = "id, cinema_id, room_id, date, session_time, movie_title, \
     impact, cause, description, delay_minutes, affected_customers, \
     refund_amount, resolved, resolution_time, created_at";

pub(crate) fn row_to_cinema(row: &Row<'_>) -> rusqlite::Result<Cinema> {
    Ok(Cinema {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub(crate) fn row_to_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    let status_str: String = row.get(4)?;

    let seating = match (
        row.get::<_, Option<u32>>(8)?,
        row.get::<_, Option<u32>>(9)?,
        row.get::<_, Option<u32>>(10)?,
    ) {
        (Some(standard), Some(premium), Some(vip)) => Some(Seating {
            standard,
            premium,
            vip,
        }),
        _ => None,
    };

    let lamp = match row.get::<_, Option<String>>(11)? {
        Some(model) => Some(ProjectorLamp {
            model,
            current_hours: row.get::<_, Option<i64>>(12)?.unwrap_or(0),
            max_hours: row.get::<_, Option<i64>>(13)?.unwrap_or(0),
            replaced_at: row.get::<_, Option<i64>>(14)?.unwrap_or(0),
        }),
        None => None,
    };

    Ok(Room {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        name: row.get(2)?,
        location: row.get(3)?,
        status: RoomStatus::from_str_loose(&status_str),
        status_reason: row.get(5)?,
        screen_type: row.get(6)?,
        sound_system: row.get(7)?,
        seating,
        lamp,
        preventive: PreventiveSchedule {
            last_a: row.get(15)?,
            last_b: row.get(16)?,
            last_c: row.get(17)?,
            next_a: row.get(18)?,
            next_b: row.get(19)?,
            next_c: row.get(20)?,
        },
        created_at: row.get(21)?,
    })
}

pub(crate) fn row_to_equipment(row: &Row<'_>) -> rusqlite::Result<Equipment> {
    let category_str: String = row.get(5)?;
    let status_str: String = row.get(6)?;
    Ok(Equipment {
        id: row.get(0)?,
        room_id: row.get(1)?,
        cinema_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        category: EquipmentCategory::from_str_loose(&category_str),
        status: EquipmentStatus::from_str_loose(&status_str),
        ip_address: row.get(7)?,
        install_date: row.get(8)?,
        cost: row.get(9)?,
        last_maintenance: row.get(10)?,
        next_maintenance: row.get(11)?,
        serial_number: row.get(12)?,
        model: row.get(13)?,
        manufacturer: row.get(14)?,
        lumens: row.get(15)?,
        resolution: row.get(16)?,
        lamp_hours: row.get(17)?,
        max_lamp_hours: row.get(18)?,
        channels: row.get(19)?,
        power: row.get(20)?,
        frequency: row.get(21)?,
        capacity_btu: row.get(22)?,
        temperature_range: row.get(23)?,
        mac_address: row.get(24)?,
        ip_range: row.get(25)?,
        port_count: row.get(26)?,
        created_at: row.get(27)?,
    })
}

pub(crate) fn row_to_inventory(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        quantity: row.get(4)?,
        category: row.get(5)?,
        location: row.get(6)?,
        min_quantity: row.get(7)?,
        cost: row.get(8)?,
        supplier: row.get(9)?,
        notes: row.get(10)?,
        created_at: row.get(11)?,
    })
}

pub(crate) fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let priority_str: String = row.get(6)?;
    let status_str: String = row.get(7)?;
    let category_str: String = row.get(10)?;
    Ok(Task {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        room_id: row.get(2)?,
        equipment_id: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        priority: TaskPriority::from_str_loose(&priority_str),
        status: TaskStatus::from_str_loose(&status_str),
        assigned_to: row.get(8)?,
        due_date: row.get(9)?,
        category: TaskCategory::from_str_loose(&category_str),
        estimated_hours: row.get(11)?,
        actual_hours: row.get(12)?,
        cost: row.get(13)?,
        created_at: row.get(14)?,
    })
}

pub(crate) fn row_to_event(row: &Row<'_>) -> rusqlite::Result<Event> {
    let kind_str: String = row.get(7)?;
    let status_str: String = row.get(8)?;
    let priority: Option<String> = row.get(10)?;
    Ok(Event {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        room_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        kind: EventKind::from_str_loose(&kind_str),
        status: EventStatus::from_str_loose(&status_str),
        assigned_to: row.get(9)?,
        priority: priority.map(|p| TaskPriority::from_str_loose(&p)),
        created_at: row.get(11)?,
    })
}

pub(crate) fn row_to_history(row: &Row<'_>) -> rusqlite::Result<MaintenanceEntry> {
    let kind_str: String = row.get(4)?;
    let parts: Option<String> = row.get(9)?;
    Ok(MaintenanceEntry {
        id: row.get(0)?,
        room_id: row.get(1)?,
        cinema_id: row.get(2)?,
        date: row.get(3)?,
        kind: MaintenanceKind::from_str_loose(&kind_str),
        description: row.get(5)?,
        technician: row.get(6)?,
        cost: row.get(7)?,
        notes: row.get(8)?,
        parts_used: parse_parts(parts),
        created_at: row.get(10)?,
    })
}

pub(crate) fn row_to_record(row: &Row<'_>) -> rusqlite::Result<MaintenanceRecord> {
    let kind_str: String = row.get(5)?;
    let category_str: String = row.get(6)?;
    let status_str: String = row.get(10)?;
    let parts: Option<String> = row.get(15)?;
    Ok(MaintenanceRecord {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        room_id: row.get(2)?,
        equipment_id: row.get(3)?,
        task_id: row.get(4)?,
        kind: RecordKind::from_str_loose(&kind_str),
        category: RecordCategory::from_str_loose(&category_str),
        description: row.get(7)?,
        start_time: row.get(8)?,
        end_time: row.get(9)?,
        status: EventStatus::from_str_loose(&status_str),
        technician: row.get(11)?,
        cost: row.get(12)?,
        downtime_minutes: row.get(13)?,
        notes: row.get(14)?,
        parts_used: parse_parts(parts),
        created_at: row.get(16)?,
    })
}

pub(crate) fn row_to_impact(row: &Row<'_>) -> rusqlite::Result<SessionImpact> {
    let impact_str: String = row.get(6)?;
    let cause_str: String = row.get(7)?;
    Ok(SessionImpact {
        id: row.get(0)?,
        cinema_id: row.get(1)?,
        room_id: row.get(2)?,
        date: row.get(3)?,
        session_time: row.get(4)?,
        movie_title: row.get(5)?,
        impact: ImpactKind::from_str_loose(&impact_str),
        cause: ImpactCause::from_str_loose(&cause_str),
        description: row.get(8)?,
        delay_minutes: row.get(9)?,
        affected_customers: row.get(10)?,
        refund_amount: row.get(11)?,
        resolved: row.get(12)?,
        resolution_time: row.get(13)?,
        created_at: row.get(14)?,
    })
}

/// Serialize a parts list for storage; empty lists store as NULL.
pub(crate) fn parts_to_json(parts: &[String]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        serde_json::to_string(parts).ok()
    }
}

fn parse_parts(json: Option<String>) -> Vec<String> {
    json.as_deref()
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
