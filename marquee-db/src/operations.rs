//! CRUD operations for all facility entity types.
//!
//! Inserts ignore the struct's `id`/`created_at` fields and return the
//! generated rowid. Updates and removals report `NotFound` when the id does
//! not exist. Targeted mutations (status changes, lamp bookkeeping,
//! preventive scheduling) live alongside the full-row writes.

use marquee_facility::alerts::PreventiveTier;
use marquee_facility::types::*;
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::map::{
    parts_to_json, row_to_cinema, row_to_equipment, row_to_event, row_to_history,
    row_to_impact, row_to_inventory, row_to_record, row_to_room, row_to_task, CINEMA_COLS,
    EQUIPMENT_COLS, EVENT_COLS, HISTORY_COLS, IMPACT_COLS, INVENTORY_COLS, RECORD_COLS,
    ROOM_COLS, TASK_COLS,
};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl OperationError {
    fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Map "0 rows changed" onto a `NotFound` error.
fn require_changed(
    changed: usize,
    entity_type: &str,
    id: impl ToString,
) -> Result<(), OperationError> {
    if changed == 0 {
        Err(OperationError::not_found(entity_type, id))
    } else {
        Ok(())
    }
}

/// Run a single-row query, mapping "no rows" to `None`.
fn fetch_optional<T>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    f: impl FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> Result<Option<T>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    match stmt.query_row(params, f) {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Cinema Operations ───────────────────────────────────────────────────────

/// Insert a cinema. Returns the generated id.
pub fn insert_cinema(conn: &Connection, name: &str, location: &str) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO cinemas (name, location) VALUES (?1, ?2)",
        params![name, location],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_cinema(conn: &Connection, id: i64) -> Result<Option<Cinema>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {CINEMA_COLS} FROM cinemas WHERE id = ?1"),
        params![id],
        row_to_cinema,
    )
}

pub fn update_cinema(
    conn: &Connection,
    id: i64,
    name: &str,
    location: &str,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE cinemas SET name = ?2, location = ?3 WHERE id = ?1",
        params![id, name, location],
    )?;
    require_changed(changed, "cinema", id)
}

pub fn remove_cinema(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM cinemas WHERE id = ?1", params![id])?;
    require_changed(changed, "cinema", id)
}

// ── Room Operations ─────────────────────────────────────────────────────────

fn seating_cols(room: &Room) -> (Option<u32>, Option<u32>, Option<u32>) {
    match room.seating {
        Some(s) => (Some(s.standard), Some(s.premium), Some(s.vip)),
        None => (None, None, None),
    }
}

fn lamp_cols(room: &Room) -> (Option<&str>, Option<i64>, Option<i64>, Option<i64>) {
    match &room.lamp {
        Some(l) => (
            Some(l.model.as_str()),
            Some(l.current_hours),
            Some(l.max_hours),
            Some(l.replaced_at),
        ),
        None => (None, None, None, None),
    }
}

/// Insert a room. Returns the generated id.
pub fn insert_room(conn: &Connection, room: &Room) -> Result<i64, OperationError> {
    let (seat_std, seat_prem, seat_vip) = seating_cols(room);
    let (lamp_model, lamp_hours, lamp_max, lamp_replaced) = lamp_cols(room);
    conn.execute(
        "INSERT INTO rooms (cinema_id, name, location, status, status_reason,
             screen_type, sound_system, seating_standard, seating_premium, seating_vip,
             lamp_model, lamp_current_hours, lamp_max_hours, lamp_replaced_at,
             last_preventive_a, last_preventive_b, last_preventive_c,
             next_preventive_a, next_preventive_b, next_preventive_c)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                 ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
        params![
            room.cinema_id,
            room.name,
            room.location,
            room.status.as_str(),
            room.status_reason,
            room.screen_type,
            room.sound_system,
            seat_std,
            seat_prem,
            seat_vip,
            lamp_model,
            lamp_hours,
            lamp_max,
            lamp_replaced,
            room.preventive.last_a,
            room.preventive.last_b,
            room.preventive.last_c,
            room.preventive.next_a,
            room.preventive.next_b,
            room.preventive.next_c,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_room(conn: &Connection, id: i64) -> Result<Option<Room>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {ROOM_COLS} FROM rooms WHERE id = ?1"),
        params![id],
        row_to_room,
    )
}

/// Full-row update of a room (everything except cinema ownership).
pub fn update_room(conn: &Connection, room: &Room) -> Result<(), OperationError> {
    let (seat_std, seat_prem, seat_vip) = seating_cols(room);
    let (lamp_model, lamp_hours, lamp_max, lamp_replaced) = lamp_cols(room);
    let changed = conn.execute(
        "UPDATE rooms SET
             name = ?2, location = ?3, status = ?4, status_reason = ?5,
             screen_type = ?6, sound_system = ?7,
             seating_standard = ?8, seating_premium = ?9, seating_vip = ?10,
             lamp_model = ?11, lamp_current_hours = ?12, lamp_max_hours = ?13,
             lamp_replaced_at = ?14,
             last_preventive_a = ?15, last_preventive_b = ?16, last_preventive_c = ?17,
             next_preventive_a = ?18, next_preventive_b = ?19, next_preventive_c = ?20
         WHERE id = ?1",
        params![
            room.id,
            room.name,
            room.location,
            room.status.as_str(),
            room.status_reason,
            room.screen_type,
            room.sound_system,
            seat_std,
            seat_prem,
            seat_vip,
            lamp_model,
            lamp_hours,
            lamp_max,
            lamp_replaced,
            room.preventive.last_a,
            room.preventive.last_b,
            room.preventive.last_c,
            room.preventive.next_a,
            room.preventive.next_b,
            room.preventive.next_c,
        ],
    )?;
    require_changed(changed, "room", room.id)
}

pub fn remove_room(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM rooms WHERE id = ?1", params![id])?;
    require_changed(changed, "room", id)
}

/// Change a room's operational status and the reason for it.
pub fn update_room_status(
    conn: &Connection,
    id: i64,
    status: RoomStatus,
    reason: Option<&str>,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE rooms SET status = ?2, status_reason = ?3 WHERE id = ?1",
        params![id, status.as_str(), reason],
    )?;
    require_changed(changed, "room", id)
}

/// Set the projector lamp's current hour counter.
///
/// A room without a lamp is left untouched (`Ok`); an unknown room id is an
/// error.
pub fn update_lamp_hours(conn: &Connection, id: i64, hours: i64) -> Result<(), OperationError> {
    let room = get_room(conn, id)?.ok_or_else(|| OperationError::not_found("room", id))?;
    if room.lamp.is_none() {
        return Ok(());
    }
    conn.execute(
        "UPDATE rooms SET lamp_current_hours = ?2 WHERE id = ?1",
        params![id, hours],
    )?;
    Ok(())
}

/// Swap in a fresh projector lamp: hours reset to zero, replacement date
/// stamped, model/rating optionally updated. No-op on rooms without a lamp.
pub fn replace_projector_lamp(
    conn: &Connection,
    id: i64,
    new_model: Option<&str>,
    max_hours: Option<i64>,
    now: i64,
) -> Result<(), OperationError> {
    let room = get_room(conn, id)?.ok_or_else(|| OperationError::not_found("room", id))?;
    let Some(lamp) = room.lamp else {
        return Ok(());
    };

    let model = new_model.unwrap_or(&lamp.model);
    let max = max_hours.unwrap_or(lamp.max_hours);
    conn.execute(
        "UPDATE rooms SET lamp_model = ?2, lamp_current_hours = 0,
             lamp_max_hours = ?3, lamp_replaced_at = ?4
         WHERE id = ?1",
        params![id, model, max, now],
    )?;
    Ok(())
}

/// Record a preventive service for one tier: stamps the last-service date
/// and recomputes the next due date from the tier's fixed interval.
pub fn record_preventive(
    conn: &Connection,
    id: i64,
    tier: PreventiveTier,
    date: i64,
) -> Result<(), OperationError> {
    let next = tier.next_due(date);
    let sql = match tier {
        PreventiveTier::A => {
            "UPDATE rooms SET last_preventive_a = ?2, next_preventive_a = ?3 WHERE id = ?1"
        }
        PreventiveTier::B => {
            "UPDATE rooms SET last_preventive_b = ?2, next_preventive_b = ?3 WHERE id = ?1"
        }
        PreventiveTier::C => {
            "UPDATE rooms SET last_preventive_c = ?2, next_preventive_c = ?3 WHERE id = ?1"
        }
    };
    let changed = conn.execute(sql, params![id, date, next])?;
    require_changed(changed, "room", id)
}

// ── Equipment Operations ────────────────────────────────────────────────────

/// Insert a piece of equipment. Returns the generated id.
pub fn insert_equipment(conn: &Connection, eq: &Equipment) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO equipment (room_id, cinema_id, name, description, category, status,
             ip_address, install_date, cost, last_maintenance, next_maintenance,
             serial_number, model, manufacturer, lumens, resolution, lamp_hours,
             max_lamp_hours, channels, power, frequency, capacity_btu,
             temperature_range, mac_address, ip_range, port_count)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                 ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)",
        params![
            eq.room_id,
            eq.cinema_id,
            eq.name,
            eq.description,
            eq.category.as_str(),
            eq.status.as_str(),
            eq.ip_address,
            eq.install_date,
            eq.cost,
            eq.last_maintenance,
            eq.next_maintenance,
            eq.serial_number,
            eq.model,
            eq.manufacturer,
            eq.lumens,
            eq.resolution,
            eq.lamp_hours,
            eq.max_lamp_hours,
            eq.channels,
            eq.power,
            eq.frequency,
            eq.capacity_btu,
            eq.temperature_range,
            eq.mac_address,
            eq.ip_range,
            eq.port_count,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_equipment(conn: &Connection, id: i64) -> Result<Option<Equipment>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {EQUIPMENT_COLS} FROM equipment WHERE id = ?1"),
        params![id],
        row_to_equipment,
    )
}

/// Full-row update of a piece of equipment (room/cinema ownership included,
/// so gear can be moved between rooms).
pub fn update_equipment(conn: &Connection, eq: &Equipment) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE equipment SET
             room_id = ?2, cinema_id = ?3, name = ?4, description = ?5,
             category = ?6, status = ?7, ip_address = ?8, install_date = ?9,
             cost = ?10, last_maintenance = ?11, next_maintenance = ?12,
             serial_number = ?13, model = ?14, manufacturer = ?15, lumens = ?16,
             resolution = ?17, lamp_hours = ?18, max_lamp_hours = ?19,
             channels = ?20, power = ?21, frequency = ?22, capacity_btu = ?23,
             temperature_range = ?24, mac_address = ?25, ip_range = ?26,
             port_count = ?27
         WHERE id = ?1",
        params![
            eq.id,
            eq.room_id,
            eq.cinema_id,
            eq.name,
            eq.description,
            eq.category.as_str(),
            eq.status.as_str(),
            eq.ip_address,
            eq.install_date,
            eq.cost,
            eq.last_maintenance,
            eq.next_maintenance,
            eq.serial_number,
            eq.model,
            eq.manufacturer,
            eq.lumens,
            eq.resolution,
            eq.lamp_hours,
            eq.max_lamp_hours,
            eq.channels,
            eq.power,
            eq.frequency,
            eq.capacity_btu,
            eq.temperature_range,
            eq.mac_address,
            eq.ip_range,
            eq.port_count,
        ],
    )?;
    require_changed(changed, "equipment", eq.id)
}

pub fn remove_equipment(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM equipment WHERE id = ?1", params![id])?;
    require_changed(changed, "equipment", id)
}

// ── Inventory Operations ────────────────────────────────────────────────────

/// Insert an inventory item. Returns the generated id.
pub fn insert_inventory_item(
    conn: &Connection,
    item: &InventoryItem,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO inventory (cinema_id, name, description, quantity, category,
             location, min_quantity, cost, supplier, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            item.cinema_id,
            item.name,
            item.description,
            item.quantity,
            item.category,
            item.location,
            item.min_quantity,
            item.cost,
            item.supplier,
            item.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_inventory_item(
    conn: &Connection,
    id: i64,
) -> Result<Option<InventoryItem>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {INVENTORY_COLS} FROM inventory WHERE id = ?1"),
        params![id],
        row_to_inventory,
    )
}

pub fn update_inventory_item(
    conn: &Connection,
    item: &InventoryItem,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE inventory SET
             name = ?2, description = ?3, quantity = ?4, category = ?5,
             location = ?6, min_quantity = ?7, cost = ?8, supplier = ?9,
             notes = ?10
         WHERE id = ?1",
        params![
            item.id,
            item.name,
            item.description,
            item.quantity,
            item.category,
            item.location,
            item.min_quantity,
            item.cost,
            item.supplier,
            item.notes,
        ],
    )?;
    require_changed(changed, "inventory item", item.id)
}

pub fn remove_inventory_item(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM inventory WHERE id = ?1", params![id])?;
    require_changed(changed, "inventory item", id)
}

// ── Task Operations ─────────────────────────────────────────────────────────

/// Insert a task. Returns the generated id.
pub fn insert_task(conn: &Connection, task: &Task) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO tasks (cinema_id, room_id, equipment_id, title, description,
             priority, status, assigned_to, due_date, category, estimated_hours,
             actual_hours, cost)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            task.cinema_id,
            task.room_id,
            task.equipment_id,
            task.title,
            task.description,
            task.priority.as_str(),
            task.status.as_str(),
            task.assigned_to,
            task.due_date,
            task.category.as_str(),
            task.estimated_hours,
            task.actual_hours,
            task.cost,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_task(conn: &Connection, id: i64) -> Result<Option<Task>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {TASK_COLS} FROM tasks WHERE id = ?1"),
        params![id],
        row_to_task,
    )
}

pub fn update_task(conn: &Connection, task: &Task) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE tasks SET
             room_id = ?2, equipment_id = ?3, title = ?4, description = ?5,
             priority = ?6, status = ?7, assigned_to = ?8, due_date = ?9,
             category = ?10, estimated_hours = ?11, actual_hours = ?12, cost = ?13
         WHERE id = ?1",
        params![
            task.id,
            task.room_id,
            task.equipment_id,
            task.title,
            task.description,
            task.priority.as_str(),
            task.status.as_str(),
            task.assigned_to,
            task.due_date,
            task.category.as_str(),
            task.estimated_hours,
            task.actual_hours,
            task.cost,
        ],
    )?;
    require_changed(changed, "task", task.id)
}

pub fn remove_task(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    require_changed(changed, "task", id)
}

pub fn update_task_status(
    conn: &Connection,
    id: i64,
    status: TaskStatus,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE tasks SET status = ?2 WHERE id = ?1",
        params![id, status.as_str()],
    )?;
    require_changed(changed, "task", id)
}

// ── Event Operations ────────────────────────────────────────────────────────

/// Insert an event. Returns the generated id.
pub fn insert_event(conn: &Connection, event: &Event) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO events (cinema_id, room_id, title, description, start_time,
             end_time, kind, status, assigned_to, priority)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            event.cinema_id,
            event.room_id,
            event.title,
            event.description,
            event.start_time,
            event.end_time,
            event.kind.as_str(),
            event.status.as_str(),
            event.assigned_to,
            event.priority.map(|p| p.as_str()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_event(conn: &Connection, id: i64) -> Result<Option<Event>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {EVENT_COLS} FROM events WHERE id = ?1"),
        params![id],
        row_to_event,
    )
}

pub fn update_event(conn: &Connection, event: &Event) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE events SET
             room_id = ?2, title = ?3, description = ?4, start_time = ?5,
             end_time = ?6, kind = ?7, status = ?8, assigned_to = ?9,
             priority = ?10
         WHERE id = ?1",
        params![
            event.id,
            event.room_id,
            event.title,
            event.description,
            event.start_time,
            event.end_time,
            event.kind.as_str(),
            event.status.as_str(),
            event.assigned_to,
            event.priority.map(|p| p.as_str()),
        ],
    )?;
    require_changed(changed, "event", event.id)
}

pub fn remove_event(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", params![id])?;
    require_changed(changed, "event", id)
}

pub fn update_event_status(
    conn: &Connection,
    id: i64,
    status: EventStatus,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE events SET status = ?2 WHERE id = ?1",
        params![id, status.as_str()],
    )?;
    require_changed(changed, "event", id)
}

// ── Maintenance History Operations ──────────────────────────────────────────

/// Insert a maintenance history entry. Returns the generated id.
pub fn insert_history_entry(
    conn: &Connection,
    entry: &MaintenanceEntry,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO maintenance_history (room_id, cinema_id, date, kind,
             description, technician, cost, notes, parts_used)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            entry.room_id,
            entry.cinema_id,
            entry.date,
            entry.kind.as_str(),
            entry.description,
            entry.technician,
            entry.cost,
            entry.notes,
            parts_to_json(&entry.parts_used),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_history_entry(
    conn: &Connection,
    id: i64,
) -> Result<Option<MaintenanceEntry>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {HISTORY_COLS} FROM maintenance_history WHERE id = ?1"),
        params![id],
        row_to_history,
    )
}

pub fn update_history_entry(
    conn: &Connection,
    entry: &MaintenanceEntry,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE maintenance_history SET
             date = ?2, kind = ?3, description = ?4, technician = ?5,
             cost = ?6, notes = ?7, parts_used = ?8
         WHERE id = ?1",
        params![
            entry.id,
            entry.date,
            entry.kind.as_str(),
            entry.description,
            entry.technician,
            entry.cost,
            entry.notes,
            parts_to_json(&entry.parts_used),
        ],
    )?;
    require_changed(changed, "maintenance entry", entry.id)
}

pub fn remove_history_entry(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute(
        "DELETE FROM maintenance_history WHERE id = ?1",
        params![id],
    )?;
    require_changed(changed, "maintenance entry", id)
}

// ── Maintenance Record Operations ───────────────────────────────────────────

/// Insert a maintenance work order. Returns the generated id.
pub fn insert_record(
    conn: &Connection,
    record: &MaintenanceRecord,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO maintenance_records (cinema_id, room_id, equipment_id, task_id,
             kind, category, description, start_time, end_time, status,
             technician, cost, downtime_minutes, notes, parts_used)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            record.cinema_id,
            record.room_id,
            record.equipment_id,
            record.task_id,
            record.kind.as_str(),
            record.category.as_str(),
            record.description,
            record.start_time,
            record.end_time,
            record.status.as_str(),
            record.technician,
            record.cost,
            record.downtime_minutes,
            record.notes,
            parts_to_json(&record.parts_used),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_record(
    conn: &Connection,
    id: i64,
) -> Result<Option<MaintenanceRecord>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {RECORD_COLS} FROM maintenance_records WHERE id = ?1"),
        params![id],
        row_to_record,
    )
}

pub fn update_record(
    conn: &Connection,
    record: &MaintenanceRecord,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE maintenance_records SET
             equipment_id = ?2, task_id = ?3, kind = ?4, category = ?5,
             description = ?6, start_time = ?7, end_time = ?8, status = ?9,
             technician = ?10, cost = ?11, downtime_minutes = ?12, notes = ?13,
             parts_used = ?14
         WHERE id = ?1",
        params![
            record.id,
            record.equipment_id,
            record.task_id,
            record.kind.as_str(),
            record.category.as_str(),
            record.description,
            record.start_time,
            record.end_time,
            record.status.as_str(),
            record.technician,
            record.cost,
            record.downtime_minutes,
            record.notes,
            parts_to_json(&record.parts_used),
        ],
    )?;
    require_changed(changed, "maintenance record", record.id)
}

pub fn remove_record(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute(
        "DELETE FROM maintenance_records WHERE id = ?1",
        params![id],
    )?;
    require_changed(changed, "maintenance record", id)
}

pub fn update_record_status(
    conn: &Connection,
    id: i64,
    status: EventStatus,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE maintenance_records SET status = ?2 WHERE id = ?1",
        params![id, status.as_str()],
    )?;
    require_changed(changed, "maintenance record", id)
}

// ── Session Impact Operations ───────────────────────────────────────────────

/// Insert a session impact. Returns the generated id.
pub fn insert_impact(conn: &Connection, impact: &SessionImpact) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO session_impacts (cinema_id, room_id, date, session_time,
             movie_title, impact, cause, description, delay_minutes,
             affected_customers, refund_amount, resolved, resolution_time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            impact.cinema_id,
            impact.room_id,
            impact.date,
            impact.session_time,
            impact.movie_title,
            impact.impact.as_str(),
            impact.cause.as_str(),
            impact.description,
            impact.delay_minutes,
            impact.affected_customers,
            impact.refund_amount,
            impact.resolved,
            impact.resolution_time,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_impact(conn: &Connection, id: i64) -> Result<Option<SessionImpact>, OperationError> {
    fetch_optional(
        conn,
        &format!("SELECT {IMPACT_COLS} FROM session_impacts WHERE id = ?1"),
        params![id],
        row_to_impact,
    )
}

pub fn update_impact(conn: &Connection, impact: &SessionImpact) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE session_impacts SET
             date = ?2, session_time = ?3, movie_title = ?4, impact = ?5,
             cause = ?6, description = ?7, delay_minutes = ?8,
             affected_customers = ?9, refund_amount = ?10, resolved = ?11,
             resolution_time = ?12
         WHERE id = ?1",
        params![
            impact.id,
            impact.date,
            impact.session_time,
            impact.movie_title,
            impact.impact.as_str(),
            impact.cause.as_str(),
            impact.description,
            impact.delay_minutes,
            impact.affected_customers,
            impact.refund_amount,
            impact.resolved,
            impact.resolution_time,
        ],
    )?;
    require_changed(changed, "session impact", impact.id)
}

pub fn remove_impact(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM session_impacts WHERE id = ?1", params![id])?;
    require_changed(changed, "session impact", id)
}

/// Mark an impact resolved, stamping the resolution time.
pub fn resolve_impact(
    conn: &Connection,
    id: i64,
    resolution_time: i64,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE session_impacts SET resolved = 1, resolution_time = ?2 WHERE id = ?1",
        params![id, resolution_time],
    )?;
    require_changed(changed, "session impact", id)
}

// ── Settings Operations ─────────────────────────────────────────────────────

/// Insert or overwrite a setting.
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>, OperationError> {
    fetch_optional(
        conn,
        "SELECT value FROM settings WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
}

pub fn remove_setting(conn: &Connection, key: &str) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM settings WHERE key = ?1", params![key])?;
    require_changed(changed, "setting", key)
}

// ── Bulk Operations ─────────────────────────────────────────────────────────

/// Delete every row from every application table.
///
/// Children first so foreign keys hold throughout.
pub fn clear_all_data(conn: &Connection) -> Result<(), OperationError> {
    conn.execute_batch(
        "DELETE FROM session_impacts;
         DELETE FROM maintenance_records;
         DELETE FROM maintenance_history;
         DELETE FROM events;
         DELETE FROM tasks;
         DELETE FROM equipment;
         DELETE FROM inventory;
         DELETE FROM rooms;
         DELETE FROM cinemas;
         DELETE FROM settings;",
    )?;
    Ok(())
}
