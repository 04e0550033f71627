//! Read queries for the facility database.
//!
//! Listing by indexed foreign keys plus the derived read-time views:
//! critical equipment alerts, low stock, maintenance statistics, and the
//! dashboard summary. Threshold checks are applied in memory on fetched
//! rows; only the indexed filters run in SQL.

use marquee_facility::alerts::{
    availability_percent, equipment_needs_attention, is_low_stock, preventive_overdue,
};
use marquee_facility::types::*;
use rusqlite::{params, Connection};

use crate::map::{
    row_to_cinema, row_to_equipment, row_to_event, row_to_history, row_to_impact,
    row_to_inventory, row_to_record, row_to_room, row_to_task, CINEMA_COLS, EQUIPMENT_COLS,
    EVENT_COLS, HISTORY_COLS, IMPACT_COLS, INVENTORY_COLS, RECORD_COLS, ROOM_COLS, TASK_COLS,
};
use crate::operations::OperationError;

fn collect<T>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    f: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, f)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Cinemas ─────────────────────────────────────────────────────────────────

pub fn list_cinemas(conn: &Connection) -> Result<Vec<Cinema>, OperationError> {
    collect(
        conn,
        &format!("SELECT {CINEMA_COLS} FROM cinemas ORDER BY name"),
        [],
        row_to_cinema,
    )
}

// ── Rooms ───────────────────────────────────────────────────────────────────

pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>, OperationError> {
    collect(
        conn,
        &format!("SELECT {ROOM_COLS} FROM rooms ORDER BY cinema_id, name"),
        [],
        row_to_room,
    )
}

pub fn rooms_for_cinema(conn: &Connection, cinema_id: i64) -> Result<Vec<Room>, OperationError> {
    collect(
        conn,
        &format!("SELECT {ROOM_COLS} FROM rooms WHERE cinema_id = ?1 ORDER BY name"),
        params![cinema_id],
        row_to_room,
    )
}

/// Rooms with any preventive tier past its next-due date.
pub fn rooms_overdue_preventive(
    conn: &Connection,
    now: i64,
) -> Result<Vec<Room>, OperationError> {
    let rooms = list_rooms(conn)?;
    Ok(rooms
        .into_iter()
        .filter(|r| preventive_overdue(r, now))
        .collect())
}

// ── Equipment ───────────────────────────────────────────────────────────────

pub fn equipment_for_room(conn: &Connection, room_id: i64) -> Result<Vec<Equipment>, OperationError> {
    collect(
        conn,
        &format!("SELECT {EQUIPMENT_COLS} FROM equipment WHERE room_id = ?1 ORDER BY name"),
        params![room_id],
        row_to_equipment,
    )
}

pub fn equipment_for_cinema(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<Equipment>, OperationError> {
    collect(
        conn,
        &format!("SELECT {EQUIPMENT_COLS} FROM equipment WHERE cinema_id = ?1 ORDER BY name"),
        params![cinema_id],
        row_to_equipment,
    )
}

/// The critical-alert list: equipment due for service within 30 days, in a
/// non-operational status, or with a worn projection lamp. Optionally
/// scoped to one cinema.
pub fn critical_equipment(
    conn: &Connection,
    cinema_id: Option<i64>,
    now: i64,
) -> Result<Vec<Equipment>, OperationError> {
    let equipment = match cinema_id {
        Some(id) => equipment_for_cinema(conn, id)?,
        None => collect(
            conn,
            &format!("SELECT {EQUIPMENT_COLS} FROM equipment ORDER BY name"),
            [],
            row_to_equipment,
        )?,
    };

    Ok(equipment
        .into_iter()
        .filter(|eq| equipment_needs_attention(eq, now))
        .collect())
}

// ── Inventory ───────────────────────────────────────────────────────────────

pub fn inventory_for_cinema(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<InventoryItem>, OperationError> {
    collect(
        conn,
        &format!("SELECT {INVENTORY_COLS} FROM inventory WHERE cinema_id = ?1 ORDER BY name"),
        params![cinema_id],
        row_to_inventory,
    )
}

/// Items whose quantity has fallen to or below their minimum.
pub fn low_stock_items(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<InventoryItem>, OperationError> {
    let items = inventory_for_cinema(conn, cinema_id)?;
    Ok(items.into_iter().filter(is_low_stock).collect())
}

// ── Tasks ───────────────────────────────────────────────────────────────────

/// Optional refinements for a task listing. Cinema scoping uses the index;
/// the rest filters in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskFilter {
    pub cinema_id: Option<i64>,
    pub room_id: Option<i64>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

pub fn list_tasks(conn: &Connection, filter: TaskFilter) -> Result<Vec<Task>, OperationError> {
    let tasks = match filter.cinema_id {
        Some(id) => collect(
            conn,
            &format!("SELECT {TASK_COLS} FROM tasks WHERE cinema_id = ?1 ORDER BY id"),
            params![id],
            row_to_task,
        )?,
        None => collect(
            conn,
            &format!("SELECT {TASK_COLS} FROM tasks ORDER BY id"),
            [],
            row_to_task,
        )?,
    };

    Ok(tasks
        .into_iter()
        .filter(|t| filter.room_id.is_none_or(|r| t.room_id == Some(r)))
        .filter(|t| filter.status.is_none_or(|s| t.status == s))
        .filter(|t| filter.priority.is_none_or(|p| t.priority == p))
        .collect())
}

pub fn tasks_for_room(conn: &Connection, room_id: i64) -> Result<Vec<Task>, OperationError> {
    collect(
        conn,
        &format!("SELECT {TASK_COLS} FROM tasks WHERE room_id = ?1 ORDER BY id"),
        params![room_id],
        row_to_task,
    )
}

// ── Events ──────────────────────────────────────────────────────────────────

pub fn list_events(conn: &Connection) -> Result<Vec<Event>, OperationError> {
    collect(
        conn,
        &format!("SELECT {EVENT_COLS} FROM events ORDER BY start_time"),
        [],
        row_to_event,
    )
}

pub fn events_for_cinema(conn: &Connection, cinema_id: i64) -> Result<Vec<Event>, OperationError> {
    collect(
        conn,
        &format!("SELECT {EVENT_COLS} FROM events WHERE cinema_id = ?1 ORDER BY start_time"),
        params![cinema_id],
        row_to_event,
    )
}

/// Events starting within `[from, to)`.
pub fn events_in_window(
    conn: &Connection,
    from: i64,
    to: i64,
) -> Result<Vec<Event>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {EVENT_COLS} FROM events
             WHERE start_time >= ?1 AND start_time < ?2 ORDER BY start_time"
        ),
        params![from, to],
        row_to_event,
    )
}

// ── Maintenance history ─────────────────────────────────────────────────────

pub fn history_for_room(
    conn: &Connection,
    room_id: i64,
) -> Result<Vec<MaintenanceEntry>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {HISTORY_COLS} FROM maintenance_history
             WHERE room_id = ?1 ORDER BY date DESC"
        ),
        params![room_id],
        row_to_history,
    )
}

pub fn history_for_cinema(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<MaintenanceEntry>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {HISTORY_COLS} FROM maintenance_history
             WHERE cinema_id = ?1 ORDER BY date DESC"
        ),
        params![cinema_id],
        row_to_history,
    )
}

/// Aggregate maintenance counts and cost for a cinema, optionally limited
/// to entries on or after `since`.
#[derive(Debug, Default, PartialEq)]
pub struct MaintenanceStats {
    pub total: i64,
    pub preventive_a: i64,
    pub preventive_b: i64,
    pub preventive_c: i64,
    pub lamp_replacements: i64,
    pub corrective: i64,
    pub total_cost: f64,
}

pub fn maintenance_stats(
    conn: &Connection,
    cinema_id: i64,
    since: Option<i64>,
) -> Result<MaintenanceStats, OperationError> {
    let entries = history_for_cinema(conn, cinema_id)?;

    let mut stats = MaintenanceStats::default();
    for entry in entries
        .iter()
        .filter(|e| since.is_none_or(|cutoff| e.date >= cutoff))
    {
        stats.total += 1;
        match entry.kind {
            MaintenanceKind::PreventiveA => stats.preventive_a += 1,
            MaintenanceKind::PreventiveB => stats.preventive_b += 1,
            MaintenanceKind::PreventiveC => stats.preventive_c += 1,
            MaintenanceKind::LampReplacement => stats.lamp_replacements += 1,
            MaintenanceKind::Corrective => stats.corrective += 1,
            _ => {}
        }
        stats.total_cost += entry.cost.unwrap_or(0.0);
    }

    Ok(stats)
}

// ── Maintenance records ─────────────────────────────────────────────────────

pub fn records_for_room(
    conn: &Connection,
    room_id: i64,
) -> Result<Vec<MaintenanceRecord>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {RECORD_COLS} FROM maintenance_records
             WHERE room_id = ?1 ORDER BY start_time DESC"
        ),
        params![room_id],
        row_to_record,
    )
}

pub fn records_for_cinema(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<MaintenanceRecord>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {RECORD_COLS} FROM maintenance_records
             WHERE cinema_id = ?1 ORDER BY start_time DESC"
        ),
        params![cinema_id],
        row_to_record,
    )
}

// ── Session impacts ─────────────────────────────────────────────────────────

pub fn impacts_for_cinema(
    conn: &Connection,
    cinema_id: i64,
) -> Result<Vec<SessionImpact>, OperationError> {
    collect(
        conn,
        &format!(
            "SELECT {IMPACT_COLS} FROM session_impacts
             WHERE cinema_id = ?1 ORDER BY date DESC"
        ),
        params![cinema_id],
        row_to_impact,
    )
}

pub fn unresolved_impacts(
    conn: &Connection,
    cinema_id: Option<i64>,
) -> Result<Vec<SessionImpact>, OperationError> {
    match cinema_id {
        Some(id) => collect(
            conn,
            &format!(
                "SELECT {IMPACT_COLS} FROM session_impacts
                 WHERE resolved = 0 AND cinema_id = ?1 ORDER BY date DESC"
            ),
            params![id],
            row_to_impact,
        ),
        None => collect(
            conn,
            &format!(
                "SELECT {IMPACT_COLS} FROM session_impacts
                 WHERE resolved = 0 ORDER BY date DESC"
            ),
            [],
            row_to_impact,
        ),
    }
}

// ── Settings ────────────────────────────────────────────────────────────────

pub fn list_settings(conn: &Connection) -> Result<Vec<Setting>, OperationError> {
    collect(
        conn,
        "SELECT key, value FROM settings ORDER BY key",
        [],
        |row| {
            Ok(Setting {
                key: row.get(0)?,
                value: row.get(1)?,
            })
        },
    )
}

// ── Dashboard ───────────────────────────────────────────────────────────────

/// Counts backing the dashboard view.
#[derive(Debug)]
pub struct FacilityStats {
    pub cinemas: i64,
    pub rooms: i64,
    pub active_rooms: i64,
    /// Active rooms over total rooms, whole percent.
    pub availability: u32,
    pub equipment: i64,
    pub critical_equipment: usize,
    pub open_tasks: i64,
    pub upcoming_events: i64,
    pub unresolved_impacts: i64,
    pub low_stock_items: usize,
}

pub fn facility_stats(conn: &Connection, now: i64) -> Result<FacilityStats, OperationError> {
    let cinemas: i64 = conn.query_row("SELECT COUNT(*) FROM cinemas", [], |r| r.get(0))?;
    let rooms: i64 = conn.query_row("SELECT COUNT(*) FROM rooms", [], |r| r.get(0))?;
    let active_rooms: i64 = conn.query_row(
        "SELECT COUNT(*) FROM rooms WHERE status = 'active'",
        [],
        |r| r.get(0),
    )?;
    let equipment: i64 = conn.query_row("SELECT COUNT(*) FROM equipment", [], |r| r.get(0))?;
    let open_tasks: i64 = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE status != 'done'",
        [],
        |r| r.get(0),
    )?;
    let upcoming_events: i64 = conn.query_row(
        "SELECT COUNT(*) FROM events WHERE status = 'scheduled' AND start_time > ?1",
        params![now],
        |r| r.get(0),
    )?;
    let unresolved: i64 = conn.query_row(
        "SELECT COUNT(*) FROM session_impacts WHERE resolved = 0",
        [],
        |r| r.get(0),
    )?;

    let critical = critical_equipment(conn, None, now)?.len();

    let all_inventory = collect(
        conn,
        &format!("SELECT {INVENTORY_COLS} FROM inventory"),
        [],
        row_to_inventory,
    )?;
    let low_stock = all_inventory.iter().filter(|i| is_low_stock(i)).count();

    Ok(FacilityStats {
        cinemas,
        rooms,
        active_rooms,
        availability: availability_percent(active_rooms as usize, rooms as usize),
        equipment,
        critical_equipment: critical,
        open_tasks,
        upcoming_events,
        unresolved_impacts: unresolved,
        low_stock_items: low_stock,
    })
}
