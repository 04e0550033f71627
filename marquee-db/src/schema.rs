//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a facility database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version < CURRENT_VERSION {
        migrate(&conn, version)?;
    } else if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    let mut version = from_version;
    while version < CURRENT_VERSION {
        // No migrations yet; version 1 is the initial schema.
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Cinema complexes
CREATE TABLE IF NOT EXISTS cinemas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Screening rooms. Seating and lamp sub-objects are flattened into
-- nullable column groups; a room has a lamp iff lamp_model is set and
-- seating iff all three seat counts are set.
CREATE TABLE IF NOT EXISTS rooms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    name TEXT,
    location TEXT,
    status TEXT NOT NULL DEFAULT 'active',
    status_reason TEXT,
    screen_type TEXT,
    sound_system TEXT,
    seating_standard INTEGER,
    seating_premium INTEGER,
    seating_vip INTEGER,
    lamp_model TEXT,
    lamp_current_hours INTEGER,
    lamp_max_hours INTEGER,
    lamp_replaced_at INTEGER,
    last_preventive_a INTEGER,
    last_preventive_b INTEGER,
    last_preventive_c INTEGER,
    next_preventive_a INTEGER,
    next_preventive_b INTEGER,
    next_preventive_c INTEGER,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_rooms_cinema ON rooms(cinema_id);
CREATE INDEX IF NOT EXISTS idx_rooms_status ON rooms(status);

-- Installed equipment. Category-specific attributes are nullable.
CREATE TABLE IF NOT EXISTS equipment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    room_id INTEGER NOT NULL REFERENCES rooms(id),
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'operational',
    ip_address TEXT,
    install_date INTEGER,
    cost REAL,
    last_maintenance INTEGER,
    next_maintenance INTEGER,
    serial_number TEXT,
    model TEXT,
    manufacturer TEXT,
    lumens INTEGER,
    resolution TEXT,
    lamp_hours INTEGER,
    max_lamp_hours INTEGER,
    channels INTEGER,
    power INTEGER,
    frequency TEXT,
    capacity_btu INTEGER,
    temperature_range TEXT,
    mac_address TEXT,
    ip_range TEXT,
    port_count INTEGER,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_equipment_room ON equipment(room_id);
CREATE INDEX IF NOT EXISTS idx_equipment_cinema ON equipment(cinema_id);
CREATE INDEX IF NOT EXISTS idx_equipment_category ON equipment(category);
CREATE INDEX IF NOT EXISTS idx_equipment_status ON equipment(status);

-- Consumables and spare parts
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    name TEXT,
    description TEXT,
    quantity INTEGER,
    category TEXT,
    location TEXT,
    min_quantity INTEGER,
    cost REAL,
    supplier TEXT,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_inventory_cinema ON inventory(cinema_id);
CREATE INDEX IF NOT EXISTS idx_inventory_category ON inventory(category);

-- Work items
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    room_id INTEGER REFERENCES rooms(id),
    equipment_id INTEGER REFERENCES equipment(id),
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'todo',
    assigned_to TEXT,
    due_date INTEGER,
    category TEXT NOT NULL,
    estimated_hours REAL,
    actual_hours REAL,
    cost REAL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_tasks_cinema ON tasks(cinema_id);
CREATE INDEX IF NOT EXISTS idx_tasks_room ON tasks(room_id);
CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks(priority);
CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category);

-- Calendar entries
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    room_id INTEGER REFERENCES rooms(id),
    title TEXT NOT NULL,
    description TEXT,
    start_time INTEGER NOT NULL,
    end_time INTEGER NOT NULL,
    kind TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'scheduled',
    assigned_to TEXT,
    priority TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_events_cinema ON events(cinema_id);
CREATE INDEX IF NOT EXISTS idx_events_room ON events(room_id);
CREATE INDEX IF NOT EXISTS idx_events_start_time ON events(start_time);
CREATE INDEX IF NOT EXISTS idx_events_status ON events(status);

-- Completed maintenance interventions per room
CREATE TABLE IF NOT EXISTS maintenance_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    room_id INTEGER NOT NULL REFERENCES rooms(id),
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    date INTEGER NOT NULL,
    kind TEXT NOT NULL,
    description TEXT NOT NULL,
    technician TEXT,
    cost REAL,
    notes TEXT,
    parts_used TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_history_room ON maintenance_history(room_id);
CREATE INDEX IF NOT EXISTS idx_history_cinema ON maintenance_history(cinema_id);
CREATE INDEX IF NOT EXISTS idx_history_kind ON maintenance_history(kind);
CREATE INDEX IF NOT EXISTS idx_history_date ON maintenance_history(date);

-- Maintenance work orders with a lifecycle
CREATE TABLE IF NOT EXISTS maintenance_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    room_id INTEGER NOT NULL REFERENCES rooms(id),
    equipment_id INTEGER REFERENCES equipment(id),
    task_id INTEGER REFERENCES tasks(id),
    kind TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    start_time INTEGER NOT NULL,
    end_time INTEGER,
    status TEXT NOT NULL DEFAULT 'scheduled',
    technician TEXT,
    cost REAL,
    downtime_minutes INTEGER,
    notes TEXT,
    parts_used TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_records_cinema ON maintenance_records(cinema_id);
CREATE INDEX IF NOT EXISTS idx_records_room ON maintenance_records(room_id);
CREATE INDEX IF NOT EXISTS idx_records_equipment ON maintenance_records(equipment_id);
CREATE INDEX IF NOT EXISTS idx_records_kind ON maintenance_records(kind);
CREATE INDEX IF NOT EXISTS idx_records_category ON maintenance_records(category);
CREATE INDEX IF NOT EXISTS idx_records_status ON maintenance_records(status);

-- Screenings affected by technical problems
CREATE TABLE IF NOT EXISTS session_impacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cinema_id INTEGER NOT NULL REFERENCES cinemas(id),
    room_id INTEGER NOT NULL REFERENCES rooms(id),
    date INTEGER NOT NULL,
    session_time TEXT NOT NULL,
    movie_title TEXT,
    impact TEXT NOT NULL,
    cause TEXT NOT NULL,
    description TEXT NOT NULL,
    delay_minutes INTEGER,
    affected_customers INTEGER,
    refund_amount REAL,
    resolved BOOLEAN NOT NULL DEFAULT 0,
    resolution_time INTEGER,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_impacts_cinema ON session_impacts(cinema_id);
CREATE INDEX IF NOT EXISTS idx_impacts_room ON session_impacts(room_id);
CREATE INDEX IF NOT EXISTS idx_impacts_date ON session_impacts(date);
CREATE INDEX IF NOT EXISTS idx_impacts_kind ON session_impacts(impact);

-- Key/value application settings
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
