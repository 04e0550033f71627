//! SQLite persistence layer for the facility registry.
//!
//! Provides schema creation, CRUD operations, derived read queries, and
//! seeding, backed by SQLite (via rusqlite with the bundled feature).

pub use rusqlite::Connection;

mod map;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod seed;

pub use operations::{
    clear_all_data, get_cinema, get_equipment, get_event, get_history_entry, get_impact,
    get_inventory_item, get_record, get_room, get_setting, get_task, insert_cinema,
    insert_equipment, insert_event, insert_history_entry, insert_impact, insert_inventory_item,
    insert_record, insert_room, insert_task, record_preventive, remove_cinema, remove_equipment,
    remove_event, remove_history_entry, remove_impact, remove_inventory_item, remove_record,
    remove_room, remove_setting, remove_task, replace_projector_lamp, resolve_impact,
    set_setting, update_cinema, update_equipment, update_event, update_event_status,
    update_history_entry, update_impact, update_inventory_item, update_lamp_hours,
    update_record, update_record_status, update_room, update_room_status, update_task,
    update_task_status, OperationError,
};
pub use queries::{
    critical_equipment, equipment_for_cinema, equipment_for_room, events_for_cinema,
    events_in_window, facility_stats, history_for_cinema, history_for_room,
    impacts_for_cinema, inventory_for_cinema, list_cinemas, list_events, list_rooms,
    list_settings, list_tasks, low_stock_items, maintenance_stats, records_for_cinema,
    records_for_room, rooms_for_cinema, rooms_overdue_preventive, tasks_for_room,
    unresolved_impacts, FacilityStats, MaintenanceStats, TaskFilter,
};
pub use schema::{open_database, open_memory, SchemaError};
pub use seed::{seed_demo, seed_from_fixtures, SeedStats};
