//! Cinema facility data model types, alert arithmetic, and YAML fixtures.
//!
//! This crate defines the domain model without any database dependencies.
//! Consumers can use these types directly for display, serialization, or
//! passing to `marquee-db` for persistence.

pub mod alerts;
pub mod time;
pub mod types;
pub mod yaml;

pub use alerts::{
    availability_percent, equipment_needs_attention, is_low_stock, preventive_overdue,
    room_alerts, AlertLevel, PreventiveTier, RoomAlert,
};
pub use time::{format_date, format_datetime, now_ms, parse_date_ms, parse_datetime_ms, DAY_MS};
pub use types::*;
pub use yaml::{load_fixtures, CinemaFixture, EquipmentFixture, FixtureError, InventoryFixture, RoomFixture};
