//! Data model types for cinema facilities.
//!
//! These types represent the persistent schema: cinemas, screening rooms,
//! equipment, inventory, tasks, events, maintenance history/records,
//! session impacts, and settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an enum label from user input.
#[derive(Debug, Clone)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }, default: $default:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Lenient parse for database round-trips; unknown labels fall
            /// back to the default variant.
            pub fn from_str_loose(s: &str) -> Self {
                s.parse().unwrap_or(Self::$default)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ── Cinema ──────────────────────────────────────────────────────────────────

/// A cinema complex. Rooms, equipment, and inventory all hang off one.
#[derive(Debug, Clone)]
pub struct Cinema {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub created_at: String,
}

// ── Room ────────────────────────────────────────────────────────────────────

string_enum!(RoomStatus, "room status", {
    Active => "active",
    Maintenance => "maintenance",
    Stopped => "stopped",
}, default: Active);

/// Seat counts by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seating {
    pub standard: u32,
    pub premium: u32,
    pub vip: u32,
}

impl Seating {
    pub fn total(&self) -> u32 {
        self.standard + self.premium + self.vip
    }
}

/// Projector lamp tracking for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectorLamp {
    pub model: String,
    pub current_hours: i64,
    pub max_hours: i64,
    /// Epoch ms of the last lamp replacement.
    pub replaced_at: i64,
}

impl ProjectorLamp {
    /// Fraction of rated lamp life consumed, in percent.
    pub fn usage_percent(&self) -> f64 {
        if self.max_hours <= 0 {
            return 0.0;
        }
        (self.current_hours as f64 / self.max_hours as f64) * 100.0
    }
}

/// Last/next service dates per preventive tier, all epoch ms.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PreventiveSchedule {
    #[serde(default)]
    pub last_a: Option<i64>,
    #[serde(default)]
    pub last_b: Option<i64>,
    #[serde(default)]
    pub last_c: Option<i64>,
    #[serde(default)]
    pub next_a: Option<i64>,
    #[serde(default)]
    pub next_b: Option<i64>,
    #[serde(default)]
    pub next_c: Option<i64>,
}

/// A screening room within a cinema.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub cinema_id: i64,
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: RoomStatus,
    /// Why the room is in maintenance or stopped.
    pub status_reason: Option<String>,
    pub screen_type: Option<String>,
    pub sound_system: Option<String>,
    pub seating: Option<Seating>,
    pub lamp: Option<ProjectorLamp>,
    pub preventive: PreventiveSchedule,
    pub created_at: String,
}

// ── Equipment ───────────────────────────────────────────────────────────────

string_enum!(EquipmentCategory, "equipment category", {
    Projection => "projection",
    Sound => "sound",
    Climate => "climate",
    Electrical => "electrical",
    Network => "network",
    Other => "other",
}, default: Other);

string_enum!(EquipmentStatus, "equipment status", {
    Operational => "operational",
    Maintenance => "maintenance",
    Replacement => "replacement",
}, default: Operational);

/// A piece of installed equipment. Category-specific attributes are all
/// optional; only the fields relevant to the category are populated.
#[derive(Debug, Clone)]
pub struct Equipment {
    pub id: i64,
    pub room_id: i64,
    pub cinema_id: i64,
    pub name: String,
    pub description: String,
    pub category: EquipmentCategory,
    pub status: EquipmentStatus,
    pub ip_address: Option<String>,
    pub install_date: Option<i64>,
    pub cost: Option<f64>,
    pub last_maintenance: Option<i64>,
    pub next_maintenance: Option<i64>,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    // Projection
    pub lumens: Option<i64>,
    pub resolution: Option<String>,
    pub lamp_hours: Option<i64>,
    pub max_lamp_hours: Option<i64>,
    // Sound
    pub channels: Option<i64>,
    pub power: Option<i64>,
    pub frequency: Option<String>,
    // Climate
    pub capacity_btu: Option<i64>,
    pub temperature_range: Option<String>,
    // Network
    pub mac_address: Option<String>,
    pub ip_range: Option<String>,
    pub port_count: Option<i64>,
    pub created_at: String,
}

// ── Inventory ───────────────────────────────────────────────────────────────

/// A stocked consumable or spare part belonging to a cinema.
#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub id: i64,
    pub cinema_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub min_quantity: Option<i64>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

// ── Task ────────────────────────────────────────────────────────────────────

string_enum!(TaskPriority, "priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
}, default: Medium);

string_enum!(TaskStatus, "task status", {
    Todo => "todo",
    InProgress => "in_progress",
    Done => "done",
}, default: Todo);

string_enum!(TaskCategory, "task category", {
    Maintenance => "maintenance",
    Cleaning => "cleaning",
    Inspection => "inspection",
    Repair => "repair",
    PreventiveA => "preventive_a",
    PreventiveB => "preventive_b",
    PreventiveC => "preventive_c",
    Other => "other",
}, default: Other);

/// A work item, optionally tied to a room and a piece of equipment.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: i64,
    pub cinema_id: i64,
    pub room_id: Option<i64>,
    pub equipment_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub due_date: Option<i64>,
    pub category: TaskCategory,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub cost: Option<f64>,
    pub created_at: String,
}

// ── Event ───────────────────────────────────────────────────────────────────

string_enum!(EventKind, "event kind", {
    Maintenance => "maintenance",
    Cleaning => "cleaning",
    Inspection => "inspection",
    Meeting => "meeting",
    Preventive => "preventive",
    Events => "events",
    Other => "other",
}, default: Other);

string_enum!(EventStatus, "event status", {
    Scheduled => "scheduled",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
}, default: Scheduled);

/// A scheduled calendar entry for a cinema (and optionally a room).
#[derive(Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub cinema_id: i64,
    pub room_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub kind: EventKind,
    pub status: EventStatus,
    pub assigned_to: Option<String>,
    pub priority: Option<TaskPriority>,
    pub created_at: String,
}

// ── Maintenance history ─────────────────────────────────────────────────────

string_enum!(MaintenanceKind, "maintenance kind", {
    PreventiveA => "preventive_a",
    PreventiveB => "preventive_b",
    PreventiveC => "preventive_c",
    LampReplacement => "lamp_replacement",
    Corrective => "corrective",
    Cleaning => "cleaning",
    Inspection => "inspection",
    Other => "other",
}, default: Other);

/// A completed maintenance intervention on a room.
#[derive(Debug, Clone)]
pub struct MaintenanceEntry {
    pub id: i64,
    pub room_id: i64,
    pub cinema_id: i64,
    pub date: i64,
    pub kind: MaintenanceKind,
    pub description: String,
    pub technician: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_used: Vec<String>,
    pub created_at: String,
}

// ── Maintenance record ──────────────────────────────────────────────────────

string_enum!(RecordKind, "record kind", {
    Corrective => "corrective",
    Preventive => "preventive",
    Predictive => "predictive",
}, default: Corrective);

string_enum!(RecordCategory, "record category", {
    Projection => "projection",
    Sound => "sound",
    Climate => "climate",
    Electrical => "electrical",
    Network => "network",
    Cleaning => "cleaning",
    PreventiveA => "preventive_a",
    PreventiveB => "preventive_b",
    PreventiveC => "preventive_c",
    Other => "other",
}, default: Other);

/// A maintenance work order with its own lifecycle, optionally linked to
/// a piece of equipment and a task.
#[derive(Debug, Clone)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub cinema_id: i64,
    pub room_id: i64,
    pub equipment_id: Option<i64>,
    pub task_id: Option<i64>,
    pub kind: RecordKind,
    pub category: RecordCategory,
    pub description: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub status: EventStatus,
    pub technician: Option<String>,
    pub cost: Option<f64>,
    pub downtime_minutes: Option<i64>,
    pub notes: Option<String>,
    pub parts_used: Vec<String>,
    pub created_at: String,
}

// ── Session impact ──────────────────────────────────────────────────────────

string_enum!(ImpactKind, "impact kind", {
    Cancelled => "cancelled",
    Delayed => "delayed",
    Interrupted => "interrupted",
}, default: Delayed);

string_enum!(ImpactCause, "impact cause", {
    Projection => "projection",
    Sound => "sound",
    Climate => "climate",
    Electrical => "electrical",
    Network => "network",
    Other => "other",
}, default: Other);

/// A screening session that was cancelled, delayed, or interrupted.
#[derive(Debug, Clone)]
pub struct SessionImpact {
    pub id: i64,
    pub cinema_id: i64,
    pub room_id: i64,
    pub date: i64,
    /// Showtime as displayed on the schedule, e.g. "19:30".
    pub session_time: String,
    pub movie_title: Option<String>,
    pub impact: ImpactKind,
    pub cause: ImpactCause,
    pub description: String,
    pub delay_minutes: Option<i64>,
    pub affected_customers: Option<i64>,
    pub refund_amount: Option<f64>,
    pub resolved: bool,
    pub resolution_time: Option<i64>,
    pub created_at: String,
}

// ── Settings ────────────────────────────────────────────────────────────────

/// A key/value application setting.
#[derive(Debug, Clone)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_round_trip() {
        assert_eq!(RoomStatus::Maintenance.as_str(), "maintenance");
        assert_eq!(
            "in_progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert!("bogus".parse::<RoomStatus>().is_err());
        // Loose parse falls back to the default
        assert_eq!(RoomStatus::from_str_loose("bogus"), RoomStatus::Active);
        assert_eq!(
            MaintenanceKind::from_str_loose("lamp_replacement"),
            MaintenanceKind::LampReplacement
        );
    }

    #[test]
    fn seating_total() {
        let s = Seating {
            standard: 100,
            premium: 30,
            vip: 10,
        };
        assert_eq!(s.total(), 140);
    }

    #[test]
    fn lamp_usage_percent() {
        let lamp = ProjectorLamp {
            model: "CP2230".to_string(),
            current_hours: 1500,
            max_hours: 2000,
            replaced_at: 0,
        };
        assert!((lamp.usage_percent() - 75.0).abs() < f64::EPSILON);

        let dead = ProjectorLamp {
            model: "X".to_string(),
            current_hours: 10,
            max_hours: 0,
            replaced_at: 0,
        };
        assert_eq!(dead.usage_percent(), 0.0);
    }
}
