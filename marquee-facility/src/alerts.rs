//! Read-time alert arithmetic.
//!
//! None of these flags are stored; they are recomputed from current rows
//! whenever a dashboard, room detail, or report asks for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::DAY_MS;
use crate::types::{Equipment, EquipmentCategory, EquipmentStatus, InventoryItem, Room};

/// Lamp usage fraction that puts a lamp in the warning tier.
pub const LAMP_WARNING_PERCENT: f64 = 80.0;
/// Lamp usage fraction that puts a lamp in the critical tier.
pub const LAMP_CRITICAL_PERCENT: f64 = 90.0;
/// Equipment whose next service falls within this window is flagged.
pub const MAINTENANCE_DUE_WINDOW_MS: i64 = 30 * DAY_MS;

// ── Preventive tiers ────────────────────────────────────────────────────────

/// Fixed-interval preventive maintenance classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreventiveTier {
    A,
    B,
    C,
}

impl PreventiveTier {
    pub fn interval_days(&self) -> i64 {
        match self {
            Self::A => 30,
            Self::B => 90,
            Self::C => 365,
        }
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_days() * DAY_MS
    }

    /// Next due date after a service performed at `date`.
    pub fn next_due(&self, date: i64) -> i64 {
        date + self.interval_ms()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl FromStr for PreventiveTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(format!("unknown preventive tier: '{other}'")),
        }
    }
}

impl fmt::Display for PreventiveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Room alerts ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
}

/// A derived alert attached to a room at read time.
#[derive(Debug, Clone)]
pub struct RoomAlert {
    pub level: AlertLevel,
    pub message: String,
}

/// Compute the alert list for a room: lamp wear tiers plus overdue
/// preventive maintenance.
pub fn room_alerts(room: &Room, now: i64) -> Vec<RoomAlert> {
    let mut alerts = Vec::new();

    if let Some(ref lamp) = room.lamp {
        let usage = lamp.usage_percent();
        if usage >= LAMP_CRITICAL_PERCENT {
            alerts.push(RoomAlert {
                level: AlertLevel::Critical,
                message: format!(
                    "Projector lamp needs replacement ({:.0}% of rated life)",
                    usage
                ),
            });
        } else if usage >= LAMP_WARNING_PERCENT {
            alerts.push(RoomAlert {
                level: AlertLevel::Warning,
                message: format!(
                    "Projector lamp nearing end of life ({:.0}% of rated life)",
                    usage
                ),
            });
        }
    }

    for (tier, next) in [
        (PreventiveTier::A, room.preventive.next_a),
        (PreventiveTier::B, room.preventive.next_b),
        (PreventiveTier::C, room.preventive.next_c),
    ] {
        if let Some(due) = next {
            if due < now {
                alerts.push(RoomAlert {
                    level: AlertLevel::Critical,
                    message: format!(
                        "Preventive maintenance {} overdue by {} day(s)",
                        tier,
                        (now - due) / DAY_MS
                    ),
                });
            }
        }
    }

    alerts
}

/// Whether any preventive tier on this room is past its next-due date.
pub fn preventive_overdue(room: &Room, now: i64) -> bool {
    [
        room.preventive.next_a,
        room.preventive.next_b,
        room.preventive.next_c,
    ]
    .iter()
    .any(|next| next.is_some_and(|due| due < now))
}

// ── Equipment alerts ────────────────────────────────────────────────────────

/// Whether a piece of equipment belongs on the critical-alert list:
/// service due within 30 days, non-operational status, or a projection
/// lamp at 80%+ of its rated hours.
pub fn equipment_needs_attention(eq: &Equipment, now: i64) -> bool {
    if let Some(next) = eq.next_maintenance {
        if next <= now + MAINTENANCE_DUE_WINDOW_MS {
            return true;
        }
    }

    if matches!(
        eq.status,
        EquipmentStatus::Maintenance | EquipmentStatus::Replacement
    ) {
        return true;
    }

    if eq.category == EquipmentCategory::Projection {
        if let (Some(hours), Some(max)) = (eq.lamp_hours, eq.max_lamp_hours) {
            if max > 0 && (hours as f64 / max as f64) * 100.0 >= LAMP_WARNING_PERCENT {
                return true;
            }
        }
    }

    false
}

// ── Inventory ───────────────────────────────────────────────────────────────

/// Low-stock check: both quantities must be present and quantity must have
/// fallen to or below the minimum.
pub fn is_low_stock(item: &InventoryItem) -> bool {
    match (item.quantity, item.min_quantity) {
        (Some(qty), Some(min)) => qty <= min,
        _ => false,
    }
}

/// Availability as a whole percentage: active rooms over total rooms.
pub fn availability_percent(active: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((active as f64 / total as f64) * 100.0).round() as u32
    }
}
