//! Shared HTML building blocks: escaping, status styling, and the small
//! formatting helpers every generator uses.

use marquee_facility::time::format_date;
use marquee_facility::types::{EquipmentStatus, EventStatus, Room, RoomStatus, TaskStatus};

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn room_status_color(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Active => "#10b981",
        RoomStatus::Maintenance => "#f59e0b",
        RoomStatus::Stopped => "#ef4444",
    }
}

pub fn room_status_label(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Active => "Active",
        RoomStatus::Maintenance => "Maintenance",
        RoomStatus::Stopped => "Stopped",
    }
}

pub fn equipment_status_label(status: EquipmentStatus) -> &'static str {
    match status {
        EquipmentStatus::Operational => "Operational",
        EquipmentStatus::Maintenance => "In maintenance",
        EquipmentStatus::Replacement => "Needs replacement",
    }
}

pub fn task_status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "To do",
        TaskStatus::InProgress => "In progress",
        TaskStatus::Done => "Done",
    }
}

pub fn event_status_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Scheduled => "Scheduled",
        EventStatus::InProgress => "In progress",
        EventStatus::Completed => "Completed",
        EventStatus::Cancelled => "Cancelled",
    }
}

/// A colored status badge for a room.
pub fn status_badge(status: RoomStatus) -> String {
    format!(
        "<span class=\"badge\" style=\"background:{}\">{}</span>",
        room_status_color(status),
        room_status_label(status),
    )
}

/// "1200/2000 h (60%)" for the room's lamp, or a dash.
pub fn lamp_cell(room: &Room) -> String {
    match &room.lamp {
        Some(lamp) => format!(
            "{}/{} h ({:.0}%)",
            lamp.current_hours,
            lamp.max_hours,
            lamp.usage_percent(),
        ),
        None => "&mdash;".to_string(),
    }
}

pub fn opt_date(ms: Option<i64>) -> String {
    match ms {
        Some(ms) => format_date(ms),
        None => "&mdash;".to_string(),
    }
}

pub fn opt_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => "&mdash;".to_string(),
    }
}

/// Append one stat tile to the stats grid.
pub fn write_stat_tile(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<div class=\"stat-card\"><div class=\"stat-value\">{value}</div>\
         <div class=\"stat-label\">{label}</div></div>\n"
    ));
}

/// Append `<th>` cells for a table header row.
pub fn write_table_head(html: &mut String, columns: &[&str]) {
    html.push_str("<tr>");
    for col in columns {
        html.push_str(&format!("<th>{col}</th>"));
    }
    html.push_str("</tr>\n");
}

/// Append `<td>` cells for a table body row. Values are expected to be
/// escaped (or generated markup) already.
pub fn write_table_row(html: &mut String, cells: &[String]) {
    html.push_str("<tr>");
    for cell in cells {
        html.push_str(&format!("<td>{cell}</td>"));
    }
    html.push_str("</tr>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("\"vip\""), "&quot;vip&quot;");
    }

    #[test]
    fn badge_carries_status_color() {
        let badge = status_badge(RoomStatus::Stopped);
        assert!(badge.contains("#ef4444"));
        assert!(badge.contains("Stopped"));
    }
}
