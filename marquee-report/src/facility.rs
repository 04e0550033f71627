//! The facility-wide HTML report, in complete or summary form.

use marquee_facility::time::format_datetime;

use crate::html::*;
use crate::{ReportData, ReportError, ReportFormat, ReportMode};

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6; color: #333; background-color: #f8fafc; padding: 20px;
}
.container {
    max-width: 1200px; margin: 0 auto; background: white;
    border-radius: 12px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); overflow: hidden;
}
.header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white; padding: 30px; text-align: center;
}
.header h1 { font-size: 2.2rem; margin-bottom: 8px; font-weight: 700; }
.header p { font-size: 1.05rem; opacity: 0.9; }
.content { padding: 30px; }
.section { margin-bottom: 40px; }
.section-title {
    font-size: 1.5rem; color: #2d3748; margin-bottom: 16px;
    padding-bottom: 8px; border-bottom: 3px solid #667eea;
}
.stats-grid {
    display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 16px; margin-bottom: 8px;
}
.stat-card {
    background: #f7fafc; border: 1px solid #e2e8f0; border-radius: 8px;
    padding: 18px; text-align: center;
}
.stat-value { font-size: 1.9rem; font-weight: 700; color: #2d3748; }
.stat-label { font-size: 0.85rem; color: #718096; }
.cinema { margin-bottom: 28px; }
.cinema h3 { font-size: 1.2rem; color: #2d3748; }
.cinema .meta { color: #718096; font-size: 0.9rem; margin-bottom: 10px; }
table { width: 100%; border-collapse: collapse; margin-top: 8px; }
th, td { padding: 8px 10px; text-align: left; border-bottom: 1px solid #e2e8f0; font-size: 0.9rem; }
th { background: #f7fafc; color: #4a5568; font-weight: 600; }
.badge {
    display: inline-block; color: white; border-radius: 9999px;
    padding: 2px 10px; font-size: 0.78rem; font-weight: 600;
}
.empty { color: #a0aec0; font-style: italic; }
.footer { padding: 16px 30px; color: #a0aec0; font-size: 0.8rem; text-align: center; }
"#;

/// The facility report generator.
#[derive(Debug, Default)]
pub struct FacilityReport {
    pub mode: ReportMode,
}

impl FacilityReport {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }
}

impl ReportFormat for FacilityReport {
    fn name(&self) -> &'static str {
        match self.mode {
            ReportMode::Complete => "facility (complete)",
            ReportMode::Summary => "facility (summary)",
        }
    }

    fn render(&self, data: &ReportData) -> Result<String, ReportError> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "<title>Cinema Facility Report - {}</title>\n",
            escape_html(&data.generated_at),
        ));
        html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
        html.push_str("<div class=\"container\">\n");

        html.push_str("<div class=\"header\">\n<h1>Cinema Facility Report</h1>\n");
        html.push_str(&format!(
            "<p>Generated {}</p>\n</div>\n",
            escape_html(&data.generated_at),
        ));
        html.push_str("<div class=\"content\">\n");

        write_overview(&mut html, data);
        write_cinemas(&mut html, data);

        if self.mode == ReportMode::Complete {
            write_critical_equipment(&mut html, data);
            write_tasks(&mut html, data);
            write_events(&mut html, data);
            write_low_stock(&mut html, data);
        }

        html.push_str("</div>\n");
        html.push_str(&format!(
            "<div class=\"footer\">Cinema facility management &middot; {}</div>\n",
            escape_html(&data.generated_at),
        ));
        html.push_str("</div>\n</body>\n</html>\n");

        Ok(html)
    }
}

fn write_overview(html: &mut String, data: &ReportData) {
    html.push_str("<div class=\"section\">\n<h2 class=\"section-title\">Overview</h2>\n");
    html.push_str("<div class=\"stats-grid\">\n");
    write_stat_tile(html, "Cinemas", &data.stats.cinemas.to_string());
    write_stat_tile(html, "Rooms", &data.stats.rooms.to_string());
    write_stat_tile(
        html,
        "Critical alerts",
        &data.stats.critical_alerts.to_string(),
    );
    write_stat_tile(
        html,
        "Availability",
        &format!("{}%", data.stats.availability),
    );
    html.push_str("</div>\n</div>\n");
}

fn write_cinemas(html: &mut String, data: &ReportData) {
    html.push_str("<div class=\"section\">\n<h2 class=\"section-title\">Cinemas</h2>\n");

    if data.cinemas.is_empty() {
        html.push_str("<p class=\"empty\">No cinemas registered.</p>\n");
    }

    for section in &data.cinemas {
        html.push_str("<div class=\"cinema\">\n");
        html.push_str(&format!(
            "<h3>{}</h3>\n<p class=\"meta\">{} &middot; {} room(s), {} active ({}% availability)</p>\n",
            escape_html(&section.cinema.name),
            escape_html(&section.cinema.location),
            section.total_rooms,
            section.active_rooms,
            section.availability,
        ));

        if section.rooms.is_empty() {
            html.push_str("<p class=\"empty\">No rooms.</p>\n</div>\n");
            continue;
        }

        html.push_str("<table>\n");
        write_table_head(
            html,
            &[
                "Room", "Status", "Screen", "Sound", "Seats", "Lamp", "Next A", "Next B",
                "Next C",
            ],
        );
        for room in &section.rooms {
            let seats = match room.seating {
                Some(s) => s.total().to_string(),
                None => "&mdash;".to_string(),
            };
            write_table_row(
                html,
                &[
                    opt_text(room.name.as_deref()),
                    status_badge(room.status),
                    opt_text(room.screen_type.as_deref()),
                    opt_text(room.sound_system.as_deref()),
                    seats,
                    lamp_cell(room),
                    opt_date(room.preventive.next_a),
                    opt_date(room.preventive.next_b),
                    opt_date(room.preventive.next_c),
                ],
            );
        }
        html.push_str("</table>\n</div>\n");
    }

    html.push_str("</div>\n");
}

fn write_critical_equipment(html: &mut String, data: &ReportData) {
    html.push_str(
        "<div class=\"section\">\n<h2 class=\"section-title\">Critical equipment</h2>\n",
    );
    if data.critical_equipment.is_empty() {
        html.push_str("<p class=\"empty\">No equipment needs attention.</p>\n</div>\n");
        return;
    }

    html.push_str("<table>\n");
    write_table_head(
        html,
        &["Equipment", "Category", "Status", "Next service", "Lamp hours"],
    );
    for eq in &data.critical_equipment {
        let lamp = match (eq.lamp_hours, eq.max_lamp_hours) {
            (Some(hours), Some(max)) => format!("{hours}/{max} h"),
            _ => "&mdash;".to_string(),
        };
        write_table_row(
            html,
            &[
                escape_html(&eq.name),
                eq.category.as_str().to_string(),
                equipment_status_label(eq.status).to_string(),
                opt_date(eq.next_maintenance),
                lamp,
            ],
        );
    }
    html.push_str("</table>\n</div>\n");
}

fn write_tasks(html: &mut String, data: &ReportData) {
    html.push_str("<div class=\"section\">\n<h2 class=\"section-title\">Tasks</h2>\n");
    if data.tasks.is_empty() {
        html.push_str("<p class=\"empty\">No open tasks.</p>\n</div>\n");
        return;
    }

    html.push_str("<table>\n");
    write_table_head(
        html,
        &["Task", "Category", "Priority", "Status", "Assigned to", "Due"],
    );
    for task in &data.tasks {
        write_table_row(
            html,
            &[
                escape_html(&task.title),
                task.category.as_str().to_string(),
                task.priority.as_str().to_string(),
                task_status_label(task.status).to_string(),
                opt_text(task.assigned_to.as_deref()),
                opt_date(task.due_date),
            ],
        );
    }
    html.push_str("</table>\n</div>\n");
}

fn write_events(html: &mut String, data: &ReportData) {
    html.push_str("<div class=\"section\">\n<h2 class=\"section-title\">Events</h2>\n");
    if data.events.is_empty() {
        html.push_str("<p class=\"empty\">No events scheduled.</p>\n</div>\n");
        return;
    }

    html.push_str("<table>\n");
    write_table_head(html, &["Event", "Type", "Status", "Start", "End"]);
    for event in &data.events {
        write_table_row(
            html,
            &[
                escape_html(&event.title),
                event.kind.as_str().to_string(),
                event_status_label(event.status).to_string(),
                escape_html(&format_datetime(event.start_time)),
                escape_html(&format_datetime(event.end_time)),
            ],
        );
    }
    html.push_str("</table>\n</div>\n");
}

fn write_low_stock(html: &mut String, data: &ReportData) {
    html.push_str("<div class=\"section\">\n<h2 class=\"section-title\">Low stock</h2>\n");
    if data.low_stock.is_empty() {
        html.push_str("<p class=\"empty\">All items above minimum stock.</p>\n</div>\n");
        return;
    }

    html.push_str("<table>\n");
    write_table_head(html, &["Item", "Category", "Quantity", "Minimum", "Supplier"]);
    for item in &data.low_stock {
        let qty = item
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "&mdash;".to_string());
        let min = item
            .min_quantity
            .map(|m| m.to_string())
            .unwrap_or_else(|| "&mdash;".to_string());
        write_table_row(
            html,
            &[
                opt_text(item.name.as_deref()),
                opt_text(item.category.as_deref()),
                qty,
                min,
                opt_text(item.supplier.as_deref()),
            ],
        );
    }
    html.push_str("</table>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CinemaSection;
    use marquee_facility::types::{Cinema, PreventiveSchedule, Room, RoomStatus};

    fn sample_data() -> ReportData {
        let cinema = Cinema {
            id: 1,
            name: "Downtown 8 & Lounge".to_string(),
            location: "Downtown Mall".to_string(),
            created_at: String::new(),
        };
        let room = Room {
            id: 1,
            cinema_id: 1,
            name: Some("Screen 1".to_string()),
            location: None,
            status: RoomStatus::Active,
            status_reason: None,
            screen_type: Some("2D/3D".to_string()),
            sound_system: None,
            seating: None,
            lamp: None,
            preventive: PreventiveSchedule::default(),
            created_at: String::new(),
        };
        ReportData {
            generated_at: "2024-03-15 10:00".to_string(),
            cinemas: vec![CinemaSection::new(cinema, vec![room])],
            ..Default::default()
        }
    }

    #[test]
    fn complete_report_has_all_sections() {
        let html = FacilityReport::new(ReportMode::Complete)
            .render(&sample_data())
            .unwrap();
        for needle in [
            "Cinema Facility Report",
            "Overview",
            "Cinemas",
            "Critical equipment",
            "Tasks",
            "Events",
            "Low stock",
        ] {
            assert!(html.contains(needle), "missing section '{}'", needle);
        }
    }

    #[test]
    fn summary_report_skips_detail_sections() {
        let html = FacilityReport::new(ReportMode::Summary)
            .render(&sample_data())
            .unwrap();
        assert!(html.contains("Cinemas"));
        assert!(!html.contains("Low stock"));
        assert!(!html.contains("Critical equipment"));
    }

    #[test]
    fn cinema_names_are_escaped() {
        let html = FacilityReport::new(ReportMode::Summary)
            .render(&sample_data())
            .unwrap();
        assert!(html.contains("Downtown 8 &amp; Lounge"));
    }

    #[test]
    fn availability_derived_from_rooms() {
        let data = sample_data();
        assert_eq!(data.cinemas[0].availability, 100);
        assert_eq!(data.cinemas[0].active_rooms, 1);
    }
}
