//! Print-ready variant of the facility report.
//!
//! Same data as the facility report in a black-and-white layout with
//! page-break hints, intended for print-to-PDF.

use crate::html::*;
use crate::{ReportData, ReportError, ReportFormat};

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: Georgia, 'Times New Roman', serif;
    color: #1a202c; padding: 24px; font-size: 12pt;
}
h1 { font-size: 20pt; margin-bottom: 4px; }
.subtitle { color: #4a5568; margin-bottom: 24px; }
.section { margin-bottom: 24px; }
.section h2 {
    font-size: 14pt; border-bottom: 2px solid #1a202c;
    padding-bottom: 4px; margin-bottom: 10px;
}
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #cbd5e0; padding: 6px 8px; text-align: left; font-size: 10pt; }
th { background: #edf2f7; }
.badge { font-weight: bold; }
.rooms-section { margin-top: 12px; }
.rooms-section h3 { font-size: 12pt; margin-bottom: 6px; }
@media print {
    body { padding: 0; }
    .section { page-break-inside: avoid; }
}
@page { margin: 2cm; }
"#;

/// The print-oriented report generator.
#[derive(Debug, Default)]
pub struct PrintReport;

impl PrintReport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormat for PrintReport {
    fn name(&self) -> &'static str {
        "print"
    }

    fn render(&self, data: &ReportData) -> Result<String, ReportError> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!(
            "<title>Cinema Facility Report - {}</title>\n",
            escape_html(&data.generated_at),
        ));
        html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

        html.push_str("<h1>Cinema Facility Report</h1>\n");
        html.push_str(&format!(
            "<p class=\"subtitle\">Generated {}</p>\n",
            escape_html(&data.generated_at),
        ));

        // Cross-cinema comparison
        html.push_str("<div class=\"section\">\n<h2>Cinema comparison</h2>\n<table>\n");
        write_table_head(
            &mut html,
            &["Cinema", "Location", "Rooms", "Active", "Availability"],
        );
        for section in &data.cinemas {
            write_table_row(
                &mut html,
                &[
                    escape_html(&section.cinema.name),
                    escape_html(&section.cinema.location),
                    section.total_rooms.to_string(),
                    section.active_rooms.to_string(),
                    format!("{}%", section.availability),
                ],
            );
        }
        html.push_str("</table>\n");

        // Per-cinema room breakdown
        for section in &data.cinemas {
            if section.rooms.is_empty() {
                continue;
            }
            html.push_str("<div class=\"rooms-section\">\n");
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&section.cinema.name)));
            html.push_str("<table>\n");
            write_table_head(
                &mut html,
                &["Room", "Status", "Reason", "Lamp", "Next A", "Next B", "Next C"],
            );
            for room in &section.rooms {
                write_table_row(
                    &mut html,
                    &[
                        opt_text(room.name.as_deref()),
                        format!(
                            "<span class=\"badge\">{}</span>",
                            room_status_label(room.status),
                        ),
                        opt_text(room.status_reason.as_deref()),
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

        // Alerts summary
        html.push_str("<div class=\"section\">\n<h2>Critical alerts</h2>\n");
        if data.critical_equipment.is_empty() {
            html.push_str("<p>No equipment currently needs attention.</p>\n");
        } else {
            html.push_str("<table>\n");
            write_table_head(&mut html, &["Equipment", "Category", "Status", "Next service"]);
            for eq in &data.critical_equipment {
                write_table_row(
                    &mut html,
                    &[
                        escape_html(&eq.name),
                        eq.category.as_str().to_string(),
                        equipment_status_label(eq.status).to_string(),
                        opt_date(eq.next_maintenance),
                    ],
                );
            }
            html.push_str("</table>\n");
        }
        html.push_str("</div>\n");

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CinemaSection;
    use marquee_facility::types::Cinema;

    #[test]
    fn print_report_has_page_break_styles() {
        let data = ReportData {
            generated_at: "2024-03-15 10:00".to_string(),
            cinemas: vec![CinemaSection::new(
                Cinema {
                    id: 1,
                    name: "Downtown 8".to_string(),
                    location: "Downtown Mall".to_string(),
                    created_at: String::new(),
                },
                vec![],
            )],
            ..Default::default()
        };
        let html = PrintReport::new().render(&data).unwrap();
        assert!(html.contains("@media print"));
        assert!(html.contains("page-break-inside: avoid"));
        assert!(html.contains("Cinema comparison"));
        assert!(html.contains("Downtown 8"));
    }
}
