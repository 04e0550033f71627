//! Per-cinema technical report: maintenance statistics over a period,
//! room condition, and a cross-cinema preventive comparison.

use marquee_facility::types::{Cinema, Room};

use crate::html::*;

/// Maintenance counts for the selected period, pre-aggregated by the
/// caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceSummary {
    pub total: i64,
    pub preventive_a: i64,
    pub preventive_b: i64,
    pub preventive_c: i64,
    pub lamp_replacements: i64,
    pub corrective: i64,
    pub total_cost: f64,
}

/// Latest preventive service dates per cinema, for the comparison table.
#[derive(Debug, Clone)]
pub struct PreventiveComparisonRow {
    pub cinema_name: String,
    pub last_a: Option<i64>,
    pub last_b: Option<i64>,
    pub last_c: Option<i64>,
}

/// Everything the technical report is rendered from.
#[derive(Debug, Clone)]
pub struct TechnicalReportData {
    pub generated_at: String,
    pub cinema: Cinema,
    /// Reporting window in days (30, 90, or 365).
    pub period_days: i64,
    pub stats: MaintenanceSummary,
    pub rooms: Vec<Room>,
    pub comparison: Vec<PreventiveComparisonRow>,
}

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    color: #1a202c; padding: 24px; max-width: 1000px; margin: 0 auto;
}
h1 { font-size: 1.8rem; }
h2.cinema-name { font-size: 1.3rem; color: #4a5568; margin-bottom: 20px; }
.section { margin-bottom: 25px; }
.section h2 {
    font-size: 1.2rem; border-bottom: 2px solid #667eea;
    padding-bottom: 4px; margin-bottom: 10px;
}
.stats-grid {
    display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
    gap: 12px;
}
.stat-card { background: #f7fafc; border: 1px solid #e2e8f0; border-radius: 6px; padding: 12px; text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-label { font-size: 0.8rem; color: #718096; }
table { width: 100%; border-collapse: collapse; }
th, td { border-bottom: 1px solid #e2e8f0; padding: 6px 8px; text-align: left; font-size: 0.9rem; }
th { background: #f7fafc; }
.badge { display: inline-block; color: white; border-radius: 9999px; padding: 2px 10px; font-size: 0.78rem; }
@media print { .section { page-break-inside: avoid; } }
"#;

/// Render the technical report to an HTML string.
pub fn render_technical_report(data: &TechnicalReportData) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "<title>Technical Report - {}</title>\n",
        escape_html(&data.cinema.name),
    ));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

    html.push_str("<h1>Technical Report</h1>\n");
    html.push_str(&format!(
        "<h2 class=\"cinema-name\">{} &middot; {}</h2>\n",
        escape_html(&data.cinema.name),
        escape_html(&data.cinema.location),
    ));

    // Period stats
    html.push_str(&format!(
        "<div class=\"section\">\n<h2>Maintenance, last {} days</h2>\n<div class=\"stats-grid\">\n",
        data.period_days,
    ));
    write_stat_tile(&mut html, "Interventions", &data.stats.total.to_string());
    write_stat_tile(&mut html, "Preventive A", &data.stats.preventive_a.to_string());
    write_stat_tile(&mut html, "Preventive B", &data.stats.preventive_b.to_string());
    write_stat_tile(&mut html, "Preventive C", &data.stats.preventive_c.to_string());
    write_stat_tile(
        &mut html,
        "Lamp replacements",
        &data.stats.lamp_replacements.to_string(),
    );
    write_stat_tile(&mut html, "Corrective", &data.stats.corrective.to_string());
    write_stat_tile(
        &mut html,
        "Total cost",
        &format!("{:.2}", data.stats.total_cost),
    );
    html.push_str("</div>\n</div>\n");

    // Room condition
    html.push_str("<div class=\"section\">\n<h2>Rooms</h2>\n");
    if data.rooms.is_empty() {
        html.push_str("<p>No rooms registered.</p>\n");
    } else {
        html.push_str("<table>\n");
        write_table_head(
            &mut html,
            &[
                "Room", "Status", "Lamp", "Last A", "Next A", "Last B", "Next B", "Last C",
                "Next C",
            ],
        );
        for room in &data.rooms {
            write_table_row(
                &mut html,
                &[
                    opt_text(room.name.as_deref()),
                    status_badge(room.status),
                    lamp_cell(room),
                    opt_date(room.preventive.last_a),
                    opt_date(room.preventive.next_a),
                    opt_date(room.preventive.last_b),
                    opt_date(room.preventive.next_b),
                    opt_date(room.preventive.last_c),
                    opt_date(room.preventive.next_c),
                ],
            );
        }
        html.push_str("</table>\n");
    }
    html.push_str("</div>\n");

    // Cross-cinema comparison
    html.push_str("<div class=\"section\">\n<h2>Preventive comparison</h2>\n<table>\n");
    write_table_head(&mut html, &["Cinema", "Last A", "Last B", "Last C"]);
    for row in &data.comparison {
        write_table_row(
            &mut html,
            &[
                escape_html(&row.cinema_name),
                opt_date(row.last_a),
                opt_date(row.last_b),
                opt_date(row.last_c),
            ],
        );
    }
    html.push_str("</table>\n</div>\n");

    html.push_str(&format!(
        "<p style=\"color:#a0aec0;font-size:0.8rem\">Generated {}</p>\n",
        escape_html(&data.generated_at),
    ));
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TechnicalReportData {
        TechnicalReportData {
            generated_at: "2024-03-15 10:00".to_string(),
            cinema: Cinema {
                id: 1,
                name: "Downtown 8".to_string(),
                location: "Downtown Mall".to_string(),
                created_at: String::new(),
            },
            period_days: 30,
            stats: MaintenanceSummary {
                total: 5,
                preventive_a: 2,
                lamp_replacements: 1,
                total_cost: 2350.0,
                ..Default::default()
            },
            rooms: vec![],
            comparison: vec![PreventiveComparisonRow {
                cinema_name: "Downtown 8".to_string(),
                last_a: Some(1_700_000_000_000),
                last_b: None,
                last_c: None,
            }],
        }
    }

    #[test]
    fn technical_report_shows_period_and_stats() {
        let html = render_technical_report(&sample());
        assert!(html.contains("Maintenance, last 30 days"));
        assert!(html.contains("Lamp replacements"));
        assert!(html.contains("2350.00"));
        assert!(html.contains("Preventive comparison"));
    }
}
