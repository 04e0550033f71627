use std::path::Path;

use marquee_db::TaskFilter;
use marquee_facility::time::{format_datetime, now_ms, DAY_MS};
use marquee_report::{
    render_technical_report, CinemaSection, FacilityReport, MaintenanceSummary,
    PreventiveComparisonRow, PrintReport, ReportData, ReportFormat, ReportMode, ReportStats,
    TechnicalReportData,
};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::ReportAction;
use crate::commands::require_cinema;
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: ReportAction) -> Result<(), CliError> {
    match action {
        ReportAction::Facility { out, summary } => {
            let mode = if summary {
                ReportMode::Summary
            } else {
                ReportMode::Complete
            };
            let report = FacilityReport::new(mode);
            let data = assemble_facility_data(conn)?;
            report.write_report(&data, &out)?;
            done(report.name(), &out);
            Ok(())
        }

        ReportAction::Print { out } => {
            let report = PrintReport::new();
            let data = assemble_facility_data(conn)?;
            report.write_report(&data, &out)?;
            done(report.name(), &out);
            Ok(())
        }

        ReportAction::Technical { cinema, out, days } => {
            if !matches!(days, 30 | 90 | 365) {
                log::warn!("Unusual reporting window of {days} days (expected 30, 90, or 365)");
            }
            let data = assemble_technical_data(conn, cinema, days)?;
            let html = render_technical_report(&data);
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&out, html)?;
            done("technical", &out);
            Ok(())
        }
    }
}

fn done(kind: &str, out: &Path) {
    log::info!(
        "{} {} report written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        kind,
        out.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Pull everything the facility/print reports need out of the database.
fn assemble_facility_data(conn: &Connection) -> Result<ReportData, CliError> {
    let now = now_ms();

    let mut sections = Vec::new();
    let mut low_stock = Vec::new();
    for cinema in marquee_db::list_cinemas(conn)? {
        let rooms = marquee_db::rooms_for_cinema(conn, cinema.id)?;
        low_stock.extend(marquee_db::low_stock_items(conn, cinema.id)?);
        sections.push(CinemaSection::new(cinema, rooms));
    }

    let critical_equipment = marquee_db::critical_equipment(conn, None, now)?;
    let db_stats = marquee_db::facility_stats(conn, now)?;

    Ok(ReportData {
        generated_at: format_datetime(now),
        stats: ReportStats {
            cinemas: db_stats.cinemas as usize,
            rooms: db_stats.rooms as usize,
            critical_alerts: critical_equipment.len(),
            availability: db_stats.availability,
        },
        cinemas: sections,
        tasks: marquee_db::list_tasks(conn, TaskFilter::default())?,
        events: marquee_db::list_events(conn)?,
        critical_equipment,
        low_stock,
    })
}

/// Pull the per-cinema technical report data, with the cross-cinema
/// preventive comparison.
fn assemble_technical_data(
    conn: &Connection,
    cinema_id: i64,
    days: i64,
) -> Result<TechnicalReportData, CliError> {
    let now = now_ms();
    let cinema = require_cinema(conn, cinema_id)?;
    let rooms = marquee_db::rooms_for_cinema(conn, cinema_id)?;

    let stats = marquee_db::maintenance_stats(conn, cinema_id, Some(now - days * DAY_MS))?;

    let mut comparison = Vec::new();
    for other in marquee_db::list_cinemas(conn)? {
        let other_rooms = marquee_db::rooms_for_cinema(conn, other.id)?;
        comparison.push(PreventiveComparisonRow {
            cinema_name: other.name,
            last_a: other_rooms.iter().filter_map(|r| r.preventive.last_a).max(),
            last_b: other_rooms.iter().filter_map(|r| r.preventive.last_b).max(),
            last_c: other_rooms.iter().filter_map(|r| r.preventive.last_c).max(),
        });
    }

    Ok(TechnicalReportData {
        generated_at: format_datetime(now),
        cinema,
        period_days: days,
        stats: MaintenanceSummary {
            total: stats.total,
            preventive_a: stats.preventive_a,
            preventive_b: stats.preventive_b,
            preventive_c: stats.preventive_c,
            lamp_replacements: stats.lamp_replacements,
            corrective: stats.corrective,
            total_cost: stats.total_cost,
        },
        rooms,
        comparison,
    })
}
