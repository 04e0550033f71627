//! HTML report generation for the facility registry.
//!
//! Reports are rendered from plain data structs assembled by the caller;
//! this crate never touches the database. Three generators exist: the
//! facility report (screen or archive use), a print-ready variant of the
//! same data, and a per-cinema technical report.

pub mod error;
pub mod facility;
pub mod html;
pub mod print;
pub mod technical;

use std::fs;
use std::io::Write;
use std::path::Path;

use marquee_facility::alerts::availability_percent;
use marquee_facility::types::{Cinema, Equipment, Event, InventoryItem, Room, RoomStatus, Task};

pub use error::ReportError;
pub use facility::FacilityReport;
pub use print::PrintReport;
pub use technical::{
    render_technical_report, MaintenanceSummary, PreventiveComparisonRow, TechnicalReportData,
};

/// How much of the data set the facility report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    Complete,
    Summary,
}

/// Dashboard tile numbers shown at the top of a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStats {
    pub cinemas: usize,
    pub rooms: usize,
    pub critical_alerts: usize,
    /// Active rooms over total rooms, whole percent.
    pub availability: u32,
}

/// One cinema with its rooms and the derived per-cinema numbers.
#[derive(Debug, Clone)]
pub struct CinemaSection {
    pub cinema: Cinema,
    pub total_rooms: usize,
    pub active_rooms: usize,
    pub availability: u32,
    pub rooms: Vec<Room>,
}

impl CinemaSection {
    /// Build a section from a cinema and its room list, computing the
    /// availability numbers.
    pub fn new(cinema: Cinema, rooms: Vec<Room>) -> Self {
        let total_rooms = rooms.len();
        let active_rooms = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Active)
            .count();
        Self {
            availability: availability_percent(active_rooms, total_rooms),
            cinema,
            total_rooms,
            active_rooms,
            rooms,
        }
    }
}

/// Everything a facility-wide report is rendered from.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    /// Human-readable generation timestamp for the header.
    pub generated_at: String,
    pub stats: ReportStats,
    pub cinemas: Vec<CinemaSection>,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub critical_equipment: Vec<Equipment>,
    pub low_stock: Vec<InventoryItem>,
}

/// A report generator producing a self-contained HTML document.
pub trait ReportFormat {
    fn name(&self) -> &'static str;

    /// Render the report to an HTML string.
    fn render(&self, data: &ReportData) -> Result<String, ReportError>;

    /// Render and write the report to `path`, creating parent directories.
    fn write_report(&self, data: &ReportData, path: &Path) -> Result<(), ReportError> {
        let html = self.render(data)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = fs::File::create(path)?;
        file.write_all(html.as_bytes())?;
        Ok(())
    }
}
