use marquee_report::{FacilityReport, PrintReport, ReportData, ReportFormat, ReportMode};
use tempfile::TempDir;

#[test]
fn write_report_creates_parent_dirs() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reports").join("facility.html");

    let data = ReportData {
        generated_at: "2024-03-15 10:00".to_string(),
        ..Default::default()
    };
    FacilityReport::new(ReportMode::Summary)
        .write_report(&data, &path)
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<!DOCTYPE html>"));
    assert!(contents.contains("Cinema Facility Report"));
}

#[test]
fn print_report_writes_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("print.html");

    let data = ReportData {
        generated_at: "2024-03-15 10:00".to_string(),
        ..Default::default()
    };
    PrintReport::new().write_report(&data, &path).unwrap();
    assert!(path.exists());
}
