use std::fs;
use std::path::Path;

use marquee_facility::load_fixtures;
use marquee_facility::types::{EquipmentCategory, RoomStatus};
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_cinema_fixture() {
    let tmp = TempDir::new().unwrap();

    write_yaml(
        tmp.path(),
        "downtown.yaml",
        r#"
name: "Downtown 8"
location: "Downtown Mall"
rooms:
  - name: "Screen 1"
    status: active
    screen_type: "2D/3D"
    sound_system: "Dolby Atmos 7.1"
    seating:
      standard: 120
      premium: 24
      vip: 6
    lamp:
      model: CP2230
      current_hours: 1200
      max_hours: 2000
      replaced_at: 1700000000000
    equipment:
      - name: "Christie CP2230"
        description: "2K digital cinema projector"
        category: projection
        lumens: 4000
        lamp_hours: 1200
        max_lamp_hours: 2000
  - name: "Screen 2"
    status: maintenance
    status_reason: "Sound processor fault"
inventory:
  - name: "Xenon lamp 3kW"
    quantity: 4
    min_quantity: 2
    category: projection
"#,
    );

    let fixtures = load_fixtures(tmp.path()).unwrap();
    assert_eq!(fixtures.len(), 1);

    let cinema = &fixtures[0];
    assert_eq!(cinema.name, "Downtown 8");
    assert_eq!(cinema.rooms.len(), 2);
    assert_eq!(cinema.inventory.len(), 1);

    let screen1 = &cinema.rooms[0];
    assert_eq!(screen1.status, RoomStatus::Active);
    assert_eq!(screen1.seating.unwrap().total(), 150);
    assert_eq!(screen1.lamp.as_ref().unwrap().max_hours, 2000);
    assert_eq!(screen1.equipment.len(), 1);
    assert_eq!(
        screen1.equipment[0].category,
        EquipmentCategory::Projection
    );

    let screen2 = &cinema.rooms[1];
    assert_eq!(screen2.status, RoomStatus::Maintenance);
    assert_eq!(
        screen2.status_reason.as_deref(),
        Some("Sound processor fault")
    );
    assert!(screen2.lamp.is_none());
}

#[test]
fn fixtures_sorted_by_file_name() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "b-second.yaml", "name: Second\nlocation: B\n");
    write_yaml(tmp.path(), "a-first.yaml", "name: First\nlocation: A\n");
    // Non-YAML files are ignored
    write_yaml(tmp.path(), "notes.txt", "not yaml");

    let fixtures = load_fixtures(tmp.path()).unwrap();
    let names: Vec<_> = fixtures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn missing_directory_errors() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    assert!(load_fixtures(&missing).is_err());
}

#[test]
fn malformed_yaml_errors() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "bad.yaml", "name: [unclosed\n");
    assert!(load_fixtures(tmp.path()).is_err());
}
