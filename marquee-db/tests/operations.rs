use marquee_facility::alerts::PreventiveTier;
use marquee_facility::time::DAY_MS;
use marquee_facility::types::*;
use marquee_db::*;

const NOW: i64 = 1_700_000_000_000;

fn test_room(cinema_id: i64) -> Room {
    Room {
        id: 0,
        cinema_id,
        name: Some("Screen 1".to_string()),
        location: Some("Ground floor".to_string()),
        status: RoomStatus::Active,
        status_reason: None,
        screen_type: Some("2D/3D".to_string()),
        sound_system: Some("Dolby Atmos 7.1".to_string()),
        seating: Some(Seating {
            standard: 120,
            premium: 24,
            vip: 6,
        }),
        lamp: Some(ProjectorLamp {
            model: "CP2230".to_string(),
            current_hours: 1200,
            max_hours: 2000,
            replaced_at: NOW - 300 * DAY_MS,
        }),
        preventive: PreventiveSchedule {
            next_a: Some(NOW + 30 * DAY_MS),
            next_b: Some(NOW + 90 * DAY_MS),
            next_c: Some(NOW + 365 * DAY_MS),
            ..Default::default()
        },
        created_at: String::new(),
    }
}

fn test_equipment(room_id: i64, cinema_id: i64) -> Equipment {
    Equipment {
        id: 0,
        room_id,
        cinema_id,
        name: "Christie CP2230 Projector".to_string(),
        description: "2K DLP digital cinema projector".to_string(),
        category: EquipmentCategory::Projection,
        status: EquipmentStatus::Operational,
        ip_address: Some("10.0.1.20".to_string()),
        install_date: Some(NOW - 365 * DAY_MS),
        cost: Some(85_000.0),
        last_maintenance: None,
        next_maintenance: None,
        serial_number: Some("CP2230-001".to_string()),
        model: Some("CP2230".to_string()),
        manufacturer: Some("Christie".to_string()),
        lumens: Some(4000),
        resolution: Some("2K (2048x1080)".to_string()),
        lamp_hours: Some(1200),
        max_lamp_hours: Some(2000),
        channels: None,
        power: None,
        frequency: None,
        capacity_btu: None,
        temperature_range: None,
        mac_address: None,
        ip_range: None,
        port_count: None,
        created_at: String::new(),
    }
}

fn setup() -> (rusqlite::Connection, i64, i64) {
    let conn = open_memory().unwrap();
    let cinema_id = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let room_id = insert_room(&conn, &test_room(cinema_id)).unwrap();
    (conn, cinema_id, room_id)
}

#[test]
fn cinema_crud() {
    let conn = open_memory().unwrap();
    let id = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    assert!(id > 0);

    let cinema = get_cinema(&conn, id).unwrap().unwrap();
    assert_eq!(cinema.name, "Downtown 8");

    update_cinema(&conn, id, "Downtown 10", "Downtown Mall, Level 2").unwrap();
    let cinema = get_cinema(&conn, id).unwrap().unwrap();
    assert_eq!(cinema.name, "Downtown 10");
    assert_eq!(cinema.location, "Downtown Mall, Level 2");

    remove_cinema(&conn, id).unwrap();
    assert!(get_cinema(&conn, id).unwrap().is_none());

    // Removing again reports not-found
    assert!(matches!(
        remove_cinema(&conn, id),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn room_round_trip() {
    let (conn, cinema_id, room_id) = setup();

    let room = get_room(&conn, room_id).unwrap().unwrap();
    assert_eq!(room.cinema_id, cinema_id);
    assert_eq!(room.status, RoomStatus::Active);
    assert_eq!(room.seating.unwrap().total(), 150);
    let lamp = room.lamp.as_ref().unwrap();
    assert_eq!(lamp.model, "CP2230");
    assert_eq!(lamp.current_hours, 1200);
    assert_eq!(room.preventive.next_b, Some(NOW + 90 * DAY_MS));
}

#[test]
fn room_without_optional_groups() {
    let conn = open_memory().unwrap();
    let cinema_id = insert_cinema(&conn, "Riverside", "Riverside Center").unwrap();
    let mut room = test_room(cinema_id);
    room.seating = None;
    room.lamp = None;
    room.preventive = PreventiveSchedule::default();

    let id = insert_room(&conn, &room).unwrap();
    let loaded = get_room(&conn, id).unwrap().unwrap();
    assert!(loaded.seating.is_none());
    assert!(loaded.lamp.is_none());
    assert!(loaded.preventive.next_a.is_none());
}

#[test]
fn room_full_update() {
    let (conn, _cinema_id, room_id) = setup();

    let mut room = get_room(&conn, room_id).unwrap().unwrap();
    room.name = Some("Screen 1 IMAX".to_string());
    room.screen_type = Some("IMAX".to_string());
    room.lamp = None;
    update_room(&conn, &room).unwrap();

    let loaded = get_room(&conn, room_id).unwrap().unwrap();
    assert_eq!(loaded.name.as_deref(), Some("Screen 1 IMAX"));
    assert!(loaded.lamp.is_none());
}

#[test]
fn room_status_change() {
    let (conn, _, room_id) = setup();

    update_room_status(
        &conn,
        room_id,
        RoomStatus::Maintenance,
        Some("Sound processor fault"),
    )
    .unwrap();

    let room = get_room(&conn, room_id).unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Maintenance);
    assert_eq!(room.status_reason.as_deref(), Some("Sound processor fault"));
}

#[test]
fn lamp_hours_update() {
    let (conn, _, room_id) = setup();

    update_lamp_hours(&conn, room_id, 1750).unwrap();
    let room = get_room(&conn, room_id).unwrap().unwrap();
    assert_eq!(room.lamp.unwrap().current_hours, 1750);

    // Unknown room is an error
    assert!(update_lamp_hours(&conn, 9999, 100).is_err());
}

#[test]
fn lamp_hours_noop_without_lamp() {
    let (conn, cinema_id, _) = setup();
    let mut room = test_room(cinema_id);
    room.lamp = None;
    let bare_id = insert_room(&conn, &room).unwrap();

    // Room exists but has no lamp: accepted, nothing stored
    update_lamp_hours(&conn, bare_id, 500).unwrap();
    assert!(get_room(&conn, bare_id).unwrap().unwrap().lamp.is_none());
}

#[test]
fn lamp_replacement_resets_counter() {
    let (conn, _, room_id) = setup();

    replace_projector_lamp(&conn, room_id, Some("CDXL-30SD"), Some(2500), NOW).unwrap();

    let lamp = get_room(&conn, room_id).unwrap().unwrap().lamp.unwrap();
    assert_eq!(lamp.model, "CDXL-30SD");
    assert_eq!(lamp.current_hours, 0);
    assert_eq!(lamp.max_hours, 2500);
    assert_eq!(lamp.replaced_at, NOW);
}

#[test]
fn lamp_replacement_keeps_old_model_by_default() {
    let (conn, _, room_id) = setup();

    replace_projector_lamp(&conn, room_id, None, None, NOW).unwrap();

    let lamp = get_room(&conn, room_id).unwrap().unwrap().lamp.unwrap();
    assert_eq!(lamp.model, "CP2230");
    assert_eq!(lamp.max_hours, 2000);
    assert_eq!(lamp.current_hours, 0);
}

#[test]
fn preventive_recording_recomputes_next_date() {
    let (conn, _, room_id) = setup();

    let service_date = NOW + 5 * DAY_MS;
    record_preventive(&conn, room_id, PreventiveTier::B, service_date).unwrap();

    let room = get_room(&conn, room_id).unwrap().unwrap();
    assert_eq!(room.preventive.last_b, Some(service_date));
    assert_eq!(room.preventive.next_b, Some(service_date + 90 * DAY_MS));
    // Other tiers untouched
    assert_eq!(room.preventive.next_a, Some(NOW + 30 * DAY_MS));
    assert_eq!(room.preventive.last_a, None);
}

#[test]
fn equipment_crud() {
    let (conn, cinema_id, room_id) = setup();

    let id = insert_equipment(&conn, &test_equipment(room_id, cinema_id)).unwrap();
    let mut eq = get_equipment(&conn, id).unwrap().unwrap();
    assert_eq!(eq.category, EquipmentCategory::Projection);
    assert_eq!(eq.lumens, Some(4000));

    eq.status = EquipmentStatus::Maintenance;
    eq.next_maintenance = Some(NOW + 14 * DAY_MS);
    update_equipment(&conn, &eq).unwrap();

    let loaded = get_equipment(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.status, EquipmentStatus::Maintenance);
    assert_eq!(loaded.next_maintenance, Some(NOW + 14 * DAY_MS));

    remove_equipment(&conn, id).unwrap();
    assert!(get_equipment(&conn, id).unwrap().is_none());
}

#[test]
fn inventory_crud() {
    let (conn, cinema_id, _) = setup();

    let item = InventoryItem {
        id: 0,
        cinema_id,
        name: Some("Xenon lamp 3kW".to_string()),
        description: None,
        quantity: Some(4),
        category: Some("projection".to_string()),
        location: Some("Storage B".to_string()),
        min_quantity: Some(2),
        cost: Some(1800.0),
        supplier: Some("Osram".to_string()),
        notes: None,
        created_at: String::new(),
    };
    let id = insert_inventory_item(&conn, &item).unwrap();

    let mut loaded = get_inventory_item(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.quantity, Some(4));

    loaded.quantity = Some(1);
    update_inventory_item(&conn, &loaded).unwrap();
    assert_eq!(
        get_inventory_item(&conn, id).unwrap().unwrap().quantity,
        Some(1)
    );

    remove_inventory_item(&conn, id).unwrap();
    assert!(get_inventory_item(&conn, id).unwrap().is_none());
}

#[test]
fn task_crud_and_status() {
    let (conn, cinema_id, room_id) = setup();

    let task = Task {
        id: 0,
        cinema_id,
        room_id: Some(room_id),
        equipment_id: None,
        title: "Weekly cleaning".to_string(),
        description: "Seats and screen".to_string(),
        priority: TaskPriority::Medium,
        status: TaskStatus::Todo,
        assigned_to: Some("Alex".to_string()),
        due_date: Some(NOW + 7 * DAY_MS),
        category: TaskCategory::Cleaning,
        estimated_hours: Some(2.0),
        actual_hours: None,
        cost: None,
        created_at: String::new(),
    };
    let id = insert_task(&conn, &task).unwrap();

    update_task_status(&conn, id, TaskStatus::InProgress).unwrap();
    let loaded = get_task(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.status, TaskStatus::InProgress);
    assert_eq!(loaded.category, TaskCategory::Cleaning);

    remove_task(&conn, id).unwrap();
    assert!(matches!(
        update_task_status(&conn, id, TaskStatus::Done),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn event_crud_and_status() {
    let (conn, cinema_id, room_id) = setup();

    let event = Event {
        id: 0,
        cinema_id,
        room_id: Some(room_id),
        title: "Monthly preventive maintenance".to_string(),
        description: Some("General equipment check".to_string()),
        start_time: NOW + 3 * DAY_MS,
        end_time: NOW + 3 * DAY_MS + 4 * 60 * 60 * 1000,
        kind: EventKind::Preventive,
        status: EventStatus::Scheduled,
        assigned_to: None,
        priority: Some(TaskPriority::Medium),
        created_at: String::new(),
    };
    let id = insert_event(&conn, &event).unwrap();

    let loaded = get_event(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.kind, EventKind::Preventive);
    assert_eq!(loaded.priority, Some(TaskPriority::Medium));

    update_event_status(&conn, id, EventStatus::Completed).unwrap();
    assert_eq!(
        get_event(&conn, id).unwrap().unwrap().status,
        EventStatus::Completed
    );
}

#[test]
fn history_parts_round_trip() {
    let (conn, cinema_id, room_id) = setup();

    let entry = MaintenanceEntry {
        id: 0,
        room_id,
        cinema_id,
        date: NOW - DAY_MS,
        kind: MaintenanceKind::LampReplacement,
        description: "Replaced the xenon lamp".to_string(),
        technician: Some("Sam".to_string()),
        cost: Some(1800.0),
        notes: None,
        parts_used: vec!["Xenon lamp 3kW".to_string(), "Air filter".to_string()],
        created_at: String::new(),
    };
    let id = insert_history_entry(&conn, &entry).unwrap();

    let loaded = get_history_entry(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.kind, MaintenanceKind::LampReplacement);
    assert_eq!(loaded.parts_used.len(), 2);
    assert_eq!(loaded.parts_used[0], "Xenon lamp 3kW");

    // Empty parts lists come back empty, not as a parse error
    let bare = MaintenanceEntry {
        parts_used: vec![],
        ..entry
    };
    let bare_id = insert_history_entry(&conn, &bare).unwrap();
    assert!(get_history_entry(&conn, bare_id)
        .unwrap()
        .unwrap()
        .parts_used
        .is_empty());
}

#[test]
fn record_lifecycle() {
    let (conn, cinema_id, room_id) = setup();

    let record = MaintenanceRecord {
        id: 0,
        cinema_id,
        room_id,
        equipment_id: None,
        task_id: None,
        kind: RecordKind::Corrective,
        category: RecordCategory::Sound,
        description: "Amplifier channel dropout".to_string(),
        start_time: NOW,
        end_time: None,
        status: EventStatus::InProgress,
        technician: Some("Sam".to_string()),
        cost: None,
        downtime_minutes: Some(45),
        notes: None,
        parts_used: vec![],
        created_at: String::new(),
    };
    let id = insert_record(&conn, &record).unwrap();

    update_record_status(&conn, id, EventStatus::Completed).unwrap();
    let loaded = get_record(&conn, id).unwrap().unwrap();
    assert_eq!(loaded.status, EventStatus::Completed);
    assert_eq!(loaded.downtime_minutes, Some(45));
}

#[test]
fn impact_resolution() {
    let (conn, cinema_id, room_id) = setup();

    let impact = SessionImpact {
        id: 0,
        cinema_id,
        room_id,
        date: NOW,
        session_time: "19:30".to_string(),
        movie_title: Some("Metropolis".to_string()),
        impact: ImpactKind::Delayed,
        cause: ImpactCause::Projection,
        description: "Projector failed to strike the lamp".to_string(),
        delay_minutes: Some(20),
        affected_customers: Some(85),
        refund_amount: None,
        resolved: false,
        resolution_time: None,
        created_at: String::new(),
    };
    let id = insert_impact(&conn, &impact).unwrap();

    resolve_impact(&conn, id, NOW + 30 * 60 * 1000).unwrap();
    let loaded = get_impact(&conn, id).unwrap().unwrap();
    assert!(loaded.resolved);
    assert_eq!(loaded.resolution_time, Some(NOW + 30 * 60 * 1000));
}

#[test]
fn settings_upsert() {
    let conn = open_memory().unwrap();

    set_setting(&conn, "report.default_mode", "summary").unwrap();
    set_setting(&conn, "report.default_mode", "complete").unwrap();
    assert_eq!(
        get_setting(&conn, "report.default_mode").unwrap().as_deref(),
        Some("complete")
    );

    remove_setting(&conn, "report.default_mode").unwrap();
    assert!(get_setting(&conn, "report.default_mode").unwrap().is_none());
    assert!(remove_setting(&conn, "report.default_mode").is_err());
}

#[test]
fn clear_all_data_empties_every_table() {
    let (conn, cinema_id, room_id) = setup();
    insert_equipment(&conn, &test_equipment(room_id, cinema_id)).unwrap();
    set_setting(&conn, "k", "v").unwrap();

    clear_all_data(&conn).unwrap();

    for table in ["cinemas", "rooms", "equipment", "settings"] {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0, "table '{}' should be empty", table);
    }
}
