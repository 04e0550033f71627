use marquee_facility::time::DAY_MS;
use marquee_facility::types::*;
use marquee_db::*;

const NOW: i64 = 1_700_000_000_000;

fn room(cinema_id: i64, name: &str, status: RoomStatus) -> Room {
    Room {
        id: 0,
        cinema_id,
        name: Some(name.to_string()),
        location: None,
        status,
        status_reason: None,
        screen_type: None,
        sound_system: None,
        seating: None,
        lamp: None,
        preventive: PreventiveSchedule::default(),
        created_at: String::new(),
    }
}

fn equipment(
    room_id: i64,
    cinema_id: i64,
    name: &str,
    category: EquipmentCategory,
) -> Equipment {
    Equipment {
        id: 0,
        room_id,
        cinema_id,
        name: name.to_string(),
        description: String::from("test gear"),
        category,
        status: EquipmentStatus::Operational,
        ip_address: None,
        install_date: None,
        cost: None,
        last_maintenance: None,
        next_maintenance: None,
        serial_number: None,
        model: None,
        manufacturer: None,
        lumens: None,
        resolution: None,
        lamp_hours: None,
        max_lamp_hours: None,
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

fn item(cinema_id: i64, name: &str, quantity: i64, min: i64) -> InventoryItem {
    InventoryItem {
        id: 0,
        cinema_id,
        name: Some(name.to_string()),
        description: None,
        quantity: Some(quantity),
        category: None,
        location: None,
        min_quantity: Some(min),
        cost: None,
        supplier: None,
        notes: None,
        created_at: String::new(),
    }
}

fn task(cinema_id: i64, room_id: Option<i64>, title: &str) -> Task {
    Task {
        id: 0,
        cinema_id,
        room_id,
        equipment_id: None,
        title: title.to_string(),
        description: String::from("test task"),
        priority: TaskPriority::Medium,
        status: TaskStatus::Todo,
        assigned_to: None,
        due_date: None,
        category: TaskCategory::Maintenance,
        estimated_hours: None,
        actual_hours: None,
        cost: None,
        created_at: String::new(),
    }
}

#[test]
fn rooms_scoped_by_cinema() {
    let conn = open_memory().unwrap();
    let a = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let b = insert_cinema(&conn, "Riverside", "Riverside Center").unwrap();
    insert_room(&conn, &room(a, "Screen 1", RoomStatus::Active)).unwrap();
    insert_room(&conn, &room(a, "Screen 2", RoomStatus::Stopped)).unwrap();
    insert_room(&conn, &room(b, "Screen 1", RoomStatus::Active)).unwrap();

    assert_eq!(rooms_for_cinema(&conn, a).unwrap().len(), 2);
    assert_eq!(rooms_for_cinema(&conn, b).unwrap().len(), 1);
    assert_eq!(list_rooms(&conn).unwrap().len(), 3);
}

#[test]
fn critical_equipment_selection() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let other = insert_cinema(&conn, "Riverside", "Riverside Center").unwrap();
    let r1 = insert_room(&conn, &room(cinema, "Screen 1", RoomStatus::Active)).unwrap();
    let r2 = insert_room(&conn, &room(other, "Screen 1", RoomStatus::Active)).unwrap();

    // Healthy: no flags
    insert_equipment(
        &conn,
        &equipment(r1, cinema, "Healthy amp", EquipmentCategory::Sound),
    )
    .unwrap();

    // Due within 30 days
    let mut due = equipment(r1, cinema, "HVAC due", EquipmentCategory::Climate);
    due.next_maintenance = Some(NOW + 10 * DAY_MS);
    insert_equipment(&conn, &due).unwrap();

    // Non-operational status
    let mut broken = equipment(r1, cinema, "Broken switch", EquipmentCategory::Network);
    broken.status = EquipmentStatus::Replacement;
    insert_equipment(&conn, &broken).unwrap();

    // Worn projection lamp, in the other cinema
    let mut worn = equipment(r2, other, "Worn projector", EquipmentCategory::Projection);
    worn.lamp_hours = Some(1700);
    worn.max_lamp_hours = Some(2000);
    insert_equipment(&conn, &worn).unwrap();

    let all = critical_equipment(&conn, None, NOW).unwrap();
    assert_eq!(all.len(), 3);

    let scoped = critical_equipment(&conn, Some(cinema), NOW).unwrap();
    let names: Vec<_> = scoped.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"HVAC due"));
    assert!(names.contains(&"Broken switch"));
}

#[test]
fn low_stock_listing() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    insert_inventory_item(&conn, &item(cinema, "Xenon lamp", 1, 2)).unwrap();
    insert_inventory_item(&conn, &item(cinema, "Air filter", 10, 2)).unwrap();

    // Item without a minimum never flags
    let mut no_min = item(cinema, "Popcorn bags", 0, 0);
    no_min.min_quantity = None;
    insert_inventory_item(&conn, &no_min).unwrap();

    let low = low_stock_items(&conn, cinema).unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name.as_deref(), Some("Xenon lamp"));
}

#[test]
fn task_filters() {
    let conn = open_memory().unwrap();
    let a = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let b = insert_cinema(&conn, "Riverside", "Riverside Center").unwrap();
    let r1 = insert_room(&conn, &room(a, "Screen 1", RoomStatus::Active)).unwrap();

    let t1 = insert_task(&conn, &task(a, Some(r1), "Clean screen")).unwrap();
    let mut urgent = task(a, None, "Fix amp");
    urgent.priority = TaskPriority::High;
    insert_task(&conn, &urgent).unwrap();
    insert_task(&conn, &task(b, None, "Check HVAC")).unwrap();

    update_task_status(&conn, t1, TaskStatus::Done).unwrap();

    let all = list_tasks(&conn, TaskFilter::default()).unwrap();
    assert_eq!(all.len(), 3);

    let for_a = list_tasks(
        &conn,
        TaskFilter {
            cinema_id: Some(a),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(for_a.len(), 2);

    let done = list_tasks(
        &conn,
        TaskFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "Clean screen");

    let high = list_tasks(
        &conn,
        TaskFilter {
            cinema_id: Some(a),
            priority: Some(TaskPriority::High),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].title, "Fix amp");

    let by_room = list_tasks(
        &conn,
        TaskFilter {
            room_id: Some(r1),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(by_room.len(), 1);
    assert_eq!(tasks_for_room(&conn, r1).unwrap().len(), 1);
}

#[test]
fn events_window() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();

    let mut event = Event {
        id: 0,
        cinema_id: cinema,
        room_id: None,
        title: "Early".to_string(),
        description: None,
        start_time: NOW + DAY_MS,
        end_time: NOW + DAY_MS + 3_600_000,
        kind: EventKind::Inspection,
        status: EventStatus::Scheduled,
        assigned_to: None,
        priority: None,
        created_at: String::new(),
    };
    insert_event(&conn, &event).unwrap();

    event.title = "Late".to_string();
    event.start_time = NOW + 20 * DAY_MS;
    event.end_time = NOW + 20 * DAY_MS + 3_600_000;
    insert_event(&conn, &event).unwrap();

    let this_week = events_in_window(&conn, NOW, NOW + 7 * DAY_MS).unwrap();
    assert_eq!(this_week.len(), 1);
    assert_eq!(this_week[0].title, "Early");
    assert_eq!(events_for_cinema(&conn, cinema).unwrap().len(), 2);
}

#[test]
fn history_ordering_and_stats() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let r = insert_room(&conn, &room(cinema, "Screen 1", RoomStatus::Active)).unwrap();

    let entry = |date: i64, kind: MaintenanceKind, cost: Option<f64>| MaintenanceEntry {
        id: 0,
        room_id: r,
        cinema_id: cinema,
        date,
        kind,
        description: String::from("work"),
        technician: None,
        cost,
        notes: None,
        parts_used: vec![],
        created_at: String::new(),
    };

    insert_history_entry(
        &conn,
        &entry(NOW - 100 * DAY_MS, MaintenanceKind::PreventiveB, Some(400.0)),
    )
    .unwrap();
    insert_history_entry(
        &conn,
        &entry(NOW - 10 * DAY_MS, MaintenanceKind::PreventiveA, Some(150.0)),
    )
    .unwrap();
    insert_history_entry(
        &conn,
        &entry(NOW - 2 * DAY_MS, MaintenanceKind::LampReplacement, Some(1800.0)),
    )
    .unwrap();
    insert_history_entry(&conn, &entry(NOW - DAY_MS, MaintenanceKind::Corrective, None))
        .unwrap();

    // Newest first
    let entries = history_for_room(&conn, r).unwrap();
    assert_eq!(entries[0].kind, MaintenanceKind::Corrective);
    assert_eq!(entries.len(), 4);

    let stats = maintenance_stats(&conn, cinema, None).unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.preventive_a, 1);
    assert_eq!(stats.preventive_b, 1);
    assert_eq!(stats.lamp_replacements, 1);
    assert_eq!(stats.corrective, 1);
    assert!((stats.total_cost - 2350.0).abs() < f64::EPSILON);

    // A 30-day window drops the preventive B entry
    let recent = maintenance_stats(&conn, cinema, Some(NOW - 30 * DAY_MS)).unwrap();
    assert_eq!(recent.total, 3);
    assert_eq!(recent.preventive_b, 0);
    assert!((recent.total_cost - 1950.0).abs() < f64::EPSILON);
}

#[test]
fn unresolved_impacts_listing() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let r = insert_room(&conn, &room(cinema, "Screen 1", RoomStatus::Active)).unwrap();

    let impact = SessionImpact {
        id: 0,
        cinema_id: cinema,
        room_id: r,
        date: NOW,
        session_time: "19:30".to_string(),
        movie_title: None,
        impact: ImpactKind::Interrupted,
        cause: ImpactCause::Electrical,
        description: "Power dip mid-feature".to_string(),
        delay_minutes: Some(12),
        affected_customers: None,
        refund_amount: None,
        resolved: false,
        resolution_time: None,
        created_at: String::new(),
    };
    let first = insert_impact(&conn, &impact).unwrap();
    insert_impact(&conn, &impact).unwrap();

    resolve_impact(&conn, first, NOW + 3_600_000).unwrap();

    assert_eq!(unresolved_impacts(&conn, None).unwrap().len(), 1);
    assert_eq!(unresolved_impacts(&conn, Some(cinema)).unwrap().len(), 1);
    assert_eq!(impacts_for_cinema(&conn, cinema).unwrap().len(), 2);
}

#[test]
fn rooms_overdue_listing() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();

    let mut overdue = room(cinema, "Screen 1", RoomStatus::Active);
    overdue.preventive.next_a = Some(NOW - DAY_MS);
    insert_room(&conn, &overdue).unwrap();

    let mut fine = room(cinema, "Screen 2", RoomStatus::Active);
    fine.preventive.next_a = Some(NOW + DAY_MS);
    insert_room(&conn, &fine).unwrap();

    let rooms = rooms_overdue_preventive(&conn, NOW).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name.as_deref(), Some("Screen 1"));
}

#[test]
fn dashboard_stats() {
    let conn = open_memory().unwrap();
    let cinema = insert_cinema(&conn, "Downtown 8", "Downtown Mall").unwrap();
    let r1 = insert_room(&conn, &room(cinema, "Screen 1", RoomStatus::Active)).unwrap();
    insert_room(&conn, &room(cinema, "Screen 2", RoomStatus::Active)).unwrap();
    insert_room(&conn, &room(cinema, "Screen 3", RoomStatus::Maintenance)).unwrap();

    let mut flagged = equipment(r1, cinema, "Worn projector", EquipmentCategory::Projection);
    flagged.lamp_hours = Some(1900);
    flagged.max_lamp_hours = Some(2000);
    insert_equipment(&conn, &flagged).unwrap();

    insert_task(&conn, &task(cinema, None, "Open task")).unwrap();
    insert_inventory_item(&conn, &item(cinema, "Xenon lamp", 0, 2)).unwrap();

    let stats = facility_stats(&conn, NOW).unwrap();
    assert_eq!(stats.cinemas, 1);
    assert_eq!(stats.rooms, 3);
    assert_eq!(stats.active_rooms, 2);
    assert_eq!(stats.availability, 67);
    assert_eq!(stats.equipment, 1);
    assert_eq!(stats.critical_equipment, 1);
    assert_eq!(stats.open_tasks, 1);
    assert_eq!(stats.upcoming_events, 0);
    assert_eq!(stats.low_stock_items, 1);
}
