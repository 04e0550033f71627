use marquee_facility::alerts::*;
use marquee_facility::time::DAY_MS;
use marquee_facility::types::*;

fn base_room() -> Room {
    Room {
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
    }
}

fn base_equipment() -> Equipment {
    Equipment {
        id: 1,
        room_id: 1,
        cinema_id: 1,
        name: "Projector".to_string(),
        description: "Main projector".to_string(),
        category: EquipmentCategory::Projection,
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

#[test]
fn preventive_tier_intervals() {
    assert_eq!(PreventiveTier::A.interval_days(), 30);
    assert_eq!(PreventiveTier::B.interval_days(), 90);
    assert_eq!(PreventiveTier::C.interval_days(), 365);
    assert_eq!(PreventiveTier::A.next_due(1_000), 1_000 + 30 * DAY_MS);
    assert_eq!("b".parse::<PreventiveTier>().unwrap(), PreventiveTier::B);
    assert!("D".parse::<PreventiveTier>().is_err());
}

#[test]
fn lamp_alert_tiers() {
    let now = 1_700_000_000_000;
    let mut room = base_room();

    // No lamp, no alerts
    assert!(room_alerts(&room, now).is_empty());

    // 75% — below the warning threshold
    room.lamp = Some(ProjectorLamp {
        model: "CP2230".to_string(),
        current_hours: 1500,
        max_hours: 2000,
        replaced_at: 0,
    });
    assert!(room_alerts(&room, now).is_empty());

    // 80% — warning
    room.lamp.as_mut().unwrap().current_hours = 1600;
    let alerts = room_alerts(&room, now);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Warning);

    // 90% — critical
    room.lamp.as_mut().unwrap().current_hours = 1800;
    let alerts = room_alerts(&room, now);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Critical);
}

#[test]
fn overdue_preventive_is_critical() {
    let now = 1_700_000_000_000;
    let mut room = base_room();
    room.preventive.next_b = Some(now - 3 * DAY_MS);

    assert!(preventive_overdue(&room, now));
    let alerts = room_alerts(&room, now);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Critical);
    assert!(alerts[0].message.contains("overdue by 3 day(s)"));

    // A future due date clears the flag
    room.preventive.next_b = Some(now + DAY_MS);
    assert!(!preventive_overdue(&room, now));
    assert!(room_alerts(&room, now).is_empty());
}

#[test]
fn equipment_attention_by_due_date() {
    let now = 1_700_000_000_000;
    let mut eq = base_equipment();
    assert!(!equipment_needs_attention(&eq, now));

    eq.next_maintenance = Some(now + 10 * DAY_MS);
    assert!(equipment_needs_attention(&eq, now));

    eq.next_maintenance = Some(now + 45 * DAY_MS);
    assert!(!equipment_needs_attention(&eq, now));
}

#[test]
fn equipment_attention_by_status() {
    let now = 1_700_000_000_000;
    let mut eq = base_equipment();
    eq.status = EquipmentStatus::Replacement;
    assert!(equipment_needs_attention(&eq, now));
    eq.status = EquipmentStatus::Maintenance;
    assert!(equipment_needs_attention(&eq, now));
}

#[test]
fn equipment_attention_by_lamp_wear() {
    let now = 1_700_000_000_000;
    let mut eq = base_equipment();
    eq.lamp_hours = Some(1600);
    eq.max_lamp_hours = Some(2000);
    assert!(equipment_needs_attention(&eq, now));

    // Same wear on a non-projection category does not count
    eq.category = EquipmentCategory::Sound;
    assert!(!equipment_needs_attention(&eq, now));
}

#[test]
fn low_stock_requires_both_quantities() {
    let mut item = InventoryItem {
        id: 1,
        cinema_id: 1,
        name: Some("Xenon lamp".to_string()),
        description: None,
        quantity: Some(2),
        category: None,
        location: None,
        min_quantity: Some(2),
        cost: None,
        supplier: None,
        notes: None,
        created_at: String::new(),
    };
    assert!(is_low_stock(&item));

    item.quantity = Some(3);
    assert!(!is_low_stock(&item));

    item.min_quantity = None;
    assert!(!is_low_stock(&item));
}

#[test]
fn availability_rounding() {
    assert_eq!(availability_percent(0, 0), 0);
    assert_eq!(availability_percent(2, 3), 67);
    assert_eq!(availability_percent(7, 7), 100);
}
