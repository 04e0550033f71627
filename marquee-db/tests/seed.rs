use marquee_facility::time::DAY_MS;
use marquee_facility::types::*;
use marquee_facility::yaml::{CinemaFixture, EquipmentFixture, InventoryFixture, RoomFixture};
use marquee_db::*;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn demo_seed_counts() {
    let conn = open_memory().unwrap();
    let stats = seed_demo(&conn, NOW).unwrap();

    assert_eq!(stats.cinemas, 3);
    assert_eq!(stats.rooms, 7);
    assert_eq!(stats.equipment, 3);
    assert_eq!(stats.tasks, 2);
    assert_eq!(stats.events, 1);

    let cinemas = list_cinemas(&conn).unwrap();
    assert_eq!(cinemas.len(), 3);
}

#[test]
fn demo_seed_preventive_dates() {
    let conn = open_memory().unwrap();
    seed_demo(&conn, NOW).unwrap();

    for room in list_rooms(&conn).unwrap() {
        assert_eq!(room.preventive.next_a, Some(NOW + 30 * DAY_MS));
        assert_eq!(room.preventive.next_b, Some(NOW + 90 * DAY_MS));
        assert_eq!(room.preventive.next_c, Some(NOW + 365 * DAY_MS));
    }
}

#[test]
fn demo_seed_room_statuses() {
    let conn = open_memory().unwrap();
    seed_demo(&conn, NOW).unwrap();

    let rooms = list_rooms(&conn).unwrap();
    let active = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Active)
        .count();
    let maintenance = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Maintenance)
        .count();
    let stopped = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Stopped)
        .count();
    assert_eq!((active, maintenance, stopped), (5, 1, 1));
}

#[test]
fn fixture_seed_inserts_nested_entities() {
    let conn = open_memory().unwrap();

    let fixture = CinemaFixture {
        name: "Downtown 8".to_string(),
        location: "Downtown Mall".to_string(),
        rooms: vec![RoomFixture {
            name: Some("Screen 1".to_string()),
            location: None,
            status: RoomStatus::Active,
            status_reason: None,
            screen_type: Some("2D/3D".to_string()),
            sound_system: None,
            seating: Some(Seating {
                standard: 100,
                premium: 20,
                vip: 4,
            }),
            lamp: None,
            preventive: PreventiveSchedule::default(),
            equipment: vec![EquipmentFixture {
                name: "Christie CP2230".to_string(),
                description: "2K projector".to_string(),
                category: EquipmentCategory::Projection,
                status: EquipmentStatus::Operational,
                ip_address: None,
                install_date: None,
                cost: Some(85_000.0),
                next_maintenance: None,
                serial_number: None,
                model: Some("CP2230".to_string()),
                manufacturer: Some("Christie".to_string()),
                lumens: Some(4000),
                resolution: None,
                lamp_hours: Some(100),
                max_lamp_hours: Some(2000),
                channels: None,
                power: None,
                frequency: None,
                capacity_btu: None,
                temperature_range: None,
                mac_address: None,
                ip_range: None,
                port_count: None,
            }],
        }],
        inventory: vec![InventoryFixture {
            name: "Xenon lamp 3kW".to_string(),
            description: None,
            quantity: Some(4),
            category: Some("projection".to_string()),
            location: None,
            min_quantity: Some(2),
            cost: None,
            supplier: None,
            notes: None,
        }],
    };

    let stats = seed_from_fixtures(&conn, &[fixture]).unwrap();
    assert_eq!(stats.cinemas, 1);
    assert_eq!(stats.rooms, 1);
    assert_eq!(stats.equipment, 1);
    assert_eq!(stats.inventory, 1);

    let cinema = &list_cinemas(&conn).unwrap()[0];
    let rooms = rooms_for_cinema(&conn, cinema.id).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].seating.unwrap().total(), 124);

    let gear = equipment_for_room(&conn, rooms[0].id).unwrap();
    assert_eq!(gear.len(), 1);
    assert_eq!(gear[0].category, EquipmentCategory::Projection);

    let items = inventory_for_cinema(&conn, cinema.id).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].min_quantity, Some(2));
}
