//! Database seeding: built-in demo data and YAML fixtures.

use marquee_facility::time::DAY_MS;
use marquee_facility::types::*;
use marquee_facility::yaml::CinemaFixture;
use rusqlite::Connection;

use crate::operations::{
    insert_cinema, insert_equipment, insert_event, insert_inventory_item, insert_room,
    insert_task, OperationError,
};

/// Per-entity insert counts from a seeding run.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub cinemas: usize,
    pub rooms: usize,
    pub equipment: usize,
    pub inventory: usize,
    pub tasks: usize,
    pub events: usize,
}

fn blank_room(cinema_id: i64) -> Room {
    Room {
        id: 0,
        cinema_id,
        name: None,
        location: None,
        status: RoomStatus::Active,
        status_reason: None,
        screen_type: None,
        sound_system: None,
        seating: None,
        lamp: None,
        preventive: PreventiveSchedule::default(),
        created_at: String::new(),
    }
}

fn blank_equipment(room_id: i64, cinema_id: i64, name: &str, description: &str) -> Equipment {
    Equipment {
        id: 0,
        room_id,
        cinema_id,
        name: name.to_string(),
        description: description.to_string(),
        category: EquipmentCategory::Other,
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

fn fresh_preventive(now: i64) -> PreventiveSchedule {
    PreventiveSchedule {
        next_a: Some(now + 30 * DAY_MS),
        next_b: Some(now + 90 * DAY_MS),
        next_c: Some(now + 365 * DAY_MS),
        ..Default::default()
    }
}

/// Insert the built-in demo data set: three cinemas, seven rooms, sample
/// equipment for the first screen, two tasks, and a scheduled event.
pub fn seed_demo(conn: &Connection, now: i64) -> Result<SeedStats, OperationError> {
    let mut stats = SeedStats::default();

    let downtown = insert_cinema(conn, "Downtown 8", "Downtown Mall")?;
    let riverside = insert_cinema(conn, "Riverside", "Riverside Shopping Center")?;
    let grand_plaza = insert_cinema(conn, "Grand Plaza", "Grand Plaza Mall")?;
    stats.cinemas = 3;

    let screen = |cinema_id: i64,
                      name: &str,
                      status: RoomStatus,
                      screen_type: &str,
                      sound: &str,
                      seats: Seating|
     -> Result<i64, OperationError> {
        let mut room = blank_room(cinema_id);
        room.name = Some(name.to_string());
        room.status = status;
        room.screen_type = Some(screen_type.to_string());
        room.sound_system = Some(sound.to_string());
        room.seating = Some(seats);
        room.preventive = fresh_preventive(now);
        insert_room(conn, &room)
    };

    let seats = |standard: u32, premium: u32, vip: u32| Seating {
        standard,
        premium,
        vip,
    };

    let screen1 = screen(
        downtown,
        "Screen 1",
        RoomStatus::Active,
        "2D/3D",
        "Dolby Atmos 7.1",
        seats(120, 24, 6),
    )?;
    let screen2 = screen(
        downtown,
        "Screen 2",
        RoomStatus::Active,
        "2D/3D",
        "Dolby Atmos 7.1",
        seats(96, 18, 6),
    )?;
    let screen3 = screen(
        downtown,
        "Screen 3",
        RoomStatus::Maintenance,
        "IMAX",
        "IMAX Sound System",
        seats(160, 30, 10),
    )?;
    screen(
        riverside,
        "Screen 1",
        RoomStatus::Active,
        "2D/3D",
        "Dolby Digital 5.1",
        seats(80, 16, 4),
    )?;
    screen(
        riverside,
        "Screen 2",
        RoomStatus::Active,
        "2D",
        "Dolby Digital 5.1",
        seats(66, 10, 4),
    )?;
    screen(
        grand_plaza,
        "Screen 1",
        RoomStatus::Active,
        "2D/3D/4DX",
        "Dolby Atmos 9.1",
        seats(140, 30, 10),
    )?;
    screen(
        grand_plaza,
        "Screen 2",
        RoomStatus::Stopped,
        "2D",
        "Dolby Digital 5.1",
        seats(74, 12, 4),
    )?;
    stats.rooms = 7;

    let year_ago = now - 365 * DAY_MS;

    let mut projector = blank_equipment(
        screen1,
        downtown,
        "Christie CP2230 Projector",
        "2K DLP digital cinema projector",
    );
    projector.category = EquipmentCategory::Projection;
    projector.serial_number = Some("CP2230-001".to_string());
    projector.model = Some("CP2230".to_string());
    projector.manufacturer = Some("Christie".to_string());
    projector.lumens = Some(4000);
    projector.resolution = Some("2K (2048x1080)".to_string());
    projector.lamp_hours = Some(1200);
    projector.max_lamp_hours = Some(2000);
    projector.install_date = Some(year_ago);
    projector.cost = Some(85_000.0);
    insert_equipment(conn, &projector)?;

    let mut processor = blank_equipment(
        screen1,
        downtown,
        "Dolby CP750 Sound Processor",
        "Digital audio processor for Dolby Atmos",
    );
    processor.category = EquipmentCategory::Sound;
    processor.serial_number = Some("CP750-001".to_string());
    processor.model = Some("CP750".to_string());
    processor.manufacturer = Some("Dolby".to_string());
    processor.channels = Some(16);
    processor.power = Some(1000);
    processor.frequency = Some("20Hz - 20kHz".to_string());
    processor.install_date = Some(year_ago);
    processor.cost = Some(25_000.0);
    insert_equipment(conn, &processor)?;

    let mut hvac = blank_equipment(
        screen1,
        downtown,
        "Central Air Conditioning",
        "Central climate system for the auditorium",
    );
    hvac.category = EquipmentCategory::Climate;
    hvac.serial_number = Some("AC-001".to_string());
    hvac.model = Some("VRF-60".to_string());
    hvac.manufacturer = Some("Carrier".to_string());
    hvac.capacity_btu = Some(60_000);
    hvac.temperature_range = Some("18°C - 24°C".to_string());
    hvac.install_date = Some(year_ago);
    hvac.cost = Some(15_000.0);
    insert_equipment(conn, &hvac)?;
    stats.equipment = 3;

    insert_task(
        conn,
        &Task {
            id: 0,
            cinema_id: downtown,
            room_id: Some(screen1),
            equipment_id: None,
            title: "Weekly auditorium cleaning".to_string(),
            description: "Full cleaning of the room including seats and screen".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            assigned_to: None,
            due_date: Some(now + 7 * DAY_MS),
            category: TaskCategory::Cleaning,
            estimated_hours: Some(2.0),
            actual_hours: None,
            cost: None,
            created_at: String::new(),
        },
    )?;
    insert_task(
        conn,
        &Task {
            id: 0,
            cinema_id: downtown,
            room_id: Some(screen3),
            equipment_id: None,
            title: "Projector preventive maintenance".to_string(),
            description: "Inspection and cleaning of the IMAX projection system".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            assigned_to: None,
            due_date: Some(now + 2 * DAY_MS),
            category: TaskCategory::PreventiveA,
            estimated_hours: Some(4.0),
            actual_hours: None,
            cost: None,
            created_at: String::new(),
        },
    )?;
    stats.tasks = 2;

    insert_event(
        conn,
        &Event {
            id: 0,
            cinema_id: downtown,
            room_id: Some(screen2),
            title: "Monthly preventive maintenance".to_string(),
            description: Some("General equipment check".to_string()),
            start_time: now + 3 * DAY_MS,
            end_time: now + 3 * DAY_MS + 4 * 60 * 60 * 1000,
            kind: EventKind::Preventive,
            status: EventStatus::Scheduled,
            assigned_to: None,
            priority: Some(TaskPriority::Medium),
            created_at: String::new(),
        },
    )?;
    stats.events = 1;

    Ok(stats)
}

/// Insert loaded YAML fixtures: each cinema with its nested rooms,
/// equipment, and inventory.
pub fn seed_from_fixtures(
    conn: &Connection,
    fixtures: &[CinemaFixture],
) -> Result<SeedStats, OperationError> {
    let mut stats = SeedStats::default();

    for fixture in fixtures {
        let cinema_id = insert_cinema(conn, &fixture.name, &fixture.location)?;
        stats.cinemas += 1;

        for room_fixture in &fixture.rooms {
            let room = Room {
                id: 0,
                cinema_id,
                name: room_fixture.name.clone(),
                location: room_fixture.location.clone(),
                status: room_fixture.status,
                status_reason: room_fixture.status_reason.clone(),
                screen_type: room_fixture.screen_type.clone(),
                sound_system: room_fixture.sound_system.clone(),
                seating: room_fixture.seating,
                lamp: room_fixture.lamp.clone(),
                preventive: room_fixture.preventive,
                created_at: String::new(),
            };
            let room_id = insert_room(conn, &room)?;
            stats.rooms += 1;

            for eq_fixture in &room_fixture.equipment {
                let mut eq = blank_equipment(
                    room_id,
                    cinema_id,
                    &eq_fixture.name,
                    &eq_fixture.description,
                );
                eq.category = eq_fixture.category;
                eq.status = eq_fixture.status;
                eq.ip_address = eq_fixture.ip_address.clone();
                eq.install_date = eq_fixture.install_date;
                eq.cost = eq_fixture.cost;
                eq.next_maintenance = eq_fixture.next_maintenance;
                eq.serial_number = eq_fixture.serial_number.clone();
                eq.model = eq_fixture.model.clone();
                eq.manufacturer = eq_fixture.manufacturer.clone();
                eq.lumens = eq_fixture.lumens;
                eq.resolution = eq_fixture.resolution.clone();
                eq.lamp_hours = eq_fixture.lamp_hours;
                eq.max_lamp_hours = eq_fixture.max_lamp_hours;
                eq.channels = eq_fixture.channels;
                eq.power = eq_fixture.power;
                eq.frequency = eq_fixture.frequency.clone();
                eq.capacity_btu = eq_fixture.capacity_btu;
                eq.temperature_range = eq_fixture.temperature_range.clone();
                eq.mac_address = eq_fixture.mac_address.clone();
                eq.ip_range = eq_fixture.ip_range.clone();
                eq.port_count = eq_fixture.port_count;
                insert_equipment(conn, &eq)?;
                stats.equipment += 1;
            }
        }

        for item_fixture in &fixture.inventory {
            let item = InventoryItem {
                id: 0,
                cinema_id,
                name: Some(item_fixture.name.clone()),
                description: item_fixture.description.clone(),
                quantity: item_fixture.quantity,
                category: item_fixture.category.clone(),
                location: item_fixture.location.clone(),
                min_quantity: item_fixture.min_quantity,
                cost: item_fixture.cost,
                supplier: item_fixture.supplier.clone(),
                notes: item_fixture.notes.clone(),
                created_at: String::new(),
            };
            insert_inventory_item(conn, &item)?;
            stats.inventory += 1;
        }
    }

    Ok(stats)
}
