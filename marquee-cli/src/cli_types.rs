//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use marquee_facility::alerts::PreventiveTier;
use marquee_facility::types::{
    EquipmentCategory, EquipmentStatus, EventKind, EventStatus, ImpactCause, ImpactKind,
    MaintenanceKind, RecordCategory, RecordKind, RoomStatus, TaskCategory, TaskPriority,
    TaskStatus,
};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Manage cinemas, rooms, equipment, and maintenance", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to the configured or platform data path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Manage cinema complexes
    Cinema {
        #[command(subcommand)]
        action: CinemaAction,
    },

    /// Manage screening rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },

    /// Manage installed equipment
    Equipment {
        #[command(subcommand)]
        action: EquipmentAction,
    },

    /// Manage consumables and spare parts
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// Manage work items
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage calendar events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage the maintenance history log
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Manage maintenance work orders
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage affected screening sessions
    Impact {
        #[command(subcommand)]
        action: ImpactAction,
    },

    /// Manage stored key/value settings
    Setting {
        #[command(subcommand)]
        action: SettingAction,
    },

    /// Show the facility dashboard
    Stats,

    /// Export an HTML report
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Seed the database with demo data or YAML fixtures
    Seed {
        /// Insert the built-in demo data set
        #[arg(long)]
        demo: bool,

        /// Load per-cinema YAML fixture files from this directory
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },

    /// Delete every row from every table
    Reset {
        /// Confirm the destructive wipe
        #[arg(long)]
        yes: bool,
    },

    /// Manage CLI configuration (settings file)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// ── Cinemas ─────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum CinemaAction {
    /// Register a cinema
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },

    /// List all cinemas
    List,

    /// Show one cinema with its rooms
    Show { id: i64 },

    /// Update a cinema's fields
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },

    /// Delete a cinema
    Rm { id: i64 },
}

// ── Rooms ───────────────────────────────────────────────────────────────────

/// Room fields shared by add and edit.
#[derive(Args, Clone)]
pub(crate) struct RoomFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub screen_type: Option<String>,

    #[arg(long)]
    pub sound_system: Option<String>,

    /// Seat counts as standard,premium,vip (e.g. 120,24,6)
    #[arg(long)]
    pub seating: Option<String>,

    /// Projector lamp model; enables lamp tracking
    #[arg(long)]
    pub lamp_model: Option<String>,

    /// Rated lamp life in hours
    #[arg(long)]
    pub lamp_max_hours: Option<i64>,

    /// Current lamp hour counter
    #[arg(long)]
    pub lamp_hours: Option<i64>,
}

#[derive(Subcommand)]
pub(crate) enum RoomAction {
    /// Add a room to a cinema
    Add {
        #[arg(long)]
        cinema: i64,

        /// Initial status
        #[arg(long, default_value = "active")]
        status: RoomStatus,

        /// Reason for a non-active status
        #[arg(long)]
        reason: Option<String>,

        #[command(flatten)]
        fields: RoomFields,
    },

    /// List rooms, optionally for one cinema
    List {
        #[arg(long)]
        cinema: Option<i64>,
    },

    /// Show one room with alerts, equipment, and recent history
    Show { id: i64 },

    /// Update a room's fields
    Edit {
        id: i64,
        #[command(flatten)]
        fields: RoomFields,
    },

    /// Delete a room
    Rm { id: i64 },

    /// Change a room's operational status
    Status {
        id: i64,
        status: RoomStatus,
        #[arg(long)]
        reason: Option<String>,
    },

    /// Update the projector lamp hour counter
    LampHours { id: i64, hours: i64 },

    /// Record a lamp replacement (resets the hour counter)
    LampReplace {
        id: i64,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        max_hours: Option<i64>,
    },

    /// Record a preventive service (tier A/B/C) and reschedule it
    Preventive {
        id: i64,
        tier: PreventiveTier,
        /// Service date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List rooms with overdue preventive maintenance
    Overdue,
}

// ── Equipment ───────────────────────────────────────────────────────────────

/// Equipment attributes shared by add and edit.
#[derive(Args, Clone)]
pub(crate) struct EquipmentFields {
    #[arg(long)]
    pub ip_address: Option<String>,

    /// Install date (YYYY-MM-DD)
    #[arg(long)]
    pub install_date: Option<String>,

    #[arg(long)]
    pub cost: Option<f64>,

    /// Next scheduled service (YYYY-MM-DD)
    #[arg(long)]
    pub next_maintenance: Option<String>,

    #[arg(long)]
    pub serial_number: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub manufacturer: Option<String>,

    // Projection
    #[arg(long)]
    pub lumens: Option<i64>,

    #[arg(long)]
    pub resolution: Option<String>,

    #[arg(long)]
    pub lamp_hours: Option<i64>,

    #[arg(long)]
    pub max_lamp_hours: Option<i64>,

    // Sound
    #[arg(long)]
    pub channels: Option<i64>,

    #[arg(long)]
    pub power: Option<i64>,

    #[arg(long)]
    pub frequency: Option<String>,

    // Climate
    #[arg(long)]
    pub capacity_btu: Option<i64>,

    #[arg(long)]
    pub temperature_range: Option<String>,

    // Network
    #[arg(long)]
    pub mac_address: Option<String>,

    #[arg(long)]
    pub ip_range: Option<String>,

    #[arg(long)]
    pub port_count: Option<i64>,
}

#[derive(Subcommand)]
pub(crate) enum EquipmentAction {
    /// Install equipment in a room (status starts operational)
    Add {
        #[arg(long)]
        room: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: EquipmentCategory,

        #[command(flatten)]
        fields: EquipmentFields,
    },

    /// List equipment for a room or a cinema
    List {
        #[arg(long)]
        room: Option<i64>,
        #[arg(long)]
        cinema: Option<i64>,
    },

    /// Show one piece of equipment
    Show { id: i64 },

    /// Update equipment fields
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<EquipmentCategory>,

        #[arg(long)]
        status: Option<EquipmentStatus>,

        /// Last completed service (YYYY-MM-DD)
        #[arg(long)]
        last_maintenance: Option<String>,

        #[command(flatten)]
        fields: EquipmentFields,
    },

    /// Delete equipment
    Rm { id: i64 },

    /// List equipment on the critical-alert list
    Alerts {
        #[arg(long)]
        cinema: Option<i64>,
    },
}

// ── Inventory ───────────────────────────────────────────────────────────────

/// Inventory fields shared by add and edit.
#[derive(Args, Clone)]
pub(crate) struct InventoryFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub quantity: Option<i64>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_quantity: Option<i64>,

    #[arg(long)]
    pub cost: Option<f64>,

    #[arg(long)]
    pub supplier: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum InventoryAction {
    /// Add a stock item to a cinema
    Add {
        #[arg(long)]
        cinema: i64,
        #[command(flatten)]
        fields: InventoryFields,
    },

    /// List a cinema's inventory
    List {
        #[arg(long)]
        cinema: i64,
    },

    /// Update a stock item
    Edit {
        id: i64,
        #[command(flatten)]
        fields: InventoryFields,
    },

    /// Delete a stock item
    Rm { id: i64 },

    /// List items at or below their minimum quantity
    LowStock {
        #[arg(long)]
        cinema: i64,
    },
}

// ── Tasks ───────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum TaskAction {
    /// Create a task (status starts as todo)
    Add {
        #[arg(long)]
        cinema: i64,

        #[arg(long)]
        room: Option<i64>,

        #[arg(long)]
        equipment: Option<i64>,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "medium")]
        priority: TaskPriority,

        #[arg(long)]
        category: TaskCategory,

        #[arg(long)]
        assigned_to: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        estimated_hours: Option<f64>,

        #[arg(long)]
        cost: Option<f64>,
    },

    /// List tasks with optional filters
    List {
        #[arg(long)]
        cinema: Option<i64>,
        #[arg(long)]
        room: Option<i64>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<TaskPriority>,
    },

    /// Show one task
    Show { id: i64 },

    /// Update a task's fields
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        #[arg(long)]
        category: Option<TaskCategory>,
        #[arg(long)]
        assigned_to: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        estimated_hours: Option<f64>,
        #[arg(long)]
        actual_hours: Option<f64>,
        #[arg(long)]
        cost: Option<f64>,
    },

    /// Move a task to a new status
    Status { id: i64, status: TaskStatus },

    /// Delete a task
    Rm { id: i64 },
}

// ── Events ──────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum EventAction {
    /// Schedule an event
    Add {
        #[arg(long)]
        cinema: i64,

        #[arg(long)]
        room: Option<i64>,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Start (YYYY-MM-DD HH:MM)
        #[arg(long)]
        start: String,

        /// End (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: String,

        #[arg(long)]
        kind: EventKind,

        #[arg(long)]
        assigned_to: Option<String>,

        #[arg(long)]
        priority: Option<TaskPriority>,
    },

    /// List events, optionally for one cinema or a date window
    List {
        #[arg(long)]
        cinema: Option<i64>,
        /// Window start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Window end (YYYY-MM-DD, exclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show one event
    Show { id: i64 },

    /// Update an event's fields
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Start (YYYY-MM-DD HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// End (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        kind: Option<EventKind>,
        #[arg(long)]
        assigned_to: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
    },

    /// Move an event to a new status
    Status { id: i64, status: EventStatus },

    /// Delete an event
    Rm { id: i64 },
}

// ── Maintenance history ─────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum HistoryAction {
    /// Log a completed maintenance intervention on a room
    Add {
        #[arg(long)]
        room: i64,

        #[arg(long)]
        kind: MaintenanceKind,

        #[arg(long)]
        description: String,

        /// Intervention date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        technician: Option<String>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        /// Part used; repeat for multiple parts
        #[arg(long = "part")]
        parts: Vec<String>,
    },

    /// List history for a room or a cinema (newest first)
    List {
        #[arg(long)]
        room: Option<i64>,
        #[arg(long)]
        cinema: Option<i64>,
    },

    /// Update a history entry
    Edit {
        id: i64,
        /// Intervention date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        kind: Option<MaintenanceKind>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        technician: Option<String>,
        #[arg(long)]
        cost: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a history entry
    Rm { id: i64 },

    /// Aggregate maintenance counts and cost for a cinema
    Stats {
        #[arg(long)]
        cinema: i64,
        /// Limit to the last N days
        #[arg(long)]
        days: Option<i64>,
    },
}

// ── Maintenance records ─────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum RecordAction {
    /// Open a maintenance work order on a room
    Add {
        #[arg(long)]
        room: i64,

        #[arg(long)]
        equipment: Option<i64>,

        #[arg(long)]
        task: Option<i64>,

        #[arg(long)]
        kind: RecordKind,

        #[arg(long)]
        category: RecordCategory,

        #[arg(long)]
        description: String,

        /// Start (YYYY-MM-DD HH:MM, default now)
        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        technician: Option<String>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        downtime_minutes: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List work orders for a room or a cinema (newest first)
    List {
        #[arg(long)]
        room: Option<i64>,
        #[arg(long)]
        cinema: Option<i64>,
    },

    /// Move a work order to a new status
    Status { id: i64, status: EventStatus },

    /// Update a work order
    Edit {
        id: i64,
        #[arg(long)]
        description: Option<String>,
        /// End (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        technician: Option<String>,
        #[arg(long)]
        cost: Option<f64>,
        #[arg(long)]
        downtime_minutes: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a work order
    Rm { id: i64 },
}

// ── Session impacts ─────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum ImpactAction {
    /// Record an affected screening session
    Add {
        #[arg(long)]
        room: i64,

        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Showtime as displayed, e.g. 19:30
        #[arg(long)]
        time: String,

        #[arg(long)]
        movie: Option<String>,

        #[arg(long)]
        impact: ImpactKind,

        #[arg(long)]
        cause: ImpactCause,

        #[arg(long)]
        description: String,

        #[arg(long)]
        delay_minutes: Option<i64>,

        #[arg(long)]
        affected_customers: Option<i64>,

        #[arg(long)]
        refund_amount: Option<f64>,
    },

    /// List impacts for a cinema (newest first)
    List {
        #[arg(long)]
        cinema: i64,
        /// Only unresolved impacts
        #[arg(long)]
        unresolved: bool,
    },

    /// Mark an impact resolved
    Resolve { id: i64 },

    /// Delete an impact
    Rm { id: i64 },
}

// ── Settings table ──────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum SettingAction {
    /// Store a key/value setting
    Set { key: String, value: String },

    /// Print one setting's value
    Get { key: String },

    /// List all settings
    List,

    /// Delete a setting
    Rm { key: String },
}

// ── Reports ─────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum ReportAction {
    /// Facility-wide HTML report
    Facility {
        /// Output file
        #[arg(long)]
        out: PathBuf,

        /// Omit the task/event/alert detail sections
        #[arg(long)]
        summary: bool,
    },

    /// Print-ready HTML report (for print-to-PDF)
    Print {
        /// Output file
        #[arg(long)]
        out: PathBuf,
    },

    /// Per-cinema technical report
    Technical {
        #[arg(long)]
        cinema: i64,

        /// Output file
        #[arg(long)]
        out: PathBuf,

        /// Reporting window in days
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
}

// ── CLI configuration ───────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Print the resolved database path
    Db,

    /// Save a default database path in the settings file
    SetDb { path: PathBuf },

    /// Remove the saved database path
    ClearDb,
}
