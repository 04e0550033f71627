pub(crate) mod cinema;
pub(crate) mod config;
pub(crate) mod equipment;
pub(crate) mod event;
pub(crate) mod history;
pub(crate) mod impact;
pub(crate) mod inventory;
pub(crate) mod record;
pub(crate) mod report;
pub(crate) mod reset;
pub(crate) mod room;
pub(crate) mod seed;
pub(crate) mod setting;
pub(crate) mod stats;
pub(crate) mod task;

use std::path::PathBuf;

use marquee_facility::time::{format_date, now_ms, parse_date_ms, parse_datetime_ms};
use marquee_facility::types::{Cinema, Room, Seating};
use marquee_db::Connection;

use crate::error::CliError;
use crate::settings::resolve_db_path;

/// Resolve the database path and open (creating parent directories and the
/// schema as needed).
pub(crate) fn open_connection(db_override: Option<PathBuf>) -> Result<Connection, CliError> {
    let path = resolve_db_path(db_override);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("Opening database at {}", path.display());
    Ok(marquee_db::open_database(&path)?)
}

pub(crate) fn require_cinema(conn: &Connection, id: i64) -> Result<Cinema, CliError> {
    marquee_db::get_cinema(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Cinema {id} not found")))
}

pub(crate) fn require_room(conn: &Connection, id: i64) -> Result<Room, CliError> {
    marquee_db::get_room(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Room {id} not found")))
}

/// Parse "standard,premium,vip" seat counts.
pub(crate) fn parse_seating(s: &str) -> Result<Seating, CliError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CliError::invalid(format!(
            "invalid seating '{s}' (expected standard,premium,vip)"
        )));
    }
    let mut counts = [0u32; 3];
    for (slot, part) in counts.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| CliError::invalid(format!("invalid seat count '{part}'")))?;
    }
    Ok(Seating {
        standard: counts[0],
        premium: counts[1],
        vip: counts[2],
    })
}

/// Parse an optional YYYY-MM-DD argument.
pub(crate) fn opt_date_arg(arg: Option<&str>) -> Result<Option<i64>, CliError> {
    arg.map(parse_date_ms).transpose().map_err(Into::into)
}

/// Parse an optional YYYY-MM-DD argument, defaulting to now.
pub(crate) fn date_arg_or_now(arg: Option<&str>) -> Result<i64, CliError> {
    match arg {
        Some(s) => Ok(parse_date_ms(s)?),
        None => Ok(now_ms()),
    }
}

/// Parse an optional "YYYY-MM-DD HH:MM" argument.
pub(crate) fn opt_datetime_arg(arg: Option<&str>) -> Result<Option<i64>, CliError> {
    arg.map(parse_datetime_ms).transpose().map_err(Into::into)
}

/// Display helper: optional text as-is or a dash.
pub(crate) fn dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Display helper: optional epoch-ms date or a dash.
pub(crate) fn dash_date(ms: Option<i64>) -> String {
    match ms {
        Some(ms) => format_date(ms),
        None => "-".to_string(),
    }
}
