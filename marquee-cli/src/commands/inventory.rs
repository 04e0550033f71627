use marquee_facility::types::InventoryItem;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::{InventoryAction, InventoryFields};
use crate::commands::{dash, require_cinema};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: InventoryAction) -> Result<(), CliError> {
    match action {
        InventoryAction::Add { cinema, fields } => {
            require_cinema(conn, cinema)?;
            let mut item = InventoryItem {
                id: 0,
                cinema_id: cinema,
                name: None,
                description: None,
                quantity: None,
                category: None,
                location: None,
                min_quantity: None,
                cost: None,
                supplier: None,
                notes: None,
                created_at: String::new(),
            };
            apply_fields(&mut item, fields);

            let id = marquee_db::insert_inventory_item(conn, &item)?;
            log::info!(
                "{} Item #{} '{}' added",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                dash(item.name.as_deref()),
            );
            Ok(())
        }

        InventoryAction::List { cinema } => {
            let items = marquee_db::inventory_for_cinema(conn, cinema)?;
            if items.is_empty() {
                log::info!("{}", "No stock items.".if_supports_color(Stdout, |t| t.dimmed()));
                return Ok(());
            }
            for item in &items {
                print_item(item);
            }
            Ok(())
        }

        InventoryAction::Edit { id, fields } => {
            let mut item = marquee_db::get_inventory_item(conn, id)?
                .ok_or_else(|| CliError::invalid(format!("Inventory item {id} not found")))?;
            apply_fields(&mut item, fields);
            marquee_db::update_inventory_item(conn, &item)?;
            log::info!(
                "{} Item #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        InventoryAction::Rm { id } => {
            marquee_db::remove_inventory_item(conn, id)?;
            log::info!(
                "{} Item #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        InventoryAction::LowStock { cinema } => {
            let items = marquee_db::low_stock_items(conn, cinema)?;
            if items.is_empty() {
                log::info!(
                    "{}",
                    "All items above minimum stock.".if_supports_color(Stdout, |t| t.dimmed()),
                );
                return Ok(());
            }
            log::info!(
                "{}",
                format!("{} item(s) at or below minimum:", items.len())
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for item in &items {
                log::info!(
                    "  {} #{:<4} {:<24} {} on hand (min {})",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    item.id,
                    dash(item.name.as_deref()),
                    item.quantity.unwrap_or(0),
                    item.min_quantity.unwrap_or(0),
                );
            }
            Ok(())
        }
    }
}

fn apply_fields(item: &mut InventoryItem, fields: InventoryFields) {
    if let Some(v) = fields.name {
        item.name = Some(v);
    }
    if let Some(v) = fields.description {
        item.description = Some(v);
    }
    if let Some(v) = fields.quantity {
        item.quantity = Some(v);
    }
    if let Some(v) = fields.category {
        item.category = Some(v);
    }
    if let Some(v) = fields.location {
        item.location = Some(v);
    }
    if let Some(v) = fields.min_quantity {
        item.min_quantity = Some(v);
    }
    if let Some(v) = fields.cost {
        item.cost = Some(v);
    }
    if let Some(v) = fields.supplier {
        item.supplier = Some(v);
    }
    if let Some(v) = fields.notes {
        item.notes = Some(v);
    }
}

fn print_item(item: &InventoryItem) {
    let marker = if marquee_facility::is_low_stock(item) {
        format!("{} ", "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()))
    } else {
        "  ".to_string()
    };
    log::info!(
        "{}#{:<4} {:<24} qty {:<5} min {:<5} {}",
        marker,
        item.id,
        dash(item.name.as_deref()),
        item.quantity.unwrap_or(0),
        item.min_quantity.unwrap_or(0),
        dash(item.category.as_deref()).if_supports_color(Stdout, |t| t.dimmed()),
    );
}
