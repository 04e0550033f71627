use marquee_db::TaskFilter;
use marquee_facility::types::{Task, TaskPriority, TaskStatus};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::TaskAction;
use crate::commands::{dash, dash_date, opt_date_arg, require_cinema};
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: TaskAction) -> Result<(), CliError> {
    match action {
        TaskAction::Add {
            cinema,
            room,
            equipment,
            title,
            description,
            priority,
            category,
            assigned_to,
            due,
            estimated_hours,
            cost,
        } => {
            require_cinema(conn, cinema)?;
            let task = Task {
                id: 0,
                cinema_id: cinema,
                room_id: room,
                equipment_id: equipment,
                title,
                description,
                priority,
                status: TaskStatus::Todo,
                assigned_to,
                due_date: opt_date_arg(due.as_deref())?,
                category,
                estimated_hours,
                actual_hours: None,
                cost,
                created_at: String::new(),
            };
            let id = marquee_db::insert_task(conn, &task)?;
            log::info!(
                "{} Task #{} '{}' created",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                task.title,
            );
            Ok(())
        }

        TaskAction::List {
            cinema,
            room,
            status,
            priority,
        } => {
            let tasks = marquee_db::list_tasks(
                conn,
                TaskFilter {
                    cinema_id: cinema,
                    room_id: room,
                    status,
                    priority,
                },
            )?;
            if tasks.is_empty() {
                log::info!("{}", "No tasks.".if_supports_color(Stdout, |t| t.dimmed()));
                return Ok(());
            }
            for task in &tasks {
                print_task_line(task);
            }
            Ok(())
        }

        TaskAction::Show { id } => {
            let task = get_task(conn, id)?;
            log::info!(
                "{} {}",
                format!("Task #{id}").if_supports_color(Stdout, |t| t.bold()),
                task.title,
            );
            log::info!("  {}", task.description);
            log::info!(
                "  Status:    {} ({} priority)",
                task.status.as_str(),
                task.priority.as_str(),
            );
            log::info!("  Category:  {}", task.category.as_str());
            log::info!("  Cinema:    #{}", task.cinema_id);
            if let Some(room) = task.room_id {
                log::info!("  Room:      #{room}");
            }
            if let Some(equipment) = task.equipment_id {
                log::info!("  Equipment: #{equipment}");
            }
            log::info!("  Assigned:  {}", dash(task.assigned_to.as_deref()));
            log::info!("  Due:       {}", dash_date(task.due_date));
            if task.estimated_hours.is_some() || task.actual_hours.is_some() {
                log::info!(
                    "  Hours:     {} estimated / {} actual",
                    task.estimated_hours.map(|h| h.to_string()).unwrap_or_else(|| "-".into()),
                    task.actual_hours.map(|h| h.to_string()).unwrap_or_else(|| "-".into()),
                );
            }
            Ok(())
        }

        TaskAction::Edit {
            id,
            title,
            description,
            priority,
            category,
            assigned_to,
            due,
            estimated_hours,
            actual_hours,
            cost,
        } => {
            let mut task = get_task(conn, id)?;
            if let Some(v) = title {
                task.title = v;
            }
            if let Some(v) = description {
                task.description = v;
            }
            if let Some(v) = priority {
                task.priority = v;
            }
            if let Some(v) = category {
                task.category = v;
            }
            if let Some(v) = assigned_to {
                task.assigned_to = Some(v);
            }
            if let Some(v) = opt_date_arg(due.as_deref())? {
                task.due_date = Some(v);
            }
            if let Some(v) = estimated_hours {
                task.estimated_hours = Some(v);
            }
            if let Some(v) = actual_hours {
                task.actual_hours = Some(v);
            }
            if let Some(v) = cost {
                task.cost = Some(v);
            }
            marquee_db::update_task(conn, &task)?;
            log::info!(
                "{} Task #{} updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }

        TaskAction::Status { id, status } => {
            marquee_db::update_task_status(conn, id, status)?;
            log::info!(
                "{} Task #{} moved to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                status.as_str().if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }

        TaskAction::Rm { id } => {
            marquee_db::remove_task(conn, id)?;
            log::info!(
                "{} Task #{} removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
    }
}

fn get_task(conn: &Connection, id: i64) -> Result<Task, CliError> {
    marquee_db::get_task(conn, id)?
        .ok_or_else(|| CliError::invalid(format!("Task {id} not found")))
}

fn print_task_line(task: &Task) {
    let priority = match task.priority {
        TaskPriority::High => format!("{}", "high".if_supports_color(Stdout, |t| t.red())),
        TaskPriority::Medium => format!("{}", "medium".if_supports_color(Stdout, |t| t.yellow())),
        TaskPriority::Low => "low".to_string(),
    };
    let done_mark = if task.status == TaskStatus::Done {
        format!("{} ", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
    } else {
        "  ".to_string()
    };
    log::info!(
        "{}#{:<4} {:<32} {:<12} {:<8} {:<14} due {}",
        done_mark,
        task.id,
        task.title,
        task.status.as_str(),
        priority,
        task.category.as_str(),
        dash_date(task.due_date),
    );
}
