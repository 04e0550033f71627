use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::cli_types::SettingAction;
use crate::error::CliError;

pub(crate) fn run(conn: &Connection, action: SettingAction) -> Result<(), CliError> {
    match action {
        SettingAction::Set { key, value } => {
            marquee_db::set_setting(conn, &key, &value)?;
            log::info!(
                "{} {} = {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                key,
                value,
            );
            Ok(())
        }

        SettingAction::Get { key } => {
            match marquee_db::get_setting(conn, &key)? {
                Some(value) => log::info!("{value}"),
                None => {
                    log::info!(
                        "{}",
                        format!("'{key}' is not set").if_supports_color(Stdout, |t| t.dimmed()),
                    );
                }
            }
            Ok(())
        }

        SettingAction::List => {
            let settings = marquee_db::list_settings(conn)?;
            if settings.is_empty() {
                log::info!("{}", "No settings stored.".if_supports_color(Stdout, |t| t.dimmed()));
                return Ok(());
            }
            for setting in &settings {
                log::info!(
                    "  {} {}",
                    format!("{}:", setting.key).if_supports_color(Stdout, |t| t.cyan()),
                    setting.value,
                );
            }
            Ok(())
        }

        SettingAction::Rm { key } => {
            marquee_db::remove_setting(conn, &key)?;
            log::info!(
                "{} '{}' removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                key,
            );
            Ok(())
        }
    }
}
