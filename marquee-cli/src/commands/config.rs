use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::ConfigAction;
use crate::error::CliError;
use crate::settings::{resolve_db_path, save_db_path, settings_path};

pub(crate) fn run(action: ConfigAction, db_override: Option<PathBuf>) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            log::info!("{}", settings_path().display());
            Ok(())
        }

        ConfigAction::Db => {
            log::info!("{}", resolve_db_path(db_override).display());
            Ok(())
        }

        ConfigAction::SetDb { path } => {
            save_db_path(Some(&path))
                .map_err(|e| CliError::config(format!("could not save settings: {e}")))?;
            log::info!(
                "{} Default database set to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            Ok(())
        }

        ConfigAction::ClearDb => {
            save_db_path(None)
                .map_err(|e| CliError::config(format!("could not save settings: {e}")))?;
            log::info!(
                "{} Default database cleared; the platform data path will be used",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
            Ok(())
        }
    }
}
