use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use marquee_db::Connection;

use crate::error::CliError;

pub(crate) fn run(conn: &Connection, yes: bool) -> Result<(), CliError> {
    if !yes {
        return Err(CliError::invalid(
            "this deletes every row from every table; re-run with --yes to confirm",
        ));
    }

    marquee_db::clear_all_data(conn)?;
    log::info!(
        "{} All data cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
