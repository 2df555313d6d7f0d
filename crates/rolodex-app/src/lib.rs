//! The `rolodex` command-line tool, as a library so it can be driven from
//! tests without a process boundary.

pub mod cli;
pub mod commands;
pub mod error;

use std::io::Write;

use chrono::{Local, NaiveDate};
use rolodex_core::config::Settings;

use crate::cli::{Cli, Command};
use crate::commands::matches::Query;
use crate::error::AppResult;

/// Runs the parsed command, writing results to `out`.
///
/// ## Errors
/// Propagates file, parse (strict mode), query and output errors.
pub fn run(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> AppResult<()> {
    run_on(cli, settings, Local::now().date_naive(), out)
}

/// [`run`] with a fixed notion of today, for use-score decay.
///
/// ## Errors
/// As for [`run`].
#[tracing::instrument(skip_all, fields(command = ?cli.command))]
pub fn run_on(
    cli: &Cli,
    settings: &Settings,
    today: NaiveDate,
    out: &mut dyn Write,
) -> AppResult<()> {
    match &cli.command {
        Command::Decode { file } => {
            let cards = commands::read_cards(file, cli.strict)?;
            let format = cli.format.map_or(settings.output.format, Into::into);
            commands::decode::execute(&cards, format, settings.output.pretty, out)
        }
        Command::Match(args) => {
            let query = match (&args.name, &args.email) {
                (Some(name), _) => Query::Name(name),
                (None, Some(email)) => Query::Email(email),
                (None, None) => Query::Name(""),
            };
            let cards = commands::read_cards(&args.file, cli.strict)?;
            commands::matches::execute(&cards, query, out)
        }
        Command::Score { file } => {
            let cards = commands::read_cards(file, cli.strict)?;
            commands::score::execute(&cards, today, out)
        }
    }
}
