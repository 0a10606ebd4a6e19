mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use clap::Parser;
use std::process::ExitCode;

use cli::{EventDirCli, EventDirCommand};
use errors::CliError;

fn main() -> ExitCode {
    let cli = EventDirCli::parse();
    initialize_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("Command failed: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: EventDirCli) -> Result<(), CliError> {
    let load_events = || files::load_events(cli.events.as_deref());

    match cli.command {
        EventDirCommand::List { filters, date } => {
            let events = load_events()?;
            commands::list_events(&events, &filters, date.as_deref(), cli.format)
        }
        EventDirCommand::Weekend {
            filters,
            offset,
            day,
        } => {
            let events = load_events()?;
            let today = files::resolve_today(cli.today.as_deref())?;
            commands::show_weekend(&events, &filters, today, offset, day.as_deref(), cli.format)
        }
        EventDirCommand::Get { id } => commands::get_event(&load_events()?, id, cli.format),
        EventDirCommand::Options => commands::list_options(cli.format),
        EventDirCommand::Browse => {
            let events = load_events()?;
            let today = files::resolve_today(cli.today.as_deref())?;
            commands::browse_events(&events, today)
        }
    }
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> EventDirCli {
        EventDirCli::try_parse_from(std::iter::once("eventdir").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_options_does_not_read_events_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let missing = missing.to_str().unwrap();

        assert_eq!(run(parse(&["options", "--events", missing])), Ok(()));
        assert_eq!(
            run(parse(&["get", "1", "--events", missing])),
            Err(CliError::FileError)
        );
    }
}
