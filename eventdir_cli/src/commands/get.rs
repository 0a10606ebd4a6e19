use eventdir_core::Event;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Shows the full details of a single event.
pub fn get_event(events: &[Event], id: u32, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Getting event by ID");

    match events.iter().find(|e| e.id == id) {
        Some(event) => {
            ui::success(&format!("Found event '{}'", event.title));

            match output_format {
                OutputFormat::Pretty => ui::pretty_output_event_single(event),
                OutputFormat::Json => ui::json_output(event),
            }
            Ok(())
        }
        None => {
            ui::error(&format!("Couldn't find an event with ID '{}'", id));
            Err(CliError::InputError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdir_core::sample_events;

    #[test]
    fn test_get_existing_event() {
        let events = sample_events();
        assert_eq!(get_event(&events, 4, OutputFormat::Json), Ok(()));
    }

    #[test]
    fn test_get_missing_event() {
        let events = sample_events();
        assert_eq!(
            get_event(&events, 99, OutputFormat::Pretty),
            Err(CliError::InputError)
        );
    }
}
