use eventdir_core::{DateFilter, Event, FilterSelection, filter_events};

use crate::cli::FilterArgs;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists every event passing the filters, optionally limited to one date.
pub fn list_events(
    events: &[Event],
    filters: &FilterArgs,
    date: Option<&str>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Listing events");

    let selection = build_selection(filters, date);
    let visible = filter_events(events, &selection);

    match output_format {
        OutputFormat::Pretty => {
            ui::results_heading(visible.len(), &selection.active_filters());
            if visible.is_empty() {
                ui::empty_state();
            } else {
                ui::pretty_output_event_list(&visible);
            }
        }
        OutputFormat::Json => ui::json_output(&visible),
    }

    Ok(())
}

/// A malformed date is dropped with a warning and the other flags still apply.
fn build_selection(filters: &FilterArgs, date: Option<&str>) -> FilterSelection {
    let date_filter = DateFilter::from_label(date.unwrap_or_default());
    if date.is_some_and(|d| !d.trim().is_empty()) && !date_filter.is_active() {
        ui::warning("Ignoring the date filter. Dates look like 2025-07-12");
    }

    filters.to_selection().with_date(date_filter)
}
