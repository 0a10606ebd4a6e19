use chrono::NaiveDate;
use eventdir_core::{
    DateFilter, DayBuckets, Event, WeekendDates, WeekendDay, bucket_by_day,
    compute_weekend_dates, filter_events, weekend_heading,
};
use serde::Serialize;

use crate::cli::FilterArgs;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

#[derive(Debug, Serialize)]
struct WeekendReport<'a> {
    heading: String,
    week_offset: i32,
    weekend: WeekendDates,
    days: Vec<DayReport<'a>>,
}

#[derive(Debug, Serialize)]
struct DayReport<'a> {
    day: WeekendDay,
    date: NaiveDate,
    events: &'a [&'a Event],
}

/// Shows the events of the weekend `offset` weeks from the current one.
pub fn show_weekend(
    events: &[Event],
    filters: &FilterArgs,
    today: NaiveDate,
    offset: i32,
    day: Option<&str>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    let weekend = compute_weekend_dates(today, offset).ok_or_else(|| {
        ui::error(&format!(
            "A weekend {} weeks from {} is outside the supported calendar",
            offset, today
        ));
        CliError::InputError
    })?;

    let selection = filters
        .to_selection()
        .with_date(DateFilter::Weekend(weekend));
    let buckets = bucket_by_day(filter_events(events, &selection), &weekend);
    let active = day.map(WeekendDay::from_label);
    let report = build_report(&weekend, offset, &buckets, active);

    match output_format {
        OutputFormat::Pretty => {
            ui::header(&format!("{} ({})", report.heading, weekend.range_label()));
            ui::results_heading(buckets.len(), &selection.active_filters());
            ui::pretty_output_day_tabs(&weekend, &buckets, active);

            if buckets.is_empty() {
                ui::empty_state();
            } else {
                for day in &report.days {
                    ui::pretty_output_day(&weekend, day.day, day.events);
                }
            }
        }
        OutputFormat::Json => ui::json_output(&report),
    }

    Ok(())
}

/// Collects the days to show, all three unless one day is picked.
fn build_report<'a>(
    weekend: &WeekendDates,
    offset: i32,
    buckets: &'a DayBuckets<'a>,
    active: Option<WeekendDay>,
) -> WeekendReport<'a> {
    let days = match active {
        Some(day) => vec![day],
        None => WeekendDay::options(),
    };

    WeekendReport {
        heading: weekend_heading(offset),
        week_offset: offset,
        weekend: *weekend,
        days: days
            .into_iter()
            .map(|day| DayReport {
                day,
                date: weekend.get(day),
                events: buckets.get(day),
            })
            .collect(),
    }
}
