use chrono::NaiveDate;
use eventdir_core::{
    CategoryFilter, DateFilter, DistanceRange, Event, FilterSelection, PriceRange, RatingFloor,
    WeekendDay, bucket_by_day, compute_weekend_dates, filter_events, weekend_heading,
};
use inquire::{DateSelect, InquireError, Select, Text};
use std::fmt;

use crate::errors::CliError;
use crate::ui;

/// Which page of the directory is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    All,
    Weekend,
}

/// Everything the interactive shell remembers between prompts.
#[derive(Debug, Clone, PartialEq)]
struct BrowseState {
    selection: FilterSelection,
    view: View,
    week_offset: i32,
    active_day: WeekendDay,
}

impl BrowseState {
    fn new() -> Self {
        Self {
            selection: FilterSelection::new(),
            view: View::All,
            week_offset: 0,
            active_day: WeekendDay::Friday,
        }
    }

    /// Applies an action that needs no further input. Returns false on quit.
    fn apply(&mut self, action: &BrowseAction) -> bool {
        match action {
            BrowseAction::ShowWeekend => self.view = View::Weekend,
            BrowseAction::ShowAll => self.view = View::All,
            BrowseAction::PreviousWeekend => self.week_offset = self.week_offset.saturating_sub(1),
            BrowseAction::NextWeekend => self.week_offset = self.week_offset.saturating_add(1),
            BrowseAction::ClearFilters => self.selection.clear_filters(),
            BrowseAction::Quit => return false,
            _ => {}
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BrowseAction {
    Search,
    Category,
    Price,
    Distance,
    Rating,
    Date,
    ShowWeekend,
    ShowAll,
    PreviousWeekend,
    NextWeekend,
    SwitchDay,
    ClearFilters,
    Quit,
}

impl BrowseAction {
    fn options(view: View) -> Vec<BrowseAction> {
        let mut actions = vec![
            BrowseAction::Search,
            BrowseAction::Category,
            BrowseAction::Price,
            BrowseAction::Distance,
            BrowseAction::Rating,
        ];
        match view {
            View::All => actions.extend([BrowseAction::Date, BrowseAction::ShowWeekend]),
            View::Weekend => actions.extend([
                BrowseAction::PreviousWeekend,
                BrowseAction::NextWeekend,
                BrowseAction::SwitchDay,
                BrowseAction::ShowAll,
            ]),
        }
        actions.extend([BrowseAction::ClearFilters, BrowseAction::Quit]);
        actions
    }
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BrowseAction::Search => "Search",
            BrowseAction::Category => "Category",
            BrowseAction::Price => "Price",
            BrowseAction::Distance => "Distance",
            BrowseAction::Rating => "Rating",
            BrowseAction::Date => "Date",
            BrowseAction::ShowWeekend => "Weekend view",
            BrowseAction::ShowAll => "All events",
            BrowseAction::PreviousWeekend => "Previous weekend",
            BrowseAction::NextWeekend => "Next weekend",
            BrowseAction::SwitchDay => "Switch day",
            BrowseAction::ClearFilters => "Clear all filters",
            BrowseAction::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// Runs the interactive directory until the user quits or cancels.
pub fn browse_events(events: &[Event], today: NaiveDate) -> Result<(), CliError> {
    let mut state = BrowseState::new();

    loop {
        render(events, today, &state)?;

        let action = match Select::new("What next?", BrowseAction::options(state.view)).prompt() {
            Ok(action) => action,
            Err(e) => return finish_on_prompt_error(e),
        };

        if !state.apply(&action) {
            return Ok(());
        }

        // Esc on a filter prompt goes back to the menu
        match prompt_for(&action, &mut state, today) {
            Ok(()) | Err(InquireError::OperationCanceled) => {}
            Err(e) => return finish_on_prompt_error(e),
        }
    }
}

fn render(events: &[Event], today: NaiveDate, state: &BrowseState) -> Result<(), CliError> {
    println!();
    match state.view {
        View::All => {
            ui::header("Local Events Directory");
            let visible = filter_events(events, &state.selection);
            ui::results_heading(visible.len(), &state.selection.active_filters());
            if visible.is_empty() {
                ui::empty_state();
            } else {
                ui::pretty_output_event_list(&visible);
            }
        }
        View::Weekend => {
            let weekend = compute_weekend_dates(today, state.week_offset).ok_or_else(|| {
                ui::error("That weekend is outside the supported calendar");
                CliError::InputError
            })?;
            let selection = state
                .selection
                .clone()
                .with_date(DateFilter::Weekend(weekend));
            let buckets = bucket_by_day(filter_events(events, &selection), &weekend);

            ui::header(&format!(
                "{} ({})",
                weekend_heading(state.week_offset),
                weekend.range_label()
            ));
            ui::results_heading(buckets.len(), &selection.active_filters());
            ui::pretty_output_day_tabs(&weekend, &buckets, Some(state.active_day));
            ui::pretty_output_day(&weekend, state.active_day, buckets.get(state.active_day));
        }
    }
    println!();
    Ok(())
}

/// Asks for the value an action needs and stores it in the state.
fn prompt_for(
    action: &BrowseAction,
    state: &mut BrowseState,
    today: NaiveDate,
) -> Result<(), InquireError> {
    let selection = &mut state.selection;
    match action {
        BrowseAction::Search => {
            let term = Text::new("Search events, keywords, or descriptions:")
                .with_initial_value(&selection.search_term)
                .prompt()?;
            selection.search_term = term;
        }
        BrowseAction::Category => {
            selection.category = Select::new("Category", CategoryFilter::options()).prompt()?;
        }
        BrowseAction::Price => {
            selection.price_range = Select::new("Price", PriceRange::options()).prompt()?;
        }
        BrowseAction::Distance => {
            selection.distance_range = Select::new("Distance", DistanceRange::options()).prompt()?;
        }
        BrowseAction::Rating => {
            selection.rating_floor = Select::new("Rating", RatingFloor::options()).prompt()?;
        }
        BrowseAction::Date => {
            let default = match selection.date {
                DateFilter::On(date) => date,
                _ => today,
            };
            selection.date = match DateSelect::new("Date (Esc to clear)")
                .with_default(default)
                .prompt_skippable()?
            {
                Some(date) => DateFilter::On(date),
                None => DateFilter::Any,
            };
        }
        BrowseAction::SwitchDay => {
            state.active_day = Select::new("Day", WeekendDay::options()).prompt()?;
        }
        _ => {}
    }
    Ok(())
}

fn finish_on_prompt_error(error: InquireError) -> Result<(), CliError> {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            ui::info("Goodbye");
            Ok(())
        }
        other => {
            ui::error_with_details("Interactive prompt failed", &other.to_string());
            Err(CliError::PromptError)
        }
    }
}
