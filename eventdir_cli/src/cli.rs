use clap::{Args, Parser, Subcommand};
use eventdir_core::{CategoryFilter, DistanceRange, FilterSelection, PriceRange, RatingFloor};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the eventdir CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "eventdir")]
#[command(version, about = "eventdir: Discover local events from the terminal.")]
pub struct EventDirCli {
    /// JSON file of events. The built-in sample directory is used when omitted.
    #[arg(short, long, global = true, env = "EVENTDIR_EVENTS")]
    pub events: Option<PathBuf>,

    /// Date to treat as today when finding weekends (YYYY-MM-DD).
    #[arg(short, long, global = true, env = "EVENTDIR_TODAY")]
    pub today: Option<String>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: EventDirCommand,
}

/// Defines the available subcommands of the eventdir CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum EventDirCommand {
    /// List events matching the filters.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Only show events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one weekend's events, Friday to Sunday.
    Weekend {
        #[command(flatten)]
        filters: FilterArgs,
        /// Weeks away from this weekend (negative for past weekends)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
        /// Only show one day (friday, saturday or sunday)
        #[arg(long)]
        day: Option<String>,
    },
    /// Get an event by ID.
    Get {
        /// Event ID (e.g. 3)
        id: u32,
    },
    /// Show the choices available for each filter.
    Options,
    /// Browse events interactively.
    Browse,
}

/// Filter flags shared by the listing commands. Values are the same labels
/// shown by `eventdir options`.
#[derive(Args, Debug, Default, PartialEq)]
pub struct FilterArgs {
    /// Text to find in titles or descriptions
    #[arg(short, long)]
    pub search: Option<String>,
    /// Category (e.g. "Food")
    #[arg(short, long)]
    pub category: Option<String>,
    /// Price range (e.g. "Free" or "$26-50")
    #[arg(short, long)]
    pub price: Option<String>,
    /// Distance range (e.g. "Under 2 miles")
    #[arg(short, long)]
    pub distance: Option<String>,
    /// Minimum rating (e.g. "4.5+ stars")
    #[arg(short, long)]
    pub rating: Option<String>,
}

impl FilterArgs {
    /// Builds a selection from the flags. Flags left out stay inactive.
    pub fn to_selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::new();
        if let Some(search) = &self.search {
            selection = selection.with_search(search.as_str());
        }
        if let Some(category) = &self.category {
            selection = selection.with_category(CategoryFilter::from_label(category));
        }
        if let Some(price) = &self.price {
            selection = selection.with_price_range(PriceRange::from_label(price));
        }
        if let Some(distance) = &self.distance {
            selection = selection.with_distance_range(DistanceRange::from_label(distance));
        }
        if let Some(rating) = &self.rating {
            selection = selection.with_rating_floor(RatingFloor::from_label(rating));
        }
        selection
    }
}
