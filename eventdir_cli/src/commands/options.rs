use eventdir_core::{CategoryFilter, DistanceRange, PriceRange, RatingFloor, WeekendDay};
use serde::Serialize;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Every label each filter accepts, in dropdown order.
#[derive(Debug, Serialize, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub price_ranges: Vec<String>,
    pub distances: Vec<String>,
    pub ratings: Vec<String>,
    pub days: Vec<String>,
}

impl FilterOptions {
    pub fn collect() -> Self {
        Self {
            categories: CategoryFilter::options()
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            price_ranges: PriceRange::options()
                .iter()
                .map(|p| p.label().to_string())
                .collect(),
            distances: DistanceRange::options()
                .iter()
                .map(|d| d.label().to_string())
                .collect(),
            ratings: RatingFloor::options().iter().map(|r| r.label()).collect(),
            days: WeekendDay::options()
                .iter()
                .map(|d| d.label().to_lowercase())
                .collect(),
        }
    }
}

/// Prints the available filter choices.
pub fn list_options(output_format: OutputFormat) -> Result<(), CliError> {
    let options = FilterOptions::collect();

    match output_format {
        OutputFormat::Pretty => {
            ui::header("Filter options");
            ui::pretty_output_label_list("Category (--category)", &options.categories);
            ui::pretty_output_label_list("Price (--price)", &options.price_ranges);
            ui::pretty_output_label_list("Distance (--distance)", &options.distances);
            ui::pretty_output_label_list("Rating (--rating)", &options.ratings);
            ui::pretty_output_label_list("Weekend day (--day)", &options.days);
        }
        OutputFormat::Json => ui::json_output(&options),
    }

    Ok(())
}
