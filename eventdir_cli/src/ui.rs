//! Terminal output helpers.
//!
//! Status lines go to stderr so that `--format json` output on stdout stays
//! machine readable.

use console::{Style, style};
use eventdir_core::{Category, DayBuckets, Event, WeekendDates, WeekendDay};
use serde::Serialize;
use std::fmt;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable event cards
    #[default]
    Pretty,
    /// JSON on stdout
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(msg: &str) {
    eprintln!("{}", style(msg).bold().cyan());
}

pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green(), msg);
}

pub fn info(msg: &str) {
    eprintln!("{} {}", style("•").blue(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow(), style(msg).yellow());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), style(msg).red());
}

pub fn error_with_details(msg: &str, details: &str) {
    error(msg);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(msg: &str) {
    log::debug!("{}", msg);
}

/// Prints any serializable value as pretty JSON on stdout.
pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

fn category_style(category: &Category) -> Style {
    match category {
        Category::Music => Style::new().magenta(),
        Category::Food => Style::new().yellow(),
        Category::Arts => Style::new().red(),
        Category::Sports => Style::new().blue(),
        Category::Business => Style::new().green(),
        Category::Other(_) => Style::new().white(),
    }
}

fn tag_style(tag: &str) -> Style {
    match tag {
        "Free" | "Outdoor" | "All Levels" => Style::new().green(),
        "21+" | "Charity" => Style::new().red(),
        "Premium" | "Live Music" | "Networking" => Style::new().magenta(),
        "Family Friendly" | "Food Available" | "Early Morning" => Style::new().yellow(),
        "Interactive" | "Tech" => Style::new().cyan(),
        _ => Style::new().dim(),
    }
}

/// "N Events Found" plus the active filter badges.
pub fn results_heading(count: usize, badges: &[String]) {
    let noun = if count == 1 { "Event" } else { "Events" };
    let mut line = format!("{} {} Found", style(count).bold(), noun);
    for badge in badges {
        line.push_str(&format!("  [{}]", style(badge).cyan()));
    }
    println!("{}", line);
}

pub fn empty_state() {
    println!();
    println!("{}", style("No events found").bold());
    println!("{}", style("Try adjusting your filters to see more events").dim());
}

pub fn pretty_output_event_list(events: &[&Event]) {
    for event in events {
        println!();
        print_event_card(event);
    }
}

pub fn pretty_output_event_single(event: &Event) {
    print_event_card(event);
    println!("   {}", style(format!("ID {}", event.id)).dim());
    if !event.image.is_empty() {
        println!("   {}", style(&event.image).dim().underlined());
    }
}

fn print_event_card(event: &Event) {
    let category = category_style(&event.category).apply_to(format!("[{}]", event.category));
    let price = if event.is_free() {
        style(event.display_price()).green().bold()
    } else {
        style(event.display_price()).bold()
    };

    println!(
        "{} {}  {} {}",
        category,
        style(&event.title).bold(),
        style("★").yellow(),
        event.rating
    );
    println!("   {}", style(&event.description).dim());
    println!("   {} at {}", event.display_date(), event.time);
    println!("   {} ({})", event.location, event.display_distance());
    println!("   {} going  {}", event.attendees, price);

    if !event.tags.is_empty() {
        let tags: Vec<String> = event
            .tags
            .iter()
            .map(|t| tag_style(t).apply_to(t).to_string())
            .collect();
        println!("   {}", tags.join(" · "));
    }
}

/// One line per weekend day with its count, marking the active tab.
pub fn pretty_output_day_tabs(weekend: &WeekendDates, buckets: &DayBuckets, active: Option<WeekendDay>) {
    let tabs: Vec<String> = WeekendDay::OPTIONS
        .iter()
        .map(|day| {
            let label = format!("{} ({})", weekend.tab_label(*day), buckets.get(*day).len());
            if active == Some(*day) {
                style(label).bold().underlined().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("{}", tabs.join("   "));
}

pub fn pretty_output_day(weekend: &WeekendDates, day: WeekendDay, events: &[&Event]) {
    println!();
    println!("{}", style(weekend.tab_label(day)).bold().cyan());
    if events.is_empty() {
        println!("{}", style("No events on this day").dim());
    } else {
        pretty_output_event_list(events);
    }
}

pub fn pretty_output_label_list(title: &str, labels: &[String]) {
    println!("{}", style(title).bold());
    for label in labels {
        println!("  {}", label);
    }
}
