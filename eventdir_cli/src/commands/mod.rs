mod browse;
mod get;
mod list;
mod options;
mod weekend;

pub use browse::browse_events;
pub use get::get_event;
pub use list::list_events;
pub use options::list_options;
pub use weekend::show_weekend;
