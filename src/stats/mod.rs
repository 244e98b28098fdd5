//! Pure aggregation over already-fetched match groups.

mod filter;
mod maps;
mod players;

pub use filter::{filter_by_date_range, paginate, DateRange, Page};
pub use maps::summarize_maps;
pub use players::summarize;
