//! Fetch CS2 match statistics for two tracked players from leetify.com and
//! aggregate them into game-by-game, per-player and per-map summaries.

pub use client::DuoStatsClient;
pub use config::{DuoConfig, TrackedPlayer};
pub use error::{Result, StatsError};
pub use leetify::matches::list::parse_match_ids_html;
pub use model::*;
pub use report::{DuoReport, ReportOptions};
pub use stats::{filter_by_date_range, paginate, summarize, summarize_maps, DateRange, Page};

mod client;
pub mod config;
pub mod error;
mod leetify;
pub mod model;
pub mod report;
pub mod stats;
