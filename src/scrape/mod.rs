//! Extraction-and-normalization pipeline for the source ETF table.

mod date;
mod extract;
mod number;
mod runner;
mod text;
mod update_date;

pub use date::{format_date, month_number};
pub use extract::{extract_records, Extraction};
pub use number::parse_number;
pub use runner::Scraper;
pub use text::clean_text;
pub use update_date::locate_update_date;
