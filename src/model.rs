//! Data model for scraped ETF snapshots.

use chrono::{DateTime, Local};
use serde_derive::{Deserialize, Serialize};

/// One normalized row of the source ETF table, produced by one scrape run.
///
/// String fields are never null; absent data becomes an empty string.
/// Numeric fields keep absence distinct from zero: a dash sentinel or an
/// unparseable cell stays `None`, never `0.0`. All records of one run
/// carry the same `scraped_at` and `last_update_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfRecord {
    pub scraped_at: DateTime<Local>,
    pub ticker: String,
    pub trade_status: String,
    pub management_co: String,
    pub asset_class: String,
    pub ter_percent: Option<f64>,
    pub ter_direction: String,
    pub fund_name: String,
    pub management_style: String,
    pub target_index: String,
    pub currency: String,
    pub start_date: String,
    pub info_icon: String,
    pub price_change_6m: Option<f64>,
    pub price_change_2024: Option<f64>,
    pub price_change_2023: Option<f64>,
    pub price_change_2022: Option<f64>,
    pub price_change_2021: Option<f64>,
    pub price_change_2020: Option<f64>,
    pub nav_million_rub: Option<f64>,
    /// Update date discovered on the page, `YYYY-MM-DD`, or empty when
    /// the page carried none.
    pub last_update_date: String,
}
