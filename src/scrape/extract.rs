//! Table walker: turns a fetched HTML document into typed records.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::model::EtfRecord;

use super::number::parse_number;
use super::text::clean_text;
use super::update_date::locate_update_date;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// Result of one extraction run over a fetched document.
#[derive(Debug)]
pub struct Extraction {
    pub records: Vec<EtfRecord>,
    /// Page-wide update date shared by every record, possibly empty.
    pub update_date: String,
    /// Table rows visited, header included.
    pub rows_processed: usize,
    /// Body rows dropped for having too few cells.
    pub rows_rejected: usize,
}

/// Walks the first table of the document and produces one record per
/// usable body row.
///
/// The update date is located once over the full page text and stamped
/// into every record, together with the caller-supplied `scraped_at`.
/// Row index 0 is skipped as the header, and rows with fewer than 20
/// cells are rejected wholesale; there are no partial records. Fails
/// only when the whole document yields zero records.
pub fn extract_records(
    html: &str,
    scraped_at: DateTime<Local>,
) -> Result<Extraction, ExtractError> {
    let document = Html::parse_document(html);

    let page_text: String = document.root_element().text().collect();
    let update_date = locate_update_date(&page_text);
    if update_date.is_empty() {
        tracing::warn!("update date was not found on the page");
    }

    let mut records = Vec::new();
    let mut rows_processed = 0usize;
    let mut rows_rejected = 0usize;

    if let Some(table) = document.select(&TABLE).next() {
        for (index, row) in table.select(&ROW).enumerate() {
            rows_processed += 1;
            if index == 0 {
                // header
                continue;
            }
            match parse_table_row(row, scraped_at, &update_date) {
                Some(record) => records.push(record),
                None => rows_rejected += 1,
            }
        }
    } else {
        tracing::warn!("no table found in document");
    }

    tracing::info!(
        "rows processed: {}, rows rejected: {}, records extracted: {}",
        rows_processed,
        rows_rejected,
        records.len()
    );

    if records.is_empty() {
        return Err(ExtractError::NoRecords);
    }

    Ok(Extraction {
        records,
        update_date,
        rows_processed,
        rows_rejected,
    })
}

/// Maps one table row to a record, or `None` when the row is too short.
fn parse_table_row(
    row: ElementRef<'_>,
    scraped_at: DateTime<Local>,
    update_date: &str,
) -> Option<EtfRecord> {
    let cols: Vec<String> = row
        .select(&CELL)
        .map(|cell| cell.text().collect::<String>())
        .collect();

    if cols.len() < 20 {
        tracing::debug!("row rejected: only {} columns", cols.len());
        return None;
    }

    // Column 3 is a layout gap in the source table and is intentionally
    // not mapped.
    Some(EtfRecord {
        scraped_at,
        ticker: clean_text(&cols[0]),
        trade_status: clean_text(&cols[1]),
        management_co: clean_text(&cols[2]),
        asset_class: clean_text(&cols[4]),
        ter_percent: parse_number(&cols[5]),
        ter_direction: clean_text(&cols[6]),
        fund_name: clean_text(&cols[7]),
        management_style: clean_text(&cols[8]),
        target_index: clean_text(&cols[9]),
        currency: clean_text(&cols[10]),
        start_date: clean_text(&cols[11]),
        info_icon: clean_text(&cols[12]),
        price_change_6m: parse_number(&cols[13]),
        price_change_2024: parse_number(&cols[14]),
        price_change_2023: parse_number(&cols[15]),
        price_change_2022: parse_number(&cols[16]),
        price_change_2021: parse_number(&cols[17]),
        price_change_2020: parse_number(&cols[18]),
        nav_million_rub: parse_number(&cols[19]),
        last_update_date: update_date.to_string(),
    })
}
