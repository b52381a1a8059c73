//! Scrape run orchestration: fetch, extract, persist, report.

use chrono::Local;

use crate::error::Error;
use crate::fetch::PageFetcher;
use crate::store::SnapshotStore;

use super::extract::extract_records;

pub struct Scraper<F: PageFetcher> {
    fetcher: F,
    store: SnapshotStore,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, store: SnapshotStore) -> Self {
        Self { fetcher, store }
    }

    /// Runs one full scrape and returns the number of records persisted.
    ///
    /// Every record of the run is stamped with the same wall-clock time.
    /// Fetch failures, an empty extraction and store failures all abort
    /// the run; per-row and per-cell problems are absorbed downstream.
    pub async fn run(&self) -> Result<usize, Error> {
        tracing::info!(
            "starting scrape run: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        let html = self.fetcher.fetch().await?;
        let extraction = extract_records(&html, Local::now())?;

        tracing::info!("update date from source: '{}'", extraction.update_date);

        self.store.save(&extraction.records)?;
        tracing::info!(
            "scrape run finished: {} records saved",
            extraction.records.len()
        );
        Ok(extraction.records.len())
    }

    /// Logs aggregate store statistics.
    pub fn log_stats(&self) -> Result<(), Error> {
        let stats = self.store.stats()?;
        tracing::info!("total records: {}", stats.total_records);
        tracing::info!("unique tickers: {}", stats.unique_tickers);
        tracing::info!("scrape sessions: {}", stats.scrape_sessions);
        Ok(())
    }

    /// Logs the largest funds of the latest snapshot by net asset value.
    pub fn log_top_funds(&self, limit: usize) -> Result<(), Error> {
        for (i, etf) in self.store.top_by_nav(limit)?.iter().enumerate() {
            tracing::info!(
                "{:2}. {:<8} | {:<40} | TER: {:>5.2}% | NAV: {:>10.0} mln",
                i + 1,
                etf.ticker,
                truncate(&etf.fund_name, 40),
                etf.ter_percent.unwrap_or(0.0),
                etf.nav_million_rub.unwrap_or(0.0),
            );
        }
        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
