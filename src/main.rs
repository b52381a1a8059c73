//! ETF table scraper.
//!
//! Periodically fetches a public HTML page listing exchange-traded funds,
//! normalizes the table into typed records and appends each run's snapshot
//! to a local store.
//!
//! # Architecture
//!
//! One scrape run is fetch -> extract -> persist. The extraction pipeline
//! (`scrape` module) is synchronous and pure over the fetched document;
//! the fetcher and the snapshot store are thin collaborators around it.
//! Runs repeat on a configurable interval until SIGTERM/SIGINT.
//!
//! # Error policy
//!
//! A malformed cell degrades to an absent value and a short row is
//! dropped; only a fetch failure, a store failure or a document yielding
//! zero records aborts a run. A failed run never aborts the process, the
//! next interval simply tries again.

mod config;
mod error;
mod fetch;
mod model;
mod scrape;
mod store;

use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{sleep, Duration};

#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let scraper_config = config::load_scraper_config().expect("Failed to load ScraperConfig");
    let store_config = config::load_store_config().expect("Failed to load StoreConfig");

    let interval = Duration::from_secs(scraper_config.interval_sec);
    let fetcher = fetch::HttpFetcher::new(scraper_config).expect("Failed to build HTTP client");
    let store = store::SnapshotStore::new(store_config.path);
    let scraper = scrape::Scraper::new(fetcher, store);

    let mut sig_term = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    tracing::info!("Running... Press Ctrl-C or send SIGTERM to terminate.");

    loop {
        run_once(&scraper).await;

        tokio::select! {
            _ = sig_term.recv() => {
                tracing::info!("Received SIGTERM. Exiting...");
                break;
            }
            _ = ctrl_c() => {
                tracing::info!("Received SIGINT. Exiting...");
                break;
            }
            _ = sleep(interval) => {}
        }
    }
}

/// Executes one scrape run and reports store-wide statistics afterwards.
/// Failures are logged, never propagated; the scrape loop must outlive a
/// bad run.
async fn run_once(scraper: &scrape::Scraper<fetch::HttpFetcher>) {
    match scraper.run().await {
        Ok(count) => {
            tracing::info!("scrape succeeded: {} records", count);
            if let Err(e) = scraper.log_stats() {
                tracing::error!("failed to read store statistics: {:?}", e);
            }
            if let Err(e) = scraper.log_top_funds(10) {
                tracing::error!("failed to read top funds: {:?}", e);
            }
        }
        Err(e) => tracing::error!("scrape run failed: {:?}", e),
    }
}
