//! Append-only snapshot store backed by a JSON-lines file.
//!
//! Each scrape run appends its full record batch. Records of one run
//! share a `scraped_at` timestamp, which doubles as the session key for
//! the latest-snapshot and statistics queries.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::StoreError;
use crate::model::EtfRecord;

/// Aggregate statistics over everything stored so far.
#[derive(Debug, PartialEq, Eq)]
pub struct StoreStats {
    pub total_records: usize,
    pub unique_tickers: usize,
    pub scrape_sessions: usize,
}

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one run's records to the store.
    pub fn save(&self, records: &[EtfRecord]) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        tracing::info!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<EtfRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }

    /// Returns the records of the most recent scrape run, or an empty
    /// vector when nothing has been stored yet.
    pub fn latest_snapshot(&self) -> Result<Vec<EtfRecord>, StoreError> {
        let records = self.load_all()?;
        let Some(latest) = records.iter().map(|r| r.scraped_at).max() else {
            return Ok(Vec::new());
        };
        Ok(records
            .into_iter()
            .filter(|r| r.scraped_at == latest)
            .collect())
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let records = self.load_all()?;
        let tickers: HashSet<&str> = records.iter().map(|r| r.ticker.as_str()).collect();
        let sessions: HashSet<DateTime<Local>> =
            records.iter().map(|r| r.scraped_at).collect();
        Ok(StoreStats {
            total_records: records.len(),
            unique_tickers: tickers.len(),
            scrape_sessions: sessions.len(),
        })
    }

    /// Returns the latest snapshot's funds ordered by net asset value,
    /// largest first. Funds without a reported NAV sort last.
    pub fn top_by_nav(&self, limit: usize) -> Result<Vec<EtfRecord>, StoreError> {
        let mut latest = self.latest_snapshot()?;
        latest.sort_by(|a, b| {
            b.nav_million_rub
                .unwrap_or(f64::MIN)
                .partial_cmp(&a.nav_million_rub.unwrap_or(f64::MIN))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        latest.truncate(limit);
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn record(ticker: &str, nav: Option<f64>, scraped_at: DateTime<Local>) -> EtfRecord {
        EtfRecord {
            scraped_at,
            ticker: ticker.to_string(),
            trade_status: "Торгуется".to_string(),
            management_co: "УК".to_string(),
            asset_class: "Акции".to_string(),
            ter_percent: Some(1.0),
            ter_direction: "↓".to_string(),
            fund_name: format!("Фонд {}", ticker),
            management_style: "Пассивный".to_string(),
            target_index: "Индекс".to_string(),
            currency: "RUB".to_string(),
            start_date: "01.01.2020".to_string(),
            info_icon: "".to_string(),
            price_change_6m: Some(5.0),
            price_change_2024: None,
            price_change_2023: Some(10.0),
            price_change_2022: Some(-20.0),
            price_change_2021: Some(15.0),
            price_change_2020: Some(20.0),
            nav_million_rub: nav,
            last_update_date: "2024-03-05".to_string(),
        }
    }

    fn run_one() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
    }

    fn run_two() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn save_then_latest_snapshot_round_trips() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("etf.jsonl"));

        let records = vec![
            record("SBMX", Some(24000.0), run_one()),
            record("TMOS", Some(12000.0), run_one()),
        ];
        store.save(&records).unwrap();

        let latest = store.latest_snapshot().unwrap();
        assert_eq!(latest, records);
    }

    #[test]
    fn latest_snapshot_only_returns_newest_run() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("etf.jsonl"));

        store
            .save(&[record("SBMX", Some(100.0), run_one())])
            .unwrap();
        store
            .save(&[
                record("SBMX", Some(110.0), run_two()),
                record("TMOS", Some(50.0), run_two()),
            ])
            .unwrap();

        let latest = store.latest_snapshot().unwrap();
        assert_eq!(latest.len(), 2);
        assert!(latest.iter().all(|r| r.scraped_at == run_two()));
    }

    #[test]
    fn stats_count_records_tickers_and_sessions() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("etf.jsonl"));

        store
            .save(&[
                record("SBMX", Some(100.0), run_one()),
                record("TMOS", Some(50.0), run_one()),
            ])
            .unwrap();
        store
            .save(&[record("SBMX", Some(110.0), run_two())])
            .unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(
            stats,
            StoreStats {
                total_records: 3,
                unique_tickers: 2,
                scrape_sessions: 2,
            }
        );
    }

    #[test]
    fn top_by_nav_orders_and_limits() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("etf.jsonl"));

        store
            .save(&[
                record("AAAA", Some(10.0), run_one()),
                record("BBBB", Some(300.0), run_one()),
                record("CCCC", None, run_one()),
                record("DDDD", Some(200.0), run_one()),
            ])
            .unwrap();

        let top = store.top_by_nav(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].ticker, "BBBB");
        assert_eq!(top[1].ticker, "DDDD");
    }

    #[test]
    fn funds_without_nav_sort_last() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("etf.jsonl"));

        store
            .save(&[
                record("NONE", None, run_one()),
                record("SOME", Some(1.0), run_one()),
            ])
            .unwrap();

        let top = store.top_by_nav(10).unwrap();
        assert_eq!(top[0].ticker, "SOME");
        assert_eq!(top[1].ticker, "NONE");
    }

    #[test]
    fn empty_store_queries_are_empty() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing.jsonl"));

        assert!(store.latest_snapshot().unwrap().is_empty());
        assert!(store.top_by_nav(10).unwrap().is_empty());
        assert_eq!(
            store.stats().unwrap(),
            StoreStats {
                total_records: 0,
                unique_tickers: 0,
                scrape_sessions: 0,
            }
        );
    }
}
