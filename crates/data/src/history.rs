//! File-backed persistence for the observation history.

use crate::error::DataError;
use spot_domain::Observation;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Append-only store for price observations, persisted as a single
/// pretty-printed JSON array.
///
/// The file is fully rewritten on every append, so the persisted sequence
/// is always exactly the in-memory sequence as of the last successful
/// save. Single-threaded, single-process access only.
pub struct HistoryStore {
    path: PathBuf,
    observations: Vec<Observation>,
}

impl HistoryStore {
    /// Creates an empty store backed by `path` without touching the
    /// filesystem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            observations: Vec::new(),
        }
    }

    /// Creates a store backed by `path` and loads any persisted history.
    ///
    /// A missing file means a fresh start. An unreadable or unparseable
    /// file is reported and degrades to an empty history; it is never
    /// fatal.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);

        if !store.path.exists() {
            debug!(path = %store.path.display(), "No history file, starting fresh");
            return store;
        }

        match Self::read_observations(&store.path) {
            Ok(observations) => {
                info!(
                    points = observations.len(),
                    path = %store.path.display(),
                    "Loaded historical price points"
                );
                store.observations = observations;
            }
            Err(e) => {
                warn!(
                    path = %store.path.display(),
                    error = %e,
                    "Failed to load history, starting fresh"
                );
            }
        }

        store
    }

    fn read_observations(path: &Path) -> Result<Vec<Observation>, DataError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Appends an observation and rewrites the persisted file.
    ///
    /// A save failure is reported but does not roll back the append; the
    /// observation is retained for the session even if not durable.
    pub fn append_and_save(&mut self, observation: Observation) {
        self.observations.push(observation);

        if let Err(e) = self.save() {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to save history, keeping observation in memory"
            );
        }
    }

    /// Rewrites the full observation sequence to the backing file.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self) -> Result<(), DataError> {
        let contents = serde_json::to_string_pretty(&self.observations)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// The persisted observations, in insertion (chronological) order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations held in memory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the store holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn obs(price: rust_decimal::Decimal) -> Observation {
        Observation::new(Utc::now(), price, Some(dec!(1000000)), Some(dec!(1.5)))
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join("history.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json at all").unwrap();

        let store = HistoryStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_and_save_persists_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(&path);
        store.append_and_save(obs(dec!(43250.17)));

        let contents = fs::read_to_string(&path).unwrap();
        // Pretty-printed, human-readable output.
        assert!(contents.contains('\n'));
        assert!(contents.contains("43250.17"));

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.observations(), store.observations());
    }

    #[test]
    fn test_load_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(&path);
        store.append_and_save(obs(dec!(100)));
        store.append_and_save(obs(dec!(200.000001)));
        let first = fs::read(&path).unwrap();

        let reloaded = HistoryStore::load(&path);
        reloaded.save().unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_failure_keeps_in_memory_append() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be written as a file.
        let mut store = HistoryStore::new(dir.path());

        store.append_and_save(obs(dec!(100)));
        assert_eq!(store.len(), 1);
        assert!(store.save().is_err());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(&path);
        for price in [dec!(3), dec!(1), dec!(2)] {
            store.append_and_save(obs(price));
        }

        let reloaded = HistoryStore::load(&path);
        let prices: Vec<_> = reloaded.observations().iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![dec!(3), dec!(1), dec!(2)]);
    }
}
