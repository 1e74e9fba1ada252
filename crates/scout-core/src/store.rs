//! JSON-file record store.
//!
//! The whole collection is read once when the store opens and rewritten in
//! full after every mutation. Load and save failures never reach the caller
//! of the plain methods: a failed load keeps whatever was in memory, a failed
//! save is logged and the next mutation tries again. Use [`RecordStore::try_load`]
//! and [`RecordStore::try_save`] when the error matters.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::event::{StoreEvent, Subscribers};
use crate::record::{RecordId, ScoutRecord};

/// In-memory record collection backed by one JSON file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    pretty: bool,
    records: Vec<ScoutRecord>,
    subscribers: Subscribers,
}

impl RecordStore {
    /// Resolve the file path from `config` and load whatever is there.
    ///
    /// Only path resolution can fail; an unreadable file yields an empty store.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.resolve_path()?;
        let mut store = Self::at_path(path);
        store.pretty = config.pretty;
        store.load();
        Ok(store)
    }

    /// An empty store bound to `path`. Does not touch the filesystem.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            records: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in display order.
    pub fn records(&self) -> &[ScoutRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&ScoutRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of the first record with `id`.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register for change events. Every mutation sends its event before
    /// returning, after the file has been written.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.subscribers.subscribe()
    }

    /// Read and decode the backing file without touching the in-memory state.
    ///
    /// Decoding is all-or-nothing: one bad object, or one rating outside its
    /// scale, fails the whole file.
    pub fn try_load(&self) -> Result<Vec<ScoutRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        let records: Vec<ScoutRecord> = serde_json::from_str(&content)?;
        for record in &records {
            record.validate()?;
        }
        Ok(records)
    }

    /// Replace the in-memory records with the file's contents.
    ///
    /// On any failure the current records are kept.
    pub fn load(&mut self) {
        match self.try_load() {
            Ok(records) => {
                tracing::info!("Loaded {} records from {:?}", records.len(), self.path);
                self.records = records;
                let count = self.records.len();
                self.subscribers.notify(StoreEvent::Loaded { count });
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("No record file at {:?} yet", self.path);
            }
            Err(e) => {
                tracing::warn!("Failed to load records from {:?}: {}", self.path, e);
            }
        }
    }

    /// Serialize every record and overwrite the backing file.
    pub fn try_save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = if self.pretty {
            serde_json::to_string_pretty(&self.records)?
        } else {
            serde_json::to_string(&self.records)?
        };
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Like [`try_save`](Self::try_save), but failures are only logged.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!("Failed to save records to {:?}: {}", self.path, e);
        }
    }

    /// Append a record and persist.
    ///
    /// Returns false without changing anything when a record with the same
    /// id is already stored.
    pub fn add(&mut self, record: ScoutRecord) -> bool {
        if self.position(record.id).is_some() {
            tracing::warn!("Record {} already exists, not adding", record.id);
            return false;
        }
        let id = record.id;
        self.records.push(record);
        self.save();
        self.subscribers.notify(StoreEvent::Added(id));
        true
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// Returns false, and does nothing else, when no record has that id.
    pub fn update(&mut self, record: ScoutRecord) -> bool {
        let Some(index) = self.position(record.id) else {
            tracing::debug!("Record {} not found, update ignored", record.id);
            return false;
        };
        let id = record.id;
        self.records[index] = record;
        self.save();
        self.subscribers.notify(StoreEvent::Updated(id));
        true
    }

    /// Remove the records at `indices` in one pass and persist.
    ///
    /// Positions refer to the collection as it was before the call, so
    /// `[0, 2]` removes the first and third records. Duplicate and
    /// out-of-range positions are ignored. Returns the removed ids in their
    /// former order; nothing is saved when the result is empty.
    pub fn delete(&mut self, indices: &[usize]) -> Vec<RecordId> {
        let mut targets: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.records.len())
            .collect();
        targets.sort_unstable();
        targets.dedup();

        // Highest first so earlier removals don't shift later targets.
        let mut removed: Vec<RecordId> = targets
            .iter()
            .rev()
            .map(|&i| self.records.remove(i).id)
            .collect();
        if removed.is_empty() {
            return removed;
        }
        removed.reverse();

        self.save();
        self.subscribers.notify(StoreEvent::Deleted(removed.clone()));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{DesignChoice, RobotDesign};
    use crate::error::StoreError;
    use crate::record::RecordError;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::at_path(dir.path().join("records.json"));
        (dir, store)
    }

    fn make_record(name: &str) -> ScoutRecord {
        let mut record = ScoutRecord::new(name);
        record.selected_option = DesignChoice::Listed(RobotDesign::DualFlywheel);
        record.scale = 5;
        record.number_list = vec![1.0, 2.5];
        record
    }

    fn reloaded(store: &RecordStore) -> Vec<ScoutRecord> {
        let mut fresh = RecordStore::at_path(store.path());
        fresh.load();
        fresh.records().to_vec()
    }

    #[test]
    fn add_persists_immediately() {
        let (_dir, mut store) = temp_store();
        let record = make_record("1234");
        assert!(store.add(record.clone()));

        assert_eq!(store.records(), &[record.clone()]);
        assert_eq!(reloaded(&store), vec![record]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let (_dir, mut store) = temp_store();
        let record = make_record("1234");
        store.add(record.clone());

        let mut twin = make_record("5678");
        twin.id = record.id;
        assert!(!store.add(twin));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "1234");
    }

    #[test]
    fn update_replaces_in_place() {
        let (_dir, mut store) = temp_store();
        let first = make_record("1");
        let second = make_record("2");
        store.add(first.clone());
        store.add(second.clone());

        let mut edited = first.clone();
        edited.name = "1a".to_string();
        edited.number_list.clear();
        assert!(store.update(edited.clone()));

        assert_eq!(store.records(), &[edited.clone(), second.clone()]);
        assert_eq!(reloaded(&store), vec![edited, second]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let (_dir, mut store) = temp_store();
        store.add(make_record("1"));
        let events = store.subscribe();
        let before = store.records().to_vec();

        assert!(!store.update(make_record("ghost")));
        assert_eq!(store.records(), before.as_slice());
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn delete_multiple_indices() {
        let (_dir, mut store) = temp_store();
        let records: Vec<_> = (0..5).map(|i| make_record(&i.to_string())).collect();
        for r in &records {
            store.add(r.clone());
        }

        let removed = store.delete(&[1, 3]);
        assert_eq!(removed, vec![records[1].id, records[3].id]);

        let expected = vec![records[0].clone(), records[2].clone(), records[4].clone()];
        assert_eq!(store.records(), expected.as_slice());
        assert_eq!(reloaded(&store), expected);
    }

    #[test]
    fn delete_order_of_indices_does_not_matter() {
        let (_dir, mut store) = temp_store();
        let records: Vec<_> = (0..4).map(|i| make_record(&i.to_string())).collect();
        for r in &records {
            store.add(r.clone());
        }

        store.delete(&[2, 0, 2]);
        assert_eq!(store.records(), &[records[1].clone(), records[3].clone()]);
    }

    #[test]
    fn delete_out_of_range_is_noop() {
        let (_dir, mut store) = temp_store();
        store.add(make_record("only"));
        let events = store.subscribe();

        assert!(store.delete(&[1, 7]).is_empty());
        assert_eq!(store.len(), 1);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn load_missing_file_keeps_empty() {
        let (_dir, mut store) = temp_store();
        store.load();
        assert!(store.is_empty());
        assert!(store.try_load().unwrap_err().is_not_found());
    }

    #[test]
    fn load_malformed_keeps_prior_records() {
        let (_dir, mut store) = temp_store();
        let record = make_record("1");
        store.add(record.clone());

        std::fs::write(store.path(), "{ not json").unwrap();
        store.load();
        assert_eq!(store.records(), &[record]);
    }

    #[test]
    fn load_rejects_out_of_range_scale() {
        let (_dir, mut store) = temp_store();
        let mut bad = make_record("1");
        bad.scale = 200;
        std::fs::write(store.path(), serde_json::to_string(&vec![bad]).unwrap()).unwrap();

        store.load();
        assert!(store.is_empty());
        assert!(matches!(
            store.try_load(),
            Err(StoreError::InvalidRecord(RecordError::ScaleOutOfRange { value: 200, .. }))
        ));
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("records.json");
        std::fs::create_dir(&path).unwrap();
        let mut store = RecordStore::at_path(&path);

        assert!(store.add(make_record("1")));
        assert_eq!(store.len(), 1);
        assert!(store.try_save().is_err());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("records.json");
        let mut store = RecordStore::at_path(&path);
        store.add(make_record("1"));
        assert!(path.exists());
    }

    #[test]
    fn compact_output_when_not_pretty() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig {
            pretty: false,
            ..StoreConfig::in_dir(dir.path())
        };
        let mut store = RecordStore::open(&config).unwrap();
        store.add(make_record("1"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains('\n'));
    }

    #[test]
    fn events_follow_mutations() {
        let (_dir, mut store) = temp_store();
        let rx = store.subscribe();

        let record = make_record("1");
        let id = record.id;
        store.add(record.clone());
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::Added(id));

        store.update(record);
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::Updated(id));

        store.delete(&[0]);
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::Deleted(vec![id]));

        store.load();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::Loaded { count: 0 });
    }

    #[test]
    fn event_arrives_after_file_is_written() {
        let (_dir, mut store) = temp_store();
        let rx = store.subscribe();
        let record = make_record("1");
        store.add(record.clone());

        // By the time the event is readable the file already holds the record.
        let StoreEvent::Added(id) = rx.try_recv().unwrap() else {
            panic!("expected Added");
        };
        assert_eq!(reloaded(&store)[0].id, id);
    }
}
