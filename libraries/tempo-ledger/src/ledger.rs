//! Whole-object size ledger over the preference slot

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::store::PreferenceStore;

/// Preference key holding the serialized ledger object
pub const LEDGER_SLOT_KEY: &str = "external_download_metadata";

// Read-modify-write over the shared slot is not otherwise atomic, so
// every operation serializes under this one process-wide lock, even
// across ledger instances sharing a store.
static LEDGER_LOCK: Mutex<()> = Mutex::new(());

/// Durable map from download keys to strictly positive sizes in bytes
///
/// Every operation reads the whole JSON object out of the slot, mutates
/// it, and writes it back, serialized under one process-wide lock so
/// concurrent callers observe a linear history. There are no partial-key
/// durability guarantees beyond whole-object replace; the expected
/// cardinality is tens to low hundreds of keys.
pub struct SizeLedger {
    store: Arc<dyn PreferenceStore>,
}

impl SizeLedger {
    /// Create a ledger over the given preference store
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Record the size of an externally downloaded item
    ///
    /// A zero size or empty key is a no-op: non-positive sizes are never
    /// persisted.
    pub fn record_size(&self, key: &str, size: u64) {
        if key.is_empty() || size == 0 {
            debug!(key = %key, size, "Ignoring unusable size record");
            return;
        }
        let _guard = LEDGER_LOCK.lock().unwrap();
        let mut object = self.read_all();
        object.insert(key.to_string(), Value::from(size));
        self.write_all(&object);
        debug!(key = %key, size, "Recorded download size");
    }

    /// Remove a key from the ledger
    ///
    /// Idempotent: removing an absent key changes nothing.
    pub fn remove(&self, key: &str) {
        let _guard = LEDGER_LOCK.lock().unwrap();
        let mut object = self.read_all();
        if object.remove(key).is_some() {
            self.write_all(&object);
            debug!(key = %key, "Removed download size");
        }
    }

    /// Look up the recorded size for a key
    ///
    /// Returns `None` both for a missing key and for a stored value that
    /// is not strictly positive, so corrupt historical writes read as
    /// absent rather than as a bogus size.
    pub fn get_size(&self, key: &str) -> Option<u64> {
        let _guard = LEDGER_LOCK.lock().unwrap();
        self.read_all().get(key).and_then(positive_size)
    }

    /// All recorded sizes, with non-positive entries filtered out
    pub fn snapshot(&self) -> HashMap<String, u64> {
        let _guard = LEDGER_LOCK.lock().unwrap();
        self.read_all()
            .iter()
            .filter_map(|(key, value)| positive_size(value).map(|size| (key.clone(), size)))
            .collect()
    }

    /// Drop every key not in `keep`, in one transaction
    ///
    /// An empty `keep` set clears the ledger entirely.
    pub fn retain_only(&self, keep: &HashSet<String>) {
        if keep.is_empty() {
            self.clear();
            return;
        }
        let _guard = LEDGER_LOCK.lock().unwrap();
        let object = self.read_all();
        if object.is_empty() {
            return;
        }
        let retained: Map<String, Value> = object
            .into_iter()
            .filter(|(key, _)| keep.contains(key))
            .collect();
        self.write_all(&retained);
        debug!(kept = retained.len(), "Pruned download size ledger");
    }

    /// Remove every recorded size
    pub fn clear(&self) {
        let _guard = LEDGER_LOCK.lock().unwrap();
        self.write_all(&Map::new());
        debug!("Cleared download size ledger");
    }

    // Read the slot, treating missing or corrupt content as empty.
    fn read_all(&self) -> Map<String, Value> {
        let Some(raw) = self.store.get(LEDGER_SLOT_KEY) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(object)) => object,
            _ => {
                debug!("Ledger slot content unreadable, treating as empty");
                Map::new()
            }
        }
    }

    // The ledger is advisory metadata: a failed write must never fail
    // the download flow, so it is logged and swallowed.
    fn write_all(&self, object: &Map<String, Value>) {
        let serialized = Value::Object(object.clone()).to_string();
        if let Err(error) = self.store.put(LEDGER_SLOT_KEY, &serialized) {
            warn!(%error, "Failed to persist download size ledger");
        }
    }
}

fn positive_size(value: &Value) -> Option<u64> {
    value
        .as_i64()
        .filter(|size| *size > 0)
        .map(|size| size as u64)
        .or_else(|| value.as_u64().filter(|size| *size > 0))
}
