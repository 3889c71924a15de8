//! Tempo - External Download Size Ledger
//!
//! A durable, crash-safe sparse map from download keys to file sizes.
//!
//! The host OS exposes no stat for files another component downloaded on
//! the app's behalf, so the download flow records each completed file's
//! size here and the UI reads it back. The whole map is stored as one
//! JSON object in a single string preference slot; every operation is a
//! whole-object read-modify-write serialized under one lock.
//!
//! Missing or corrupt slot content reads as an empty map, and
//! non-positive sizes are filtered on both write and read, so a bad
//! historical write can never propagate.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tempo_ledger::{MemoryStore, SizeLedger};
//!
//! let ledger = SizeLedger::new(Arc::new(MemoryStore::new()));
//! ledger.record_size("track-42", 3_145_728);
//! assert_eq!(ledger.get_size("track-42"), Some(3_145_728));
//! ledger.remove("track-42");
//! assert_eq!(ledger.get_size("track-42"), None);
//! ```

mod error;
mod ledger;
mod store;

pub use error::{LedgerError, Result};
pub use ledger::{SizeLedger, LEDGER_SLOT_KEY};
pub use store::{FileStore, MemoryStore, PreferenceStore};
