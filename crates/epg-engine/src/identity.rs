//! Registry of identities already seen within a scope (one channel or one run).
//!
//! Each identity remembers the first record registered with it and the
//! allow-list channel that registered it, so a run-wide registry can tell a
//! plain duplicate (same channel) from two channels claiming the same slot.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::event::{EventId, EventRecord};

/// Outcome of [`IdentityRegistry::register`].
#[derive(Debug, PartialEq)]
pub enum Registration<'a> {
    /// The identity was unseen; the record is now stored.
    New,
    /// The identity was already registered.
    Existing {
        /// Allow-list channel id that registered it first.
        owner: &'a str,
        /// The first record seen with this identity.
        record: &'a EventRecord,
    },
}

#[derive(Debug, Clone)]
struct Claim {
    owner: String,
    record: EventRecord,
}

/// Maps each identity to the first record registered with it.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    seen: HashMap<EventId, Claim>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `record` on behalf of channel `owner` unless its identity is
    /// already stored.
    pub fn register(&mut self, owner: &str, record: &EventRecord) -> Registration<'_> {
        match self.seen.entry(record.identity.clone()) {
            Entry::Occupied(entry) => {
                let first = entry.into_mut();
                Registration::Existing {
                    owner: &first.owner,
                    record: &first.record,
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Claim {
                    owner: owner.to_string(),
                    record: record.clone(),
                });
                Registration::New
            }
        }
    }

    pub fn get(&self, identity: &EventId) -> Option<&EventRecord> {
        self.seen.get(identity).map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
