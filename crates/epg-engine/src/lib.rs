//! # epg-engine
//!
//! Deterministic reconciliation of electronic program guide (EPG) events.
//!
//! Given one channel's raw events merged from several feeds, the engine
//! produces a single timeline that has no overlapping intervals and no
//! duplicate slots, with identities derived only from the start instant and
//! channel key. Feed order is authority order: the first event wins.
//!
//! ## Modules
//!
//! - [`span`] — half-open time spans and feed timestamp parsing
//! - [`event`] — raw events, normalized records, identities, title selection
//! - [`interval`] — accepted-interval index (overlap test)
//! - [`identity`] — identity registry (duplicate test)
//! - [`reconcile`] — per-channel and per-lineup reconciliation
//! - [`report`] — per-channel collision diagnostics
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod identity;
pub mod interval;
pub mod reconcile;
pub mod report;
pub mod span;

pub use error::EngineError;
pub use event::{ChannelRef, EventId, EventRecord, LocalizedText, RawEvent};
pub use identity::{IdentityRegistry, Registration};
pub use interval::IntervalIndex;
pub use reconcile::{
    reconcile_channel, reconcile_lineup, ChannelSchedule, IdentityScope, ReconcileOptions,
};
pub use report::{ChannelReport, Collision};
pub use span::Span;
