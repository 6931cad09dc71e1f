//! Per-channel diagnostics for auditing feed quality.

use serde::{Deserialize, Serialize};

use crate::event::ChannelRef;
use crate::span::Span;

/// A raw event rejected because it overlaps an already accepted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub channel_key: String,
    pub attempted: Span,
    pub attempted_title: String,
    pub existing: Span,
    pub existing_title: String,
}

/// Counts of what happened to one channel's raw events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel: ChannelRef,
    pub accepted: usize,
    pub rejected_overlap: usize,
    pub rejected_duplicate: usize,
    /// Identities that were already registered under a different channel key.
    pub identity_collisions: usize,
    pub collisions: Vec<Collision>,
}

impl ChannelReport {
    pub fn new(channel: ChannelRef) -> Self {
        Self {
            channel,
            accepted: 0,
            rejected_overlap: 0,
            rejected_duplicate: 0,
            identity_collisions: 0,
            collisions: Vec::new(),
        }
    }

    /// Total raw events seen for the channel.
    pub fn total(&self) -> usize {
        self.accepted + self.rejected_overlap + self.rejected_duplicate + self.identity_collisions
    }
}
