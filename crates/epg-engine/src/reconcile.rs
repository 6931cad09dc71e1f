//! Reconcile one channel's raw events into a clean timeline.
//!
//! Events are processed strictly in input order and the first one wins on
//! both identity and overlap conflicts. Callers must therefore hand events in
//! from the most authoritative feed to the least.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::event::{ChannelRef, EventRecord, RawEvent};
use crate::identity::{IdentityRegistry, Registration};
use crate::interval::IntervalIndex;
use crate::report::{ChannelReport, Collision};

/// How far an [`IdentityRegistry`] reaches during a lineup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityScope {
    /// Fresh registry for every allow-list channel.
    #[default]
    Channel,
    /// One registry shared across the whole lineup; catches two allow-list
    /// entries claiming the same slot.
    Run,
}

/// Knobs for reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Language tag preferred when a title or description has several
    /// localized variants.
    pub preferred_language: Option<String>,
    pub identity_scope: IdentityScope,
}

/// Final timeline for one allow-list channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSchedule {
    pub channel: ChannelRef,
    /// Non-overlapping, sorted by identity (chronological).
    pub events: Vec<EventRecord>,
    pub report: ChannelReport,
}

/// Reconcile the raw events of one channel.
///
/// `raw_events` must be in feed-priority order. Every event is normalized,
/// checked against `registry` (duplicates are dropped) and then against the
/// channel's accepted intervals (overlaps are dropped and recorded). The
/// accepted events come back sorted by identity.
///
/// # Errors
/// Returns an error on the first malformed timestamp or inverted interval; no
/// partial schedule is produced.
pub fn reconcile_channel<'a, I>(
    channel: &ChannelRef,
    raw_events: I,
    registry: &mut IdentityRegistry,
    options: &ReconcileOptions,
) -> Result<ChannelSchedule>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let preferred = options.preferred_language.as_deref();
    let mut index: IntervalIndex<usize> = IntervalIndex::new();
    let mut accepted: Vec<EventRecord> = Vec::new();
    let mut report = ChannelReport::new(channel.clone());

    for raw in raw_events {
        let record = EventRecord::from_raw(raw, preferred)?;

        match registry.register(&channel.id, &record) {
            Registration::New => {}
            Registration::Existing { owner, record: first }
                if owner == channel.id && first.channel_key == record.channel_key =>
            {
                tracing::trace!(
                    channel = %channel.id,
                    identity = %record.identity,
                    "dropping duplicate slot"
                );
                report.rejected_duplicate += 1;
                continue;
            }
            Registration::Existing { owner, record: first } => {
                tracing::warn!(
                    channel = %channel.id,
                    identity = %record.identity,
                    first_owner = owner,
                    first_title = %first.title,
                    "identity already claimed by another channel"
                );
                report.identity_collisions += 1;
                continue;
            }
        }

        if let Some((existing, &slot)) = index.overlapping(&record.span) {
            let collision = Collision {
                channel_key: record.channel_key.clone(),
                attempted: record.span,
                attempted_title: record.title.clone(),
                existing,
                existing_title: accepted[slot].title.clone(),
            };
            tracing::debug!(
                channel = %channel.id,
                attempted = %collision.attempted,
                attempted_title = %collision.attempted_title,
                existing = %collision.existing,
                existing_title = %collision.existing_title,
                "temporal collision"
            );
            report.rejected_overlap += 1;
            report.collisions.push(collision);
            continue;
        }

        index.accept(record.span, accepted.len());
        accepted.push(record);
    }

    accepted.sort_by(|a, b| a.identity.cmp(&b.identity));
    report.accepted = accepted.len();

    tracing::info!(
        channel = %channel.id,
        name = %channel.display_name,
        accepted = report.accepted,
        overlaps = report.rejected_overlap,
        duplicates = report.rejected_duplicate,
        identity_collisions = report.identity_collisions,
        "channel reconciled"
    );

    Ok(ChannelSchedule {
        channel: channel.clone(),
        events: accepted,
        report,
    })
}

/// Reconcile every allow-list channel against a merged event stream.
///
/// `events` is the concatenation of all feeds in priority order. Events are
/// joined to channels by `channel_key == display_name`. Channels without any
/// matching event are skipped. Registries are scoped per
/// [`ReconcileOptions::identity_scope`].
pub fn reconcile_lineup(
    channels: &[ChannelRef],
    events: &[RawEvent],
    options: &ReconcileOptions,
) -> Result<Vec<ChannelSchedule>> {
    let mut by_key: HashMap<&str, Vec<&RawEvent>> = HashMap::new();
    for event in events {
        by_key
            .entry(event.channel_key.as_str())
            .or_default()
            .push(event);
    }

    let mut run_registry = IdentityRegistry::new();
    let mut schedules = Vec::new();

    for channel in channels {
        let Some(raw) = by_key.get(channel.display_name.as_str()) else {
            tracing::debug!(
                channel = %channel.id,
                name = %channel.display_name,
                "no events in any feed, skipping"
            );
            continue;
        };

        let schedule = match options.identity_scope {
            IdentityScope::Channel => reconcile_channel(
                channel,
                raw.iter().copied(),
                &mut IdentityRegistry::new(),
                options,
            )?,
            IdentityScope::Run => {
                reconcile_channel(channel, raw.iter().copied(), &mut run_registry, options)?
            }
        };
        schedules.push(schedule);
    }

    Ok(schedules)
}
