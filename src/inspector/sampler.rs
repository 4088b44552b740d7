//! Per-tick sampling of the selected member
//!
//! The [`Sampler`] owns the sample window and the channel metadata. It is
//! re-armed on every selection change and appends one row per valid tick.

use super::window::SampleWindow;
use crate::backend::{ComponentInfo, Introspect, MemberDescriptor};
use crate::types::{channel_metadata, ChannelMeta, Color, MemberValue, ObjectId, MAX_CHANNELS};

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A row was appended
    Sampled,
    /// Nothing is selected down to a member
    Idle,
    /// Target or component has been destroyed
    Stale,
    /// The host returned no value, or one that does not fit the member's kind
    Unreadable,
}

/// What the sampler reads from on each tick
#[derive(Debug, Clone, Copy)]
pub struct SampleSource<'a> {
    pub target: ObjectId,
    pub component: &'a ComponentInfo,
    pub member: &'a MemberDescriptor,
}

/// Rolling sample storage plus channel display metadata
#[derive(Debug, Clone)]
pub struct Sampler {
    window: SampleWindow,
    channels: Vec<ChannelMeta>,
    palette: [Color; MAX_CHANNELS],
    unreadable_reported: bool,
}

impl Sampler {
    /// Create a sampler with a window of `capacity` rows
    pub fn new(capacity: usize, palette: [Color; MAX_CHANNELS]) -> Self {
        Self {
            window: SampleWindow::new(capacity),
            channels: Vec::new(),
            palette,
            unreadable_reported: false,
        }
    }

    /// Drop all history and channel metadata
    pub fn clear(&mut self) {
        self.window.reset(0);
        self.channels.clear();
        self.unreadable_reported = false;
    }

    /// Drop all history and prepare for a new member
    pub fn arm(&mut self, member: &MemberDescriptor) {
        self.clear();
        self.window.reset(member.channel_count());
        self.channels = channel_metadata(&member.name, member.kind, &self.palette);
    }

    /// Sample the source once
    ///
    /// Dead handles and unreadable values leave the window unchanged.
    pub fn tick(&mut self, host: &dyn Introspect, source: Option<SampleSource<'_>>) -> TickOutcome {
        let Some(source) = source else {
            return TickOutcome::Idle;
        };

        if !host.is_alive(source.target.into()) || !host.is_alive(source.component.id.into()) {
            tracing::trace!("Skipping tick: {} is no longer alive", source.component.type_name);
            return TickOutcome::Stale;
        }

        let value = host
            .read(source.component.id, &source.member.access)
            .and_then(|raw| MemberValue::from_host(&raw, source.member.kind));

        match value {
            Some(value) if self.window.push(&value) => TickOutcome::Sampled,
            _ => {
                if !self.unreadable_reported {
                    self.unreadable_reported = true;
                    tracing::warn!(
                        "Member {}.{} ({}) cannot be decomposed into channels",
                        source.component.type_name,
                        source.member.name,
                        source.member.value_type
                    );
                }
                TickOutcome::Unreadable
            }
        }
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn channels(&self) -> &[ChannelMeta] {
        &self.channels
    }

    /// Configured palette
    pub fn palette(&self) -> &[Color; MAX_CHANNELS] {
        &self.palette
    }
}
