//! Rolling sample window
//!
//! A fixed-capacity FIFO of sample rows. Every row in the window has the same
//! channel count; pushing when full evicts the oldest row first.

use crate::types::{MemberValue, MAX_CHANNELS};
use std::collections::VecDeque;

/// One sampled row of up to [`MAX_CHANNELS`] channel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    values: [f32; MAX_CHANNELS],
    len: u8,
}

impl SampleRow {
    /// A row of `channels` zeros
    pub fn zeros(channels: usize) -> Self {
        Self {
            values: [0.0; MAX_CHANNELS],
            len: channels.min(MAX_CHANNELS) as u8,
        }
    }

    /// Build a row from a decomposed member value
    pub fn from_value(value: &MemberValue) -> Self {
        let channels = value.channels();
        let mut row = Self::zeros(channels.len());
        row.values[..channels.len()].copy_from_slice(channels);
        row
    }

    /// Channel values in positional order
    pub fn values(&self) -> &[f32] {
        &self.values[..self.len as usize]
    }

    /// Value of channel `i`, if present
    pub fn channel(&self, i: usize) -> Option<f32> {
        self.values().get(i).copied()
    }

    /// Number of channels in this row
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fixed-capacity rolling buffer of sample rows
#[derive(Debug, Clone)]
pub struct SampleWindow {
    rows: VecDeque<SampleRow>,
    capacity: usize,
    channel_count: usize,
}

impl SampleWindow {
    /// Create an empty window holding at most `capacity` rows
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
            channel_count: 0,
        }
    }

    /// Discard all rows and accept rows of `channel_count` channels from now on
    ///
    /// A channel count of zero disarms the window: every push is rejected.
    pub fn reset(&mut self, channel_count: usize) {
        self.rows.clear();
        self.channel_count = channel_count.min(MAX_CHANNELS);
    }

    /// Append a row, evicting the oldest if the window is full
    ///
    /// Returns false (and leaves the window untouched) if the value's channel
    /// count does not match the window's.
    pub fn push(&mut self, value: &MemberValue) -> bool {
        if self.channel_count == 0 || value.channel_count() != self.channel_count {
            return false;
        }
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(SampleRow::from_value(value));
        true
    }

    /// Maximum number of rows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Channels per row
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Number of rows actually sampled since the last reset
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() == self.capacity
    }

    /// Rows from oldest to newest
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &SampleRow> + '_ {
        self.rows.iter()
    }

    /// Most recent row
    pub fn latest(&self) -> Option<&SampleRow> {
        self.rows.back()
    }

    /// Values of one channel from oldest to newest
    pub fn channel(&self, index: usize) -> impl Iterator<Item = f32> + '_ {
        self.rows.iter().filter_map(move |row| row.channel(index))
    }

    /// Exactly `capacity` rows: zero rows for the unsampled history, then the samples
    pub fn zero_padded(&self) -> impl Iterator<Item = SampleRow> + '_ {
        let padding = self.capacity - self.rows.len();
        std::iter::repeat(SampleRow::zeros(self.channel_count))
            .take(padding)
            .chain(self.rows.iter().copied())
    }
}
