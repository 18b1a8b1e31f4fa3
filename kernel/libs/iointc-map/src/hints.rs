// SPDX-License-Identifier: MPL-2.0

use crate::{Line, LineSet, ParentChannel, PARENT_COUNT};

/// The lines each parent channel claims, as supplied by the platform.
///
/// The table may leave lines unclaimed or let several parents claim the same
/// line. [`resolve`] turns it into a conflict-free [`Assignment`].
///
/// [`resolve`]: crate::resolve
/// [`Assignment`]: crate::Assignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintTable {
    claims: [LineSet; PARENT_COUNT],
}

impl HintTable {
    /// Creates a table in which no parent claims any line.
    pub const fn new() -> Self {
        Self {
            claims: [LineSet::empty(); PARENT_COUNT],
        }
    }

    /// Creates a table from the raw per-parent bit masks, indexed by parent.
    ///
    /// This is the format of the `loongson,parent_int_map` firmware property.
    pub const fn from_raw(raw: [u32; PARENT_COUNT]) -> Self {
        Self {
            claims: [
                LineSet::from_bits(raw[0]),
                LineSet::from_bits(raw[1]),
                LineSet::from_bits(raw[2]),
                LineSet::from_bits(raw[3]),
            ],
        }
    }

    /// Returns the lines claimed by `channel`.
    pub fn claims(&self, channel: ParentChannel) -> LineSet {
        self.claims[channel.index() as usize]
    }

    /// Replaces the lines claimed by `channel`.
    pub fn set(&mut self, channel: ParentChannel, lines: LineSet) {
        self.claims[channel.index() as usize] = lines;
    }

    /// Adds `line` to the claims of `channel`.
    pub fn claim(&mut self, channel: ParentChannel, line: Line) {
        self.claims[channel.index() as usize].insert(line);
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, channel: ParentChannel, lines: LineSet) -> Self {
        self.set(channel, lines);
        self
    }

    pub(crate) fn claims_mut(&mut self, channel: ParentChannel) -> &mut LineSet {
        &mut self.claims[channel.index() as usize]
    }
}
