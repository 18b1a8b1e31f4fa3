// SPDX-License-Identifier: MPL-2.0

use core::fmt;

use bitflags::bitflags;

/// The number of parent interrupt lines (`INT0` to `INT3`) of the controller.
pub const PARENT_COUNT: usize = 4;

/// A parent interrupt line, in the range `0..4`.
///
/// Each hardware line is routed to exactly one parent, which in turn is
/// connected to an interrupt input of the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParentChannel(u8);

impl ParentChannel {
    pub const INT0: Self = Self(0);
    pub const INT1: Self = Self(1);
    pub const INT2: Self = Self(2);
    pub const INT3: Self = Self(3);

    /// Creates a parent channel from its index.
    ///
    /// Returns `None` if the index is not smaller than [`PARENT_COUNT`].
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PARENT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns an iterator over all four parent channels.
    pub fn all() -> impl Iterator<Item = ParentChannel> {
        (0..PARENT_COUNT as u8).map(ParentChannel)
    }
}

impl fmt::Display for ParentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INT{}", self.0)
    }
}

bitflags! {
    /// A set of parent channels.
    ///
    /// Used to describe which parents are actually wired up on a platform.
    pub struct ParentChannels: u8 {
        const INT0 = 1 << 0;
        const INT1 = 1 << 1;
        const INT2 = 1 << 2;
        const INT3 = 1 << 3;
    }
}

impl ParentChannels {
    pub const fn from_channel(channel: ParentChannel) -> Self {
        Self::from_bits_truncate(1 << channel.index())
    }

    pub fn contains_channel(&self, channel: ParentChannel) -> bool {
        self.contains(Self::from_channel(channel))
    }

    pub fn insert_channel(&mut self, channel: ParentChannel) {
        self.insert(Self::from_channel(channel));
    }

    /// Returns the lowest-numbered channel in the set.
    pub fn lowest(&self) -> Option<ParentChannel> {
        if self.is_empty() {
            return None;
        }
        ParentChannel::new(self.bits().trailing_zeros() as u8)
    }

    /// Returns an iterator over the channels in the set in ascending order.
    pub fn iter_channels(self) -> impl Iterator<Item = ParentChannel> {
        ParentChannel::all().filter(move |channel| self.contains_channel(*channel))
    }
}

impl FromIterator<ParentChannel> for ParentChannels {
    fn from_iter<I: IntoIterator<Item = ParentChannel>>(iter: I) -> Self {
        let mut channels = Self::empty();
        for channel in iter {
            channels.insert_channel(channel);
        }
        channels
    }
}
