// SPDX-License-Identifier: MPL-2.0

use bit_field::BitField;
use iointc_map::ParentChannel;

use crate::{Error, Result};

/// The number of cores a line can be routed to.
pub const MAX_CORE_NUM: u8 = 4;

/// The content of the routing register of a line.
///
/// Bits 0..4 select the destination core and bits 4..8 select the parent
/// line. Both fields are one-hot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapEntry(u8);

impl MapEntry {
    const CORE_BITS: core::ops::Range<usize> = 0..4;
    const PARENT_BITS: core::ops::Range<usize> = 4..8;

    /// Creates an entry routing a line to `parent` and then to `core`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCore`] if `core` is not smaller than [`MAX_CORE_NUM`].
    pub fn new(parent: ParentChannel, core: u8) -> Result<Self> {
        let mut entry = Self(0);
        entry.set_parent(parent);
        entry.set_core(core)?;
        Ok(entry)
    }

    pub fn set_parent(&mut self, parent: ParentChannel) {
        self.0.set_bits(Self::PARENT_BITS, 1 << parent.index());
    }

    pub fn set_core(&mut self, core: u8) -> Result<()> {
        if core >= MAX_CORE_NUM {
            return Err(Error::InvalidCore);
        }
        self.0.set_bits(Self::CORE_BITS, 1 << core);
        Ok(())
    }

    /// Returns the parent line, if exactly one is selected.
    pub fn parent(self) -> Option<ParentChannel> {
        let bits = self.0.get_bits(Self::PARENT_BITS);
        if bits.count_ones() != 1 {
            return None;
        }
        ParentChannel::new(bits.trailing_zeros() as u8)
    }

    /// Returns the destination core, if exactly one is selected.
    pub fn core(self) -> Option<u8> {
        let bits = self.0.get_bits(Self::CORE_BITS);
        (bits.count_ones() == 1).then(|| bits.trailing_zeros() as u8)
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}
