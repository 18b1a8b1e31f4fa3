// SPDX-License-Identifier: MPL-2.0

use crate::Error;

/// How a line signals an interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerType {
    EdgeRising,
    EdgeFalling,
    LevelHigh,
    LevelLow,
}

impl TriggerType {
    /// Returns whether the line is edge triggered.
    pub fn is_edge(self) -> bool {
        matches!(self, Self::EdgeRising | Self::EdgeFalling)
    }

    /// Returns whether the line triggers on high level or rising edge.
    pub fn is_active_high(self) -> bool {
        matches!(self, Self::EdgeRising | Self::LevelHigh)
    }
}

/// Converts the trigger flags used by Linux (`IRQ_TYPE_*`).
///
/// Only a single trigger condition per line is supported, so `IRQ_TYPE_NONE`
/// and `IRQ_TYPE_EDGE_BOTH` are rejected.
impl TryFrom<u32> for TriggerType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x1 => Ok(Self::EdgeRising),
            0x2 => Ok(Self::EdgeFalling),
            0x4 => Ok(Self::LevelHigh),
            0x8 => Ok(Self::LevelLow),
            _ => Err(Error::InvalidTriggerType),
        }
    }
}
