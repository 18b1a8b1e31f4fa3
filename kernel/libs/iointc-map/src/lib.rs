// SPDX-License-Identifier: MPL-2.0

//! Parent line routing of the Loongson I/O interrupt controller (IOINTC).
//!
//! The IOINTC collects 32 hardware interrupt lines and forwards each of them
//! to one of four parent lines, `INT0` to `INT3`. The platform firmware
//! describes the desired routing as one bit mask per parent, but such tables
//! are frequently incomplete (some lines are claimed by no parent) or
//! inconsistent (some lines are claimed by several parents).
//!
//! [`resolve`] repairs such a table into an [`Assignment`] that routes every
//! line to exactly one parent that is actually wired up. Lines that need
//! repairing go to the lowest-numbered available parent, and every repair is
//! reported as a [`Correction`] so that the caller can decide how to log it.
//!
//! ```
//! use iointc_map::{resolve, HintTable, Line, ParentChannel, ParentChannels};
//!
//! let hints = HintTable::from_raw([1 << 5, (1 << 5) | (1 << 6), 0, 0]);
//! let resolution = resolve(&hints, ParentChannels::all()).unwrap();
//!
//! let line = |index| Line::new(index).unwrap();
//! assert_eq!(resolution.assignment.channel_of(line(5)), ParentChannel::INT0);
//! assert_eq!(resolution.assignment.channel_of(line(6)), ParentChannel::INT1);
//! assert_eq!(resolution.assignment.channel_of(line(0)), ParentChannel::INT0);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod channel;
mod hints;
mod line;
mod resolve;

pub use channel::{ParentChannel, ParentChannels, PARENT_COUNT};
pub use hints::HintTable;
pub use line::{Line, LineSet, LineSetIter, LINE_COUNT};
pub use resolve::{
    resolve, Assignment, ConfigurationError, Correction, CorrectionKind, Resolution,
};
