// SPDX-License-Identifier: MPL-2.0

//! The driver core of the Loongson I/O interrupt controller (IOINTC).
//!
//! The IOINTC is found on Loongson-3 processors. It gathers 32 interrupt
//! lines of the I/O devices and forwards each line to one of four parent
//! lines, `INT0` to `INT3`, and to one of four cores.
//!
//! This crate is independent of the way the controller is reached and of the
//! IRQ subsystem of the kernel. The platform supplies:
//!
//! - the register access, by implementing [`IointcRegs`];
//! - the controller description, as an [`IointcConfig`];
//! - a chained handler for every parent line returned by
//!   [`Iointc::parent_irqs`], which should call [`Iointc::handle_parent`].
//!
//! The routing of the lines to the parents is computed by the [`iointc_map`]
//! crate.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod chip;
mod config;
mod error;
mod map;
pub mod regs;
mod trigger;

pub use chip::{Dispatch, Iointc, LPC_LINE};
pub use config::{Compatible, IointcConfig};
pub use error::{Error, Result};
pub use iointc_map;
pub use map::{MapEntry, MAX_CORE_NUM};
pub use regs::IointcRegs;
pub use trigger::TriggerType;
