// SPDX-License-Identifier: MPL-2.0

//! Register layout of the IOINTC.

use iointc_map::Line;

/// The offset of the routing byte of a line.
///
/// There are 32 8-bit registers, one per line.
pub const fn intx_map(line: Line) -> usize {
    line.index() as usize
}

const INTC_CHIP_START: usize = 0x20;

/// Enable status of the lines.
pub const INTC_EN_STATUS: usize = INTC_CHIP_START + 0x04;
/// Writing 1 to a bit enables the line.
pub const INTC_ENABLE: usize = INTC_CHIP_START + 0x08;
/// Writing 1 to a bit disables the line.
pub const INTC_DISABLE: usize = INTC_CHIP_START + 0x0c;
/// Polarity of the lines. 1 means high level or rising edge.
pub const INTC_POL: usize = INTC_CHIP_START + 0x10;
/// Trigger mode of the lines. 1 means edge triggered.
pub const INTC_EDGE: usize = INTC_CHIP_START + 0x14;
/// Pending status of the lines.
pub const INTC_STATUS: usize = INTC_CHIP_START + 0x20;

/// Access to the registers of one IOINTC.
///
/// Offsets are relative to the base of the controller. The platform provides
/// the implementation, which is typically backed by memory-mapped I/O.
pub trait IointcRegs {
    fn read32(&mut self, offset: usize) -> u32;

    fn write32(&mut self, offset: usize, value: u32);

    fn write8(&mut self, offset: usize, value: u8);
}
