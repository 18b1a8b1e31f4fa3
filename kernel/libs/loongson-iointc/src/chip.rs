// SPDX-License-Identifier: MPL-2.0

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use bit_field::BitField;
use iointc_map::{
    resolve, Assignment, Correction, Line, LineSet, ParentChannel, ParentChannels, LINE_COUNT,
    PARENT_COUNT,
};
use log::{debug, error, info, warn};
use spin::Mutex;

use crate::{
    regs::{self, IointcRegs},
    Error, IointcConfig, MapEntry, Result, TriggerType,
};

/// The line of the LPC controller.
pub const LPC_LINE: Line = match Line::new(10) {
    Some(line) => line,
    None => unreachable!(),
};

/// The outcome of [`Iointc::handle_parent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// This many pending lines were handled.
    Handled(usize),
    /// Nothing was pending, but the LPC line was handled because of the
    /// hardware bug of [`Compatible::V1_0`](crate::Compatible::V1_0).
    LpcFallback,
    /// Nothing was pending.
    Spurious,
}

/// Loongson I/O Interrupt Controller
///
/// The IOINTC collects 32 interrupt lines of the I/O devices (LPC, UART, PCI
/// bridges, etc.) and forwards each of them to one of its four parent lines,
/// which are connected to the CPU. The routing is fixed once the controller
/// is created; the lines can still be masked and their trigger types changed.
///
/// The host is responsible for calling [`handle_parent`] whenever one of the
/// wired-up parent lines (see [`parent_irqs`]) fires.
///
/// [`handle_parent`]: Self::handle_parent
/// [`parent_irqs`]: Self::parent_irqs
pub struct Iointc<R> {
    regs: Mutex<R>,
    parent_irqs: [Option<u32>; PARENT_COUNT],
    assignment: Assignment,
    corrections: Vec<Correction>,
    map_cache: [MapEntry; LINE_COUNT],
    /// Lines that are masked. Every line starts masked.
    mask_cache: Mutex<LineSet>,
    have_lpc_irq_bug: bool,
    spurious: AtomicU64,
}

impl<R: IointcRegs> Iointc<R> {
    /// Initializes the controller.
    ///
    /// All lines are disabled and switched to level triggering, then each
    /// line is routed to its resolved parent and to the boot core.
    ///
    /// # Errors
    ///
    /// This method will fail if no parent line is wired up, if the routing
    /// hints are missing, or if the boot core cannot be routed to.
    pub fn new(mut regs: R, config: IointcConfig) -> Result<Self> {
        let available = config.available_parents();
        if available.is_empty() {
            error!("[IOINTC]: No parent");
            return Err(Error::NoParent);
        }

        let Some(hints) = config.parent_int_map else {
            error!("[IOINTC]: No parent_int_map");
            return Err(Error::NoParentIntMap);
        };

        if config.boot_core >= crate::map::MAX_CORE_NUM {
            error!("[IOINTC]: Cannot route to core {}", config.boot_core);
            return Err(Error::InvalidCore);
        }

        regs.write32(regs::INTC_DISABLE, u32::MAX);
        regs.write32(regs::INTC_EDGE, 0);

        let resolution = resolve(&hints, available)?;
        for correction in resolution.corrections.iter() {
            warn!("[IOINTC]: {}", correction);
        }

        let mut map_cache = [MapEntry::default(); LINE_COUNT];
        for (line, parent) in resolution.assignment.iter() {
            let entry = MapEntry::new(parent, config.boot_core)?;
            map_cache[line.index() as usize] = entry;
            regs.write8(regs::intx_map(line), entry.bits());
        }

        let have_lpc_irq_bug = config.compatible.has_lpc_irq_bug();
        info!(
            "[IOINTC]: {} with parents {:?}, routed to core {}, {} corrections{}",
            config.compatible.as_str(),
            available,
            config.boot_core,
            resolution.corrections.len(),
            if have_lpc_irq_bug {
                ", LPC IRQ workaround enabled"
            } else {
                ""
            }
        );

        Ok(Self {
            regs: Mutex::new(regs),
            parent_irqs: config.parent_irqs,
            assignment: resolution.assignment,
            corrections: resolution.corrections,
            map_cache,
            mask_cache: Mutex::new(LineSet::full()),
            have_lpc_irq_bug,
            spurious: AtomicU64::new(0),
        })
    }

    /// Masks a line.
    pub fn mask(&self, line: Line) {
        let mut regs = self.regs.lock();
        let mut mask_cache = self.mask_cache.lock();
        regs.write32(regs::INTC_DISABLE, 1 << line.index());
        mask_cache.insert(line);
    }

    /// Unmasks a line.
    pub fn unmask(&self, line: Line) {
        let mut regs = self.regs.lock();
        let mut mask_cache = self.mask_cache.lock();
        regs.write32(regs::INTC_ENABLE, 1 << line.index());
        mask_cache.remove(line);
    }

    /// Changes the trigger type of a line.
    pub fn set_trigger(&self, line: Line, trigger: TriggerType) {
        let mut regs = self.regs.lock();
        let bit = line.index() as usize;

        let mut edge = regs.read32(regs::INTC_EDGE);
        edge.set_bit(bit, trigger.is_edge());
        regs.write32(regs::INTC_EDGE, edge);

        let mut pol = regs.read32(regs::INTC_POL);
        pol.set_bit(bit, trigger.is_active_high());
        regs.write32(regs::INTC_POL, pol);
    }

    /// Changes the trigger type of a line, given in the `IRQ_TYPE_*` encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLine`] if `line` is out of range and
    /// [`Error::InvalidTriggerType`] if the type is not a single trigger
    /// condition. No register is modified in either case.
    pub fn set_type(&self, line: u8, raw_type: u32) -> Result<()> {
        let line = Line::new(line).ok_or(Error::InvalidLine)?;
        let trigger = TriggerType::try_from(raw_type)?;
        self.set_trigger(line, trigger);
        Ok(())
    }

    /// Changes the cores a line is delivered to.
    ///
    /// The routing is fixed when the controller is initialized, so this
    /// always fails with [`Error::NotSupported`].
    pub fn set_affinity(&self, _line: Line, _cores: u8) -> Result<()> {
        Err(Error::NotSupported)
    }

    /// Restores the routing and mask registers, e.g., after a system suspend.
    pub fn resume(&self) {
        let mut regs = self.regs.lock();
        let mask_cache = self.mask_cache.lock();

        for line in Line::all() {
            regs.write8(
                regs::intx_map(line),
                self.map_cache[line.index() as usize].bits(),
            );
        }

        regs.write32(regs::INTC_DISABLE, mask_cache.bits());
        regs.write32(regs::INTC_ENABLE, mask_cache.complement().bits());
    }

    /// Handles an interrupt on the parent line `parent`.
    ///
    /// `handler` is called for every pending line, lowest line first.
    pub fn handle_parent<F>(&self, parent: ParentChannel, mut handler: F) -> Dispatch
    where
        F: FnMut(Line),
    {
        let pending = LineSet::from_bits(self.regs.lock().read32(regs::INTC_STATUS));

        if pending.is_empty() {
            // Always blame the LPC line if the hardware may have lost its
            // pending status.
            let lpc_enabled = !self.mask_cache.lock().contains(LPC_LINE);
            if self.have_lpc_irq_bug
                && lpc_enabled
                && self.assignment.channel_of(LPC_LINE) == parent
            {
                handler(LPC_LINE);
                return Dispatch::LpcFallback;
            }

            self.spurious.fetch_add(1, Ordering::Relaxed);
            debug!("[IOINTC]: Spurious interrupt on {}", parent);
            return Dispatch::Spurious;
        }

        pending.iter().for_each(&mut handler);
        Dispatch::Handled(pending.len())
    }

    /// Returns the wired-up parent lines and the interrupts they are
    /// connected to.
    pub fn parent_irqs(&self) -> impl Iterator<Item = (ParentChannel, u32)> + '_ {
        ParentChannel::all()
            .filter_map(|parent| Some((parent, self.parent_irqs[parent.index() as usize]?)))
    }

    pub fn available_parents(&self) -> ParentChannels {
        self.parent_irqs().map(|(parent, _)| parent).collect()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns the repairs made to the routing hints during initialization.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn map_entry(&self, line: Line) -> MapEntry {
        self.map_cache[line.index() as usize]
    }

    pub fn masked(&self) -> LineSet {
        *self.mask_cache.lock()
    }

    pub fn has_lpc_quirk(&self) -> bool {
        self.have_lpc_irq_bug
    }

    /// Returns the number of parent interrupts with nothing to handle.
    pub fn spurious_count(&self) -> u64 {
        self.spurious.load(Ordering::Relaxed)
    }
}
