// SPDX-License-Identifier: MPL-2.0

use std::sync::{Arc, Mutex};

use loongson_iointc::{
    iointc_map::{CorrectionKind, HintTable, Line, LineSet, ParentChannel, ParentChannels},
    regs, Compatible, Dispatch, Error, Iointc, IointcConfig, IointcRegs, TriggerType, LPC_LINE,
};

/// The register state of a simulated controller.
#[derive(Default)]
struct Hardware {
    map: [u8; 32],
    enabled: u32,
    pol: u32,
    edge: u32,
    status: u32,
    /// Every 32-bit write, in order.
    writes: Vec<(usize, u32)>,
}

#[derive(Clone, Default)]
struct MockRegs(Arc<Mutex<Hardware>>);

impl MockRegs {
    fn hw(&self) -> std::sync::MutexGuard<'_, Hardware> {
        self.0.lock().unwrap()
    }

    /// Returns the edge and polarity registers.
    fn trigger_regs(&self) -> (u32, u32) {
        let hw = self.hw();
        (hw.edge, hw.pol)
    }
}

impl IointcRegs for MockRegs {
    fn read32(&mut self, offset: usize) -> u32 {
        let hw = self.hw();
        match offset {
            regs::INTC_EN_STATUS => hw.enabled,
            regs::INTC_POL => hw.pol,
            regs::INTC_EDGE => hw.edge,
            regs::INTC_STATUS => hw.status,
            _ => panic!("read from write-only register {offset:#x}"),
        }
    }

    fn write32(&mut self, offset: usize, value: u32) {
        let mut hw = self.hw();
        hw.writes.push((offset, value));
        match offset {
            regs::INTC_ENABLE => hw.enabled |= value,
            regs::INTC_DISABLE => hw.enabled &= !value,
            regs::INTC_POL => hw.pol = value,
            regs::INTC_EDGE => hw.edge = value,
            _ => panic!("write to read-only register {offset:#x}"),
        }
    }

    fn write8(&mut self, offset: usize, value: u8) {
        assert!(offset < 32, "byte write outside the map registers");
        self.hw().map[offset] = value;
    }
}

fn line(index: u8) -> Line {
    Line::new(index).unwrap()
}

fn all_parents(compatible: Compatible) -> IointcConfig {
    ParentChannel::all().fold(IointcConfig::new(compatible), |config, parent| {
        config.with_parent_irq(parent, 2 + parent.index() as u32)
    })
}

fn new_chip(config: IointcConfig) -> (Iointc<MockRegs>, MockRegs) {
    let regs = MockRegs::default();
    regs.hw().edge = u32::MAX;
    let chip = Iointc::new(regs.clone(), config).unwrap();
    (chip, regs)
}

#[test]
fn init_programs_routing() {
    let hints = HintTable::from_raw([1 << 5, (1 << 5) | (1 << 6), 0, 0]);
    let (chip, regs) = new_chip(
        all_parents(Compatible::V1_0a)
            .with_parent_int_map(hints)
            .with_boot_core(1),
    );
    let hw = regs.hw();

    assert_eq!(
        &hw.writes[..2],
        &[(regs::INTC_DISABLE, u32::MAX), (regs::INTC_EDGE, 0)]
    );
    assert_eq!(hw.edge, 0);
    for index in 0..32u8 {
        let expected = if index == 6 { 0x20 | 0x2 } else { 0x10 | 0x2 };
        assert_eq!(hw.map[index as usize], expected, "line {index}");
        assert_eq!(chip.map_entry(line(index)).bits(), expected);
    }

    assert_eq!(chip.corrections().len(), 31);
    assert_eq!(chip.masked(), LineSet::full());
    assert!(!chip.has_lpc_quirk());
}

#[test]
fn init_errors() {
    let hints = HintTable::from_raw([u32::MAX, 0, 0, 0]);

    let no_parent = IointcConfig::new(Compatible::V1_0).with_parent_int_map(hints);
    assert_eq!(
        Iointc::new(MockRegs::default(), no_parent).err(),
        Some(Error::NoParent)
    );

    let no_map = all_parents(Compatible::V1_0);
    assert_eq!(
        Iointc::new(MockRegs::default(), no_map).err(),
        Some(Error::NoParentIntMap)
    );

    let bad_core = all_parents(Compatible::V1_0)
        .with_parent_int_map(hints)
        .with_boot_core(4);
    let regs = MockRegs::default();
    assert_eq!(
        Iointc::new(regs.clone(), bad_core).err(),
        Some(Error::InvalidCore)
    );
    assert!(regs.hw().writes.is_empty());
}

#[test]
fn only_wired_parents_are_used() {
    let config = IointcConfig::new(Compatible::V1_0a)
        .with_parent_irq(ParentChannel::INT2, 7)
        .with_parent_irq(ParentChannel::INT3, 8)
        .with_parent_int_map(HintTable::from_raw([u32::MAX, 0, 0xff, 0xff00]));
    let (chip, _) = new_chip(config);

    assert_eq!(
        chip.parent_irqs().collect::<Vec<_>>(),
        [(ParentChannel::INT2, 7), (ParentChannel::INT3, 8)]
    );
    assert_eq!(
        chip.available_parents(),
        ParentChannels::INT2 | ParentChannels::INT3
    );
    assert_eq!(
        chip.assignment().lines_of(ParentChannel::INT3).bits(),
        0xff00
    );
    assert_eq!(
        chip.assignment().lines_of(ParentChannel::INT2).bits(),
        !0xff00
    );
    assert!(
        chip.corrections()
            .iter()
            .all(|correction| correction.kind == CorrectionKind::Homeless
                && correction.fallback == ParentChannel::INT2)
    );
}

#[test]
fn trigger_types() {
    let (chip, regs) = new_chip(
        all_parents(Compatible::V1_0a).with_parent_int_map(HintTable::from_raw([u32::MAX, 0, 0, 0])),
    );

    chip.set_trigger(line(3), TriggerType::EdgeRising);
    assert_eq!(regs.trigger_regs(), (1 << 3, 1 << 3));

    chip.set_type(3, 0x2).unwrap();
    assert_eq!(regs.trigger_regs(), (1 << 3, 0));

    chip.set_trigger(line(9), TriggerType::LevelHigh);
    assert_eq!(regs.trigger_regs(), (1 << 3, 1 << 9));

    chip.set_type(3, 0x8).unwrap();
    assert_eq!(regs.trigger_regs(), (0, 1 << 9));

    let writes = regs.hw().writes.len();
    assert_eq!(chip.set_type(3, 0x3), Err(Error::InvalidTriggerType));
    assert_eq!(chip.set_type(32, 0x4), Err(Error::InvalidLine));
    assert_eq!(regs.hw().writes.len(), writes);

    assert_eq!(chip.set_affinity(line(3), 0b11), Err(Error::NotSupported));
}

#[test]
fn mask_and_resume() {
    let (chip, regs) = new_chip(
        all_parents(Compatible::V1_0a).with_parent_int_map(HintTable::from_raw([
            0x0000_000f,
            0x0000_00f0,
            0xffff_ff00,
            0,
        ])),
    );

    chip.unmask(line(1));
    chip.unmask(line(4));
    chip.mask(line(1));
    assert_eq!(regs.hw().enabled, 1 << 4);
    assert_eq!(chip.masked(), LineSet::from_bits(!(1 << 4)));

    // Lose the register state, as after a suspend.
    let expected_map = regs.hw().map;
    {
        let mut hw = regs.hw();
        hw.map = [0; 32];
        hw.enabled = 0;
        hw.writes.clear();
    }

    chip.resume();
    let hw = regs.hw();
    assert_eq!(hw.map, expected_map);
    assert_eq!(hw.enabled, 1 << 4);
    assert_eq!(
        hw.writes,
        [(regs::INTC_DISABLE, !(1 << 4)), (regs::INTC_ENABLE, 1 << 4)]
    );
}

#[test]
fn dispatches_pending_lines() {
    let (chip, regs) = new_chip(
        all_parents(Compatible::V1_0).with_parent_int_map(HintTable::from_raw([u32::MAX, 0, 0, 0])),
    );
    regs.hw().status = (1 << 2) | (1 << 17) | (1 << 31);

    let mut handled = Vec::new();
    let dispatch = chip.handle_parent(ParentChannel::INT0, |line| handled.push(line.index()));

    assert_eq!(dispatch, Dispatch::Handled(3));
    assert_eq!(handled, [2, 17, 31]);
    assert_eq!(chip.spurious_count(), 0);
}

#[test]
fn lpc_workaround() {
    let hints = HintTable::from_raw([!(1 << 10), 1 << 10, 0, 0]);
    let (chip, _) = new_chip(all_parents(Compatible::V1_0).with_parent_int_map(hints));
    assert!(chip.has_lpc_quirk());

    let mut handled = Vec::new();

    // The LPC line is still masked.
    assert_eq!(
        chip.handle_parent(ParentChannel::INT1, |line| handled.push(line)),
        Dispatch::Spurious
    );

    chip.unmask(LPC_LINE);
    assert_eq!(
        chip.handle_parent(ParentChannel::INT1, |line| handled.push(line)),
        Dispatch::LpcFallback
    );
    // The LPC line is not routed to INT0.
    assert_eq!(
        chip.handle_parent(ParentChannel::INT0, |line| handled.push(line)),
        Dispatch::Spurious
    );

    assert_eq!(handled, [LPC_LINE]);
    assert_eq!(chip.spurious_count(), 2);
}

#[test]
fn no_lpc_workaround_on_fixed_revision() {
    let hints = HintTable::from_raw([!(1 << 10), 1 << 10, 0, 0]);
    let (chip, _) = new_chip(all_parents(Compatible::V1_0a).with_parent_int_map(hints));
    chip.unmask(LPC_LINE);

    let dispatch = chip.handle_parent(ParentChannel::INT1, |_| panic!("nothing is pending"));

    assert_eq!(dispatch, Dispatch::Spurious);
    assert_eq!(chip.spurious_count(), 1);
}
