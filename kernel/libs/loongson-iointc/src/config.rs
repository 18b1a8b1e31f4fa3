// SPDX-License-Identifier: MPL-2.0

use core::str::FromStr;

use iointc_map::{HintTable, ParentChannel, ParentChannels, PARENT_COUNT};

/// The hardware revision of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compatible {
    /// `loongson,iointc-1.0`.
    ///
    /// The pending status of the LPC line may read as zero although the
    /// LPC controller is asserting its interrupt.
    V1_0,
    /// `loongson,iointc-1.0a`.
    V1_0a,
}

impl Compatible {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "loongson,iointc-1.0",
            Self::V1_0a => "loongson,iointc-1.0a",
        }
    }

    /// Returns whether the revision loses the pending status of the LPC line.
    pub fn has_lpc_irq_bug(self) -> bool {
        self == Self::V1_0
    }
}

impl FromStr for Compatible {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loongson,iointc-1.0" => Ok(Self::V1_0),
            "loongson,iointc-1.0a" => Ok(Self::V1_0a),
            _ => Err(()),
        }
    }
}

/// The description of a controller, as provided by the platform.
#[derive(Clone, Debug)]
pub struct IointcConfig {
    pub compatible: Compatible,
    /// The interrupt number each parent line is connected to, or `None` if
    /// the parent line is not wired up.
    pub parent_irqs: [Option<u32>; PARENT_COUNT],
    /// The `loongson,parent_int_map` property.
    pub parent_int_map: Option<HintTable>,
    /// The core that every line is routed to.
    pub boot_core: u8,
}

impl IointcConfig {
    pub fn new(compatible: Compatible) -> Self {
        Self {
            compatible,
            parent_irqs: [None; PARENT_COUNT],
            parent_int_map: None,
            boot_core: 0,
        }
    }

    #[must_use]
    pub fn with_parent_irq(mut self, parent: ParentChannel, irq: u32) -> Self {
        self.parent_irqs[parent.index() as usize] = Some(irq);
        self
    }

    #[must_use]
    pub fn with_parent_int_map(mut self, hints: HintTable) -> Self {
        self.parent_int_map = Some(hints);
        self
    }

    #[must_use]
    pub fn with_boot_core(mut self, core: u8) -> Self {
        self.boot_core = core;
        self
    }

    /// Returns the parent lines that are wired up.
    pub fn available_parents(&self) -> ParentChannels {
        ParentChannel::all()
            .filter(|parent| self.parent_irqs[parent.index() as usize].is_some())
            .collect()
    }
}
