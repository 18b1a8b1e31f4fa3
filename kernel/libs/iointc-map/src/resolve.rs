// SPDX-License-Identifier: MPL-2.0

use alloc::vec::Vec;
use core::fmt;

use crate::{HintTable, Line, LineSet, ParentChannel, ParentChannels, LINE_COUNT};

/// An error returned by [`resolve`] when the configuration cannot be repaired.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigurationError {
    /// None of the parent channels is wired up.
    NoAvailableParent,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAvailableParent => f.write_str("no available parent channel"),
        }
    }
}

/// Why a line was moved to the fallback parent.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CorrectionKind {
    /// No available parent claimed the line.
    Homeless,
    /// Several available parents claimed the line.
    Duplicated { claimants: ParentChannels },
}

/// A line that [`resolve`] routed to the fallback parent instead of following
/// the hint table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Correction {
    pub line: Line,
    pub fallback: ParentChannel,
    pub kind: CorrectionKind,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CorrectionKind::Homeless => {
                write!(f, "found homeless {}, map to {}", self.line, self.fallback)
            }
            CorrectionKind::Duplicated { .. } => write!(
                f,
                "{} has multiple parents, map to {}",
                self.line, self.fallback
            ),
        }
    }
}

/// The parent channel of every hardware line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    parents: [ParentChannel; LINE_COUNT],
}

impl Assignment {
    /// Returns the parent that `line` is routed to.
    pub fn channel_of(&self, line: Line) -> ParentChannel {
        self.parents[line.index() as usize]
    }

    /// Returns the lines routed to `channel`.
    pub fn lines_of(&self, channel: ParentChannel) -> LineSet {
        self.iter()
            .filter(|(_, parent)| *parent == channel)
            .map(|(line, _)| line)
            .collect()
    }

    /// Returns an iterator over `(line, parent)` pairs in ascending line order.
    pub fn iter(&self) -> impl Iterator<Item = (Line, ParentChannel)> + '_ {
        Line::all().zip(self.parents.iter().copied())
    }

    /// Converts the assignment back to a hint table in which each line is
    /// claimed by exactly one parent.
    pub fn to_hints(&self) -> HintTable {
        let mut hints = HintTable::new();
        for (line, parent) in self.iter() {
            hints.claim(parent, line);
        }
        hints
    }
}

/// The outcome of [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub assignment: Assignment,
    /// Homeless lines in ascending order, followed by duplicated lines in
    /// ascending order.
    pub corrections: Vec<Correction>,
}

/// Resolves the parent channel of every line.
///
/// Only the claims of the `available` parents are considered. A line claimed
/// by exactly one of them is routed there. Lines claimed by none of them, or
/// by more than one, are routed to the lowest-numbered available parent, and
/// a [`Correction`] is recorded for each.
///
/// # Errors
///
/// Returns [`ConfigurationError::NoAvailableParent`] if `available` is empty.
pub fn resolve(
    hints: &HintTable,
    available: ParentChannels,
) -> Result<Resolution, ConfigurationError> {
    let fallback = available
        .lowest()
        .ok_or(ConfigurationError::NoAvailableParent)?;

    let mut table = HintTable::new();
    let mut proceed = LineSet::empty();
    let mut duplicated = LineSet::empty();
    for channel in available.iter_channels() {
        let claims = hints.claims(channel);
        table.set(channel, claims);
        duplicated = duplicated.union(claims.intersection(proceed));
        proceed = proceed.union(claims);
    }

    let mut corrections = Vec::new();

    for line in proceed.complement() {
        table.claim(fallback, line);
        corrections.push(Correction {
            line,
            fallback,
            kind: CorrectionKind::Homeless,
        });
    }

    for line in duplicated {
        let claimants = available
            .iter_channels()
            .filter(|channel| hints.claims(*channel).contains(line))
            .collect();
        for channel in ParentChannel::all() {
            table.claims_mut(channel).remove(line);
        }
        table.claim(fallback, line);
        corrections.push(Correction {
            line,
            fallback,
            kind: CorrectionKind::Duplicated { claimants },
        });
    }

    let mut parents = [fallback; LINE_COUNT];
    for channel in available.iter_channels() {
        for line in table.claims(channel) {
            parents[line.index() as usize] = channel;
        }
    }

    Ok(Resolution {
        assignment: Assignment { parents },
        corrections,
    })
}
