// SPDX-License-Identifier: MPL-2.0

use core::{fmt, ops::Range};

use bit_field::BitField;

/// The number of hardware interrupt lines of the controller.
pub const LINE_COUNT: usize = 32;

/// A hardware interrupt line, in the range `0..32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(u8);

impl Line {
    /// Creates a line from its index.
    ///
    /// Returns `None` if the index is not smaller than [`LINE_COUNT`].
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < LINE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the index of the line.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns an iterator over all lines in ascending order.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..LINE_COUNT as u8).map(Line)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRQ {}", self.0)
    }
}

/// A set of hardware interrupt lines.
///
/// Bit `n` of the underlying word is set if line `n` is in the set. This is
/// the layout of every per-line register of the controller.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineSet(u32);

impl LineSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set containing every line.
    pub const fn full() -> Self {
        Self(u32::MAX)
    }

    /// Creates a set from a raw bit mask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bit mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, line: Line) -> bool {
        self.0.get_bit(line.index() as usize)
    }

    pub fn insert(&mut self, line: Line) {
        self.0.set_bit(line.index() as usize, true);
    }

    pub fn remove(&mut self, line: Line) {
        self.0.set_bit(line.index() as usize, false);
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the lines that are not in the set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns an iterator over the lines in the set, lowest line first.
    pub fn iter(self) -> LineSetIter {
        LineSetIter(self.0)
    }

    /// Returns the set of lines within `range`.
    pub fn from_range(range: Range<u8>) -> Self {
        range.filter_map(Line::new).collect()
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Line::index)).finish()
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut set = Self::empty();
        for line in iter {
            set.insert(line);
        }
        set
    }
}

impl IntoIterator for LineSet {
    type Item = Line;
    type IntoIter = LineSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the lines of a [`LineSet`].
pub struct LineSetIter(u32);

impl Iterator for LineSetIter {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.0 == 0 {
            return None;
        }

        let bit = self.0.trailing_zeros();
        self.0 &= !(1 << bit);
        Some(Line(bit as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LineSetIter {}
