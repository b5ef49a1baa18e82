//! Fixed 90-slot modifier table layout.
//!
//! External data producers write tables in this exact layout, so the offsets
//! below are a compatibility contract.
//!
//! | index      | meaning                                   |
//! |------------|-------------------------------------------|
//! | 0          | debuff max scale (percent)                |
//! | 1          | buff max scale (percent)                  |
//! | 2 / 3      | debuff / buff range start                 |
//! | 4 / 5      | debuff / buff range end                   |
//! | 6..=9      | reserved                                  |
//! | 10..=88    | 40 pairs: even = debuff, odd = buff weight |

use std::ops::Index;

pub const IX_DEBUFF_MAX: usize = 0;
pub const IX_BUFF_MAX: usize = 1;
pub const IX_DEBUFF_FROM: usize = 2;
pub const IX_BUFF_FROM: usize = 3;
pub const IX_DEBUFF_TO: usize = 4;
pub const IX_BUFF_TO: usize = 5;

/// First paired slot offset.
pub const IX_PAIRS_START: usize = 10;
/// Exclusive end of the paired region (last pair starts at 88).
pub const IX_PAIRS_END: usize = 89;

pub const MODIFIERS_LENGTH: usize = 90;
/// One accumulator slot per (debuff, buff) pair.
pub const ACCUMULATE_LENGTH: usize = (MODIFIERS_LENGTH - IX_PAIRS_START) / 2;

/// Percent-to-fraction factor applied to max scales and master scales.
pub const PERCENT: f64 = 0.01;

/// Table offset of the debuff entry for pair `slot`. The buff entry follows it.
#[inline]
pub const fn pair_offset(slot: usize) -> usize {
    IX_PAIRS_START + slot * 2
}

/// Apply [`PERCENT`] in double precision and narrow back, matching the
/// numerics existing tables were tuned against.
#[inline]
pub fn percent_of(value: f32) -> f32 {
    (PERCENT * value as f64) as f32
}

/// One (debuff, buff) pair from the paired region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModifierPair {
    pub debuff: f32,
    pub buff: f32,
}

/// An owned, length-checked modifier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierTable {
    values: [f32; MODIFIERS_LENGTH],
}

impl Default for ModifierTable {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl ModifierTable {
    pub const fn zeroed() -> Self {
        Self {
            values: [0.0; MODIFIERS_LENGTH],
        }
    }

    /// Copy the first [`MODIFIERS_LENGTH`] entries of `source`.
    ///
    /// Returns `None` when `source` is too short to be a table.
    pub fn from_slice(source: &[f32]) -> Option<Self> {
        let head = source.get(..MODIFIERS_LENGTH)?;
        let mut values = [0.0; MODIFIERS_LENGTH];
        values.copy_from_slice(head);
        Some(Self { values })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values.to_vec()
    }

    pub fn debuff_max(&self) -> f32 {
        self.values[IX_DEBUFF_MAX]
    }

    pub fn buff_max(&self) -> f32 {
        self.values[IX_BUFF_MAX]
    }

    /// `(from, to)` input range of the debuff ramp.
    pub fn debuff_range(&self) -> (f32, f32) {
        (self.values[IX_DEBUFF_FROM], self.values[IX_DEBUFF_TO])
    }

    /// `(from, to)` input range of the buff ramp.
    pub fn buff_range(&self) -> (f32, f32) {
        (self.values[IX_BUFF_FROM], self.values[IX_BUFF_TO])
    }

    pub fn pair(&self, slot: usize) -> Option<ModifierPair> {
        if slot >= ACCUMULATE_LENGTH {
            return None;
        }
        let ix = pair_offset(slot);
        Some(ModifierPair {
            debuff: self.values[ix],
            buff: self.values[ix + 1],
        })
    }

    pub fn set_pair(&mut self, slot: usize, pair: ModifierPair) {
        if slot >= ACCUMULATE_LENGTH {
            return;
        }
        let ix = pair_offset(slot);
        self.values[ix] = pair.debuff;
        self.values[ix + 1] = pair.buff;
    }

    /// All 40 pairs in slot order.
    pub fn pairs(&self) -> impl Iterator<Item = ModifierPair> + '_ {
        (IX_PAIRS_START..IX_PAIRS_END)
            .step_by(2)
            .map(move |ix| ModifierPair {
                debuff: self.values[ix],
                buff: self.values[ix + 1],
            })
    }
}

impl Index<usize> for ModifierTable {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl From<ModifierTable> for Vec<f32> {
    fn from(table: ModifierTable) -> Self {
        table.into_vec()
    }
}
