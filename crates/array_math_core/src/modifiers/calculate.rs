//! Derive per-slot effective debuff/buff magnitudes for one input value.

use log::Level;

use super::layout::{percent_of, ModifierPair, ModifierTable};
use crate::interp::interpolate_scalar;
use crate::LOG_TARGET;

/// Effective debuff and buff multipliers for one input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveScale {
    pub debuff: f32,
    pub buff: f32,
}

impl EffectiveScale {
    /// Interpolated ramp progress times the table's max-scale percentage,
    /// evaluated independently for the debuff and buff ramps.
    pub fn for_value(table: &ModifierTable, value: f32) -> Self {
        let (debuff_from, debuff_to) = table.debuff_range();
        let (buff_from, buff_to) = table.buff_range();

        let debuff_progress = interpolate_scalar(debuff_from, debuff_to, value);
        let buff_progress = interpolate_scalar(buff_from, buff_to, value);

        Self {
            debuff: debuff_progress * percent_of(table.debuff_max()),
            buff: buff_progress * percent_of(table.buff_max()),
        }
    }
}

/// Weight every paired slot of `source` by the effective scales at `value`.
///
/// A `source` shorter than a full table yields an all-zero table. Header and
/// reserved slots (0..=9) of the result are always zero.
pub fn calculate_modifiers(source: &[f32], value: f32) -> ModifierTable {
    calculate_modifiers_tagged(source, value, None)
}

/// [`calculate_modifiers`] with a caller debug tag attached to the entry log line.
pub fn calculate_modifiers_tagged(
    source: &[f32],
    value: f32,
    debug_tag: Option<&str>,
) -> ModifierTable {
    calculate_modifiers_logged(source, value, debug_tag, Level::Info)
}

pub fn calculate_modifiers_logged(
    source: &[f32],
    value: f32,
    debug_tag: Option<&str>,
    level: Level,
) -> ModifierTable {
    match debug_tag.filter(|tag| !tag.is_empty()) {
        Some(tag) => log::log!(target: LOG_TARGET, level, "CalculateModifiers [{}]", tag),
        None => log::log!(target: LOG_TARGET, level, "CalculateModifiers"),
    }

    let Some(table) = ModifierTable::from_slice(source) else {
        return ModifierTable::zeroed();
    };

    let scale = EffectiveScale::for_value(&table, value);

    let mut result = ModifierTable::zeroed();
    for (slot, pair) in table.pairs().enumerate() {
        result.set_pair(
            slot,
            ModifierPair {
                debuff: pair.debuff * scale.debuff,
                buff: pair.buff * scale.buff,
            },
        );
    }
    result
}
