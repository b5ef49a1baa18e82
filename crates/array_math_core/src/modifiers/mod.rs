//! Modifier table calculation and accumulation.
//!
//! [`calculate_modifiers`] turns a static table of per-slot debuff/buff
//! coefficients into effective magnitudes for one input value.
//! [`accumulate_modifiers`] folds tables, scaled by master percentages, into a
//! 40-slot running total so several active effects combine into one buffer.

pub mod accumulate;
pub mod calculate;
pub mod layout;

pub use accumulate::{accumulate_into, accumulate_modifiers, new_accumulator};
pub use calculate::{
    calculate_modifiers, calculate_modifiers_logged, calculate_modifiers_tagged, EffectiveScale,
};
pub use layout::{
    pair_offset, ModifierPair, ModifierTable, ACCUMULATE_LENGTH, IX_BUFF_FROM, IX_BUFF_MAX,
    IX_BUFF_TO, IX_DEBUFF_FROM, IX_DEBUFF_MAX, IX_DEBUFF_TO, IX_PAIRS_END, IX_PAIRS_START,
    MODIFIERS_LENGTH,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Calculated tables feed straight into the accumulator.
    #[test]
    fn test_calculate_then_accumulate() {
        let mut source = vec![0.0; MODIFIERS_LENGTH];
        source[IX_DEBUFF_MAX] = 100.0;
        source[IX_BUFF_MAX] = 100.0;
        source[IX_DEBUFF_TO] = 10.0;
        source[IX_BUFF_TO] = 10.0;
        source[pair_offset(0)] = 2.0;
        source[pair_offset(0) + 1] = 4.0;

        let derived = calculate_modifiers(&source, 10.0);
        let total = accumulate_modifiers(new_accumulator(), 100.0, 100.0, derived.as_slice());

        assert_eq!(total[0], 6.0);
        assert!(total[1..].iter().all(|v| *v == 0.0));
    }
}
