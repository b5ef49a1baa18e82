//! Fold modifier tables into a running 40-slot accumulator.

use super::layout::{percent_of, ModifierTable, ACCUMULATE_LENGTH};

/// A zeroed accumulator sized for one slot per pair.
pub fn new_accumulator() -> Vec<f32> {
    vec![0.0; ACCUMULATE_LENGTH]
}

/// Add the master-scaled pairs of `source` into `target` in place.
///
/// Slot `n` of `target` receives `0.01 * (master_debuff * debuff_n + master_buff * buff_n)`.
/// Returns `false` without touching `target` when `source` is shorter than a
/// full table or `target` has fewer than [`ACCUMULATE_LENGTH`] slots. Slots
/// past [`ACCUMULATE_LENGTH`] are never written.
pub fn accumulate_into(
    target: &mut [f32],
    master_debuff: f32,
    master_buff: f32,
    source: &[f32],
) -> bool {
    if target.len() < ACCUMULATE_LENGTH {
        return false;
    }
    let Some(table) = ModifierTable::from_slice(source) else {
        return false;
    };

    for (slot, pair) in target.iter_mut().zip(table.pairs()) {
        *slot += percent_of(master_debuff * pair.debuff + master_buff * pair.buff);
    }
    true
}

/// Value-in/value-out form of [`accumulate_into`]: `target` comes back
/// unchanged on undersized input.
pub fn accumulate_modifiers(
    mut target: Vec<f32>,
    master_debuff: f32,
    master_buff: f32,
    source: &[f32],
) -> Vec<f32> {
    accumulate_into(&mut target, master_debuff, master_buff, source);
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::layout::{pair_offset, MODIFIERS_LENGTH};

    fn ramp_source() -> Vec<f32> {
        let mut source = vec![0.0; MODIFIERS_LENGTH];
        for slot in 0..ACCUMULATE_LENGTH {
            source[pair_offset(slot)] = slot as f32;
            source[pair_offset(slot) + 1] = 10.0;
        }
        source
    }

    #[test]
    fn test_short_source_leaves_target_unchanged() {
        let target = vec![1.0, 2.0, 3.0]
            .into_iter()
            .chain(std::iter::repeat(0.5).take(37))
            .collect::<Vec<f32>>();
        let result = accumulate_modifiers(target.clone(), 100.0, 100.0, &[1.0; 89]);
        assert_eq!(result, target);
    }

    #[test]
    fn test_short_target_left_unchanged() {
        let target = vec![4.0; 39];
        let result = accumulate_modifiers(target.clone(), 100.0, 100.0, &ramp_source());
        assert_eq!(result, target);
        assert_eq!(result.len(), 39);
    }

    #[test]
    fn test_single_application() {
        let result = accumulate_modifiers(new_accumulator(), 100.0, 50.0, &ramp_source());
        assert_eq!(result.len(), ACCUMULATE_LENGTH);
        // 0.01 * (100 * 0 + 50 * 10)
        assert_eq!(result[0], 5.0);
        // 0.01 * (100 * 3 + 50 * 10)
        assert_eq!(result[3], 8.0);
    }

    #[test]
    fn test_header_slots_are_not_read() {
        let mut source = ramp_source();
        for ix in 0..10 {
            source[ix] = 1000.0;
        }
        assert_eq!(
            accumulate_modifiers(new_accumulator(), 100.0, 50.0, &source),
            accumulate_modifiers(new_accumulator(), 100.0, 50.0, &ramp_source())
        );
    }

    #[test]
    fn test_double_application_is_twice_single() {
        let source = ramp_source();
        let once = accumulate_modifiers(new_accumulator(), 37.5, 12.25, &source);
        let twice = accumulate_modifiers(once.clone(), 37.5, 12.25, &source);
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(*b, *a * 2.0);
        }
    }

    #[test]
    fn test_extra_target_slots_untouched() {
        let mut target = vec![0.0; ACCUMULATE_LENGTH + 5];
        target[ACCUMULATE_LENGTH] = -7.0;
        assert!(accumulate_into(&mut target, 100.0, 100.0, &ramp_source()));
        assert_eq!(target[ACCUMULATE_LENGTH], -7.0);
        assert!(target[ACCUMULATE_LENGTH + 1..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_accumulates_across_sources() {
        let mut target = new_accumulator();
        let source = ramp_source();
        accumulate_into(&mut target, 100.0, 0.0, &source);
        accumulate_into(&mut target, 0.0, 100.0, &source);
        // debuff pass adds slot, buff pass adds 10
        assert_eq!(target[2], 12.0);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: accumulating the same source twice doubles a zeroed buffer
            #[test]
            fn prop_accumulate_is_additive(
                weights in proptest::collection::vec(-100.0f32..100.0f32, MODIFIERS_LENGTH),
                master_debuff in -200.0f32..200.0f32,
                master_buff in -200.0f32..200.0f32
            ) {
                let once = accumulate_modifiers(new_accumulator(), master_debuff, master_buff, &weights);
                let twice = accumulate_modifiers(once.clone(), master_debuff, master_buff, &weights);
                for (a, b) in once.iter().zip(&twice) {
                    prop_assert_eq!(*b, *a * 2.0);
                }
            }

            /// Property: undersized targets are returned as-is
            #[test]
            fn prop_short_target_unchanged(
                target in proptest::collection::vec(-10.0f32..10.0f32, 0..ACCUMULATE_LENGTH),
                weights in proptest::collection::vec(-100.0f32..100.0f32, MODIFIERS_LENGTH)
            ) {
                let result = accumulate_modifiers(target.clone(), 100.0, 100.0, &weights);
                prop_assert_eq!(result, target);
            }
        }
    }
}
