//! # array_math_core - Modifier table math for script hosts
//!
//! Float array primitives plus the buff/debuff modifier routines behind the
//! `ArrayMath` script class.
//!
//! ## Features
//! - Interpolation-weighted modifier tables (`CalculateModifiers`)
//! - Master-scaled accumulation across tables (`AccumulateModifiers`)
//! - Element-wise add/sub/mul/div, scalar ops, clamp, min/max
//! - Flat name -> function registry for host bindings
//! - JSON API for hosts that exchange strings

pub mod api;
pub mod array_ops;
pub mod config;
pub mod error;
pub mod interp;
pub mod modifiers;
pub mod registry;

pub use api::{accumulate_modifiers_json, calculate_modifiers_json};
pub use config::{ArrayMathConfig, MaxMode};
pub use error::{ArrayMathError, Result};
pub use interp::interpolate_scalar;
pub use modifiers::{
    accumulate_into, accumulate_modifiers, calculate_modifiers, calculate_modifiers_tagged,
    new_accumulator, ModifierPair, ModifierTable, ACCUMULATE_LENGTH, MODIFIERS_LENGTH,
};
pub use registry::{Registry, ScriptFunction, ScriptValue, CLASS_NAME};

/// `log` target for every record emitted by this crate.
pub const LOG_TARGET: &str = "array_math";

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_cover_core_flow() {
        let mut source = vec![0.0; MODIFIERS_LENGTH];
        source[0] = 100.0;
        source[1] = 100.0;
        source[4] = 1.0;
        source[5] = 1.0;
        source[10] = 1.0;

        let table = calculate_modifiers(&source, 1.0);
        let mut total = new_accumulator();
        assert!(accumulate_into(&mut total, 100.0, 100.0, table.as_slice()));
        assert_eq!(total[0], 1.0);
        assert_eq!(interpolate_scalar(0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_shared_registry_has_all_functions() {
        assert_eq!(Registry::shared().functions().len(), 18);
        assert_eq!(Registry::shared().class_name(), CLASS_NAME);
    }
}
