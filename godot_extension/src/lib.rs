//! GDExtension wrapper exposing `array_math_core` to GDScript as `ArrayMath`.
//!
//! Every function is static: call it on the class, e.g.
//!
//! ```gdscript
//! var derived = ArrayMath.calculate_modifiers(table, stat_value, "frost")
//! total = ArrayMath.accumulate_modifiers(total, 100.0, 100.0, derived)
//! ```

use array_math_core::modifiers::calculate_modifiers_logged;
use array_math_core::registry::{max_by_mode, max_scalar_by_mode};
use array_math_core::{accumulate_modifiers, array_ops, interpolate_scalar, Registry};
use godot::prelude::*;

use std::sync::Once;

mod logger;
mod marshal;

use marshal::{script_value_to_variant, to_packed, variant_to_script_value};

struct ArrayMathExtension;

#[gdextension]
unsafe impl ExtensionLibrary for ArrayMathExtension {
    fn on_level_init(level: InitLevel) {
        if level == InitLevel::Scene {
            install_panic_hook();
            logger::init();
        }
    }
}

static PANIC_HOOK: Once = Once::new();
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            let loc = if let Some(l) = info.location() {
                format!("{}:{}:{}", l.file(), l.line(), l.column())
            } else {
                "unknown".to_string()
            };
            godot_error!("Rust panic at {}: {}", loc, msg);
        }));
    });
}

fn create_error_response(message: &str, code: &str) -> GString {
    let response = serde_json::json!({
        "success": false,
        "error": message,
        "error_code": code
    });
    GString::from(&response.to_string())
}

/// Array math for modifier tables - GDExtension wrapper for array_math_core
#[derive(GodotClass)]
#[class(base=RefCounted)]
pub struct ArrayMath {
    base: Base<RefCounted>,
}

#[godot_api]
impl IRefCounted for ArrayMath {
    fn init(base: Base<RefCounted>) -> Self {
        Self { base }
    }
}

#[godot_api]
impl ArrayMath {
    /// Connection test - returns version string to confirm the extension is loaded
    #[func]
    pub fn test_connection() -> GString {
        GString::from(&format!(
            "ArrayMath v{} ({}, built {}) - OK",
            array_math_core::VERSION,
            env!("GIT_HASH"),
            env!("BUILD_TIME_UTC")
        ))
    }

    /// Externally registered function names, in registration order
    #[func]
    pub fn list_functions() -> PackedStringArray {
        let mut names = PackedStringArray::new();
        for function in Registry::shared().functions() {
            names.push(function.name);
        }
        names
    }

    /// Call a registered function by its external name.
    ///
    /// # Arguments
    /// * `name` - External name, e.g. "AddScalar" (case-insensitive)
    /// * `args` - Positional arguments (float arrays, floats, ints, strings)
    ///
    /// # Returns
    /// The function result, or nil after logging an error when the call
    /// cannot be marshalled
    #[func]
    pub fn call_function(name: GString, args: VariantArray) -> Variant {
        let name = name.to_string();

        let mut values = Vec::with_capacity(args.len());
        for (index, arg) in args.iter_shared().enumerate() {
            match variant_to_script_value(&arg) {
                Ok(value) => values.push(value),
                Err(e) => {
                    godot_error!("ArrayMath.{}: argument {}: {}", name, index, e);
                    return Variant::nil();
                }
            }
        }

        match Registry::shared().invoke(&name, &values) {
            Ok(result) => script_value_to_variant(&result),
            Err(e) => {
                godot_error!("{}", e);
                Variant::nil()
            }
        }
    }

    #[func]
    pub fn copy(source: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::copy(source.as_slice()))
    }

    #[func]
    pub fn sum(source: PackedFloat32Array) -> f32 {
        array_ops::sum(source.as_slice())
    }

    #[func]
    pub fn add(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::add(lhs.as_slice(), rhs.as_slice()))
    }

    #[func]
    pub fn sub(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::sub(lhs.as_slice(), rhs.as_slice()))
    }

    #[func]
    pub fn mul(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::mul(lhs.as_slice(), rhs.as_slice()))
    }

    #[func]
    pub fn div(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::div(lhs.as_slice(), rhs.as_slice()))
    }

    #[func]
    pub fn add_scalar(lhs: PackedFloat32Array, scalar: f32) -> PackedFloat32Array {
        to_packed(&array_ops::add_scalar(lhs.as_slice(), scalar))
    }

    #[func]
    pub fn mul_scalar(lhs: PackedFloat32Array, scalar: f32) -> PackedFloat32Array {
        to_packed(&array_ops::mul_scalar(lhs.as_slice(), scalar))
    }

    #[func]
    pub fn clamp(source: PackedFloat32Array, min_value: f32, max_value: f32) -> PackedFloat32Array {
        to_packed(&array_ops::clamp(source.as_slice(), min_value, max_value))
    }

    #[func]
    pub fn min(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        to_packed(&array_ops::min(lhs.as_slice(), rhs.as_slice()))
    }

    /// Honors the configured max mode (legacy mode returns the minimum)
    #[func]
    pub fn max(lhs: PackedFloat32Array, rhs: PackedFloat32Array) -> PackedFloat32Array {
        let mode = Registry::shared().config().max_mode;
        to_packed(&max_by_mode(mode, lhs.as_slice(), rhs.as_slice()))
    }

    #[func]
    pub fn min_scalar(lhs: PackedFloat32Array, scalar: f32) -> PackedFloat32Array {
        to_packed(&array_ops::min_scalar(lhs.as_slice(), scalar))
    }

    /// Honors the configured max mode (legacy mode returns the minimum)
    #[func]
    pub fn max_scalar(lhs: PackedFloat32Array, scalar: f32) -> PackedFloat32Array {
        let mode = Registry::shared().config().max_mode;
        to_packed(&max_scalar_by_mode(mode, lhs.as_slice(), scalar))
    }

    #[func]
    pub fn interpolate_scalar(from: f32, to: f32, input: f32) -> f32 {
        interpolate_scalar(from, to, input)
    }

    /// Weight a 90-slot modifier table by the debuff/buff ramps at `value`.
    ///
    /// Tables shorter than 90 entries yield 90 zeros.
    #[func]
    pub fn calculate_modifiers(
        source: PackedFloat32Array,
        value: f32,
        debug_tag: GString,
    ) -> PackedFloat32Array {
        let tag = debug_tag.to_string();
        let level = Registry::shared().config().calculate_log_level;
        let table = calculate_modifiers_logged(source.as_slice(), value, Some(&tag), level);
        to_packed(table.as_slice())
    }

    /// Add a master-scaled modifier table into a 40-slot accumulator.
    ///
    /// Returns `target` unchanged when either array is undersized.
    #[func]
    pub fn accumulate_modifiers(
        target: PackedFloat32Array,
        master_debuff: f32,
        master_buff: f32,
        source: PackedFloat32Array,
    ) -> PackedFloat32Array {
        let total = accumulate_modifiers(
            target.as_slice().to_vec(),
            master_debuff,
            master_buff,
            source.as_slice(),
        );
        to_packed(&total)
    }

    /// JSON variant of `calculate_modifiers`
    ///
    /// # Arguments
    /// * `request_json` - {schema_version, source, value, debug_tag?}
    #[func]
    pub fn calculate_modifiers_json(request_json: GString) -> GString {
        match array_math_core::calculate_modifiers_json(&request_json.to_string()) {
            Ok(response) => GString::from(&response),
            Err(e) => {
                godot_error!("calculate_modifiers_json failed: {}", e);
                create_error_response(&e.to_string(), "CALCULATE_FAILED")
            }
        }
    }

    /// JSON variant of `accumulate_modifiers`
    ///
    /// # Arguments
    /// * `request_json` - {schema_version, target, master_debuff, master_buff, source}
    #[func]
    pub fn accumulate_modifiers_json(request_json: GString) -> GString {
        match array_math_core::accumulate_modifiers_json(&request_json.to_string()) {
            Ok(response) => GString::from(&response),
            Err(e) => {
                godot_error!("accumulate_modifiers_json failed: {}", e);
                create_error_response(&e.to_string(), "ACCUMULATE_FAILED")
            }
        }
    }
}
