//! Variant <-> ScriptValue conversion for dynamic registry calls.

use array_math_core::ScriptValue;
use godot::builtin::{VariantArray, VariantType};
use godot::prelude::*;

pub fn variant_to_script_value(v: &Variant) -> Result<ScriptValue, String> {
    match v.get_type() {
        VariantType::INT => {
            let n = v
                .try_to::<i64>()
                .map_err(|e| format!("Expected int Variant: {e}"))?;
            let n = i32::try_from(n).map_err(|_| format!("Int {n} does not fit in 32 bits"))?;
            Ok(ScriptValue::Int(n))
        }
        VariantType::FLOAT => Ok(ScriptValue::Float(
            v.try_to::<f64>()
                .map_err(|e| format!("Expected float Variant: {e}"))? as f32,
        )),
        VariantType::STRING => Ok(ScriptValue::String(
            v.try_to::<GString>()
                .map_err(|e| format!("Expected string Variant: {e}"))?
                .to_string(),
        )),
        VariantType::STRING_NAME => Ok(ScriptValue::String(v.stringify().to_string())),
        VariantType::PACKED_FLOAT32_ARRAY => {
            let arr = v
                .try_to::<PackedFloat32Array>()
                .map_err(|e| format!("Expected PackedFloat32Array Variant: {e}"))?;
            Ok(ScriptValue::FloatArray(arr.as_slice().to_vec()))
        }
        VariantType::PACKED_FLOAT64_ARRAY => {
            let arr = v
                .try_to::<PackedFloat64Array>()
                .map_err(|e| format!("Expected PackedFloat64Array Variant: {e}"))?;
            Ok(ScriptValue::FloatArray(
                arr.as_slice().iter().map(|n| *n as f32).collect(),
            ))
        }
        VariantType::ARRAY => {
            let arr = v
                .try_to::<VariantArray>()
                .map_err(|e| format!("Expected Array Variant: {e}"))?;
            let mut out = Vec::with_capacity(arr.len());
            for elem in arr.iter_shared() {
                match variant_to_script_value(&elem)? {
                    ScriptValue::Float(f) => out.push(f),
                    ScriptValue::Int(n) => out.push(n as f32),
                    other => {
                        return Err(format!(
                            "Array elements must be numbers, got {}",
                            other.type_name()
                        ))
                    }
                }
            }
            Ok(ScriptValue::FloatArray(out))
        }
        other => Err(format!("Unsupported Variant type for ArrayMath call: {other:?}")),
    }
}

pub fn script_value_to_variant(value: &ScriptValue) -> Variant {
    match value {
        ScriptValue::Int(n) => n.to_variant(),
        ScriptValue::Float(f) => f.to_variant(),
        ScriptValue::FloatArray(values) => to_packed(values).to_variant(),
        ScriptValue::String(s) => GString::from(s.as_str()).to_variant(),
    }
}

pub fn to_packed(values: &[f32]) -> PackedFloat32Array {
    PackedFloat32Array::from(values)
}
