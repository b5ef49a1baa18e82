//! Flat registration table exposing the array math functions to a script host.
//!
//! Each entry maps an external name under [`CLASS_NAME`] to a typed wrapper that
//! unpacks [`ScriptValue`] arguments, calls the plain Rust function and packs
//! the result. Names match case-insensitively, like the script language they
//! were first registered with.

use once_cell::sync::Lazy;

use crate::array_ops;
use crate::config::{ArrayMathConfig, MaxMode};
use crate::error::{ArrayMathError, Result};
use crate::interp::interpolate_scalar;
use crate::modifiers::{accumulate_modifiers, calculate_modifiers_logged, ModifierTable};
use ParamKind::{Float as F, FloatArray as A, Int as I, String as S};

pub const CLASS_NAME: &str = "ArrayMath";

/// A value crossing the script boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Int(i32),
    Float(f32),
    FloatArray(Vec<f32>),
    String(String),
}

impl ScriptValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Int(_) => ParamKind::Int.name(),
            ScriptValue::Float(_) => ParamKind::Float.name(),
            ScriptValue::FloatArray(_) => ParamKind::FloatArray.name(),
            ScriptValue::String(_) => ParamKind::String.name(),
        }
    }
}

impl From<i32> for ScriptValue {
    fn from(v: i32) -> Self {
        ScriptValue::Int(v)
    }
}

impl From<f32> for ScriptValue {
    fn from(v: f32) -> Self {
        ScriptValue::Float(v)
    }
}

impl From<Vec<f32>> for ScriptValue {
    fn from(v: Vec<f32>) -> Self {
        ScriptValue::FloatArray(v)
    }
}

impl From<ModifierTable> for ScriptValue {
    fn from(table: ModifierTable) -> Self {
        ScriptValue::FloatArray(table.into_vec())
    }
}

impl From<String> for ScriptValue {
    fn from(v: String) -> Self {
        ScriptValue::String(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Float,
    FloatArray,
    String,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Int => "Int",
            ParamKind::Float => "Float",
            ParamKind::FloatArray => "Float[]",
            ParamKind::String => "String",
        }
    }
}

/// Positional arguments of one call, with typed accessors.
pub struct Args<'a> {
    name: &'static str,
    values: &'a [ScriptValue],
}

impl<'a> Args<'a> {
    fn mismatch(&self, index: usize, expected: ParamKind) -> ArrayMathError {
        ArrayMathError::ArgumentType {
            name: self.name,
            index,
            expected: expected.name(),
            found: self.values[index].type_name(),
        }
    }

    pub fn int(&self, index: usize) -> Result<i32> {
        match &self.values[index] {
            ScriptValue::Int(v) => Ok(*v),
            _ => Err(self.mismatch(index, ParamKind::Int)),
        }
    }

    /// Ints are accepted where a float is expected.
    pub fn float(&self, index: usize) -> Result<f32> {
        match &self.values[index] {
            ScriptValue::Float(v) => Ok(*v),
            ScriptValue::Int(v) => Ok(*v as f32),
            _ => Err(self.mismatch(index, ParamKind::Float)),
        }
    }

    pub fn array(&self, index: usize) -> Result<&'a [f32]> {
        let values: &'a [ScriptValue] = self.values;
        match &values[index] {
            ScriptValue::FloatArray(v) => Ok(v.as_slice()),
            _ => Err(self.mismatch(index, ParamKind::FloatArray)),
        }
    }

    pub fn string(&self, index: usize) -> Result<&'a str> {
        let values: &'a [ScriptValue] = self.values;
        match &values[index] {
            ScriptValue::String(v) => Ok(v.as_str()),
            _ => Err(self.mismatch(index, ParamKind::String)),
        }
    }
}

type ScriptFn = fn(&Args<'_>, &ArrayMathConfig) -> Result<ScriptValue>;

/// One registered function.
pub struct ScriptFunction {
    pub name: &'static str,
    pub params: &'static [ParamKind],
    call: ScriptFn,
}

impl std::fmt::Debug for ScriptFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}

impl ScriptFunction {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

#[rustfmt::skip]
static FUNCTIONS: &[ScriptFunction] = &[
    ScriptFunction { name: "MyTest", params: &[], call: call_my_test },
    ScriptFunction { name: "TestIntFn", params: &[I], call: call_test_int },
    ScriptFunction { name: "TestArrayFn", params: &[A], call: call_sum },
    ScriptFunction { name: "Copy", params: &[A], call: call_copy },
    ScriptFunction { name: "Add", params: &[A, A], call: call_add },
    ScriptFunction { name: "Sub", params: &[A, A], call: call_sub },
    ScriptFunction { name: "Mul", params: &[A, A], call: call_mul },
    ScriptFunction { name: "Div", params: &[A, A], call: call_div },
    ScriptFunction { name: "AddScalar", params: &[A, F], call: call_add_scalar },
    ScriptFunction { name: "MulScalar", params: &[A, F], call: call_mul_scalar },
    ScriptFunction { name: "Clamp", params: &[A, F, F], call: call_clamp },
    ScriptFunction { name: "Min", params: &[A, A], call: call_min },
    ScriptFunction { name: "Max", params: &[A, A], call: call_max },
    ScriptFunction { name: "MinScalar", params: &[A, F], call: call_min_scalar },
    ScriptFunction { name: "MaxScalar", params: &[A, F], call: call_max_scalar },
    ScriptFunction { name: "InterpolateScalar", params: &[F, F, F], call: call_interpolate },
    ScriptFunction { name: "CalculateModifiers", params: &[A, F, S], call: call_calculate },
    ScriptFunction { name: "AccumulateModifiers", params: &[A, F, F, A], call: call_accumulate },
];

fn call_my_test(_: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(ScriptValue::Float(3.3))
}

fn call_test_int(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(ScriptValue::Int(args.int(0)?.wrapping_add(11)))
}

fn call_sum(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::sum(args.array(0)?).into())
}

fn call_copy(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::copy(args.array(0)?).into())
}

fn call_add(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::add(args.array(0)?, args.array(1)?).into())
}

fn call_sub(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::sub(args.array(0)?, args.array(1)?).into())
}

fn call_mul(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::mul(args.array(0)?, args.array(1)?).into())
}

fn call_div(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::div(args.array(0)?, args.array(1)?).into())
}

fn call_add_scalar(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::add_scalar(args.array(0)?, args.float(1)?).into())
}

fn call_mul_scalar(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::mul_scalar(args.array(0)?, args.float(1)?).into())
}

fn call_clamp(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::clamp(args.array(0)?, args.float(1)?, args.float(2)?).into())
}

fn call_min(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::min(args.array(0)?, args.array(1)?).into())
}

fn call_max(args: &Args<'_>, config: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(max_by_mode(config.max_mode, args.array(0)?, args.array(1)?).into())
}

fn call_min_scalar(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(array_ops::min_scalar(args.array(0)?, args.float(1)?).into())
}

fn call_max_scalar(args: &Args<'_>, config: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(max_scalar_by_mode(config.max_mode, args.array(0)?, args.float(1)?).into())
}

/// Externally registered `Max`: the element-wise minimum under [`MaxMode::Legacy`].
pub fn max_by_mode(mode: MaxMode, lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    match mode {
        MaxMode::Legacy => array_ops::min(lhs, rhs),
        MaxMode::Strict => array_ops::max(lhs, rhs),
    }
}

/// Externally registered `MaxScalar`, see [`max_by_mode`].
pub fn max_scalar_by_mode(mode: MaxMode, lhs: &[f32], scalar: f32) -> Vec<f32> {
    match mode {
        MaxMode::Legacy => array_ops::min_scalar(lhs, scalar),
        MaxMode::Strict => array_ops::max_scalar(lhs, scalar),
    }
}

fn call_interpolate(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    Ok(interpolate_scalar(args.float(0)?, args.float(1)?, args.float(2)?).into())
}

fn call_calculate(args: &Args<'_>, config: &ArrayMathConfig) -> Result<ScriptValue> {
    let table = calculate_modifiers_logged(
        args.array(0)?,
        args.float(1)?,
        Some(args.string(2)?),
        config.calculate_log_level,
    );
    Ok(table.into())
}

fn call_accumulate(args: &Args<'_>, _: &ArrayMathConfig) -> Result<ScriptValue> {
    let target = args.array(0)?.to_vec();
    Ok(accumulate_modifiers(target, args.float(1)?, args.float(2)?, args.array(3)?).into())
}

static SHARED: Lazy<Registry> = Lazy::new(|| {
    let config = ArrayMathConfig::from_env().unwrap_or_else(|e| {
        log::warn!(target: crate::LOG_TARGET, "{e}; using default config");
        ArrayMathConfig::default()
    });
    Registry::new(config)
});

/// The function table bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    config: ArrayMathConfig,
}

impl Registry {
    pub fn new(config: ArrayMathConfig) -> Self {
        Self { config }
    }

    /// Process-wide registry configured from the environment on first use.
    pub fn shared() -> &'static Registry {
        &SHARED
    }

    pub fn config(&self) -> &ArrayMathConfig {
        &self.config
    }

    pub fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    pub fn functions(&self) -> &'static [ScriptFunction] {
        FUNCTIONS
    }

    pub fn lookup(&self, name: &str) -> Option<&'static ScriptFunction> {
        FUNCTIONS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn invoke(&self, name: &str, args: &[ScriptValue]) -> Result<ScriptValue> {
        let function = self
            .lookup(name)
            .ok_or_else(|| ArrayMathError::UnknownFunction {
                class: CLASS_NAME,
                name: name.to_string(),
            })?;

        if args.len() != function.arity() {
            return Err(ArrayMathError::ArityMismatch {
                name: function.name,
                expected: function.arity(),
                found: args.len(),
            });
        }

        let args = Args {
            name: function.name,
            values: args,
        };
        (function.call)(&args, &self.config)
    }
}
