//! JSON entry points for hosts that exchange strings instead of typed arrays.

use serde::{Deserialize, Serialize};

use crate::config::ArrayMathConfig;
use crate::error::{ArrayMathError, Result};
use crate::modifiers::{accumulate_modifiers, calculate_modifiers_logged};
use crate::registry::Registry;
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub schema_version: u8,
    pub source: Vec<f32>,
    pub value: f32,
    #[serde(default)]
    pub debug_tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub schema_version: u8,
    pub modifiers: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulateRequest {
    pub schema_version: u8,
    pub target: Vec<f32>,
    pub master_debuff: f32,
    pub master_buff: f32,
    pub source: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulateResponse {
    pub schema_version: u8,
    pub target: Vec<f32>,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(ArrayMathError::UnsupportedSchema {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}

/// Run the modifier calculator on a JSON request, configured like
/// [`Registry::shared`].
///
/// An undersized `source` still succeeds and yields a zero table.
pub fn calculate_modifiers_json(request_json: &str) -> Result<String> {
    calculate_modifiers_json_with(request_json, Registry::shared().config())
}

pub fn calculate_modifiers_json_with(
    request_json: &str,
    config: &ArrayMathConfig,
) -> Result<String> {
    let request: CalculateRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let table = calculate_modifiers_logged(
        &request.source,
        request.value,
        request.debug_tag.as_deref(),
        config.calculate_log_level,
    );

    let response = CalculateResponse {
        schema_version: SCHEMA_VERSION,
        modifiers: table.into_vec(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Fold one source table into the request's accumulator.
///
/// Undersized input returns the target as sent.
pub fn accumulate_modifiers_json(request_json: &str) -> Result<String> {
    let request: AccumulateRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let AccumulateRequest {
        target,
        master_debuff,
        master_buff,
        source,
        ..
    } = request;

    let response = AccumulateResponse {
        schema_version: SCHEMA_VERSION,
        target: accumulate_modifiers(target, master_debuff, master_buff, &source),
    };
    Ok(serde_json::to_string(&response)?)
}
