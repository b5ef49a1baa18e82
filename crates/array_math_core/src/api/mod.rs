pub mod modifiers_json;

pub use modifiers_json::{
    accumulate_modifiers_json, calculate_modifiers_json, calculate_modifiers_json_with,
    AccumulateRequest, AccumulateResponse, CalculateRequest, CalculateResponse,
};
