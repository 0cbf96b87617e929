//! Input normalization.
//!
//! Turns an arbitrary JSON value into a fully populated [`GtmInput`]. Every
//! field has a documented fallback, so the only hard failure is a payload
//! that is not a JSON object at all.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::error::{GtmError, Result};
use crate::types::{BudgetLevel, LaunchTimeline, Stage};

pub const DEFAULT_PRODUCT_NAME: &str = "Your Product";
pub const DEFAULT_PRODUCT_DESCRIPTION: &str =
    "delivers a step-change improvement for your customers";
pub const DEFAULT_TARGET_AUDIENCE: &str = "A clearly defined ICP segment with acute pain";
pub const DEFAULT_BRAND_VOICE: &str = "Confident, data-backed, customer-obsessed storytelling";
pub const DEFAULT_ADOPTION_GOAL: &str = "Acquire 50 high-fit customers within the first 90 days";

// ---------------------------------------------------------------------------
// EnumMode
// ---------------------------------------------------------------------------

/// How to treat stage / budget / timeline values outside their option set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumMode {
    /// Substitute the field's default variant.
    #[default]
    Lenient,
    /// Reject with [`GtmError::InvalidOption`].
    Strict,
}

impl EnumMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            EnumMode::Strict
        } else {
            EnumMode::Lenient
        }
    }
}

// ---------------------------------------------------------------------------
// GtmInput
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmInput {
    pub product_name: String,
    pub product_description: String,
    pub target_audience: String,
    pub stage: Stage,
    pub budget_level: BudgetLevel,
    pub launch_timeline: LaunchTimeline,
    pub brand_voice: String,
    pub adoption_goal: String,
    pub focus_areas: Vec<String>,
}

impl Default for GtmInput {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            product_description: DEFAULT_PRODUCT_DESCRIPTION.to_string(),
            target_audience: DEFAULT_TARGET_AUDIENCE.to_string(),
            stage: Stage::default(),
            budget_level: BudgetLevel::default(),
            launch_timeline: LaunchTimeline::default(),
            brand_voice: DEFAULT_BRAND_VOICE.to_string(),
            adoption_goal: DEFAULT_ADOPTION_GOAL.to_string(),
            focus_areas: Vec::new(),
        }
    }
}

/// Normalize an untyped payload into a [`GtmInput`].
///
/// Fails with [`GtmError::InvalidPayload`] when `payload` is not an object.
/// In [`EnumMode::Strict`] an unrecognised stage, budget or timeline fails
/// with [`GtmError::InvalidOption`]; in lenient mode it falls back to the
/// default variant.
pub fn normalize(payload: &Value, mode: EnumMode) -> Result<GtmInput> {
    let Some(obj) = payload.as_object() else {
        return Err(GtmError::InvalidPayload);
    };

    Ok(GtmInput {
        product_name: text_field(obj, "productName", DEFAULT_PRODUCT_NAME),
        product_description: text_field(obj, "productDescription", DEFAULT_PRODUCT_DESCRIPTION),
        target_audience: text_field(obj, "targetAudience", DEFAULT_TARGET_AUDIENCE),
        stage: option_field(obj, "stage", mode)?,
        budget_level: option_field(obj, "budgetLevel", mode)?,
        launch_timeline: option_field(obj, "launchTimeline", mode)?,
        brand_voice: text_field(obj, "brandVoice", DEFAULT_BRAND_VOICE),
        adoption_goal: text_field(obj, "adoptionGoal", DEFAULT_ADOPTION_GOAL),
        focus_areas: focus_field(obj),
    })
}

/// Parse a raw request body and normalize it.
pub fn parse_payload(body: &[u8], mode: EnumMode) -> Result<GtmInput> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| GtmError::InvalidJson(e.to_string()))?;
    normalize(&value, mode)
}

fn text_field(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    match obj.get(key).and_then(Value::as_str).map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn option_field<T>(obj: &Map<String, Value>, key: &'static str, mode: EnumMode) -> Result<T>
where
    T: FromStr<Err = GtmError> + Default,
{
    let raw = match obj.get(key) {
        None | Some(Value::Null) => return Ok(T::default()),
        Some(v) => v,
    };

    let parsed = match raw.as_str() {
        Some(s) => s.trim().parse::<T>(),
        None => Err(GtmError::InvalidOption {
            field: key,
            value: raw.to_string(),
        }),
    };

    match (parsed, mode) {
        (Ok(v), _) => Ok(v),
        (Err(e), EnumMode::Strict) => Err(e),
        (Err(e), EnumMode::Lenient) => {
            tracing::debug!(field = key, "falling back to default: {e}");
            Ok(T::default())
        }
    }
}

fn focus_field(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("focusAreas") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lenient(v: Value) -> GtmInput {
        normalize(&v, EnumMode::Lenient).unwrap()
    }

    #[test]
    fn empty_object_yields_defaults() {
        let input = lenient(json!({}));
        assert_eq!(input, GtmInput::default());
        assert_eq!(input.product_name, "Your Product");
        assert_eq!(input.stage, Stage::Beta);
        assert_eq!(input.budget_level, BudgetLevel::Balanced);
        assert_eq!(input.launch_timeline, LaunchTimeline::Quarter);
        assert!(input.focus_areas.is_empty());
    }

    #[test]
    fn non_objects_are_rejected() {
        for payload in [
            json!(null),
            json!(42),
            json!(1.5),
            json!("text"),
            json!(["a", "b"]),
            json!(true),
        ] {
            let err = normalize(&payload, EnumMode::Lenient).unwrap_err();
            assert!(
                matches!(err, GtmError::InvalidPayload),
                "expected InvalidPayload for {payload}"
            );
        }
    }

    #[test]
    fn whitespace_only_text_uses_default() {
        let input = lenient(json!({ "productName": "  " }));
        assert_eq!(input.product_name, DEFAULT_PRODUCT_NAME);
    }

    #[test]
    fn text_fields_are_trimmed() {
        let input = lenient(json!({
            "productName": "  Atlas IQ  ",
            "adoptionGoal": "\n500 teams\t",
        }));
        assert_eq!(input.product_name, "Atlas IQ");
        assert_eq!(input.adoption_goal, "500 teams");
    }

    #[test]
    fn non_string_text_uses_default() {
        let input = lenient(json!({ "brandVoice": 7, "targetAudience": ["x"] }));
        assert_eq!(input.brand_voice, DEFAULT_BRAND_VOICE);
        assert_eq!(input.target_audience, DEFAULT_TARGET_AUDIENCE);
    }

    #[test]
    fn focus_areas_keep_only_strings_in_order() {
        let input = lenient(json!({ "focusAreas": ["positioning", 42, null, "lifecycle"] }));
        assert_eq!(input.focus_areas, vec!["positioning", "lifecycle"]);

        let input = lenient(json!({ "focusAreas": ["positioning", 42, null] }));
        assert_eq!(input.focus_areas, vec!["positioning"]);
    }

    #[test]
    fn focus_areas_non_array_is_empty() {
        let input = lenient(json!({ "focusAreas": "positioning" }));
        assert!(input.focus_areas.is_empty());
    }

    #[test]
    fn known_options_are_parsed() {
        let input = lenient(json!({
            "stage": "scale",
            "budgetLevel": "aggressive",
            "launchTimeline": "half-year",
        }));
        assert_eq!(input.stage, Stage::Scale);
        assert_eq!(input.budget_level, BudgetLevel::Aggressive);
        assert_eq!(input.launch_timeline, LaunchTimeline::HalfYear);
    }

    #[test]
    fn lenient_mode_defaults_unknown_options() {
        let input = lenient(json!({
            "stage": "series-b",
            "budgetLevel": 3,
            "launchTimeline": { "weeks": 2 },
        }));
        assert_eq!(input.stage, Stage::Beta);
        assert_eq!(input.budget_level, BudgetLevel::Balanced);
        assert_eq!(input.launch_timeline, LaunchTimeline::Quarter);
    }

    #[test]
    fn strict_mode_rejects_unknown_options() {
        let err = normalize(&json!({ "stage": "series-b" }), EnumMode::Strict).unwrap_err();
        match err {
            GtmError::InvalidOption { field, value } => {
                assert_eq!(field, "stage");
                assert_eq!(value, "series-b");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = normalize(&json!({ "budgetLevel": 3 }), EnumMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            GtmError::InvalidOption {
                field: "budgetLevel",
                ..
            }
        ));
    }

    #[test]
    fn strict_mode_still_defaults_absent_options() {
        let input = normalize(&json!({ "launchTimeline": null }), EnumMode::Strict).unwrap();
        assert_eq!(input.launch_timeline, LaunchTimeline::Quarter);
    }

    #[test]
    fn normalize_is_idempotent() {
        let first = lenient(json!({
            "productName": " Atlas ",
            "stage": "ga",
            "budgetLevel": "nope",
            "focusAreas": ["positioning", 1, " custom "],
        }));
        let second = lenient(serde_json::to_value(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn parse_payload_reports_bad_json() {
        let err = parse_payload(b"{not json", EnumMode::Lenient).unwrap_err();
        assert!(matches!(err, GtmError::InvalidJson(_)));
    }

    #[test]
    fn parse_payload_normalizes_objects() {
        let input = parse_payload(br#"{"stage":"concept"}"#, EnumMode::Lenient).unwrap();
        assert_eq!(input.stage, Stage::Concept);
    }
}
