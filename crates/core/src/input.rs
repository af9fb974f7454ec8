//! Generation input: raw wire shape, normalized internal shape, and the
//! defaulting/clamping rules between them.
//!
//! The raw shape mirrors the request body field for field, with every field
//! optional. Normalization produces a fully-populated [`GenerationInput`] so
//! downstream composition never has to reason about missing fields. The only
//! hard failure is a topic that is empty after trimming; everything else is
//! defaulted or clamped.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Duration bounds
// ---------------------------------------------------------------------------

/// Shortest allowed runtime in seconds.
pub const MIN_DURATION_SECS: u32 = 35;

/// Longest allowed runtime in seconds (the short-form platform cap).
pub const MAX_DURATION_SECS: u32 = 65;

/// Runtime used when the request omits a duration or sends a non-integer.
pub const DEFAULT_DURATION_SECS: u32 = 55;

// ---------------------------------------------------------------------------
// Raw input (wire shape)
// ---------------------------------------------------------------------------

/// A partially-populated generation request as it arrives off the wire.
///
/// Every field is optional; [`normalize`] turns this into a
/// [`GenerationInput`] with all defaults applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGenerationInput {
    pub topic: Option<String>,
    pub niche: Option<String>,
    pub persona: Option<String>,
    pub vibe: Option<String>,
    pub target_audience: Option<String>,
    pub call_to_action: Option<String>,
    /// Accepts any JSON value; non-integers normalize to `None` so the
    /// default duration applies instead of rejecting the request.
    #[serde(deserialize_with = "lenient_integer")]
    pub duration: Option<i64>,
}

/// Deserialize a duration field that may be absent, null, or not an integer.
///
/// Only JSON integers survive; strings, floats with a fractional part, and
/// null all become `None`.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

// ---------------------------------------------------------------------------
// Normalized input
// ---------------------------------------------------------------------------

/// A fully-populated generation input.
///
/// `topic` is trimmed and non-empty; all other strings default to `""` when
/// absent; `duration` is clamped into
/// [`MIN_DURATION_SECS`]..=[`MAX_DURATION_SECS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
    pub topic: String,
    pub niche: String,
    pub persona: String,
    pub vibe: String,
    pub target_audience: String,
    pub call_to_action: String,
    pub duration: u32,
}

/// Validate and default a raw request into a [`GenerationInput`].
///
/// Fails only when `topic` is empty after trimming surrounding whitespace.
pub fn normalize(raw: RawGenerationInput) -> Result<GenerationInput, CoreError> {
    let topic = raw.topic.unwrap_or_default().trim().to_string();
    if topic.is_empty() {
        return Err(CoreError::Validation("Topic is required.".to_string()));
    }

    Ok(GenerationInput {
        topic,
        niche: raw.niche.unwrap_or_default(),
        persona: raw.persona.unwrap_or_default(),
        vibe: raw.vibe.unwrap_or_default(),
        target_audience: raw.target_audience.unwrap_or_default(),
        call_to_action: raw.call_to_action.unwrap_or_default(),
        duration: resolve_duration(raw.duration),
    })
}

/// Resolve a requested duration: absent becomes the default, out-of-range
/// values are clamped into bounds rather than rejected.
pub fn resolve_duration(requested: Option<i64>) -> u32 {
    match requested {
        Some(secs) => secs.clamp(i64::from(MIN_DURATION_SECS), i64::from(MAX_DURATION_SECS)) as u32,
        None => DEFAULT_DURATION_SECS,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
