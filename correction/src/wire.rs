//! Wire types for the correction service.
//!
//! DESIGN
//! ======
//! Backends in the wild answer in one of two shapes. Rather than probing
//! field names at every use site, a body is classified once into
//! [`CorrectionResponse`] and normalized into a single [`Correction`].
//!
//! - `Detailed`: carries a `corrected` key plus confidence, accuracy,
//!   fallback flag, and timing.
//! - `Simple`: any other object; the corrected string is the first non-empty
//!   of `corrected_text`, `correctedText`, `text`.
//!
//! A missing or empty corrected string falls back to the submitted input.
//! Such a stand-in is flagged so it never reads as "no changes".

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CorrectionError;

/// Correction service address used when nothing else is configured.
pub const DEFAULT_CORRECTION_ENDPOINT: &str = "http://127.0.0.1:8001/correct";

/// Client-side timeout applied to every correction request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Request body: `{ "text": <input> }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub text: String,
}

impl CorrectionRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Rich response shape with diagnostic metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetailedResponse {
    #[serde(default)]
    pub corrected: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub used_fallback: Option<bool>,
    #[serde(default)]
    pub time_taken_seconds: Option<f64>,
}

/// Plain response shape carrying only the corrected text under one of
/// several field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SimpleResponse {
    #[serde(default)]
    pub corrected_text: Option<String>,
    #[serde(default, rename = "correctedText")]
    pub corrected_text_camel: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// A correction service response, classified by shape.
#[derive(Clone, Debug, PartialEq)]
pub enum CorrectionResponse {
    Detailed(DetailedResponse),
    Simple(SimpleResponse),
}

impl CorrectionResponse {
    /// Classify a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CorrectionError::Decode`] when the value is not an object or
    /// a known field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self, CorrectionError> {
        let Value::Object(map) = value else {
            return Err(CorrectionError::Decode("expected a JSON object".to_owned()));
        };
        let is_detailed = map.contains_key("corrected");
        let value = Value::Object(map);
        if is_detailed {
            serde_json::from_value(value)
                .map(Self::Detailed)
                .map_err(|e| CorrectionError::Decode(e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(Self::Simple)
                .map_err(|e| CorrectionError::Decode(e.to_string()))
        }
    }

    /// Decode and classify a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`CorrectionError::Decode`] for invalid JSON or non-object bodies.
    pub fn from_json(body: &str) -> Result<Self, CorrectionError> {
        let value: Value = serde_json::from_str(body).map_err(|e| CorrectionError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    /// Normalize into the single internal record.
    ///
    /// `submitted` is the exact text that was sent; it stands in for any
    /// corrected or original string the service left out.
    #[must_use]
    pub fn normalize(self, submitted: &str) -> Correction {
        match self {
            Self::Detailed(resp) => {
                let served = non_empty(resp.corrected);
                let from_input = served.is_none();
                let corrected = served.unwrap_or_else(|| submitted.to_owned());
                let detail = DetailRecord {
                    original: resp.original.unwrap_or_else(|| submitted.to_owned()),
                    corrected: corrected.clone(),
                    confidence: resp.confidence,
                    accuracy: resp.accuracy,
                    used_fallback: resp.used_fallback.unwrap_or(false),
                    time_taken_seconds: resp.time_taken_seconds,
                };
                Correction { corrected, detail: Some(detail), from_input }
            }
            Self::Simple(resp) => {
                let served = non_empty(resp.corrected_text)
                    .or_else(|| non_empty(resp.corrected_text_camel))
                    .or_else(|| non_empty(resp.text));
                let from_input = served.is_none();
                let corrected = served.unwrap_or_else(|| submitted.to_owned());
                Correction { corrected, detail: None, from_input }
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Diagnostic metadata about one correction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub original: String,
    pub corrected: String,
    /// Percentage, `None` when the service could not score it.
    pub confidence: Option<f64>,
    /// Percentage, `None` when the service could not score it.
    pub accuracy: Option<f64>,
    pub used_fallback: bool,
    pub time_taken_seconds: Option<f64>,
}

/// Normalized result of a successful correction request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub corrected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailRecord>,
    /// `corrected` is the submitted input because the service sent none.
    #[serde(default, skip_serializing)]
    pub from_input: bool,
}

impl Correction {
    /// Whether the service itself returned the submitted text verbatim.
    #[must_use]
    pub fn is_unchanged(&self, submitted: &str) -> bool {
        !self.from_input && self.corrected == submitted
    }
}

/// Decode, classify, and normalize a response body in one step.
///
/// # Errors
///
/// Returns [`CorrectionError::Decode`] if the body is not a JSON object.
pub fn parse_correction(body: &str, submitted: &str) -> Result<Correction, CorrectionError> {
    CorrectionResponse::from_json(body).map(|resp| resp.normalize(submitted))
}
