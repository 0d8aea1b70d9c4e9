//! Answer tokens
//!
//! An answer set is serialized as compact JSON (keys sorted) and wrapped in
//! unpadded URL-safe base64, so the token only uses `A-Z a-z 0-9 - _` and
//! can sit in a query string as-is. Decoding never fails: anything that does
//! not parse back into an answer set yields an empty one.

use anyhow::Result;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use tracing::debug;

use crate::scoring::AnswerSet;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Browser-generated links used the standard alphabet with padding.
const LEGACY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode(answers: &AnswerSet) -> String {
    let json = serde_json::to_string(answers).unwrap_or_else(|_| "{}".to_string());
    TOKEN_ENGINE.encode(json)
}

pub fn decode(token: &str) -> AnswerSet {
    match try_decode(token) {
        Ok(answers) => answers,
        Err(e) => {
            debug!(error = %e, "discarding malformed answer token");
            AnswerSet::new()
        }
    }
}

fn try_decode(token: &str) -> Result<AnswerSet> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(AnswerSet::new());
    }
    let bytes = TOKEN_ENGINE
        .decode(token)
        .or_else(|_| LEGACY_ENGINE.decode(token))?;
    Ok(serde_json::from_slice(&bytes)?)
}
