// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Deserializer};

use crate::episode::Episode;
use crate::error::ApiError;

/// Raw episode record as returned by the listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    pub published_at: String,
    pub file: RawFile,
}

/// Nested media descriptor of a raw record
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub duration: f64,
}

impl RawFile {
    /// Raw duration as whole seconds, clamped at zero
    pub fn duration_seconds(&self) -> u64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration as u64
        } else {
            0
        }
    }
}

/// Result of decoding a listing response body
#[derive(Debug, Clone)]
pub struct Listing {
    /// Display-ready episodes, in response order
    pub episodes: Vec<Episode>,
    /// Records dropped because they were missing fields or unparseable
    pub skipped: usize,
}

/// Decode a listing response body into display-ready episodes.
///
/// The body must be a JSON array; anything else is fatal. Individual
/// records that fail validation are skipped and counted, preserving the
/// order of the records that survive.
pub fn parse_listing(bytes: &[u8]) -> Result<Listing, ApiError> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let total = records.len();

    let episodes: Vec<Episode> = records
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawEpisode>(value).ok())
        .filter_map(|raw| Episode::from_raw(&raw).ok())
        .collect();

    let skipped = total - episodes.len();

    Ok(Listing { episodes, skipped })
}

/// Accept a duration given either as a JSON number or a numeric string
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numberish {
        Number(f64),
        Text(String),
    }

    match Numberish::deserialize(deserializer)? {
        Numberish::Number(n) => Ok(n),
        Numberish::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
