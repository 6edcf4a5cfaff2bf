use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::RawEpisode;
use crate::episode::format_duration;
use crate::error::ApiError;

/// Fixed locale and shape for publish dates, e.g. "8 jan 21"
const DATE_LOCALE: Locale = Locale::pt_BR;
const DATE_FORMAT: &str = "%-d %b %y";

/// Display-ready episode, the shape the home page renders.
///
/// Built once per regeneration cycle by [`Episode::from_raw`] and never
/// mutated afterwards. `published_at` and `duration_as_string` are derived
/// fields; the raw timestamp is not recoverable without a re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    pub published_at: String,
    pub duration: u64,
    pub duration_as_string: String,
    pub url: Url,
}

impl Episode {
    /// Build the display form from a raw API record.
    ///
    /// Fails when the publish timestamp or media URL is unusable; callers
    /// treat such records as malformed and skip them.
    pub fn from_raw(raw: &RawEpisode) -> Result<Self, ApiError> {
        let date = parse_publish_date(&raw.published_at).ok_or_else(|| {
            ApiError::InvalidTimestamp {
                value: raw.published_at.clone(),
            }
        })?;

        let url = Url::parse(&raw.file.url).map_err(|e| ApiError::InvalidMediaUrl {
            title: raw.title.clone(),
            source: e,
        })?;

        let duration = raw.file.duration_seconds();

        Ok(Self {
            id: raw.id.clone(),
            title: html_escape::decode_html_entities(&raw.title).into_owned(),
            thumbnail: raw.thumbnail.clone(),
            members: html_escape::decode_html_entities(&raw.members).into_owned(),
            published_at: date.format_localized(DATE_FORMAT, DATE_LOCALE).to_string(),
            duration,
            duration_as_string: format_duration(duration),
            url,
        })
    }

    /// Detail-page route for this episode
    pub fn route(&self) -> String {
        format!("/episodes/{}", self.id)
    }
}

/// Parse the publish timestamp formats the listing API is known to emit
fn parse_publish_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    let datetime_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for format in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
