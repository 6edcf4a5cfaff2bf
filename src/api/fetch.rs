// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::ApiError;
use crate::http::HttpClient;

use super::parse::{Listing, parse_listing};

/// Sort direction for the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Query parameters for the episode listing endpoint.
///
/// The defaults reproduce the home page request: the 12 most recent
/// episodes, newest first.
#[derive(Debug, Clone)]
pub struct EpisodeQuery {
    pub limit: usize,
    pub sort: String,
    pub order: SortOrder,
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self {
            limit: 12,
            sort: "published_at".to_string(),
            order: SortOrder::Descending,
        }
    }
}

impl EpisodeQuery {
    /// Create a query for the `limit` most recent episodes
    pub fn most_recent(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Build the full listing URL for a base endpoint.
    ///
    /// Appends the `/episodes` path segment, so both
    /// `http://localhost:3333` and `http://host/api/` work as bases.
    pub fn listing_url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(base_url)?;

        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| ApiError::UnsupportedBaseUrl {
                        url: base_url.to_string(),
                    })?;
            segments.pop_if_empty().push("episodes");
        }

        url.query_pairs_mut()
            .append_pair("_limit", &self.limit.to_string())
            .append_pair("_sort", &self.sort)
            .append_pair("_order", self.order.as_param());

        Ok(url)
    }
}

/// Issue the single listing read the home page is built from.
///
/// Failures are fatal to the caller's regeneration cycle; there is no
/// retry and no fallback.
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    base_url: &str,
    query: &EpisodeQuery,
) -> Result<Listing, ApiError> {
    let url = query.listing_url(base_url)?;

    let bytes = client
        .get_bytes(url.as_str())
        .await
        .map_err(|e| ApiError::FetchFailed {
            url: url.to_string(),
            source: e,
        })?;

    let listing = parse_listing(&bytes)?;

    if listing.episodes.is_empty() {
        return Err(ApiError::EmptyListing {
            url: url.to_string(),
        });
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::error::HttpError;

    #[test]
    fn listing_url_uses_home_page_defaults() {
        let query = EpisodeQuery::default();
        let url = query.listing_url("http://localhost:3333").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn listing_url_respects_custom_limit_and_order() {
        let query = EpisodeQuery {
            limit: 3,
            sort: "title".to_string(),
            order: SortOrder::Ascending,
        };
        let url = query.listing_url("http://localhost:3333").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=3&_sort=title&_order=asc"
        );
    }

    #[test]
    fn listing_url_preserves_base_paths() {
        let query = EpisodeQuery::most_recent(12);

        let url = query.listing_url("https://api.example.com/v2/").unwrap();
        assert_eq!(url.path(), "/v2/episodes");

        let url = query.listing_url("https://api.example.com/v2").unwrap();
        assert_eq!(url.path(), "/v2/episodes");
    }

    #[test]
    fn listing_url_rejects_invalid_bases() {
        let query = EpisodeQuery::default();

        assert!(matches!(
            query.listing_url("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            query.listing_url("data:text/plain,nope"),
            Err(ApiError::UnsupportedBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_episodes_rejects_empty_listings() {
        struct EmptyClient;

        #[async_trait]
        impl HttpClient for EmptyClient {
            async fn get_bytes(&self, _url: &str) -> Result<Bytes, HttpError> {
                Ok(Bytes::from_static(b"[]"))
            }
        }

        let result = fetch_episodes(
            &EmptyClient,
            "http://localhost:3333",
            &EpisodeQuery::default(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::EmptyListing { .. })));
    }
}
