// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::api::{EpisodeQuery, fetch_episodes};
use crate::episode::Episode;
use crate::error::HomeError;
use crate::http::HttpClient;
use crate::progress::{HomeEvent, SharedReporter};

/// The home page's render input: the ordered listing split into a
/// "latest" slice and the remainder.
///
/// The concatenation `latest_episodes ++ all_episodes` preserves the API
/// response order and is the addressable playback sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeProps {
    pub latest_episodes: Vec<Episode>,
    pub all_episodes: Vec<Episode>,
}

impl HomeProps {
    /// Split an ordered episode list into the latest slice and the rest
    pub fn partition(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let split = latest_count.min(episodes.len());
        let all_episodes = episodes.split_off(split);

        Self {
            latest_episodes: episodes,
            all_episodes,
        }
    }

    /// The combined playback sequence: latest followed by the remainder
    pub fn combined(&self) -> Vec<Episode> {
        self.latest_episodes
            .iter()
            .chain(self.all_episodes.iter())
            .cloned()
            .collect()
    }

    /// Total number of episodes across both slices
    pub fn len(&self) -> usize {
        self.latest_episodes.len() + self.all_episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combined index of row `row` of the all-episodes table
    pub fn combined_index(&self, row: usize) -> usize {
        self.latest_episodes.len() + row
    }

    /// Episode at a combined index
    pub fn episode_at(&self, index: usize) -> Option<&Episode> {
        let latest_len = self.latest_episodes.len();
        if index < latest_len {
            self.latest_episodes.get(index)
        } else {
            self.all_episodes.get(index - latest_len)
        }
    }
}

/// Options for preparing the home snapshot
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// How many episodes to request from the listing endpoint
    pub limit: usize,
    /// How many of them form the "latest releases" slice
    pub latest_count: usize,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            limit: 12,
            latest_count: 2,
        }
    }
}

/// Run one regeneration cycle: fetch the listing, shape it for display,
/// and partition it into the home page's two slices.
///
/// A fetch or decode failure fails the whole cycle; no partial snapshot
/// is ever produced.
pub async fn prepare_home<C: HttpClient>(
    client: &C,
    base_url: &str,
    options: &PrepareOptions,
    reporter: &SharedReporter,
) -> Result<HomeProps, HomeError> {
    let query = EpisodeQuery::most_recent(options.limit);
    let url = query.listing_url(base_url).map_err(HomeError::Api)?;

    reporter.report(HomeEvent::FetchingEpisodes {
        url: url.to_string(),
    });

    let listing = fetch_episodes(client, base_url, &query).await?;

    reporter.report(HomeEvent::EpisodesLoaded {
        total: listing.episodes.len(),
        skipped: listing.skipped,
    });

    let props = HomeProps::partition(listing.episodes, options.latest_count);

    reporter.report(HomeEvent::SnapshotReady {
        latest: props.latest_episodes.len(),
        remaining: props.all_episodes.len(),
    });

    Ok(props)
}
