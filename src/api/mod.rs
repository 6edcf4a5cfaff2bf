mod fetch;
mod parse;

pub use fetch::{EpisodeQuery, SortOrder, fetch_episodes};
pub use parse::{Listing, RawEpisode, RawFile, parse_listing};
