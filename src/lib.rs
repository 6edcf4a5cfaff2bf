pub mod api;
pub mod episode;
pub mod error;
pub mod home;
pub mod http;
pub mod player;
pub mod progress;
pub mod render;

// Re-export main types for convenience
pub use api::{EpisodeQuery, Listing, SortOrder, fetch_episodes, parse_listing};
pub use episode::{Episode, format_duration, parse_duration};
pub use error::{ApiError, CacheError, HomeError, HttpError};
pub use home::{
    CacheEntry, CacheOptions, DEFAULT_TTL_SECS, HomeProps, PrepareOptions, load_or_prepare,
    prepare_home,
};
pub use http::{HttpClient, ReqwestClient};
pub use player::{NoopPlayer, Player, QueuePlayer, SharedPlayer};
pub use progress::{HomeEvent, HomeReporter, NoopReporter, SharedReporter};
pub use render::{render_home, render_now_playing, resolve_row};
