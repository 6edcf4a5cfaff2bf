mod cache;
mod prepare;

pub use cache::{
    CacheEntry, CacheOptions, DEFAULT_TTL_SECS, cache_path, load_or_prepare, read_cache,
    write_cache,
};
pub use prepare::{HomeProps, PrepareOptions, prepare_home};
