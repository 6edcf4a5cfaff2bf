use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{CacheError, HomeError};
use crate::http::HttpClient;
use crate::progress::{HomeEvent, SharedReporter};

use super::prepare::{HomeProps, PrepareOptions, prepare_home};

/// How long a cached snapshot stays fresh: eight hours
pub const DEFAULT_TTL_SECS: i64 = 60 * 60 * 8;

/// A home snapshot persisted to disk together with its freshness window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub fetched_at: DateTime<Utc>,
    pub ttl_secs: i64,
    pub props: HomeProps,
}

impl CacheEntry {
    pub fn new(props: HomeProps, ttl_secs: i64) -> Self {
        Self {
            fetched_at: Utc::now(),
            ttl_secs,
            props,
        }
    }

    /// Seconds elapsed since the snapshot was fetched
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.fetched_at).num_seconds()
    }

    /// Whether the entry is still within its freshness window.
    ///
    /// The TTL stored in the entry governs, not the caller's current
    /// setting, so shortening the TTL only affects snapshots written
    /// after the change.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        let age = self.age_secs(now);
        age >= 0 && age < self.ttl_secs
    }
}

/// Where and how the snapshot cache operates
#[derive(Debug, Clone)]
pub struct CacheOptions {
    pub cache_dir: PathBuf,
    pub ttl_secs: i64,
    pub force_refresh: bool,
}

/// Cache file path for a listing endpoint.
///
/// The file name is derived from a digest of the base URL so distinct
/// endpoints never collide in a shared cache directory.
pub fn cache_path(cache_dir: &Path, base_url: &str) -> PathBuf {
    let digest = Sha256::digest(base_url.as_bytes());
    let key: String = digest
        .iter()
        .take(8)
        .map(|byte| format!("{byte:02x}"))
        .collect();

    cache_dir.join(format!("home-{key}.json"))
}

/// Read a cached snapshot if one exists.
///
/// A missing file and a file that no longer decodes both yield `None`;
/// only a real read failure surfaces as an error.
pub fn read_cache(path: &Path) -> Result<Option<CacheEntry>, CacheError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CacheError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    match serde_json::from_str(&contents) {
        Ok(entry) => Ok(Some(entry)),
        Err(_) => Ok(None),
    }
}

/// Persist a snapshot, creating the cache directory if needed
pub fn write_cache(path: &Path, entry: &CacheEntry) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CacheError::CreateDirectoryFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let contents = serde_json::to_string_pretty(entry)?;

    fs::write(path, contents).map_err(|e| CacheError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serve the home snapshot from cache when fresh, regenerating it
/// otherwise.
///
/// A failed regeneration fails the call even when an expired snapshot
/// is still on disk; stale data is never served.
pub async fn load_or_prepare<C: HttpClient>(
    client: &C,
    base_url: &str,
    prepare_options: &PrepareOptions,
    cache_options: &CacheOptions,
    reporter: &SharedReporter,
) -> Result<HomeProps, HomeError> {
    let path = cache_path(&cache_options.cache_dir, base_url);
    let now = Utc::now();

    if !cache_options.force_refresh
        && let Some(entry) = read_cache(&path).map_err(HomeError::Cache)?
        && entry.is_fresh(now)
    {
        reporter.report(HomeEvent::ServedFromCache {
            age_secs: entry.age_secs(now),
        });
        return Ok(entry.props);
    }

    let props = prepare_home(client, base_url, prepare_options, reporter).await?;

    let entry = CacheEntry::new(props.clone(), cache_options.ttl_secs);
    write_cache(&path, &entry).map_err(HomeError::Cache)?;

    Ok(props)
}
