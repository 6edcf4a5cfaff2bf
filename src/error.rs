use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the HTTP layer
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Errors that can occur when fetching or decoding the episode listing
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to fetch episode listing from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("API base URL {url} cannot carry an /episodes path")]
    UnsupportedBaseUrl { url: String },

    #[error("Failed to decode episode listing: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Episode listing from {url} contains no playable episodes")]
    EmptyListing { url: String },

    #[error("Unparseable publish timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("Episode '{title}' has an invalid media URL: {source}")]
    InvalidMediaUrl {
        title: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors that can occur reading or writing the snapshot cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read cache entry {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cache entry {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create cache directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Top-level error for a home regeneration cycle
#[derive(Error, Debug)]
pub enum HomeError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}
