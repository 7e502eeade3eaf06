//! Runtime configuration.
//!
//! - `ROUTEFINDER_FEED`: route map URL or file path (default: the public map feed)
//! - `ROUTEFINDER_TIMEOUT_SECS`: HTTP timeout in seconds (default 30)
//!
//! Command line flags take precedence over the environment.

use anyhow::{Context, Result};
use map_harness::FeedSource;
use std::time::Duration;

pub const FEED_ENV: &str = "ROUTEFINDER_FEED";
pub const TIMEOUT_ENV: &str = "ROUTEFINDER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed: FeedSource,
    pub timeout: Duration,
}

impl Config {
    pub fn resolve(feed: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::resolve_with(feed, timeout_secs, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::resolve`] but reads variables through `lookup`.
    pub fn resolve_with<F>(feed: Option<&str>, timeout_secs: Option<u64>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed = match feed.map(str::to_string).or_else(|| lookup(FEED_ENV)) {
            Some(source) if !source.trim().is_empty() => FeedSource::parse(&source),
            _ => FeedSource::default(),
        };

        let timeout_secs = match timeout_secs {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a number of seconds, got {:?}", TIMEOUT_ENV, raw))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(Self {
            feed,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Default log filter for the number of `-v` flags.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
