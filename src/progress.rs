use std::sync::Arc;

/// Events emitted while a home snapshot is being regenerated
#[derive(Debug, Clone)]
pub enum HomeEvent {
    /// The episode listing is being fetched
    FetchingEpisodes { url: String },

    /// The listing response has been decoded
    EpisodesLoaded {
        /// Episodes that survived validation
        total: usize,
        /// Records dropped as malformed
        skipped: usize,
    },

    /// A fresh cache entry was served without touching the network
    ServedFromCache { age_secs: i64 },

    /// The snapshot has been partitioned and is ready to render
    SnapshotReady { latest: usize, remaining: usize },
}

/// Trait for observing regeneration cycles.
///
/// Implementations can drive spinners, log lines, or test assertions.
pub trait HomeReporter: Send + Sync {
    /// Report a regeneration event
    fn report(&self, event: HomeEvent);
}

/// A shared reference to a reporter
pub type SharedReporter = Arc<dyn HomeReporter>;

/// A no-op reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl HomeReporter for NoopReporter {
    fn report(&self, _event: HomeEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(HomeEvent::FetchingEpisodes {
            url: "http://localhost:3333/episodes".to_string(),
        });

        reporter.report(HomeEvent::EpisodesLoaded {
            total: 12,
            skipped: 0,
        });

        reporter.report(HomeEvent::ServedFromCache { age_secs: 120 });

        reporter.report(HomeEvent::SnapshotReady {
            latest: 2,
            remaining: 10,
        });
    }
}
