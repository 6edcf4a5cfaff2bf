use std::sync::{Arc, Mutex};

use crate::episode::Episode;

/// Boundary to whatever actually plays audio.
///
/// The home page only hands over a playback sequence and a starting
/// position; everything past that point belongs to the implementation.
pub trait Player: Send + Sync {
    /// Replace the playback queue with `episodes` and start at `index`
    fn play_list(&self, episodes: &[Episode], index: usize);

    /// Play a single episode, replacing the queue
    fn play(&self, episode: &Episode) {
        self.play_list(std::slice::from_ref(episode), 0);
    }
}

/// A shared reference to a player
pub type SharedPlayer = Arc<dyn Player>;

#[derive(Debug, Default, Clone)]
struct QueueState {
    episodes: Vec<Episode>,
    current: Option<usize>,
}

/// A player that keeps the handed-over queue in memory.
///
/// It performs no audio output; callers inspect `now_playing` and
/// `queue` to see what was queued.
#[derive(Debug, Default)]
pub struct QueuePlayer {
    state: Mutex<QueueState>,
}

impl QueuePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The episode at the current queue position, if any
    pub fn now_playing(&self) -> Option<Episode> {
        let state = self.state.lock().unwrap();
        state
            .current
            .and_then(|index| state.episodes.get(index).cloned())
    }

    /// A copy of the current playback queue
    pub fn queue(&self) -> Vec<Episode> {
        self.state.lock().unwrap().episodes.clone()
    }

    /// Position of the current episode within the queue
    pub fn current_index(&self) -> Option<usize> {
        self.state.lock().unwrap().current
    }
}

impl Player for QueuePlayer {
    fn play_list(&self, episodes: &[Episode], index: usize) {
        let mut state = self.state.lock().unwrap();
        state.episodes = episodes.to_vec();
        state.current = if state.episodes.is_empty() {
            None
        } else {
            Some(index.min(state.episodes.len() - 1))
        };
    }
}

/// A player that discards everything handed to it
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlayer;

impl Player for NoopPlayer {
    fn play_list(&self, _episodes: &[Episode], _index: usize) {}
}

impl NoopPlayer {
    /// Create a new NoopPlayer wrapped in an Arc
    pub fn shared() -> SharedPlayer {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_episode(id: &str) -> Episode {
        let raw = crate::api::RawEpisode {
            id: id.to_string(),
            title: id.to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            members: "Hosts".to_string(),
            published_at: "2021-01-08 12:00:00".to_string(),
            file: crate::api::RawFile {
                url: format!("https://example.com/{id}.mp3"),
                file_type: None,
                duration: 60.0,
            },
        };
        Episode::from_raw(&raw).unwrap()
    }

    #[test]
    fn play_list_replaces_the_queue_and_position() {
        let player = QueuePlayer::new();
        let episodes: Vec<_> = (0..4).map(|n| make_episode(&format!("ep-{n}"))).collect();

        player.play_list(&episodes, 2);

        assert_eq!(player.queue().len(), 4);
        assert_eq!(player.current_index(), Some(2));
        assert_eq!(player.now_playing().unwrap().id, "ep-2");

        let shorter: Vec<_> = (0..2).map(|n| make_episode(&format!("other-{n}"))).collect();
        player.play_list(&shorter, 0);

        assert_eq!(player.queue().len(), 2);
        assert_eq!(player.now_playing().unwrap().id, "other-0");
    }

    #[test]
    fn play_queues_a_single_episode() {
        let player = QueuePlayer::new();
        let episode = make_episode("solo");

        player.play(&episode);

        assert_eq!(player.queue().len(), 1);
        assert_eq!(player.now_playing().unwrap().id, "solo");
    }

    #[test]
    fn empty_list_clears_now_playing() {
        let player = QueuePlayer::new();
        player.play_list(&[make_episode("ep")], 0);
        assert!(player.now_playing().is_some());

        player.play_list(&[], 0);
        assert!(player.now_playing().is_none());
        assert!(player.queue().is_empty());
    }

    #[test]
    fn out_of_range_index_clamps_to_the_last_episode() {
        let player = QueuePlayer::new();
        let episodes: Vec<_> = (0..3).map(|n| make_episode(&format!("ep-{n}"))).collect();

        player.play_list(&episodes, 99);

        assert_eq!(player.now_playing().unwrap().id, "ep-2");
    }

    #[test]
    fn playing_a_table_row_starts_past_the_latest_region() {
        use crate::home::HomeProps;

        let episodes: Vec<_> = (0..5).map(|n| make_episode(&format!("ep-{n}"))).collect();
        let props = HomeProps::partition(episodes, 2);

        let player = QueuePlayer::new();
        player.play_list(&props.combined(), props.combined_index(0));

        // First table row is the episode right after the latest region
        assert_eq!(player.now_playing().unwrap().id, "ep-2");
        assert_eq!(player.queue().len(), 5);
    }

    #[test]
    fn noop_player_accepts_anything() {
        let player = NoopPlayer::shared();
        player.play_list(&[make_episode("ep")], 0);
        player.play(&make_episode("other"));
    }
}
