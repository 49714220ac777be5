use std::fmt;

use serde::{Deserialize, Serialize};

use super::{unknown, valid_or_unknown, Episode, EpisodeNumber};
use crate::parser::{is_valid_string, to_int};

/// All episodes of a show, ordered by episode number.
///
/// Keys are compared with [`EpisodeNumber`]'s lenient equality, so adding
/// an episode whose number equals an existing key replaces that entry.
/// Iteration follows [`EpisodeNumber::compare`], not insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeList {
    show_name: String,
    total_seasons: i32,
    episodes: Vec<(EpisodeNumber, Episode)>,
}

impl Default for EpisodeList {
    fn default() -> Self {
        Self {
            show_name: unknown(),
            total_seasons: 0,
            episodes: Vec::new(),
        }
    }
}

impl EpisodeList {
    /// A named show with at least one episode.
    pub fn is_valid(&self) -> bool {
        is_valid_string(&self.show_name) && !self.episodes.is_empty()
    }

    pub fn show_name(&self) -> &str {
        &self.show_name
    }

    pub fn total_seasons(&self) -> i32 {
        self.total_seasons
    }

    pub fn set_show_name(&mut self, show_name: &str) {
        self.show_name = valid_or_unknown(show_name);
    }

    pub fn set_total_seasons(&mut self, total_seasons: i32) {
        self.total_seasons = total_seasons;
    }

    pub fn set_total_seasons_str(&mut self, total_seasons: &str) {
        self.total_seasons = to_int(total_seasons, 0);
    }

    /// Insert under the episode's own number; an equal key is overwritten.
    pub fn add_episode(&mut self, episode: Episode) {
        let key = *episode.episode_number();

        if let Some(slot) = self.episodes.iter_mut().find(|(k, _)| *k == key) {
            // Last write wins; the stored key is kept.
            slot.1 = episode;
            return;
        }

        let pos = self
            .episodes
            .partition_point(|(k, _)| k.compare(&key).is_le());
        self.episodes.insert(pos, (key, episode));
    }

    /// Look up by episode number.
    pub fn episode(&self, episode_number: &EpisodeNumber) -> Option<&Episode> {
        self.episodes
            .iter()
            .find(|(k, _)| k == episode_number)
            .map(|(_, ep)| ep)
    }

    pub fn episode_at(&self, season: i32, episode: i32) -> Option<&Episode> {
        self.episode(&EpisodeNumber::new(season, episode))
    }

    /// Episodes in episode-number order.
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.iter().map(|(_, ep)| ep)
    }

    /// Keys and episodes in episode-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&EpisodeNumber, &Episode)> {
        self.episodes.iter().map(|(k, ep)| (k, ep))
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

impl fmt::Display for EpisodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[EpisodeList=[showName={}][totalSeasons={}][episodes={}]]",
            self.show_name,
            self.total_seasons,
            self.episodes.len()
        )
    }
}
