use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::to_int;

/// Multiplier used to derive an absolute number from season and episode.
///
/// Ordering is correct for up to 999 episodes per season.
const SEASON_FACTOR: i32 = 1000;

/// Season, episode and absolute number of a single episode.
///
/// Equality is lenient: two numbers are equal when their stored absolute
/// values match, or failing that when both season and episode match.
/// Ordering ignores the stored absolute and compares
/// `season * 1000 + episode`. The two relations therefore disagree for
/// numbers whose absolute value came from the feed; [`EpisodeList`] relies
/// on equality for key identity and on ordering for iteration.
///
/// Because equality is not transitive this type implements neither `Eq`,
/// `Ord` nor `Hash`; use [`EpisodeNumber::compare`] to sort.
///
/// [`EpisodeList`]: crate::types::EpisodeList
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EpisodeNumber {
    season: i32,
    episode: i32,
    absolute: i32,
}

impl EpisodeNumber {
    /// Build from season and episode, deriving the absolute number.
    ///
    /// # Examples
    /// ```
    /// use tvrage_core::EpisodeNumber;
    ///
    /// let en = EpisodeNumber::new(3, 7);
    /// assert_eq!(en.absolute(), 3007);
    /// assert!(en.is_valid());
    /// ```
    pub fn new(season: i32, episode: i32) -> Self {
        Self {
            season,
            episode,
            absolute: derive_absolute(season, episode),
        }
    }

    /// Build with an absolute number supplied by the feed.
    pub fn with_absolute(season: i32, episode: i32, absolute: i32) -> Self {
        Self {
            season,
            episode,
            absolute,
        }
    }

    /// Build from raw text, unparsable parts becoming 0.
    pub fn from_strs(season: &str, episode: &str) -> Self {
        Self::new(to_int(season, 0), to_int(episode, 0))
    }

    /// Build from raw text with an explicit absolute number.
    pub fn from_strs_with_absolute(season: &str, episode: &str, absolute: &str) -> Self {
        Self::with_absolute(to_int(season, 0), to_int(episode, 0), to_int(absolute, 0))
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    pub fn episode(&self) -> i32 {
        self.episode
    }

    pub fn absolute(&self) -> i32 {
        self.absolute
    }

    pub fn set_season(&mut self, season: i32) {
        self.season = season;
    }

    pub fn set_episode(&mut self, episode: i32) {
        self.episode = episode;
    }

    pub fn set_absolute(&mut self, absolute: i32) {
        self.absolute = absolute;
    }

    /// Neither season nor episode is zero (and they share a sign).
    pub fn is_valid(&self) -> bool {
        self.season.saturating_mul(self.episode) > 0
    }

    /// Order by the derived absolute number of season and episode.
    pub fn compare(&self, other: &Self) -> Ordering {
        derive_absolute(self.season, self.episode).cmp(&derive_absolute(other.season, other.episode))
    }

    /// `3x7` style label.
    pub fn sxe(&self) -> String {
        format!("{}x{}", self.season, self.episode)
    }

    /// `S03E07` style label.
    pub fn sxxeyy(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.episode)
    }
}

fn derive_absolute(season: i32, episode: i32) -> i32 {
    season.saturating_mul(SEASON_FACTOR).saturating_add(episode)
}

impl PartialEq for EpisodeNumber {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
            || (self.season == other.season && self.episode == other.episode)
    }
}

impl PartialOrd for EpisodeNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[season={}][episode={}][absolute={}]",
            self.season, self.episode, self.absolute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_invalid() {
        let en = EpisodeNumber::default();
        assert_eq!(en.absolute(), 0);
        assert!(!en.is_valid());
    }

    #[test]
    fn test_zero_season_or_episode_is_invalid() {
        assert!(!EpisodeNumber::new(0, 5).is_valid());
        assert!(!EpisodeNumber::new(5, 0).is_valid());
        assert!(EpisodeNumber::new(1, 1).is_valid());
    }

    #[test]
    fn test_from_strs() {
        let en = EpisodeNumber::from_strs("2", "5");
        assert_eq!(en.season(), 2);
        assert_eq!(en.episode(), 5);
        assert_eq!(en.absolute(), 2005);

        let bad = EpisodeNumber::from_strs("", "x");
        assert_eq!((bad.season(), bad.episode(), bad.absolute()), (0, 0, 0));
    }

    #[test]
    fn test_explicit_absolute_is_kept() {
        let en = EpisodeNumber::from_strs_with_absolute("2", "5", "18");
        assert_eq!(en.absolute(), 18);
        assert_eq!(EpisodeNumber::with_absolute(1, 1, 99).absolute(), 99);
    }

    #[test]
    fn test_equality_by_absolute() {
        // Different season/episode, same absolute.
        let a = EpisodeNumber::with_absolute(1, 5, 5);
        let b = EpisodeNumber::with_absolute(2, 1, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_falls_back_to_season_episode() {
        let a = EpisodeNumber::with_absolute(1, 5, 5);
        let b = EpisodeNumber::new(1, 5);
        assert_ne!(a.absolute(), b.absolute());
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality() {
        assert_ne!(EpisodeNumber::new(1, 5), EpisodeNumber::new(1, 6));
    }

    #[test]
    fn test_ordering_ignores_stored_absolute() {
        // Stored absolute says a > b, derived values say a < b.
        let a = EpisodeNumber::with_absolute(1, 2, 500);
        let b = EpisodeNumber::with_absolute(2, 1, 3);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert!(a < b);
    }

    #[test]
    fn test_ordering_across_seasons() {
        assert!(EpisodeNumber::new(1, 999) < EpisodeNumber::new(2, 1));
        assert_eq!(
            EpisodeNumber::new(3, 3).compare(&EpisodeNumber::new(3, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_labels() {
        let en = EpisodeNumber::new(3, 7);
        assert_eq!(en.sxe(), "3x7");
        assert_eq!(en.sxxeyy(), "S03E07");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            EpisodeNumber::new(1, 2).to_string(),
            "[season=1][episode=2][absolute=1002]"
        );
    }

    proptest! {
        #[test]
        fn prop_derived_absolute(season in 1i32..500, episode in 1i32..1000) {
            let en = EpisodeNumber::new(season, episode);
            prop_assert_eq!(en.absolute(), season * 1000 + episode);
            prop_assert!(en.is_valid());
        }

        #[test]
        fn prop_zero_is_invalid(n in 0i32..1000) {
            prop_assert!(!EpisodeNumber::new(0, n).is_valid());
            prop_assert!(!EpisodeNumber::new(n, 0).is_valid());
        }

        #[test]
        fn prop_order_follows_season_then_episode(
            s1 in 1i32..100, e1 in 1i32..1000, s2 in 1i32..100, e2 in 1i32..1000
        ) {
            let a = EpisodeNumber::new(s1, e1);
            let b = EpisodeNumber::new(s2, e2);
            prop_assert_eq!(a.compare(&b), (s1, e1).cmp(&(s2, e2)));
        }
    }
}
