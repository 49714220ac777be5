use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{unknown, valid_or_unknown, EpisodeNumber};
use crate::parser::{is_valid_string, to_date, to_float};

/// A single episode.
///
/// Equality only considers the episode number, production id, air date and
/// title; rating, summary, link and screen cap are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    episode_number: EpisodeNumber,
    production_id: String,
    title: String,
    summary: String,
    link: String,
    screen_cap: String,
    air_date: Option<NaiveDate>,
    rating: f32,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            episode_number: EpisodeNumber::new(0, 0),
            production_id: unknown(),
            title: unknown(),
            summary: unknown(),
            link: unknown(),
            screen_cap: unknown(),
            air_date: None,
            rating: 0.0,
        }
    }
}

impl Episode {
    /// Valid episode number and a real title.
    pub fn is_valid(&self) -> bool {
        self.episode_number.is_valid() && is_valid_string(&self.title)
    }

    pub fn episode_number(&self) -> &EpisodeNumber {
        &self.episode_number
    }

    pub fn season(&self) -> i32 {
        self.episode_number.season()
    }

    pub fn episode(&self) -> i32 {
        self.episode_number.episode()
    }

    pub fn production_id(&self) -> &str {
        &self.production_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn screen_cap(&self) -> &str {
        &self.screen_cap
    }

    pub fn air_date(&self) -> Option<NaiveDate> {
        self.air_date
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn set_episode_number(&mut self, episode_number: EpisodeNumber) {
        self.episode_number = episode_number;
    }

    pub fn set_production_id(&mut self, production_id: &str) {
        self.production_id = valid_or_unknown(production_id);
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = valid_or_unknown(title);
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary = valid_or_unknown(summary);
    }

    pub fn set_link(&mut self, link: &str) {
        self.link = valid_or_unknown(link);
    }

    pub fn set_screen_cap(&mut self, screen_cap: &str) {
        self.screen_cap = valid_or_unknown(screen_cap);
    }

    /// Parse and store the air date; unparsable text clears it.
    pub fn set_air_date(&mut self, air_date: &str) {
        self.air_date = to_date(air_date);
    }

    pub fn set_air_date_value(&mut self, air_date: Option<NaiveDate>) {
        self.air_date = air_date;
    }

    /// Parse and store the rating; unparsable text stores 0.0.
    pub fn set_rating(&mut self, rating: &str) {
        self.rating = to_float(rating, 0.0);
    }

    pub fn set_rating_value(&mut self, rating: f32) {
        self.rating = rating;
    }
}

impl PartialEq for Episode {
    fn eq(&self, other: &Self) -> bool {
        self.episode_number == other.episode_number
            && self.production_id == other.production_id
            && self.air_date == other.air_date
            && self.title == other.title
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let air_date = self
            .air_date
            .map(|d| d.to_string())
            .unwrap_or_else(unknown);
        write!(
            f,
            "[Episode=[episodeNumber={}][productionId={}][airDate={}][link={}][title={}][summary={}][rating={}][screenCap={}]]",
            self.episode_number,
            self.production_id,
            air_date,
            self.link,
            self.title,
            self.summary,
            self.rating,
            self.screen_cap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;

    #[test]
    fn test_default_episode() {
        let ep = Episode::default();
        assert_eq!(ep.title(), UNKNOWN);
        assert_eq!(ep.production_id(), UNKNOWN);
        assert_eq!(ep.air_date(), None);
        assert_eq!(ep.rating(), 0.0);
        assert!(!ep.is_valid());
    }

    #[test]
    fn test_valid_requires_number_and_title() {
        let mut ep = Episode::default();
        ep.set_title("Pilot");
        assert!(!ep.is_valid());

        ep.set_episode_number(EpisodeNumber::new(1, 1));
        assert!(ep.is_valid());

        ep.set_title("");
        assert!(!ep.is_valid());
    }

    #[test]
    fn test_string_setters_trim() {
        let mut ep = Episode::default();
        ep.set_title("  Pilot ");
        ep.set_link(" http://x ");
        assert_eq!(ep.title(), "Pilot");
        assert_eq!(ep.link(), "http://x");
    }

    #[test]
    fn test_air_date_and_rating_coercion() {
        let mut ep = Episode::default();
        ep.set_air_date("2007-09-24");
        assert_eq!(ep.air_date(), NaiveDate::from_ymd_opt(2007, 9, 24));
        ep.set_air_date("0000-00-00");
        assert_eq!(ep.air_date(), None);

        ep.set_rating("8.4");
        assert_eq!(ep.rating(), 8.4);
        ep.set_rating("n/a");
        assert_eq!(ep.rating(), 0.0);
    }

    #[test]
    fn test_equality_ignores_cosmetic_fields() {
        let mut a = Episode::default();
        a.set_episode_number(EpisodeNumber::new(1, 1));
        a.set_title("Pilot");
        let mut b = a.clone();
        b.set_summary("Different");
        b.set_rating_value(9.9);
        b.set_link("http://elsewhere");
        assert_eq!(a, b);

        b.set_title("Other");
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let mut ep = Episode::default();
        ep.set_episode_number(EpisodeNumber::new(2, 3));
        ep.set_title("Chuck Versus the Ring");
        ep.set_air_date("2009-04-27");

        let json = serde_json::to_string(&ep).unwrap();
        let back: Episode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ep);
        assert!(json.contains("2009-04-27"));
    }
}
