use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{unknown, valid_or_unknown, CountryDetail};
use crate::parser::{is_valid_string, to_date, to_int};

/// Full information about a show, as returned by search and show-info.
///
/// Equality considers country, show id, show name and season count only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowInfo {
    air_day: String,
    air_time: String,
    akas: Vec<CountryDetail>,
    classification: String,
    country: String,
    ended: String,
    genres: Vec<String>,
    network: Vec<CountryDetail>,
    origin_country: String,
    runtime: i32,
    show_id: i32,
    show_link: String,
    show_name: String,
    start_date: Option<NaiveDate>,
    started: i32,
    status: String,
    summary: String,
    timezone: String,
    total_seasons: i32,
}

impl Default for ShowInfo {
    fn default() -> Self {
        Self {
            air_day: unknown(),
            air_time: unknown(),
            akas: Vec::new(),
            classification: unknown(),
            country: unknown(),
            ended: unknown(),
            genres: Vec::new(),
            network: Vec::new(),
            origin_country: unknown(),
            runtime: 0,
            show_id: 0,
            show_link: unknown(),
            show_name: unknown(),
            start_date: None,
            started: 0,
            status: unknown(),
            summary: unknown(),
            timezone: unknown(),
            total_seasons: 0,
        }
    }
}

impl ShowInfo {
    /// The feed assigned this show an id.
    pub fn is_valid(&self) -> bool {
        self.show_id > 0
    }

    /// Add an AKA; pairs with a missing half are dropped.
    pub fn add_aka(&mut self, aka: CountryDetail) {
        if aka.is_valid() {
            self.akas.push(aka);
        }
    }

    pub fn add_aka_pair(&mut self, country: &str, aka: &str) {
        if is_valid_string(country) && is_valid_string(aka) {
            self.akas.push(CountryDetail::new(country, aka));
        }
    }

    /// Add a network; pairs with a missing half are dropped.
    pub fn add_network(&mut self, network: CountryDetail) {
        if network.is_valid() {
            self.network.push(network);
        }
    }

    pub fn add_network_pair(&mut self, country: &str, network_name: &str) {
        if is_valid_string(country) && is_valid_string(network_name) {
            self.network.push(CountryDetail::new(country, network_name));
        }
    }

    pub fn add_genre(&mut self, genre: &str) {
        if is_valid_string(genre) {
            self.genres.push(genre.trim().to_string());
        }
    }

    pub fn air_day(&self) -> &str {
        &self.air_day
    }

    pub fn air_time(&self) -> &str {
        &self.air_time
    }

    pub fn akas(&self) -> &[CountryDetail] {
        &self.akas
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn ended(&self) -> &str {
        &self.ended
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn network(&self) -> &[CountryDetail] {
        &self.network
    }

    pub fn origin_country(&self) -> &str {
        &self.origin_country
    }

    pub fn runtime(&self) -> i32 {
        self.runtime
    }

    pub fn show_id(&self) -> i32 {
        self.show_id
    }

    pub fn show_link(&self) -> &str {
        &self.show_link
    }

    pub fn show_name(&self) -> &str {
        &self.show_name
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn started(&self) -> i32 {
        self.started
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn total_seasons(&self) -> i32 {
        self.total_seasons
    }

    pub fn set_air_day(&mut self, air_day: &str) {
        self.air_day = valid_or_unknown(air_day);
    }

    pub fn set_air_time(&mut self, air_time: &str) {
        self.air_time = valid_or_unknown(air_time);
    }

    pub fn set_classification(&mut self, classification: &str) {
        self.classification = valid_or_unknown(classification);
    }

    pub fn set_country(&mut self, country: &str) {
        self.country = valid_or_unknown(country);
    }

    pub fn set_ended(&mut self, ended: &str) {
        self.ended = valid_or_unknown(ended);
    }

    pub fn set_origin_country(&mut self, origin_country: &str) {
        self.origin_country = valid_or_unknown(origin_country);
    }

    pub fn set_runtime(&mut self, runtime: &str) {
        self.runtime = to_int(runtime, 0);
    }

    pub fn set_show_id(&mut self, show_id: &str) {
        self.show_id = to_int(show_id, 0);
    }

    pub fn set_show_id_value(&mut self, show_id: i32) {
        self.show_id = show_id;
    }

    pub fn set_show_link(&mut self, show_link: &str) {
        self.show_link = valid_or_unknown(show_link);
    }

    pub fn set_show_name(&mut self, show_name: &str) {
        self.show_name = valid_or_unknown(show_name);
    }

    pub fn set_start_date(&mut self, start_date: &str) {
        self.start_date = to_date(start_date);
    }

    pub fn set_start_date_value(&mut self, start_date: Option<NaiveDate>) {
        self.start_date = start_date;
    }

    pub fn set_started(&mut self, started: &str) {
        self.started = to_int(started, 0);
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = valid_or_unknown(status);
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary = valid_or_unknown(summary);
    }

    pub fn set_timezone(&mut self, timezone: &str) {
        self.timezone = valid_or_unknown(timezone);
    }

    pub fn set_total_seasons(&mut self, total_seasons: &str) {
        self.total_seasons = to_int(total_seasons, 0);
    }
}

impl PartialEq for ShowInfo {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country
            && self.show_id == other.show_id
            && self.show_name == other.show_name
            && self.total_seasons == other.total_seasons
    }
}

impl Eq for ShowInfo {}

impl fmt::Display for ShowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start_date = self
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(unknown);
        write!(
            f,
            "[ShowInfo=[showID={}][showName={}][showLink={}][country={}][started={}][startDate={}][ended={}][totalSeasons={}][status={}][classification={}][runtime={}][airDay={}][airTime={}][timezone={}][genres={}][akas={}][network={}]]",
            self.show_id,
            self.show_name,
            self.show_link,
            self.country,
            self.started,
            start_date,
            self.ended,
            self.total_seasons,
            self.status,
            self.classification,
            self.runtime,
            self.air_day,
            self.air_time,
            self.timezone,
            self.genres.join(","),
            self.akas.len(),
            self.network.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;

    #[test]
    fn test_default_show_is_invalid() {
        let show = ShowInfo::default();
        assert_eq!(show.show_name(), UNKNOWN);
        assert_eq!(show.show_id(), 0);
        assert_eq!(show.start_date(), None);
        assert!(!show.is_valid());
    }

    #[test]
    fn test_valid_needs_positive_id() {
        let mut show = ShowInfo::default();
        show.set_show_id("15614");
        assert!(show.is_valid());
        show.set_show_id("-3");
        assert!(!show.is_valid());
        show.set_show_id("abc");
        assert_eq!(show.show_id(), 0);
    }

    #[test]
    fn test_add_aka_drops_invalid() {
        let mut show = ShowInfo::default();
        show.add_aka(CountryDetail::new("DE", "Chuck"));
        show.add_aka(CountryDetail::new("", "Chuck"));
        show.add_aka(CountryDetail::default());
        show.add_aka_pair("FR", "Chuck!");
        show.add_aka_pair("UNKNOWN", "x");
        show.add_aka_pair("IT", " ");
        assert_eq!(show.akas().len(), 2);
        assert_eq!(show.akas()[1].detail(), "Chuck!");
    }

    #[test]
    fn test_add_network_drops_invalid() {
        let mut show = ShowInfo::default();
        show.add_network(CountryDetail::new("US", "NBC"));
        show.add_network(CountryDetail::new("US", ""));
        show.add_network_pair("UK", "Virgin1");
        show.add_network_pair("", "ABC");
        assert_eq!(show.network().len(), 2);
    }

    #[test]
    fn test_add_genre_drops_blank() {
        let mut show = ShowInfo::default();
        show.add_genre("Action");
        show.add_genre("");
        show.add_genre("unknown");
        show.add_genre(" Comedy ");
        assert_eq!(show.genres(), &["Action".to_string(), "Comedy".to_string()]);
    }

    #[test]
    fn test_equality_key_fields() {
        let mut a = ShowInfo::default();
        a.set_show_id("1");
        a.set_show_name("Chuck");
        let mut b = a.clone();
        b.set_summary("different");
        b.add_genre("Drama");
        assert_eq!(a, b);

        b.set_total_seasons("5");
        assert_ne!(a, b);
    }

    #[test]
    fn test_start_date() {
        let mut show = ShowInfo::default();
        show.set_start_date("Sep/24/2007");
        assert_eq!(show.start_date(), NaiveDate::from_ymd_opt(2007, 9, 24));
        show.set_start_date("");
        assert_eq!(show.start_date(), None);
    }
}
