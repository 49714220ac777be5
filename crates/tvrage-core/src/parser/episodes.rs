//! Episode parsers
//!
//! Handles the two episode-bearing feeds:
//! - the episode list, where the season number lives on the enclosing
//!   `<Season no="N">` element;
//! - the single-episode info, where season and episode are combined as
//!   `SxE` text in one `<number>` tag.

use crate::types::{Episode, EpisodeList, EpisodeNumber};

use super::coerce::parse_int;
use super::dom::{XmlDocument, XmlElement};

/// Build an episode from an episode-list `<episode>` element.
///
/// # Arguments
/// * `element` - the `<episode>` element
/// * `season` - raw `no` attribute of the enclosing `<Season>`
pub fn build_episode(element: &XmlElement, season: &str) -> Episode {
    let mut episode = Episode::default();

    let seasonnum = element.value_of("seasonnum");
    let epnum = element.value_of("epnum");
    // A missing or zero epnum is not a supplied absolute number.
    let number = match parse_int(&epnum) {
        Some(absolute) if absolute > 0 => {
            EpisodeNumber::from_strs_with_absolute(season, &seasonnum, &epnum)
        }
        _ => EpisodeNumber::from_strs(season, &seasonnum),
    };
    episode.set_episode_number(number);

    episode.set_production_id(&element.value_of("prodnum"));
    episode.set_air_date(&element.value_of("airdate"));
    episode.set_link(&element.value_of("link"));
    episode.set_title(&element.value_of("title"));
    episode.set_summary(&element.value_of("summary"));
    episode.set_rating(&element.value_of("rating"));
    episode.set_screen_cap(&element.value_of("screencap"));

    episode
}

/// Build an episode from the `<episode>` element of an episode-info reply.
pub fn build_episode_from_info(element: &XmlElement) -> Episode {
    let mut episode = Episode::default();

    episode.set_title(&element.value_of("title"));
    episode.set_air_date(&element.value_of("airdate"));
    episode.set_link(&element.value_of("url"));
    episode.set_summary(&element.value_of("summary"));
    episode.set_screen_cap(&element.value_of("screencap"));

    if let Some(number) = parse_episode_code(&element.value_of("number")) {
        episode.set_episode_number(number);
    }

    episode
}

/// Parse an `SxE` episode code such as `3x07`.
///
/// Either side may be empty, in which case it reads as 0.
///
/// # Examples
/// ```
/// use tvrage_core::parser::parse_episode_code;
///
/// let en = parse_episode_code("03x07").unwrap();
/// assert_eq!((en.season(), en.episode()), (3, 7));
/// assert_eq!(parse_episode_code("x5").unwrap().season(), 0);
/// assert!(parse_episode_code("no code").is_none());
/// ```
pub fn parse_episode_code(text: &str) -> Option<EpisodeNumber> {
    let re = regex_lite::Regex::new(r"(\d*)x(\d*)").ok()?;
    let caps = re.captures(text)?;
    let season = caps.get(1).map_or("", |m| m.as_str());
    let episode = caps.get(2).map_or("", |m| m.as_str());
    Some(EpisodeNumber::from_strs(season, episode))
}

/// Parse an episode-list response.
///
/// Show name and season count come from the `Show` element; every
/// `<episode>` under each `<Season>` is then added to the list. Episodes
/// with colliding numbers overwrite earlier ones.
///
/// # Returns
/// The populated list, or a default (invalid) list when the document has
/// no `Show` element.
pub fn parse_episode_list(document: &XmlDocument) -> EpisodeList {
    let mut list = EpisodeList::default();

    let mut shows = document.elements_by_tag("Show").peekable();
    if shows.peek().is_none() {
        return list;
    }

    for show in shows {
        list.set_show_name(&show.value_of("name"));
        list.set_total_seasons_str(&show.value_of("totalseasons"));
    }

    for season in document.elements_by_tag("Season") {
        let number = season.attribute("no").unwrap_or_default();
        for element in season.elements_by_tag("episode") {
            list.add_episode(build_episode(element, number));
        }
    }

    tracing::debug!(
        "Parsed {} episodes for {}",
        list.len(),
        list.show_name()
    );
    list
}

/// Parse an episode-info response.
///
/// # Returns
/// The first `<episode>` in the document, or a default (invalid) episode
/// when there is none.
pub fn parse_episode_info(document: &XmlDocument) -> Episode {
    document
        .first_by_tag("episode")
        .map(build_episode_from_info)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dom::parse_document;
    use crate::types::UNKNOWN;
    use chrono::NaiveDate;

    const EPISODE_LIST: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Show>
  <name>Chuck</name>
  <totalseasons>5</totalseasons>
  <Episodelist>
    <Season no="1">
      <episode>
        <epnum>1</epnum>
        <seasonnum>01</seasonnum>
        <prodnum>276038</prodnum>
        <airdate>2007-09-24</airdate>
        <link>http://www.tvrage.com/Chuck/episodes/579282</link>
        <title>Chuck Versus the Intersect</title>
        <rating>8.4</rating>
        <screencap>http://images.tvrage.com/screencaps/14/15614/579282.jpg</screencap>
      </episode>
      <episode>
        <epnum>2</epnum>
        <seasonnum>02</seasonnum>
        <airdate>2007-10-01</airdate>
        <title>Chuck Versus the Helicopter</title>
      </episode>
    </Season>
    <Season no="2">
      <episode>
        <epnum>14</epnum>
        <seasonnum>01</seasonnum>
        <airdate>2008-09-29</airdate>
        <title>Chuck Versus the First Date</title>
      </episode>
    </Season>
  </Episodelist>
</Show>"#;

    #[test]
    fn test_parse_episode_list() {
        let doc = parse_document(EPISODE_LIST).unwrap();
        let list = parse_episode_list(&doc);

        assert!(list.is_valid());
        assert_eq!(list.show_name(), "Chuck");
        assert_eq!(list.total_seasons(), 5);
        assert_eq!(list.len(), 3);

        let pilot = list.episode_at(1, 1).unwrap();
        assert_eq!(pilot.title(), "Chuck Versus the Intersect");
        assert_eq!(pilot.production_id(), "276038");
        assert_eq!(pilot.rating(), 8.4);
        assert_eq!(pilot.air_date(), NaiveDate::from_ymd_opt(2007, 9, 24));
        assert_eq!(pilot.episode_number().absolute(), 1);

        let first_date = list.episode_at(2, 1).unwrap();
        assert_eq!(first_date.episode_number().absolute(), 14);
        assert_eq!(first_date.summary(), UNKNOWN);
    }

    #[test]
    fn test_season_comes_from_attribute() {
        let doc = parse_document(
            r#"<Show><name>X</name><Season no="2"><episode><seasonnum>5</seasonnum><title>T</title></episode></Season></Show>"#,
        )
        .unwrap();
        let list = parse_episode_list(&doc);
        let episode = list.episodes().next().unwrap();
        assert_eq!(episode.season(), 2);
        assert_eq!(episode.episode(), 5);
        // No epnum, so the absolute number is derived.
        assert_eq!(episode.episode_number().absolute(), 2005);
    }

    #[test]
    fn test_episode_list_without_show() {
        let doc = parse_document(r#"<Results><Season no="1"><episode/></Season></Results>"#).unwrap();
        let list = parse_episode_list(&doc);
        assert!(list.is_empty());
        assert!(!list.is_valid());
    }

    #[test]
    fn test_episode_list_without_seasons() {
        let doc = parse_document("<Show><name>Chuck</name></Show>").unwrap();
        let list = parse_episode_list(&doc);
        assert_eq!(list.show_name(), "Chuck");
        assert!(list.is_empty());
        assert!(!list.is_valid());
    }

    #[test]
    fn test_episode_list_duplicate_last_wins() {
        let doc = parse_document(
            r#"<Show><name>X</name><Season no="1">
                <episode><seasonnum>1</seasonnum><title>Old</title></episode>
                <episode><seasonnum>1</seasonnum><title>New</title></episode>
            </Season></Show>"#,
        )
        .unwrap();
        let list = parse_episode_list(&doc);
        assert_eq!(list.len(), 1);
        assert_eq!(list.episode_at(1, 1).unwrap().title(), "New");
    }

    #[test]
    fn test_parse_episode_info() {
        let doc = parse_document(
            r#"<show id="15614"><name>Chuck</name>
                <episode>
                  <number>1x1</number>
                  <title>Pilot</title>
                  <airdate>2007-09-24</airdate>
                  <url>http://www.tvrage.com/Chuck/episodes/579282</url>
                </episode>
            </show>"#,
        )
        .unwrap();
        let episode = parse_episode_info(&doc);
        assert!(episode.is_valid());
        assert_eq!(episode.title(), "Pilot");
        assert_eq!(episode.season(), 1);
        assert_eq!(episode.episode(), 1);
        assert_eq!(episode.air_date(), NaiveDate::from_ymd_opt(2007, 9, 24));
        assert_eq!(episode.link(), "http://www.tvrage.com/Chuck/episodes/579282");
    }

    #[test]
    fn test_episode_info_root_element() {
        let doc = parse_document("<episode><number>3x07</number><title>T</title></episode>").unwrap();
        let episode = parse_episode_info(&doc);
        assert_eq!((episode.season(), episode.episode()), (3, 7));
    }

    #[test]
    fn test_episode_info_missing() {
        let doc = parse_document("<show><name>Chuck</name></show>").unwrap();
        let episode = parse_episode_info(&doc);
        assert!(!episode.is_valid());
        assert_eq!(episode.title(), UNKNOWN);
    }

    #[test]
    fn test_episode_info_bad_number() {
        let doc = parse_document("<episode><number>special</number><title>T</title></episode>").unwrap();
        let episode = parse_episode_info(&doc);
        assert_eq!(episode.season(), 0);
        assert!(!episode.is_valid());
    }

    #[test]
    fn test_parse_episode_code() {
        let en = parse_episode_code("3x7").unwrap();
        assert_eq!((en.season(), en.episode(), en.absolute()), (3, 7, 3007));

        let en = parse_episode_code("12x").unwrap();
        assert_eq!((en.season(), en.episode()), (12, 0));

        let en = parse_episode_code("x").unwrap();
        assert!(!en.is_valid());

        assert!(parse_episode_code("").is_none());
        assert!(parse_episode_code("S01E01").is_none());
    }
}
