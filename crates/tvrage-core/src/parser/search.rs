//! Search results parser
//!
//! A search response is a list of `<show>` elements built with the same
//! builder as the show-info feed.

use crate::types::ShowInfo;

use super::dom::XmlDocument;
use super::show_info::build_show_info;

/// Parse search results.
///
/// # Returns
/// One [`ShowInfo`] per `show` element, or an empty list when the search
/// matched nothing.
pub fn parse_search_results(document: &XmlDocument) -> Vec<ShowInfo> {
    let shows: Vec<ShowInfo> = document
        .elements_by_tag("show")
        .map(build_show_info)
        .collect();

    tracing::debug!("Parsed {} search results", shows.len());
    shows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dom::parse_document;

    const SEARCH: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Results>
  <show>
    <showid>15614</showid>
    <name>Chuck</name>
    <link>http://www.tvrage.com/Chuck</link>
    <country>US</country>
    <started>2007</started>
    <ended>2012</ended>
    <seasons>5</seasons>
    <status>Canceled/Ended</status>
    <classification>Scripted</classification>
    <genres><genre>Action</genre><genre>Comedy</genre></genres>
  </show>
  <show>
    <showid>28329</showid>
    <name>Chuck (UK)</name>
    <country>UK</country>
  </show>
</Results>"#;

    #[test]
    fn test_parse_search_results() {
        let doc = parse_document(SEARCH).unwrap();
        let shows = parse_search_results(&doc);
        assert_eq!(shows.len(), 2);

        assert_eq!(shows[0].show_name(), "Chuck");
        assert_eq!(shows[0].show_link(), "http://www.tvrage.com/Chuck");
        assert_eq!(shows[0].country(), "US");
        assert_eq!(shows[0].total_seasons(), 5);
        assert_eq!(shows[0].genres().len(), 2);

        assert_eq!(shows[1].show_id(), 28329);
        assert_eq!(shows[1].show_name(), "Chuck (UK)");
        assert!(shows[1].genres().is_empty());
    }

    #[test]
    fn test_parse_search_no_results() {
        let doc = parse_document("<Results></Results>").unwrap();
        assert!(parse_search_results(&doc).is_empty());
    }
}
