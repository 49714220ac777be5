//! Show info parser
//!
//! Builds [`ShowInfo`] records. The same builder serves search results and
//! the show-info feed, which name several fields differently.

use crate::types::{CountryDetail, ShowInfo};

use super::coerce::is_valid_string;
use super::dom::{XmlDocument, XmlElement};

/// Read `primary`, falling back to `alternate` when it carries no data.
fn value_with_fallback(element: &XmlElement, primary: &str, alternate: &str) -> String {
    let text = element.value_of(primary);
    if is_valid_string(&text) {
        text
    } else {
        element.value_of(alternate)
    }
}

/// Build a country/detail pair from an element such as
/// `<aka country="DE">Chuck</aka>`.
///
/// The country comes from the attribute named `country_attr`, the detail
/// from the element's whole text content.
pub fn build_country_detail(element: &XmlElement, country_attr: &str) -> CountryDetail {
    let mut cd = CountryDetail::default();
    cd.set_country(element.attribute(country_attr).unwrap_or_default());
    cd.set_detail(&element.text_content());
    cd
}

/// Genre name of a `<genre>` element, `None` for empty or self-closing tags.
pub fn build_genre(element: &XmlElement) -> Option<&str> {
    element.first_child_text().map(str::trim)
}

/// Build a [`ShowInfo`] from a `show` or `Showinfo` element.
pub fn build_show_info(element: &XmlElement) -> ShowInfo {
    let mut show = ShowInfo::default();

    show.set_show_id(&element.value_of("showid"));

    // Search results use the short names, show-info the long ones.
    show.set_show_name(&value_with_fallback(element, "showname", "name"));
    show.set_show_link(&value_with_fallback(element, "showlink", "link"));
    show.set_country(&value_with_fallback(element, "country", "origin_country"));

    show.set_started(&element.value_of("started"));
    show.set_start_date(&element.value_of("startdate"));
    show.set_ended(&element.value_of("ended"));
    show.set_total_seasons(&element.value_of("seasons"));
    show.set_status(&element.value_of("status"));
    show.set_classification(&element.value_of("classification"));
    show.set_summary(&element.value_of("summary"));
    show.set_runtime(&element.value_of("runtime"));
    show.set_air_time(&element.value_of("airtime"));
    show.set_air_day(&element.value_of("airday"));
    show.set_timezone(&element.value_of("timezone"));

    for network in element.elements_by_tag("network") {
        show.add_network(build_country_detail(network, "country"));
    }

    for aka in element.elements_by_tag("aka") {
        show.add_aka(build_country_detail(aka, "country"));
    }

    for genre in element.elements_by_tag("genre") {
        if let Some(name) = build_genre(genre) {
            show.add_genre(name);
        }
    }

    show
}

/// Parse a show-info response.
///
/// Servers disagree on the case of the `Showinfo` tag, so an exact match is
/// tried first and a case-insensitive one second.
///
/// # Returns
/// One record per `Showinfo` element; empty when there are none.
pub fn parse_show_info(document: &XmlDocument) -> Vec<ShowInfo> {
    let mut shows: Vec<ShowInfo> = document
        .elements_by_tag("Showinfo")
        .map(build_show_info)
        .collect();

    if shows.is_empty() {
        shows = document
            .elements_by_tag_ignore_case("Showinfo")
            .map(build_show_info)
            .collect();
    }

    tracing::debug!("Parsed {} show info records", shows.len());
    shows
}
