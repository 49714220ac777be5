//! XML parsers for the TVRage feeds
//!
//! This module turns feed responses into domain records:
//! - `dom`: document tree and tag-based field extraction
//! - `coerce`: text to int/float/date with fixed fallbacks
//! - `show_info`: ShowInfo builders and the show-info pipeline
//! - `search`: search results pipeline
//! - `episodes`: episode-list and episode-info pipelines

pub mod coerce;
pub mod dom;
pub mod episodes;
pub mod search;
pub mod show_info;

// Re-export main parsing functions
pub use coerce::{is_valid_opt, is_valid_string, parse_float, parse_int, to_date, to_float, to_int};
pub use dom::{parse_document, XmlDocument, XmlElement, XmlError};
pub use episodes::{
    build_episode, build_episode_from_info, parse_episode_code, parse_episode_info,
    parse_episode_list,
};
pub use search::parse_search_results;
pub use show_info::{build_country_detail, build_genre, build_show_info, parse_show_info};
