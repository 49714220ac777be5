//! Data types for the TVRage client
//!
//! Records are built empty, filled through their setters by the parser and
//! then handed to the caller. String setters store the `UNKNOWN` sentinel
//! for blank input, so callers should check `is_valid()` rather than test
//! individual fields. All types implement Serialize and Deserialize.

mod country_detail;
mod episode;
mod episode_list;
mod episode_number;
mod show_info;

pub use country_detail::CountryDetail;
pub use episode::Episode;
pub use episode_list::EpisodeList;
pub use episode_number::EpisodeNumber;
pub use show_info::ShowInfo;

use crate::parser::is_valid_string;

/// Placeholder stored in any string field the feed did not supply.
pub const UNKNOWN: &str = "UNKNOWN";

/// The sentinel as an owned string, for `Default` impls.
pub(crate) fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Store `value` trimmed if it is a valid string, the sentinel otherwise.
pub(crate) fn valid_or_unknown(value: &str) -> String {
    if is_valid_string(value) {
        value.trim().to_string()
    } else {
        unknown()
    }
}
