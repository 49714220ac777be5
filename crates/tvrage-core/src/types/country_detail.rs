use std::fmt;

use serde::{Deserialize, Serialize};

use super::{unknown, valid_or_unknown};
use crate::parser::is_valid_string;

/// A country code paired with a value, used for AKAs and networks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryDetail {
    country: String,
    detail: String,
}

impl Default for CountryDetail {
    fn default() -> Self {
        Self {
            country: unknown(),
            detail: unknown(),
        }
    }
}

impl CountryDetail {
    /// Build a pair; invalid parts become `UNKNOWN`.
    pub fn new(country: &str, detail: &str) -> Self {
        let mut cd = Self::default();
        cd.set_country(country);
        cd.set_detail(detail);
        cd
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn set_country(&mut self, country: &str) {
        self.country = valid_or_unknown(country);
    }

    pub fn set_detail(&mut self, detail: &str) {
        self.detail = valid_or_unknown(detail);
    }

    /// Both halves carry real data.
    pub fn is_valid(&self) -> bool {
        is_valid_string(&self.country) && is_valid_string(&self.detail)
    }
}

impl fmt::Display for CountryDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[country={}][detail={}]", self.country, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNKNOWN;

    #[test]
    fn test_default_is_invalid() {
        let cd = CountryDetail::default();
        assert_eq!(cd.country(), UNKNOWN);
        assert_eq!(cd.detail(), UNKNOWN);
        assert!(!cd.is_valid());
    }

    #[test]
    fn test_new_trims_and_validates() {
        let cd = CountryDetail::new(" US ", "NBC\n");
        assert_eq!(cd.country(), "US");
        assert_eq!(cd.detail(), "NBC");
        assert!(cd.is_valid());
    }

    #[test]
    fn test_setters_reapply_sentinel() {
        let mut cd = CountryDetail::new("US", "NBC");
        cd.set_detail("   ");
        assert_eq!(cd.detail(), UNKNOWN);
        assert!(!cd.is_valid());

        cd.set_detail("CBS");
        cd.set_country("unknown");
        assert_eq!(cd.country(), UNKNOWN);
        assert!(!cd.is_valid());
    }

    #[test]
    fn test_display() {
        let cd = CountryDetail::new("UK", "BBC One");
        assert_eq!(cd.to_string(), "[country=UK][detail=BBC One]");
    }
}
