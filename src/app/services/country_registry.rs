//! Country reference-data lookups
//!
//! This module wraps the static country tables in an immutable registry with
//! O(1) lookups: display name to ISO code, and ISO code to IANA timezone.
//! The tables are configuration data; swapping or extending them does not
//! touch the parser.

use std::collections::HashMap;

use chrono_tz::Tz;

use crate::app::models::Country;
use crate::constants::{COUNTRY_TIMEZONES, ISO_COUNTRY_CODES};

/// Immutable registry of country reference data, built once at startup
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    codes: HashMap<&'static str, &'static str>,
    timezones: HashMap<&'static str, Tz>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self {
            codes: ISO_COUNTRY_CODES.iter().copied().collect(),
            timezones: COUNTRY_TIMEZONES.iter().copied().collect(),
        }
    }

    /// Resolve a printed country name to a [`Country`].
    ///
    /// Names missing from the table keep the printed name with `code: None`;
    /// an unknown country is degraded data, not an error.
    pub fn country(&self, name: &str) -> Country {
        Country {
            name: name.to_string(),
            code: self.codes.get(name).map(|code| (*code).to_string()),
        }
    }

    /// Timezone for a country code; absent or unmapped codes resolve to UTC
    pub fn timezone(&self, code: Option<&str>) -> Tz {
        code.and_then(|code| self.timezones.get(code).copied())
            .unwrap_or(Tz::UTC)
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_country_resolves_code() {
        let registry = CountryRegistry::new();
        let country = registry.country("Germany");
        assert_eq!(country.name, "Germany");
        assert_eq!(country.code.as_deref(), Some("DE"));
    }

    #[test]
    fn test_unknown_country_keeps_name_without_code() {
        let registry = CountryRegistry::new();
        let country = registry.country("Atlantis");
        assert_eq!(country.name, "Atlantis");
        assert_eq!(country.code, None);
    }

    #[test]
    fn test_both_czech_spellings_share_a_code() {
        let registry = CountryRegistry::new();
        assert_eq!(registry.country("Czechia").code.as_deref(), Some("CZ"));
        assert_eq!(
            registry.country("Czech Republic").code.as_deref(),
            Some("CZ")
        );
    }

    #[test]
    fn test_timezone_lookup() {
        let registry = CountryRegistry::new();
        assert_eq!(registry.timezone(Some("DE")), Tz::Europe__Berlin);
        assert_eq!(registry.timezone(Some("XX")), Tz::UTC);
        assert_eq!(registry.timezone(None), Tz::UTC);
    }
}
