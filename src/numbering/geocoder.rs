//! Geocoding seam for the description lookup.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rlibphonenumber::{PhoneNumberType, PHONE_NUMBER_UTIL};
use tracing::warn;

use super::backend::{region_str, LibNumber};
use crate::domain::Locale;

/// Describes where a number is from, in a given locale.
pub trait Geocoder<N> {
    /// Country or area description for `number`.
    ///
    /// Returns an empty string when the number could belong to several
    /// countries or its country code is invalid.
    fn describe(&self, number: &N, locale: &Locale) -> String;
}

/// Geocoder that knows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGeocoder;

impl<N> Geocoder<N> for NullGeocoder {
    fn describe(&self, _number: &N, _locale: &Locale) -> String {
        String::new()
    }
}

impl<N, F> Geocoder<N> for F
where
    F: Fn(&N, &Locale) -> String,
{
    fn describe(&self, number: &N, locale: &Locale) -> String {
        self(number, locale)
    }
}

/// Language used when the requested one has no names.
const FALLBACK_LANGUAGE: &str = "en";

/// Language code to region code to display name.
type NameTable = BTreeMap<String, BTreeMap<String, String>>;

static COUNTRY_NAMES: LazyLock<NameTable> = LazyLock::new(|| {
    toml::from_str(include_str!("country_names.toml")).unwrap_or_else(|e| {
        warn!("Failed to load country names: {}", e);
        NameTable::new()
    })
});

/// Describes a number by the name of its country.
///
/// Area-level descriptions need a prefix dataset, which is not bundled, so
/// every valid number is described at country level.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryNameGeocoder;

impl CountryNameGeocoder {
    pub fn new() -> Self {
        Self
    }

    /// Display name of `region` in the language of `locale`.
    pub fn country_name(&self, region: &str, locale: &Locale) -> Option<&'static str> {
        let table: &'static NameTable = &COUNTRY_NAMES;
        let language = locale.language().to_ascii_lowercase();

        let name = [language.as_str(), FALLBACK_LANGUAGE]
            .into_iter()
            .filter_map(|lang| table.get(lang))
            .find_map(|names| names.get(region))
            .map(String::as_str);
        name
    }
}

impl Geocoder<LibNumber> for CountryNameGeocoder {
    fn describe(&self, number: &LibNumber, locale: &Locale) -> String {
        let Some(n) = number.phone_number() else {
            return String::new();
        };
        if matches!(PHONE_NUMBER_UTIL.get_number_type(n), PhoneNumberType::Unknown) {
            return String::new();
        }

        // ZZ and the non-geographic entity have no name.
        let region = region_str(PHONE_NUMBER_UTIL.get_region_for_number(n));
        self.country_name(&region, locale)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionCode;
    use crate::numbering::{LibPhonenumber, NumberingPlan};

    fn describe(raw: &str, region: &str, locale: &str) -> String {
        let number = LibPhonenumber::new().parse(raw, &RegionCode::new(region).unwrap());
        CountryNameGeocoder::new().describe(&number, &Locale::new(locale).unwrap())
    }

    #[test]
    fn test_country_name_in_locale_language() {
        assert_eq!(describe("+18003569377", "US", "en_US"), "United States");
        assert_eq!(describe("+18003569377", "US", "fr_FR"), "États-Unis");
        assert_eq!(describe("+18003569377", "US", "es_ES"), "Estados Unidos");
        assert_eq!(describe("+447400982200", "US", "en_US"), "United Kingdom");
        assert_eq!(describe("+447400982200", "US", "fr_FR"), "Royaume-Uni");
        assert_eq!(describe("+447400982200", "US", "es_ES"), "Reino Unido");
        assert_eq!(describe("+447400982200", "US", "de_DE"), "Vereinigtes Königreich");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(describe("+18003569377", "US", "xx_XX"), "United States");
    }

    #[test]
    fn test_invalid_country_code_is_empty() {
        assert_eq!(describe("+999237000", "US", "en_US"), "");
    }

    #[test]
    fn test_number_without_a_country_is_empty() {
        // Valid in none of the regions sharing +44.
        assert_eq!(describe("6172531000", "GB", "en_US"), "");
    }

    #[test]
    fn test_every_language_names_the_same_regions() {
        let table: &NameTable = &COUNTRY_NAMES;
        let english = &table[FALLBACK_LANGUAGE];
        assert!(english.len() > 200);
        for (language, names) in table {
            assert_eq!(names.len(), english.len(), "{}", language);
            assert!(names.keys().eq(english.keys()), "{}", language);
        }
    }

    #[test]
    fn test_null_and_closure_geocoders() {
        let locale = Locale::new("en_US").unwrap();
        assert_eq!(NullGeocoder.describe(&"+1", &locale), "");

        let by_locale = |number: &&str, locale: &Locale| format!("{} in {}", number, locale);
        assert_eq!(by_locale.describe(&"+1", &locale), "+1 in en_US");
    }
}
