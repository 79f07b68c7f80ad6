//! Numbering plan backed by the libphonenumber port in `rlibphonenumber`.

use rlibphonenumber::{
    NumberLengthType, ParseError, PhoneNumber, PhoneNumberFormat, PhoneNumberType, Region,
    ValidationError, PHONE_NUMBER_UTIL,
};
use tracing::debug;

use super::NumberingPlan;
use crate::domain::{NumberType, OutputFormat, Possibility, RegionCode};

/// Parsed number, or the reason parsing gave up.
#[derive(Debug)]
pub struct LibNumber {
    parsed: Result<PhoneNumber, ParseError>,
}

impl LibNumber {
    /// The parsed number, `None` for degenerate input.
    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.parsed.as_ref().ok()
    }
}

/// libphonenumber metadata as compiled into `rlibphonenumber`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhonenumber;

impl LibPhonenumber {
    pub fn new() -> Self {
        Self
    }
}

/// Library region for a configured code.
///
/// Codes that are not two ASCII letters become `ZZ`, which has no metadata.
pub(crate) fn region(code: &RegionCode) -> Region {
    code.as_str().parse().unwrap_or(Region::ZZ)
}

/// Configured-code form of a library region, `ZZ` when there is none.
pub(crate) fn region_str(region: Option<Region>) -> String {
    match region {
        Some(Region::World) | None => RegionCode::UNKNOWN.to_string(),
        Some(region) => region.to_string(),
    }
}

impl NumberingPlan for LibPhonenumber {
    type Number = LibNumber;

    fn parse(&self, raw: &str, default_region: &RegionCode) -> LibNumber {
        let parsed = PHONE_NUMBER_UTIL.parse(raw, Some(region(default_region)));
        if let Err(e) = &parsed {
            debug!("Cannot parse {} for region {}: {}", raw, default_region, e);
        }
        LibNumber { parsed }
    }

    fn is_alpha_number(&self, raw: &str) -> bool {
        PHONE_NUMBER_UTIL.is_alpha_number(raw)
    }

    fn convert_alpha_characters(&self, raw: &str) -> String {
        PHONE_NUMBER_UTIL.convert_alpha_characters_in_number(raw)
    }

    fn normalize_digits_only(&self, raw: &str) -> String {
        PHONE_NUMBER_UTIL.normalize_digits_only(raw)
    }

    fn normalize_diallable_chars_only(&self, raw: &str) -> String {
        // Only digits, `+` and `*` survive; `#` is not kept.
        PHONE_NUMBER_UTIL
            .normalize_diallable_chars_only(raw)
            .replace('#', "")
    }

    fn national_significant_number(&self, number: &LibNumber) -> String {
        number
            .phone_number()
            .map(rlibphonenumber::get_national_significant_number_owned)
            .unwrap_or_default()
    }

    fn format_out_of_country(&self, number: &LibNumber, calling_from: &RegionCode) -> String {
        number
            .phone_number()
            .map(|n| {
                PHONE_NUMBER_UTIL
                    .format_out_of_country_calling_number(n, region(calling_from))
                    .into_owned()
            })
            .unwrap_or_default()
    }

    fn format(&self, number: &LibNumber, format: OutputFormat) -> String {
        let format = match format {
            OutputFormat::E164 => PhoneNumberFormat::E164,
            OutputFormat::International => PhoneNumberFormat::International,
            OutputFormat::National => PhoneNumberFormat::National,
            OutputFormat::Rfc3966 => PhoneNumberFormat::RFC3966,
        };
        number
            .phone_number()
            .map(|n| PHONE_NUMBER_UTIL.format(n, format).into_owned())
            .unwrap_or_default()
    }

    fn number_type(&self, number: &LibNumber) -> NumberType {
        let Some(n) = number.phone_number() else {
            return NumberType::Unknown;
        };
        match PHONE_NUMBER_UTIL.get_number_type(n) {
            PhoneNumberType::FixedLine => NumberType::FixedLine,
            PhoneNumberType::Mobile => NumberType::Mobile,
            PhoneNumberType::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            PhoneNumberType::TollFree => NumberType::TollFree,
            PhoneNumberType::PremiumRate => NumberType::PremiumRate,
            PhoneNumberType::SharedCost => NumberType::SharedCost,
            PhoneNumberType::VoIP => NumberType::Voip,
            PhoneNumberType::PersonalNumber => NumberType::PersonalNumber,
            PhoneNumberType::Pager => NumberType::Pager,
            PhoneNumberType::UAN => NumberType::Uan,
            PhoneNumberType::VoiceMail => NumberType::Voicemail,
            PhoneNumberType::Unknown => NumberType::Unknown,
        }
    }

    fn is_valid_for_region(&self, number: &LibNumber, region_code: &RegionCode) -> bool {
        number
            .phone_number()
            .is_some_and(|n| PHONE_NUMBER_UTIL.is_valid_number_for_region(n, region(region_code)))
    }

    fn region_code(&self, number: &LibNumber) -> String {
        region_str(
            number
                .phone_number()
                .and_then(|n| PHONE_NUMBER_UTIL.get_region_for_number(n)),
        )
    }

    fn possibility(&self, number: &LibNumber) -> Possibility {
        // An unparsed number has no country code to measure against.
        let Some(n) = number.phone_number() else {
            return Possibility::InvalidCountryCode;
        };
        match PHONE_NUMBER_UTIL.is_possible_number_with_reason(n) {
            Ok(NumberLengthType::IsPossible) => Possibility::IsPossible,
            Ok(NumberLengthType::IsPossibleLocalOnly) => Possibility::IsPossibleLocalOnly,
            Err(ValidationError::InvalidCountryCode) => Possibility::InvalidCountryCode,
            Err(ValidationError::TooShort) => Possibility::TooShort,
            Err(ValidationError::InvalidLength) => Possibility::InvalidLength,
            Err(ValidationError::TooLong) => Possibility::TooLong,
        }
    }

    fn is_valid(&self, number: &LibNumber) -> bool {
        number
            .phone_number()
            .is_some_and(|n| PHONE_NUMBER_UTIL.is_valid_number(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str) -> RegionCode {
        RegionCode::new(value).unwrap()
    }

    #[test]
    fn test_region_falls_back_to_zz() {
        assert_eq!(region(&code("gb")), Region::GB);
        assert_eq!(region(&code("1x")), Region::ZZ);
        assert_eq!(region_str(Some(Region::World)), "ZZ");
        assert_eq!(region_str(None), "ZZ");
        assert_eq!(region_str(Some(Region::FR)), "FR");
    }

    #[test]
    fn test_unparsed_number_has_degenerate_answers() {
        let plan = LibPhonenumber::new();
        let number = plan.parse("+999237000", &code("US"));

        assert!(number.phone_number().is_none());
        assert_eq!(plan.possibility(&number), Possibility::InvalidCountryCode);
        assert_eq!(plan.format(&number, OutputFormat::E164), "");
        assert_eq!(plan.region_code(&number), "ZZ");
        assert_eq!(plan.number_type(&number), NumberType::Unknown);
        assert!(!plan.is_valid(&number));
    }

    #[test]
    fn test_region_without_validity() {
        let plan = LibPhonenumber::new();
        let number = plan.parse("+33 1 23 45", &code("US"));

        assert!(!plan.is_valid(&number));
        assert_eq!(plan.region_code(&number), "FR");
    }

    #[test]
    fn test_diallable_drops_hash() {
        let plan = LibPhonenumber::new();
        assert_eq!(plan.normalize_diallable_chars_only("034-56&+a#234"), "03456+234");
        assert_eq!(plan.normalize_diallable_chars_only("*31#6172531000"), "*316172531000");
    }

    #[test]
    fn test_valid_for_each_nanpa_region() {
        let plan = LibPhonenumber::new();
        for region in ["US", "CA", "JM"] {
            let number = plan.parse("800FLOWERS", &code(region));
            assert!(plan.is_valid_for_region(&number, &code(region)), "{}", region);
        }
    }
}
