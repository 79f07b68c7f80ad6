//! The closed set of number inspection actions.

use crate::domain::Request;
use crate::numbering::{Geocoder, NumberingPlan};

/// One number inspection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    IsAlphaNumber,
    ConvertAlphaCharactersInNumber,
    NormalizeDigitsOnly,
    NormalizeDiallableCharsOnly,
    GetNationalSignificantNumber,
    FormatOutOfCountryCallingNumber,
    Format,
    GetNumberType,
    IsValidNumberForRegion,
    GetRegionCode,
    IsPossibleNumberWithReason,
    IsPossibleNumber,
    GetDescriptionForNumber,
}

impl Action {
    /// Every action, in the order names are matched.
    ///
    /// Longer names sharing a prefix with a shorter one come first, so
    /// `format_out_of_country_calling_number` is tried before `format`.
    pub const ALL: [Action; 13] = [
        Action::IsAlphaNumber,
        Action::ConvertAlphaCharactersInNumber,
        Action::NormalizeDigitsOnly,
        Action::NormalizeDiallableCharsOnly,
        Action::GetNationalSignificantNumber,
        Action::FormatOutOfCountryCallingNumber,
        Action::Format,
        Action::GetNumberType,
        Action::IsValidNumberForRegion,
        Action::GetRegionCode,
        Action::IsPossibleNumberWithReason,
        Action::IsPossibleNumber,
        Action::GetDescriptionForNumber,
    ];

    /// Canonical action name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::IsAlphaNumber => "is_alpha_number",
            Action::ConvertAlphaCharactersInNumber => "convert_alpha_characters_in_number",
            Action::NormalizeDigitsOnly => "normalize_digits_only",
            Action::NormalizeDiallableCharsOnly => "normalize_diallable_chars_only",
            Action::GetNationalSignificantNumber => "get_national_significant_number",
            Action::FormatOutOfCountryCallingNumber => "format_out_of_country_calling_number",
            Action::Format => "format",
            Action::GetNumberType => "get_number_type",
            Action::IsValidNumberForRegion => "is_valid_number_for_region",
            Action::GetRegionCode => "get_region_code",
            Action::IsPossibleNumberWithReason => "is_possible_number_with_reason",
            Action::IsPossibleNumber => "is_possible_number",
            Action::GetDescriptionForNumber => "get_description_for_number",
        }
    }

    /// Suffix of the variable the result is stored under.
    pub fn variable_suffix(&self) -> &'static str {
        match self {
            Action::IsAlphaNumber => "is_alpha_number",
            Action::ConvertAlphaCharactersInNumber => "alpha_characters_in_number",
            Action::NormalizeDigitsOnly => "digits_only",
            Action::NormalizeDiallableCharsOnly => "diallable_chars_only",
            Action::GetNationalSignificantNumber => "national_significant_number",
            Action::FormatOutOfCountryCallingNumber => "out_of_country_calling_number",
            Action::Format => "format",
            Action::GetNumberType => "number_type",
            Action::IsValidNumberForRegion => "valid_number_for_region",
            Action::GetRegionCode => "region_code",
            Action::IsPossibleNumberWithReason => "is_possible_number_with_reason",
            Action::IsPossibleNumber => "is_possible_number",
            Action::GetDescriptionForNumber => "description_for_number",
        }
    }

    /// Compute this action's response for a request.
    ///
    /// `parsed` is the request's number as parsed against the request's
    /// default region. Every action produces a value, even for input the
    /// plan could not make sense of.
    pub fn evaluate<P, G>(
        &self,
        plan: &P,
        geocoder: &G,
        request: &Request<'_>,
        parsed: &P::Number,
    ) -> String
    where
        P: NumberingPlan,
        G: Geocoder<P::Number>,
    {
        let config = request.config;
        match self {
            Action::IsAlphaNumber => plan.is_alpha_number(request.number).to_string(),
            Action::ConvertAlphaCharactersInNumber => {
                plan.convert_alpha_characters(request.number)
            }
            Action::NormalizeDigitsOnly => plan.normalize_digits_only(request.number),
            Action::NormalizeDiallableCharsOnly => {
                plan.normalize_diallable_chars_only(request.number)
            }
            Action::GetNationalSignificantNumber => plan.national_significant_number(parsed),
            Action::FormatOutOfCountryCallingNumber => {
                plan.format_out_of_country(parsed, &config.calling_from_region)
            }
            Action::Format => plan.format(parsed, config.output_format),
            Action::GetNumberType => plan.number_type(parsed).as_str().to_string(),
            Action::IsValidNumberForRegion => plan
                .is_valid_for_region(parsed, &config.default_region)
                .to_string(),
            Action::GetRegionCode => plan.region_code(parsed),
            Action::IsPossibleNumberWithReason => plan.possibility(parsed).label().to_string(),
            Action::IsPossibleNumber => plan.is_valid(parsed).to_string(),
            Action::GetDescriptionForNumber => geocoder.describe(parsed, &config.locale),
        }
    }
}
