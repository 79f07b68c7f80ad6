//! Numbering-plan and geocoding backends.
//!
//! The action pipeline never inspects phone numbers itself. Everything it
//! needs is asked through [`NumberingPlan`] and [`Geocoder`], so the engine
//! can run against the bundled libphonenumber port or any other provider.

mod backend;
mod geocoder;

pub use backend::{LibNumber, LibPhonenumber};
pub use geocoder::{CountryNameGeocoder, Geocoder, NullGeocoder};

use crate::domain::{NumberType, OutputFormat, Possibility, RegionCode};

/// Capability set consumed from a numbering library.
///
/// `parse` never fails: an unparseable string still produces a `Number`,
/// and the queries below answer with their degenerate value for it
/// (false, `UNKNOWN`, `ZZ`, an empty string).
pub trait NumberingPlan {
    /// Parsed representation of a single phone number.
    type Number;

    fn parse(&self, raw: &str, default_region: &RegionCode) -> Self::Number;

    /// True for vanity numbers such as `800 MICROSOFT`.
    fn is_alpha_number(&self, raw: &str) -> bool;

    /// Replace letters with their keypad digits, keeping other characters.
    fn convert_alpha_characters(&self, raw: &str) -> String;

    /// Keep only decimal digits, folding wide and Arabic-indic numerals.
    fn normalize_digits_only(&self, raw: &str) -> String;

    /// Keep only characters that can be dialled on a keypad.
    fn normalize_diallable_chars_only(&self, raw: &str) -> String;

    fn national_significant_number(&self, number: &Self::Number) -> String;

    /// Format for dialling from `calling_from`.
    fn format_out_of_country(&self, number: &Self::Number, calling_from: &RegionCode) -> String;

    fn format(&self, number: &Self::Number, format: OutputFormat) -> String;

    fn number_type(&self, number: &Self::Number) -> NumberType;

    fn is_valid_for_region(&self, number: &Self::Number, region: &RegionCode) -> bool;

    /// Region the number belongs to, `ZZ` when it cannot be determined.
    fn region_code(&self, number: &Self::Number) -> String;

    fn possibility(&self, number: &Self::Number) -> Possibility;

    fn is_valid(&self, number: &Self::Number) -> bool;
}
