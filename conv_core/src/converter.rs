//! # Converter
//!
//! Pure conversion of a `(category, unit, raw input)` triple into a result
//! displayed as `"<value to 2 decimals> <unit>"`.
//!
//! An empty or non-numeric input, or a missing unit, is "nothing to compute"
//! and yields `Ok(None)`. Only a unit from the wrong category is an error.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::converter::convert;
//! use conv_core::units::{Category, Unit};
//!
//! let result = convert(Category::Weight, Some(Unit::Pound), "10").unwrap().unwrap();
//! assert_eq!(result.formatted(), "22.05 pound");
//!
//! assert!(convert(Category::Weight, Some(Unit::Pound), "").unwrap().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConvResult;
use crate::table::ConversionTable;
use crate::units::{Category, Unit};

/// A conversion request as a front end would submit it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    /// `None` when no unit has been picked yet
    pub unit: Option<Unit>,
    /// Raw text from the input field
    pub input: String,
}

impl ConversionRequest {
    pub fn new(category: Category, unit: Option<Unit>, input: impl Into<String>) -> Self {
        ConversionRequest {
            category,
            unit,
            input: input.into(),
        }
    }
}

/// A completed conversion.
///
/// Serializes with the display string alongside the raw numbers:
///
/// ```json
/// { "category": "length", "unit": "inch", "input": 1.0, "value": 39.37, "formatted": "39.37 inch" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub category: Category,
    pub unit: Unit,
    /// Parsed input value
    pub input: f64,
    /// Converted value, unrounded
    pub value: f64,
    /// Display string, `"<value> <unit>"`
    pub formatted: String,
}

impl ConversionResult {
    fn new(category: Category, unit: Unit, input: f64, value: f64) -> Self {
        ConversionResult {
            category,
            unit,
            input,
            value,
            formatted: format_result(value, unit),
        }
    }

    /// The display string, e.g. `"39.37 inch"`
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Longest leading slice that reads as a decimal number: optional sign,
/// digits with an optional fraction, then an exponent only if it has digits.
/// `"1.2.3"` yields `"1.2"`, `"12abc"` yields `"12"`, `"abc"` yields `""`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}

/// Parse the input field the way a numeric text box reads it: leading
/// whitespace is skipped and the longest numeric prefix is taken, so trailing
/// junk such as a second decimal point is ignored. Returns `None` when there
/// is no numeric prefix or the value is not finite.
pub fn parse_input(raw: &str) -> Option<f64> {
    let prefix = numeric_prefix(raw.trim_start());
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a value with exactly two decimals.
///
/// Halfway cases round away from zero (`0.125` -> `"0.13"`, `-0.125` ->
/// `"-0.13"`) rather than to even. Negative zero prints as `"0.00"`.
pub fn format_fixed(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    // Only odd multiples of 1/8 sit exactly halfway between two cents
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (magnitude * 100.0).round() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", value)
}

/// Format a value with exactly two decimals followed by the unit key
pub fn format_result(value: f64, unit: Unit) -> String {
    format!("{} {}", format_fixed(value), unit.key())
}

/// Convert a raw input to the selected unit.
///
/// Returns `Ok(None)` when there is nothing to compute (no unit picked, empty
/// or non-numeric input). Returns an error only when `unit` is not part of
/// `category`'s table.
pub fn convert(category: Category, unit: Option<Unit>, raw_input: &str) -> ConvResult<Option<ConversionResult>> {
    let Some(unit) = unit else {
        tracing::debug!(%category, "no unit selected, skipping conversion");
        return Ok(None);
    };
    let Some(value) = parse_input(raw_input) else {
        tracing::debug!(%category, %unit, input = raw_input, "input not numeric, skipping conversion");
        return Ok(None);
    };

    let definition = ConversionTable::global().definition(category, unit)?;
    // Temperature formulas and length/weight factors both go through `apply`
    let converted = definition.apply(value);

    let result = ConversionResult::new(category, unit, value, converted);
    tracing::debug!(%category, %unit, input = value, result = %result, "converted");
    Ok(Some(result))
}

/// Convert a [`ConversionRequest`]
pub fn convert_request(request: &ConversionRequest) -> ConvResult<Option<ConversionResult>> {
    convert(request.category, request.unit, &request.input)
}

/// Convert and return only the display string
pub fn convert_to_string(category: Category, unit: Option<Unit>, raw_input: &str) -> ConvResult<Option<String>> {
    Ok(convert(category, unit, raw_input)?.map(|result| result.formatted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConvError;
    use proptest::prelude::*;

    fn display(category: Category, unit: Unit, input: &str) -> String {
        convert_to_string(category, Some(unit), input).unwrap().unwrap()
    }

    #[test]
    fn test_length_inch() {
        assert_eq!(display(Category::Length, Unit::Inch, "1"), "39.37 inch");
    }

    #[test]
    fn test_weight_pound() {
        assert_eq!(display(Category::Weight, Unit::Pound, "10"), "22.05 pound");
    }

    #[test]
    fn test_temperature_fahrenheit() {
        assert_eq!(display(Category::Temperature, Unit::Fahrenheit, "100"), "212.00 fahrenheit");
    }

    #[test]
    fn test_length_kilometer() {
        assert_eq!(display(Category::Length, Unit::Kilometer, "5000"), "5.00 kilometer");
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        for unit in Unit::ALL {
            assert_eq!(convert(unit.category(), Some(unit), "").unwrap(), None);
            assert_eq!(convert(unit.category(), Some(unit), "   ").unwrap(), None);
        }
    }

    #[test]
    fn test_missing_unit_produces_nothing() {
        for category in Category::ALL {
            assert_eq!(convert(category, None, "42").unwrap(), None);
        }
    }

    #[test]
    fn test_non_numeric_input_produces_nothing() {
        assert_eq!(convert(Category::Length, Some(Unit::Foot), "abc").unwrap(), None);
        assert_eq!(convert(Category::Length, Some(Unit::Foot), "NaN").unwrap(), None);
        assert_eq!(convert(Category::Length, Some(Unit::Foot), "inf").unwrap(), None);
        assert_eq!(convert(Category::Length, Some(Unit::Foot), ".").unwrap(), None);
    }

    #[test]
    fn test_zero_boundaries() {
        for unit in Unit::ALL.into_iter().filter(|u| u.category() != Category::Temperature) {
            assert_eq!(display(unit.category(), unit, "0"), format!("0.00 {}", unit.key()));
        }
        assert_eq!(display(Category::Temperature, Unit::Celsius, "0"), "0.00 celsius");
        assert_eq!(display(Category::Temperature, Unit::Fahrenheit, "0"), "32.00 fahrenheit");
        assert_eq!(display(Category::Temperature, Unit::Kelvin, "0"), "273.15 kelvin");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(display(Category::Length, Unit::Meter, "-0"), "0.00 meter");
    }

    #[test]
    fn test_negative_and_decimal_inputs() {
        assert_eq!(display(Category::Temperature, Unit::Kelvin, "-273.15"), "0.00 kelvin");
        assert_eq!(display(Category::Length, Unit::Centimeter, " 2.5 "), "250.00 centimeter");
        assert_eq!(display(Category::Weight, Unit::Gram, "-1.5"), "-1500.00 gram");
    }

    #[test]
    fn test_temperature_input_is_always_celsius() {
        // Picking "celsius" with 100 does not treat 100 as anything but Celsius
        assert_eq!(display(Category::Temperature, Unit::Celsius, "100"), "100.00 celsius");
        assert_eq!(display(Category::Temperature, Unit::Kelvin, "100"), "373.15 kelvin");
    }

    #[test]
    fn test_unit_outside_category_is_error() {
        let err = convert(Category::Weight, Some(Unit::Inch), "1").unwrap_err();
        assert_eq!(err, ConvError::unit_not_in_category("weight", "inch"));
    }

    #[test]
    fn test_convert_request() {
        let request = ConversionRequest::new(Category::Length, Some(Unit::Inch), "1");
        let result = convert_request(&request).unwrap().unwrap();
        assert_eq!(result.unit, Unit::Inch);
        assert_eq!(result.input, 1.0);
        assert_eq!(result.to_string(), "39.37 inch");
    }

    #[test]
    fn test_result_json_shape() {
        let result = convert(Category::Length, Some(Unit::Inch), "1").unwrap().unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "length");
        assert_eq!(json["unit"], "inch");
        assert_eq!(json["formatted"], "39.37 inch");
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("12.5"), Some(12.5));
        assert_eq!(parse_input("1e3"), Some(1000.0));
        assert_eq!(parse_input("  -4"), Some(-4.0));
        assert_eq!(parse_input(".5"), Some(0.5));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("-"), None);
        assert_eq!(parse_input("."), None);
        assert_eq!(parse_input("1e400"), None);
    }

    #[test]
    fn test_parse_input_takes_numeric_prefix() {
        assert_eq!(parse_input("12abc"), Some(12.0));
        assert_eq!(parse_input("1.2.3"), Some(1.2));
        assert_eq!(parse_input("3."), Some(3.0));
        assert_eq!(parse_input("2e"), Some(2.0));
        assert_eq!(parse_input("2e-1x"), Some(0.2));
        assert_eq!(parse_input("abc12"), None);
    }

    #[test]
    fn test_prefix_input_converts() {
        assert_eq!(display(Category::Length, Unit::Meter, "1.2.3"), "1.20 meter");
        assert_eq!(display(Category::Length, Unit::Centimeter, "12abc"), "1200.00 centimeter");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(display(Category::Temperature, Unit::Celsius, "0.125"), "0.13 celsius");
        assert_eq!(display(Category::Length, Unit::Meter, "1.125"), "1.13 meter");
        assert_eq!(display(Category::Length, Unit::Meter, "-0.125"), "-0.13 meter");
        assert_eq!(display(Category::Weight, Unit::Kilogram, "2.375"), "2.38 kilogram");
        assert_eq!(display(Category::Weight, Unit::Kilogram, "2.625"), "2.63 kilogram");
    }

    #[test]
    fn test_format_fixed_non_ties() {
        assert_eq!(format_fixed(2.5), "2.50");
        assert_eq!(format_fixed(22.0462), "22.05");
        assert_eq!(format_fixed(-0.001), "-0.00");
        assert_eq!(format_fixed(-0.0), "0.00");
        assert_eq!(format_fixed(1234567.125), "1234567.13");
    }

    fn valid_unit() -> impl Strategy<Value = Unit> {
        proptest::sample::select(Unit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_result_has_two_decimals_and_unit_suffix(unit in valid_unit(), value in -1.0e9f64..1.0e9f64) {
            let text = display(unit.category(), unit, &value.to_string());
            let suffix = format!(" {}", unit.key());
            prop_assert!(text.ends_with(&suffix));

            let number = text.strip_suffix(&suffix).unwrap();
            let (_, decimals) = number.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 2);
            prop_assert!(decimals.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn prop_convert_is_idempotent(unit in valid_unit(), value in -1.0e6f64..1.0e6f64) {
            let input = value.to_string();
            let first = convert(unit.category(), Some(unit), &input).unwrap();
            let second = convert(unit.category(), Some(unit), &input).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
