//! # Categories and Units
//!
//! The three conversion domains and the twelve units they offer. Every unit
//! belongs to exactly one category; the category's table (see [`crate::table`])
//! holds its definition.
//!
//! Units serialize as their lowercase key (`"inch"`, `"fahrenheit"`), which is
//! also the suffix used in formatted results.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::units::{Category, Unit};
//!
//! let unit = Unit::from_str_flexible("Kilometer").unwrap();
//! assert_eq!(unit, Unit::Kilometer);
//! assert_eq!(unit.category(), Category::Length);
//! assert_eq!(unit.label(), "Kilometer");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};

// ============================================================================
// Category
// ============================================================================

/// Conversion domain selected by the first dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    #[default]
    Length,
    /// Base unit: kilogram
    Weight,
    /// Input is treated as Celsius
    Temperature,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Lowercase key (e.g., "length")
    pub fn key(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Parse from a case-insensitive key
    pub fn from_str_flexible(s: &str) -> ConvResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            _ => Err(ConvError::unknown_category(s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Unit
// ============================================================================

/// A unit offered by one of the category tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // Length
    Meter,
    Kilometer,
    Centimeter,
    Inch,
    Foot,
    // Weight
    Kilogram,
    Gram,
    Pound,
    Ounce,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// All units, grouped by category in table order
    pub const ALL: [Unit; 12] = [
        Unit::Meter,
        Unit::Kilometer,
        Unit::Centimeter,
        Unit::Inch,
        Unit::Foot,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    /// The category whose table holds this unit
    pub fn category(&self) -> Category {
        match self {
            Unit::Meter | Unit::Kilometer | Unit::Centimeter | Unit::Inch | Unit::Foot => Category::Length,
            Unit::Kilogram | Unit::Gram | Unit::Pound | Unit::Ounce => Category::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
        }
    }

    /// Lowercase key, used as the result suffix
    pub fn key(&self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Centimeter => "centimeter",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    /// Selector label: the key with its first letter capitalised
    pub fn label(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Parse from a case-insensitive key
    pub fn from_str_flexible(s: &str) -> ConvResult<Self> {
        let needle = s.trim().to_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.key() == needle)
            .ok_or_else(|| ConvError::unknown_unit(s))
    }

    /// Check membership in a category's table
    pub fn belongs_to(&self, category: Category) -> bool {
        self.category() == category
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
