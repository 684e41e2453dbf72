//! # Conversion Table
//!
//! Static, read-only mapping `category -> (unit -> definition)`, built once on
//! first use.
//!
//! Length and weight definitions are factors relative to the base unit (meter,
//! kilogram): `value_in_unit = value_in_base * factor`. The factors are the
//! rounded approximations the screen has always shown (1 m = 39.37 in,
//! 1 kg = 2.20462 lb), so results match to the cent.
//!
//! Temperature definitions are formulas applied to a value that is always
//! taken to be Celsius. There is no "from" unit: picking `fahrenheit` applies
//! the Celsius-to-Fahrenheit formula to whatever number was entered.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::table::ConversionTable;
//! use conv_core::units::{Category, Unit};
//!
//! let table = ConversionTable::global();
//! let def = table.definition(Category::Length, Unit::Inch).unwrap();
//! assert_eq!(def.apply(1.0), 39.37);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{ConvError, ConvResult};
use crate::units::{Category, Unit};

static CONVERSION_TABLE: Lazy<ConversionTable> = Lazy::new(ConversionTable::build);

/// How a unit is reached from the category's base
#[derive(Debug, Clone, Copy)]
pub enum UnitDefinition {
    /// Multiplicative factor relative to the base unit
    Factor(f64),
    /// Formula applied to a Celsius input
    Formula(fn(f64) -> f64),
}

impl UnitDefinition {
    /// Apply the definition to an input value
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            UnitDefinition::Factor(factor) => value * factor,
            UnitDefinition::Formula(formula) => formula(value),
        }
    }

    /// The factor, if this is a multiplicative definition
    pub fn factor(&self) -> Option<f64> {
        match self {
            UnitDefinition::Factor(factor) => Some(*factor),
            UnitDefinition::Formula(_) => None,
        }
    }
}

fn celsius(value: f64) -> f64 {
    value
}

fn fahrenheit(value: f64) -> f64 {
    (value * 9.0) / 5.0 + 32.0
}

fn kelvin(value: f64) -> f64 {
    value + 273.15
}

/// One row of a category table
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    pub unit: Unit,
    pub definition: UnitDefinition,
}

impl UnitEntry {
    const fn factor(unit: Unit, factor: f64) -> Self {
        UnitEntry {
            unit,
            definition: UnitDefinition::Factor(factor),
        }
    }

    const fn formula(unit: Unit, formula: fn(f64) -> f64) -> Self {
        UnitEntry {
            unit,
            definition: UnitDefinition::Formula(formula),
        }
    }
}

/// Selector entry for a unit dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    /// Capitalised display label (e.g., "Kilometer")
    pub label: String,
    /// The unit selected by this option
    pub value: Unit,
}

impl std::fmt::Display for UnitOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// The immutable category/unit table
#[derive(Debug)]
pub struct ConversionTable {
    length: Vec<UnitEntry>,
    weight: Vec<UnitEntry>,
    temperature: Vec<UnitEntry>,
}

impl ConversionTable {
    /// The process-wide table
    pub fn global() -> &'static ConversionTable {
        &CONVERSION_TABLE
    }

    fn build() -> Self {
        tracing::debug!("building conversion table");
        ConversionTable {
            length: vec![
                UnitEntry::factor(Unit::Meter, 1.0),
                UnitEntry::factor(Unit::Kilometer, 0.001),
                UnitEntry::factor(Unit::Centimeter, 100.0),
                UnitEntry::factor(Unit::Inch, 39.37),
                UnitEntry::factor(Unit::Foot, 3.281),
            ],
            weight: vec![
                UnitEntry::factor(Unit::Kilogram, 1.0),
                UnitEntry::factor(Unit::Gram, 1000.0),
                UnitEntry::factor(Unit::Pound, 2.20462),
                UnitEntry::factor(Unit::Ounce, 35.274),
            ],
            temperature: vec![
                UnitEntry::formula(Unit::Celsius, celsius),
                UnitEntry::formula(Unit::Fahrenheit, fahrenheit),
                UnitEntry::formula(Unit::Kelvin, kelvin),
            ],
        }
    }

    /// Entries of a category, in selector order
    pub fn units(&self, category: Category) -> &[UnitEntry] {
        match category {
            Category::Length => &self.length,
            Category::Weight => &self.weight,
            Category::Temperature => &self.temperature,
        }
    }

    /// Look up a unit's definition within a category.
    ///
    /// Cross-category lookups are rejected: `inch` is not in the weight table.
    pub fn definition(&self, category: Category, unit: Unit) -> ConvResult<UnitDefinition> {
        self.units(category)
            .iter()
            .find(|entry| entry.unit == unit)
            .map(|entry| entry.definition)
            .ok_or_else(|| ConvError::unit_not_in_category(category.key(), unit.key()))
    }

    /// Dropdown options for a category
    pub fn unit_options(&self, category: Category) -> Vec<UnitOption> {
        self.units(category)
            .iter()
            .map(|entry| UnitOption {
                label: entry.unit.label(),
                value: entry.unit,
            })
            .collect()
    }
}

/// Dropdown options for a category from the global table
pub fn unit_options(category: Category) -> Vec<UnitOption> {
    ConversionTable::global().unit_options(category)
}
