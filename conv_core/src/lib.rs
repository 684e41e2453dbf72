//! # conv_core - Unit Conversion Engine
//!
//! `conv_core` is the computational heart of Unitwise: a static table of
//! length, weight, and temperature units plus a converter that turns a
//! `(category, unit, input text)` triple into a display string such as
//! `"39.37 inch"`.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: conversion is a pure function of its inputs
//! - **Enum-keyed**: categories and units are enums, so lookups are checked at compile time
//! - **JSON-First**: requests, results, actions, and errors implement Serialize/Deserialize
//! - **Front-end agnostic**: the screen state container is shared by the GUI and CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use conv_core::{convert, Category, Unit};
//!
//! let result = convert(Category::Length, Some(Unit::Inch), "1").unwrap().unwrap();
//! assert_eq!(result.to_string(), "39.37 inch");
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Categories and units
//! - [`table`] - The immutable conversion table
//! - [`converter`] - Parsing, conversion, and formatting
//! - [`state`] - Screen state and its transitions
//! - [`errors`] - Structured error types

pub mod converter;
pub mod errors;
pub mod state;
pub mod table;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use converter::{convert, convert_request, ConversionRequest, ConversionResult};
pub use errors::{ConvError, ConvResult};
pub use state::{Action, ConverterState};
pub use table::{unit_options, ConversionTable, UnitDefinition, UnitOption};
pub use units::{Category, Unit};
