//! # Screen State
//!
//! The converter screen holds four pieces of state: selected category, selected
//! unit, input text, and last result. They live in one immutable
//! [`ConverterState`]; user actions produce a new state via
//! [`ConverterState::apply`].
//!
//! ```text
//! SelectCategory(c)  -> category = c; unit cleared unless it is in c
//! SelectUnit(u)      -> unit = u (ignored if u is not in the category)
//! EditInput(text)    -> input = text
//! Convert            -> result replaced when the converter produces one
//! ```
//!
//! ## Example
//!
//! ```rust
//! use conv_core::state::{Action, ConverterState};
//! use conv_core::units::Unit;
//!
//! let state = ConverterState::default()
//!     .apply(Action::SelectUnit(Some(Unit::Inch)))
//!     .apply(Action::EditInput("1".to_string()))
//!     .apply(Action::Convert);
//!
//! assert_eq!(state.result_text().as_deref(), Some("39.37 inch"));
//! ```

use serde::{Deserialize, Serialize};

use crate::converter::{convert, ConversionResult};
use crate::table::{unit_options, UnitOption};
use crate::units::{Category, Unit};

/// A discrete user action on the converter screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value")]
pub enum Action {
    SelectCategory(Category),
    SelectUnit(Option<Unit>),
    EditInput(String),
    Convert,
}

/// Snapshot of the converter screen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConverterState {
    pub category: Category,
    pub unit: Option<Unit>,
    pub input: String,
    pub result: Option<ConversionResult>,
}

impl ConverterState {
    /// Produce the state that follows `action`
    pub fn apply(&self, action: Action) -> ConverterState {
        match action {
            Action::SelectCategory(category) => {
                let unit = self.unit.filter(|u| u.belongs_to(category));
                tracing::debug!(%category, kept_unit = unit.is_some(), "category selected");
                ConverterState {
                    category,
                    unit,
                    ..self.clone()
                }
            }
            Action::SelectUnit(Some(unit)) if !unit.belongs_to(self.category) => {
                tracing::warn!(category = %self.category, %unit, "ignoring unit from another category");
                self.clone()
            }
            Action::SelectUnit(unit) => ConverterState {
                unit,
                ..self.clone()
            },
            Action::EditInput(input) => ConverterState {
                input,
                ..self.clone()
            },
            Action::Convert => self.converted(),
        }
    }

    fn converted(&self) -> ConverterState {
        match convert(self.category, self.unit, &self.input) {
            Ok(Some(result)) => ConverterState {
                result: Some(result),
                ..self.clone()
            },
            Ok(None) => self.clone(),
            Err(err) => {
                // SelectUnit keeps the unit inside the category, so this is unexpected
                tracing::error!(error = %err, "conversion failed");
                self.clone()
            }
        }
    }

    /// Dropdown options for the active category
    pub fn unit_options(&self) -> Vec<UnitOption> {
        unit_options(self.category)
    }

    /// The selected unit as a dropdown option
    pub fn selected_option(&self) -> Option<UnitOption> {
        self.unit.map(|unit| UnitOption {
            label: unit.label(),
            value: unit,
        })
    }

    /// The last result as `"<number> <unit>"`
    pub fn result_text(&self) -> Option<String> {
        self.result.as_ref().map(|r| r.formatted().to_string())
    }
}
