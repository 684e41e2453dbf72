//! UI module for the Unitwise GUI
//!
//! # Layout (top to bottom)
//! - `header` - Title and light/dark toggle
//! - `input_panel` - Category and unit pickers, value field, Convert button
//! - `results_panel` - Result card, shown once a conversion has succeeded

pub mod header;
pub mod input_panel;
pub mod results_panel;
