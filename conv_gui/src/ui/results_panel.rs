//! Results Panel
//!
//! Shows `Result: <value> <unit>` once a conversion has produced something.
//! Before that the panel is empty.

use iced::widget::{container, text, Column};
use iced::{Element, Length};

use conv_core::ConverterState;

use crate::Message;

/// Render the result card, or nothing if there is no result yet
pub fn view_results_panel(state: &ConverterState) -> Element<'_, Message> {
    match state.result_text() {
        Some(result) => container(text(format!("Result: {}", result)).size(18))
            .width(Length::Fill)
            .padding(15)
            .style(container::bordered_box)
            .into(),
        None => Column::new().into(),
    }
}
