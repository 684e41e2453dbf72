//! Input Panel
//!
//! Category picker, unit picker (options follow the category), numeric
//! value field, and the Convert button. Pressing Enter in the value field
//! converts as well.

use iced::widget::{button, column, pick_list, text, text_input};
use iced::{Element, Length};

use conv_core::{Category, ConverterState};

use crate::Message;

/// Render the conversion form
pub fn view_input_panel(state: &ConverterState) -> Element<'_, Message> {
    let category_picker = pick_list(Category::ALL, Some(state.category), Message::CategorySelected)
        .placeholder("Select Category")
        .width(Length::Fill)
        .padding(12);

    let unit_picker = pick_list(state.unit_options(), state.selected_option(), Message::UnitSelected)
        .placeholder("Select Unit")
        .width(Length::Fill)
        .padding(12);

    let value_input = text_input("Enter value", &state.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Convert)
        .padding(10);

    let convert_button = button(text("Convert").size(16))
        .on_press(Message::Convert)
        .width(Length::Fill)
        .padding(10)
        .style(button::primary);

    column![category_picker, unit_picker, value_input, convert_button]
        .spacing(10)
        .into()
}
