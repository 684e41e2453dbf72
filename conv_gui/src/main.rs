//! # Unitwise GUI Application
//!
//! Single-screen unit converter built with the Iced framework.
//!
//! The screen state lives in [`conv_core::ConverterState`]; this crate only
//! maps widget events onto [`conv_core::Action`]s and renders the result.

use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Theme};
use tracing_subscriber::EnvFilter;

use conv_core::{Action, Category, ConverterState, UnitOption};

mod ui;

/// Widget events
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(Category),
    UnitSelected(UnitOption),
    InputChanged(String),
    Convert,
    ToggleDarkMode,
}

/// Application state: the converter screen plus presentation-only settings
#[derive(Debug, Default)]
pub struct App {
    pub converter: ConverterState,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        App::default()
    }

    fn update(&mut self, message: Message) {
        let action = match message {
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                return;
            }
            Message::CategorySelected(category) => Action::SelectCategory(category),
            Message::UnitSelected(option) => Action::SelectUnit(Some(option.value)),
            Message::InputChanged(text) => Action::EditInput(text),
            Message::Convert => Action::Convert,
        };
        self.converter = self.converter.apply(action);
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::header::view_header(self.dark_mode),
            ui::input_panel::view_input_panel(&self.converter),
            ui::results_panel::view_results_panel(&self.converter),
        ]
        .spacing(16)
        .padding(20);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    iced::application(App::new, App::update, App::view)
        .title("Unit Converter")
        .theme(App::theme)
        .window_size((420.0, 560.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use conv_core::Unit;

    fn option(unit: Unit) -> UnitOption {
        UnitOption {
            label: unit.label(),
            value: unit,
        }
    }

    #[test]
    fn test_messages_drive_converter_state() {
        let mut app = App::new();
        app.update(Message::CategorySelected(Category::Weight));
        app.update(Message::UnitSelected(option(Unit::Pound)));
        app.update(Message::InputChanged("10".to_string()));
        app.update(Message::Convert);

        assert_eq!(app.converter.result_text().as_deref(), Some("22.05 pound"));
    }

    #[test]
    fn test_convert_without_input_shows_nothing() {
        let mut app = App::new();
        app.update(Message::UnitSelected(option(Unit::Meter)));
        app.update(Message::Convert);

        assert_eq!(app.converter.result, None);
    }

    #[test]
    fn test_toggle_dark_mode_leaves_converter_untouched() {
        let mut app = App::new();
        app.update(Message::ToggleDarkMode);

        assert!(app.dark_mode);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.converter, ConverterState::default());
    }
}
