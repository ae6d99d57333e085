pub mod button;
pub mod form;
pub mod text;
pub mod toast;

use iced::Length;

use crate::{theme, widget::*};

/// A white bordered card wrapping the given content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(24)
        .width(Length::Fill)
        .style(theme::card::simple)
}

pub fn info_box<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(12)
        .width(Length::Fill)
        .style(theme::card::info)
}
