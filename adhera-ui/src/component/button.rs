use super::text::{caption, p1_bold, text};
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;
use iced::Length;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(
            text(t)
                .font(MEDIUM)
                .align_y(iced::Alignment::Center)
                .align_x(iced::Alignment::Center),
        )
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .padding(5),
    )
    .style(theme::button::primary)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(text(t).font(MEDIUM).size(super::text::CAPTION_SIZE))
        .padding(0)
        .style(theme::button::link)
}

/// A large selectable card with a title and a description, used for mutually
/// exclusive choices.
pub fn choice<'a, T: 'a>(
    title: &'static str,
    description: &'static str,
    selected: bool,
) -> Button<'a, T> {
    Button::new(
        Column::new()
            .push(p1_bold(title))
            .push(caption(description).style(theme::text::secondary))
            .spacing(5)
            .width(Length::Fill),
    )
    .padding(20)
    .width(Length::Fill)
    .style(if selected {
        theme::button::card_selected
    } else {
        theme::button::card
    })
}
