use iced::alignment::{Horizontal, Vertical};
use iced::widget::Space;
use iced::{Alignment, Length};

use super::text::{p1_bold, p2_regular};
use crate::{theme, widget::*};

pub const TOAST_WIDTH: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A single toast card with a close button.
pub fn toast<'a, T: 'a + Clone>(
    title: &'a str,
    description: &'a str,
    variant: Variant,
    on_close: T,
) -> Container<'a, T> {
    Container::new(
        Column::new()
            .push(
                Row::new()
                    .push(p1_bold(title))
                    .push(Space::with_width(Length::Fill))
                    .push(
                        Button::new(p2_regular("✕"))
                            .padding(2)
                            .style(theme::button::transparent)
                            .on_press(on_close),
                    )
                    .align_y(Alignment::Center),
            )
            .push(p2_regular(description))
            .spacing(5),
    )
    .padding(16)
    .max_width(TOAST_WIDTH)
    .style(match variant {
        Variant::Default => theme::notification::default,
        Variant::Destructive => theme::notification::destructive,
    })
}

/// Layers the toasts over the content, stacked in the bottom right corner.
pub fn manager<'a, T: 'a>(
    content: impl Into<Element<'a, T>>,
    toasts: Vec<Element<'a, T>>,
) -> Element<'a, T> {
    // Always a stack so the content keeps its widget state when a toast shows up.
    Stack::new()
        .push(content)
        .push(
            Container::new(Column::with_children(toasts).spacing(10))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(20),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
