use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

pub fn card(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.card, status)
}

pub fn card_selected(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.card_selected, status)
}

fn border(p: &ButtonPalette) -> Border {
    if let Some(color) = p.border {
        Border {
            radius: 8.0.into(),
            width: 1.0,
            color,
        }
    } else {
        Border {
            radius: 8.0.into(),
            ..Default::default()
        }
    }
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: border(p),
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => match &p.pressed {
            Some(pressed) => style(pressed),
            None => button(p, Status::Active),
        },
        Status::Disabled => match &p.disabled {
            Some(disabled) => style(disabled),
            None => {
                let active = style(&p.active);
                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        },
    }
}
