use iced::widget::container::{self, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(container::transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Screen backdrop, cards are laid on top of it.
pub fn background(theme: &Theme) -> Style {
    Style::default().background(Background::Color(theme.colors.general.background))
}
