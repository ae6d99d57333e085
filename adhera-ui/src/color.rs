use iced::Color;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFD as f32 / 255.0,
    0xEC as f32 / 255.0,
    0xE7 as f32 / 255.0,
);

// Primary accent, a medical teal.
pub const TEAL: Color = Color::from_rgb(
    0x0D as f32 / 255.0,
    0x94 as f32 / 255.0,
    0x88 as f32 / 255.0,
); // #0D9488

// Darker variant for hover states
pub const TEAL_DARK: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x76 as f32 / 255.0,
    0x6E as f32 / 255.0,
); // #0F766E

// Selected role card background
pub const TRANSPARENT_TEAL: Color = Color::from_rgba(
    0x0D as f32 / 255.0,
    0x94 as f32 / 255.0,
    0x88 as f32 / 255.0,
    0.08,
);

// Information box
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0xF6 as f32 / 255.0,
    0xFF as f32 / 255.0,
); // #EFF6FF

pub const BLUE_BORDER: Color = Color::from_rgb(
    0xBF as f32 / 255.0,
    0xDB as f32 / 255.0,
    0xFE as f32 / 255.0,
); // #BFDBFE

pub const DARK_BLUE: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x3A as f32 / 255.0,
    0x8A as f32 / 255.0,
); // #1E3A8A

pub const LIGHT_BG: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xF8 as f32 / 255.0,
    0xF8 as f32 / 255.0,
); // #F8F8F8
