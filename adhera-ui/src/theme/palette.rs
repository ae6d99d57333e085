use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub transparent: Button,
    pub link: Button,
    pub card: Button,
    pub card_selected: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub info: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub default: ContainerPalette,
    pub destructive: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BG,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_3,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::TEAL,
                        text: color::WHITE,
                        border: color::TEAL.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TEAL_DARK,
                        text: color::WHITE,
                        border: color::TEAL_DARK.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TEAL_DARK,
                        text: color::WHITE,
                        border: color::TEAL_DARK.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::GREY_4,
                        border: color::GREY_2.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::TEAL,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::TEAL_DARK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                card: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    }),
                    disabled: None,
                },
                card_selected: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_2.into(),
                },
                info: ContainerPalette {
                    background: color::LIGHT_BLUE,
                    text: color::DARK_BLUE.into(),
                    border: color::BLUE_BORDER.into(),
                },
            },
            notifications: Notifications {
                default: ContainerPalette {
                    background: color::WHITE,
                    text: color::LIGHT_BLACK.into(),
                    border: color::GREY_2.into(),
                },
                destructive: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: color::RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::TEAL,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TEAL,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::TEAL,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TEAL,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
