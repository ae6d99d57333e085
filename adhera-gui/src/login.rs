use iced::{Alignment, Length, Task};

use adhera_ui::{
    component::{button, card, text},
    theme,
    widget::*,
};

use crate::navigation::Route;

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // Handled by the application shell.
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    GoToRegister,
}

/// Landing screen after registration. Signing in itself is served by the
/// auth service confirmation link.
#[derive(Debug, Default)]
pub struct Login {}

impl Login {
    pub fn new() -> Self {
        Self {}
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::GoToRegister) => {
                Task::done(Message::Redirect(Route::Register))
            }
            Message::Redirect(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(
            card(
                Column::new()
                    .push(text::h3("Inicia sesión"))
                    .push(
                        text::p2_regular(
                            "Confirma tu cuenta desde el enlace que te enviamos por email y vuelve para acceder.",
                        )
                        .style(theme::text::secondary),
                    )
                    .push(
                        Row::new()
                            .push(
                                text::caption("¿No tienes cuenta?")
                                    .style(theme::text::secondary),
                            )
                            .push(
                                button::link("Regístrate")
                                    .on_press(Message::View(ViewMessage::GoToRegister)),
                            )
                            .spacing(4)
                            .align_y(Alignment::Center),
                    )
                    .spacing(16),
            )
            .max_width(480),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background)
        .into()
    }
}
