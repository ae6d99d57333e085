use std::sync::Arc;

use iced::Task;
use tracing::debug;

use adhera_ui::{component::toast, widget::Element};

use crate::{
    login::{self, Login},
    navigation::Route,
    notification::{self, Toasts},
    register::{self, Register},
    services::auth::AuthService,
    VERSION,
};

pub enum Screen {
    Register(Box<Register>),
    Login(Login),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Register(_) => Route::Register,
            Screen::Login(_) => Route::Login,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Register(register::Message),
    Login(login::Message),
    Toast(notification::Message),
}

/// Application shell: owns the current screen and the toasts shown over it.
pub struct GUI {
    screen: Screen,
    toasts: Toasts,
    auth: Arc<dyn AuthService>,
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Adhera v{}", VERSION)
    }

    pub fn new(auth: Arc<dyn AuthService>, route: Route) -> (GUI, Task<Message>) {
        let mut gui = Self {
            screen: Screen::Login(Login::new()),
            toasts: Toasts::default(),
            auth,
        };
        gui.navigate(route);
        (gui, Task::none())
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Replaces the current screen. The previous one is dropped with its
    /// pending tasks handles.
    pub fn navigate(&mut self, route: Route) {
        debug!("navigating from {} to {}", self.route(), route);
        self.screen = match route {
            Route::Register => Screen::Register(Box::new(Register::new(self.auth.clone()))),
            Route::Login => Screen::Login(Login::new()),
        };
    }

    // A redirect is only honoured if it comes from the screen being shown.
    fn redirect(&mut self, from: Route, to: Route) {
        if self.route() == from {
            self.navigate(to);
        } else {
            debug!("ignoring redirect to {} from stale screen {}", to, from);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Register(register::Message::Notify(notification)) => {
                self.toasts.notify(notification).map(Message::Toast)
            }
            Message::Register(register::Message::Redirect(route)) => {
                self.redirect(Route::Register, route);
                Task::none()
            }
            Message::Login(login::Message::Redirect(route)) => {
                self.redirect(Route::Login, route);
                Task::none()
            }
            Message::Register(msg) => match &mut self.screen {
                Screen::Register(register) => register.update(msg).map(Message::Register),
                Screen::Login(_) => Task::none(),
            },
            Message::Login(msg) => match &mut self.screen {
                Screen::Login(login) => login.update(msg).map(Message::Login),
                Screen::Register(_) => Task::none(),
            },
            Message::Toast(msg) => {
                self.toasts.update(msg);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = match &self.screen {
            Screen::Register(register) => register.view().map(Message::Register),
            Screen::Login(login) => login.view().map(Message::Login),
        };
        toast::manager(
            content,
            self.toasts
                .view()
                .into_iter()
                .map(|t| t.map(Message::Toast))
                .collect(),
        )
    }
}
