pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod login;
pub mod navigation;
pub mod notification;
pub mod register;
pub mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
