#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, sync::Arc};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::{error, info};

use adhera_ui::{component::text, theme};

use adhera_gui::{
    config::{Config, ConfigError},
    dir::AdheraDirectory,
    gui::GUI,
    logger::{parse_log_level, setup_logger},
    services::auth::{AuthClient, AuthError, AuthService},
    navigation::Route,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(AdheraDirectory),
    Route(Route),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: adhera-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of adhera datadir
    --route <PATH>      Screen shown on start: /register (default) or /login
    -v, --version       Display adhera-gui version
    -h, --help          Print help

Environment:
    ADHERA_AUTH_URL     Base url of the auth service
    ADHERA_AUTH_KEY     Public key of the auth service
    LOG_LEVEL           Overrides the configured log level
        "#
        );
        process::exit(1);
    }

    let mut args = args.iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--datadir" {
            if let Some(a) = args.next() {
                res.push(Arg::DatadirPath(AdheraDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--route" {
            let path = args.next().ok_or("missing arg to --route")?;
            let route =
                Route::from_path(path).ok_or_else(|| format!("unknown route '{}'", path))?;
            res.push(Arg::Route(route));
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Failed to create datadir {}: {}", .0.display(), .1)]
    Datadir(PathBuf, String),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Failed to set up the logger: {0}")]
    Logger(String),
    #[error("Failed to build the auth client: {0}")]
    Auth(#[from] AuthError),
}

fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is not an error.
    dotenv::dotenv().ok();

    let args = parse_args(std::env::args().collect())?;
    let mut datadir = None;
    let mut route = Route::Register;
    for arg in args {
        match arg {
            Arg::DatadirPath(dir) => datadir = Some(dir),
            Arg::Route(r) => route = r,
        }
    }
    let datadir = match datadir {
        Some(dir) => dir,
        None => AdheraDirectory::new_default()?,
    };

    if !datadir.exists() {
        datadir
            .init()
            .map_err(|e| StartupError::Datadir(datadir.path().to_path_buf(), e.to_string()))?;
    }

    let config = Config::load(&datadir)
        .map_err(StartupError::from)?
        .with_env_overrides();
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level().map_err(StartupError::from)?,
    };
    setup_logger(log_level, &datadir).map_err(|e| StartupError::Logger(e.to_string()))?;

    let auth_settings = config.auth_settings().map_err(StartupError::from)?;
    let mut auth = AuthClient::new(auth_settings.api_url.clone(), auth_settings.api_public_key)
        .with_email_redirect_to(auth_settings.email_redirect_to);
    if let Some(timeout) = auth_settings.timeout {
        auth = auth.with_timeout(timeout).map_err(StartupError::from)?;
    }
    info!(
        "Adhera v{} started, auth service at {}",
        VERSION, auth_settings.api_url
    );

    setup_panic_hook();

    let settings = Settings {
        id: Some("Adhera".to_string()),
        antialiasing: true,
        default_text_size: text::P1_SIZE.into(),
        default_font: adhera_ui::font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 1000.0,
            height: 960.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 720.0,
            height: 860.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Adhera".to_string(),
            ..Default::default()
        };
    }

    let auth: Arc<dyn AuthService> = Arc::new(auth);
    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new(auth, route))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
