/// Screens of the application, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/register",
            Route::Login => "/login",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/register" => Some(Route::Register),
            "/login" => Some(Route::Login),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
