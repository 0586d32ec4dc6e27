use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}

impl std::fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayServer::Wayland => write!(f, "Wayland"),
            DisplayServer::X11 => write!(f, "X11"),
            DisplayServer::Unknown => write!(f, "Unknown"),
        }
    }
}

impl DisplayServer {
    pub fn detect() -> Self {
        Self::from_env(
            env::var("XDG_SESSION_TYPE").ok().as_deref(),
            env::var_os("WAYLAND_DISPLAY").is_some(),
            env::var_os("DISPLAY").is_some(),
        )
    }

    fn from_env(session_type: Option<&str>, wayland_display: bool, x_display: bool) -> Self {
        if let Some(session_type) = session_type {
            match session_type.to_lowercase().as_str() {
                "wayland" => return DisplayServer::Wayland,
                "x11" => return DisplayServer::X11,
                _ => {}
            }
        }

        if wayland_display {
            return DisplayServer::Wayland;
        }

        if x_display {
            return DisplayServer::X11;
        }

        DisplayServer::Unknown
    }
}
