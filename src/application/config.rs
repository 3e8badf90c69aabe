use std::path::PathBuf;
use super::format::DEFAULT_FORMAT;

const PROFILE_SUBDIR: &str = "Library/MobileDevice/Provisioning Profiles";

pub struct Config {
    pub format: String,
    pub warn_days: u32,
    pub profile_dir: Option<PathBuf>,
    pub identity_dir: Option<PathBuf>,
    pub quiet: bool,
    pub mark_expired: bool,
    pub color: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            format: std::env::var("PROFCHECK_FORMAT").unwrap_or_else(|_| DEFAULT_FORMAT.to_string()),
            warn_days: parse_u32_env("PROFCHECK_WARN_DAYS", 0),
            profile_dir: parse_path_env("PROFCHECK_PROFILE_DIR").or_else(default_profile_dir),
            identity_dir: parse_path_env("PROFCHECK_IDENTITY_DIR"),
            quiet: false,
            mark_expired: false,
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn with_format(mut self, format: Option<String>) -> Self {
        if let Some(f) = format { self.format = f; }
        self
    }

    pub fn with_warn_days(mut self, days: Option<u32>) -> Self {
        if let Some(d) = days { self.warn_days = d; }
        self
    }

    pub fn with_identity_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() { self.identity_dir = dir; }
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_mark_expired(mut self, mark: bool) -> Self {
        self.mark_expired = mark;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = self.color && color;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_profile_dir() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(PROFILE_SUBDIR))
}

fn parse_u32_env(key: &str, default: u32) -> u32 {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_path_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}
