//! Host platform detection and the environment the path resolver reads from.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use directories::BaseDirs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps an OS name (`std::env::consts::OS` style, or `darwin`) to a platform.
    pub fn from_os(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::Darwin,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything path resolution needs from the outside world, besides the filesystem.
pub trait Environment {
    fn platform(&self) -> Platform;

    fn var(&self, name: &str) -> Option<OsString>;

    fn home_dir(&self) -> Option<PathBuf>;

    /// Like [`Environment::var`], with an empty value treated as unset.
    fn non_empty_var(&self, name: &str) -> Option<OsString> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

/// The real process environment. Nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_names_map_to_platforms() {
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("macos"), Platform::Darwin);
        assert_eq!(Platform::from_os("darwin"), Platform::Darwin);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("freebsd"), Platform::Other);
        assert_eq!(Platform::from_os(""), Platform::Other);
    }

    #[test]
    fn display_uses_identifiers() {
        assert_eq!(Platform::Darwin.to_string(), "darwin");
        assert_eq!(Platform::Other.to_string(), "other");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_matches_build_target() {
        assert_eq!(Platform::current(), Platform::Linux);
        assert_eq!(SystemEnvironment.platform(), Platform::Linux);
    }
}
