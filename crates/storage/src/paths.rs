use std::path::{Path, PathBuf};

use app_core::APP_NAME;
use tracing::debug;

use crate::platform::{Environment, Platform, SystemEnvironment};
use crate::probe::is_writable;

/// Returned whenever no platform convention yields a usable directory.
pub const DEFAULT_DATA_DIR: &str = "/data";

pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const APPDATA: &str = "APPDATA";

/// Directory for application data on this host.
///
/// Never fails and never creates anything; callers create the directory
/// themselves.
pub fn data_dir() -> PathBuf {
    resolve_data_dir(&SystemEnvironment)
}

pub fn resolve_data_dir<E: Environment + ?Sized>(env: &E) -> PathBuf {
    let platform = env.platform();
    match platform.data_dir_candidate(env) {
        Some(dir) => {
            debug!(%platform, dir = %dir.display(), "resolved data directory");
            dir
        }
        None => {
            debug!(%platform, dir = DEFAULT_DATA_DIR, "falling back to default data directory");
            PathBuf::from(DEFAULT_DATA_DIR)
        }
    }
}

impl Platform {
    /// This platform's conventional data directory, or `None` to use the default.
    pub fn data_dir_candidate<E: Environment + ?Sized>(self, env: &E) -> Option<PathBuf> {
        match self {
            Self::Linux => linux_data_dir(env),
            Self::Darwin => darwin_data_dir(env),
            Self::Windows => windows_data_dir(env),
            Self::Other => None,
        }
    }
}

// XDG_DATA_HOME is authoritative when set; it is deliberately not probed.
fn linux_data_dir<E: Environment + ?Sized>(env: &E) -> Option<PathBuf> {
    let Some(base) = env.non_empty_var(XDG_DATA_HOME) else {
        debug!("{XDG_DATA_HOME} unset");
        return None;
    };
    Some(PathBuf::from(base).join(APP_NAME))
}

fn darwin_data_dir<E: Environment + ?Sized>(env: &E) -> Option<PathBuf> {
    let home = home_dir(env)?;
    writable_app_dir(&home.join("Library").join("Application Support"))
}

fn windows_data_dir<E: Environment + ?Sized>(env: &E) -> Option<PathBuf> {
    if let Some(appdata) = env.non_empty_var(APPDATA) {
        if let Some(dir) = writable_app_dir(Path::new(&appdata)) {
            return Some(dir);
        }
    }

    let home = home_dir(env)?;
    writable_app_dir(&home.join("AppData").join("Roaming"))
}

fn home_dir<E: Environment + ?Sized>(env: &E) -> Option<PathBuf> {
    let home = env.home_dir();
    if home.is_none() {
        debug!("home directory unavailable");
    }
    home
}

fn writable_app_dir(base: &Path) -> Option<PathBuf> {
    if is_writable(base) {
        Some(base.join(APP_NAME))
    } else {
        debug!(base = %base.display(), "not writable");
        None
    }
}
