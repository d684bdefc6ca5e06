pub mod ids;

/// Name segment appended to every platform data directory.
pub const APP_NAME: &str = "bark-server";
