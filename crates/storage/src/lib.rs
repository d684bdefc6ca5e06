//! Where bark-server keeps its data on disk.

pub mod paths;
pub mod platform;
pub mod probe;

pub use paths::{data_dir, resolve_data_dir, DEFAULT_DATA_DIR};
pub use platform::{Environment, Platform, SystemEnvironment};
pub use probe::is_writable;
