mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, USER_CONFIG_NAME};
pub use model::{Config, ContentConfig, ScannerConfig, VENDOR_DIR};
pub use validation::validate_config;
