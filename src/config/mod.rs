mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, ScanConfig, SearchConfig, DEFAULT_EXTENSION, DEFAULT_SCAN_DIRECTORY};
