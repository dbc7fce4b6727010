use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;
use crate::TextSeekError;

/// In-memory filesystem for loader tests.
#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    cwd: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new(cwd: &str) -> Self {
        Self {
            files: HashMap::new(),
            cwd: PathBuf::from(cwd),
            config_dir: None,
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_config_dir(mut self, dir: &str) -> Self {
        self.config_dir = Some(PathBuf::from(dir));
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

const SAMPLE_CONFIG: &str = r#"
[search]
keyword = "ERROR"
"#;

#[test]
fn load_returns_defaults_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new("/project"));
    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_local_config() {
    let fs = MockFileSystem::new("/project").with_file("/project/.textseek.toml", SAMPLE_CONFIG);
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert_eq!(config.search.keyword, "ERROR");
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new("/project")
        .with_config_dir("/home/user/.config/textseek")
        .with_file(
            "/home/user/.config/textseek/config.toml",
            r#"
            [search]
            keyword = "WARN"
            "#,
        );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert_eq!(config.search.keyword, "WARN");
}

#[test]
fn local_config_wins_over_user_config() {
    let fs = MockFileSystem::new("/project")
        .with_file("/project/.textseek.toml", SAMPLE_CONFIG)
        .with_config_dir("/home/user/.config/textseek")
        .with_file(
            "/home/user/.config/textseek/config.toml",
            r#"
            [search]
            keyword = "WARN"
            "#,
        );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert_eq!(config.search.keyword, "ERROR");
}

#[test]
fn load_from_path_missing_file_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new("/project"));

    let err = loader
        .load_from_path(Path::new("/project/absent.toml"))
        .unwrap_err();
    assert!(matches!(err, TextSeekError::Config(_)));
}

#[test]
fn load_from_path_invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new("/project").with_file("/project/bad.toml", "keyword = [not toml");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader
        .load_from_path(Path::new("/project/bad.toml"))
        .unwrap_err();
    assert!(matches!(err, TextSeekError::TomlParse(_)));
}
