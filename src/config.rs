use std::path::{Path, PathBuf};

const DEFAULT_DB_PATH: &str = "assets.redb";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self { db_path: db_path.as_ref().to_path_buf() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { db_path: PathBuf::from(DEFAULT_DB_PATH) }
    }
}
