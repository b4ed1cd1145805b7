use std::path::PathBuf;

use dotenvy::dotenv;

use crate::gate::SECRET_KEY;
use crate::resolver::AssetRoot;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MUSCLE_CATALOG: &str = "muscles.json";

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub asset_root: AssetRoot,
    /// File name of the muscle catalog inside `data_dir`.
    pub muscle_catalog: String,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        // load environment variables from .env file
        dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let asset_root = match var("ASSET_BASE_URL") {
            Some(url) => AssetRoot::Url(url),
            None => AssetRoot::Directory(PathBuf::from(
                var("STATIC_DIR").unwrap_or(DEFAULT_STATIC_DIR.to_string()),
            )),
        };

        Config {
            data_dir: PathBuf::from(var("DATA_DIR").unwrap_or(DEFAULT_DATA_DIR.to_string())),
            asset_root,
            muscle_catalog: var("MUSCLE_CATALOG").unwrap_or(DEFAULT_MUSCLE_CATALOG.to_string()),
            password: lookup(SECRET_KEY),
        }
    }

    pub fn muscle_catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.muscle_catalog)
    }
}
