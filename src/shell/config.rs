// Environment configuration for the shell.
//
// Responsibilities
// - Read the listen address, catalog base URL, and data directory from the
//   environment, with local-development defaults.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub catalog_base_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("CART_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string()),
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            data_dir: env::var("CART_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        }
    }
}
