//! Configuration loading for vizdeck.
//! Reads vizdeck.toml from the current directory; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "vizdeck.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Invalid config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Diagnostic mode: verbose logging and permissive CORS.
    #[serde(default = "bool_true")]
    pub debug: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8050 }
fn bool_true()    -> bool   { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), debug: bool_true() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_tourism")]
    pub tourism: String,
    #[serde(default = "default_hotels")]
    pub hotels: String,
    #[serde(default = "default_hotel_counts")]
    pub hotel_counts: String,
    #[serde(default = "default_gapminder")]
    pub gapminder: String,
    #[serde(default = "default_iris")]
    pub iris: String,
    #[serde(default = "default_cities")]
    pub cities: String,
    #[serde(default = "default_network")]
    pub network: String,
    /// Only the first `network_edge_limit` lines of the edge list are used.
    #[serde(default = "default_edge_limit")]
    pub network_edge_limit: usize,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_molecule")]
    pub molecule: String,
}

fn default_assets_dir()   -> PathBuf { PathBuf::from("assets") }
fn default_tourism()      -> String  { "total_tourist_wocumsum.csv".to_string() }
fn default_hotels()       -> String  { "kyoto_hotel_comp.csv".to_string() }
fn default_hotel_counts() -> String  { "kyoto_hotel_groupby.csv".to_string() }
fn default_gapminder()    -> String  { "gapminder.csv".to_string() }
fn default_iris()         -> String  { "iris.csv".to_string() }
fn default_cities()       -> String  { "citydata.csv".to_string() }
fn default_network()      -> String  { "cyto_sample.txt".to_string() }
fn default_edge_limit()   -> usize   { 750 }
fn default_image()        -> String  { "me.jpg".to_string() }
fn default_molecule()     -> String  { "mol2d.json".to_string() }

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            tourism: default_tourism(),
            hotels: default_hotels(),
            hotel_counts: default_hotel_counts(),
            gapminder: default_gapminder(),
            iris: default_iris(),
            cities: default_cities(),
            network: default_network(),
            network_edge_limit: default_edge_limit(),
            image: default_image(),
            molecule: default_molecule(),
        }
    }
}

impl AssetsConfig {
    /// Resolve an asset file name against the asset directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Derived from
    /// `server.debug` when absent.
    pub filter: Option<String>,
}

impl Config {
    /// Load vizdeck.toml from the working directory, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            tracing::info!("{} not found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn log_filter(&self) -> String {
        match &self.logging.filter {
            Some(filter) => filter.clone(),
            None if self.server.debug => "vizdeck=debug,tower_http=debug,info".to_string(),
            None => "info".to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
