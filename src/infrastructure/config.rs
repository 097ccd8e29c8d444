use std::path::{Path, PathBuf};

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    domain::category::ListCategory,
    infrastructure::tmdb::TMDB_BASE,
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TmdbConfig {
    /// Only read where the request query is built
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_base_url() -> String {
    TMDB_BASE.to_string()
}

fn default_image_base_url() -> String {
    IMAGE_BASE.to_string()
}

impl TmdbConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub default_category: ListCategory,
}

impl Config {
    /// Load from the user's config directory, falling back to `TMDB_API_KEY`
    /// when no key is configured
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(
            &utils::get_config_dir(),
            &utils::get_data_dir(),
            std::env::var(API_KEY_ENV).ok(),
        )
    }

    /// Built-in defaults only, without reading any file
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load(
        config_dir: &Path,
        data_dir: &Path,
        env_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?
            .set_default("tmdb.base_url", default_config.tmdb.base_url.clone())?
            .set_default(
                "tmdb.image_base_url",
                default_config.tmdb.image_base_url.clone(),
            )?
            .set_default(
                "default_category",
                String::from(default_config.default_category.clone()),
            )?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        cfg.keybindings.merge_defaults(&default_config.keybindings);
        cfg.styles.merge_defaults(&default_config.styles);

        if !cfg.tmdb.has_api_key() {
            cfg.tmdb.api_key = env_api_key
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from);
        }
        if !cfg.tmdb.has_api_key() {
            return Err(ConfigError::NotFound(String::from("tmdb.api_key")));
        }

        Ok(cfg)
    }
}
