use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub listing: ListingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда (trunk dist); пусто - статика не раздаётся
    #[serde(default)]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub per_page: usize,
    pub max_per_page: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: 15,
            max_per_page: 100,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[listing]
per_page = 15
max_per_page = 100

[seed]
demo_data = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.listing.per_page == 0 || config.listing.per_page > config.listing.max_per_page {
        anyhow::bail!(
            "listing.per_page must be in 1..={}, got {}",
            config.listing.max_per_page,
            config.listing.per_page
        );
    }
    Ok(config)
}

/// Запомнить загруженную конфигурацию для обработчиков
pub fn install(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Config already installed"))?;
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("Config has not been installed"))
}

/// Лимиты пагинации; до загрузки конфигурации - значения по умолчанию
pub fn listing_config() -> ListingConfig {
    CONFIG.get().map(|c| c.listing).unwrap_or_default()
}

/// Каталог статики; относительный путь считается от каталога исполняемого файла
pub fn get_static_dir(config: &Config) -> Option<PathBuf> {
    let dir = config.server.static_dir.trim();
    if dir.is_empty() {
        return None;
    }
    let path = Path::new(dir);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }
    Some(PathBuf::from(dir))
}
