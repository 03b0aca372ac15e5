use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub crawler: CrawlerConfig,
    pub target: TargetConfig,
    pub file: FileConfig,
}

#[derive(Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct CrawlerConfig {
    pub webdriver_url: String,
    pub max_pages: u32,
    pub min_delay: u64,
    pub max_delay: u64,
}

#[derive(Deserialize)]
pub struct TargetConfig {
    pub category_url: String,
}

#[derive(Deserialize)]
pub struct FileConfig {
    pub output_csv: String,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("Settings.toml", config::FileFormat::Toml))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
