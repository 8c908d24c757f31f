use contracts::projections::p910_kot_report::range::DEFAULT_DAY_CUTOFF_HOUR;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Full backend origin, e.g. "http://192.168.1.40:5000". Empty means
    /// "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_cutoff_hour")]
    pub day_cutoff_hour: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            day_cutoff_hour: default_cutoff_hour(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_cutoff_hour() -> u32 {
    DEFAULT_DAY_CUTOFF_HOUR
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 5000

[report]
day_cutoff_hour = 3
"#;

/// Backend origin baked in at build time: `KOT_API_BASE=http://host:5000 trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("KOT_API_BASE");

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Invalid embedded config, using built-in defaults: {}", e);
        Config {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            report: ReportConfig::default(),
        }
    }
});

/// Load configuration
///
/// Source order:
/// 1. `KOT_API_BASE` captured at compile time (base URL only)
/// 2. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG, API_BASE_OVERRIDE)
}

fn parse_config(contents: &str, base_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(base) = base_override.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.trim_end_matches('/').to_string();
    }
    if config.report.day_cutoff_hour > 23 {
        anyhow::bail!(
            "report.day_cutoff_hour must be within 0..=23, got {}",
            config.report.day_cutoff_hour
        );
    }
    Ok(config)
}

pub fn config() -> &'static Config {
    &CONFIG
}
