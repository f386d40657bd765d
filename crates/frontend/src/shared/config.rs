//! Console configuration.
//!
//! An embedded TOML default is overlaid with values baked in at build time
//! (`ADMIN_API_ORIGIN`, `ADMIN_API_KEY`, `ADMIN_STATIC_ORIGIN`,
//! `ADMIN_REALTIME_URL`). An empty origin means "the page host on port 3000".

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
origin = ""
api_key = ""
prefix = "/api"

[static_files]
origin = ""
prefix = "/static"

[realtime]
url = ""
enabled = true

[lists]
default_page_size = 10
page_size_options = [10, 25, 50, 100]
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub static_files: StaticFilesConfig,
    pub realtime: RealtimeConfig,
    pub lists: ListsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub origin: String,
    pub api_key: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaticFilesConfig {
    pub origin: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RealtimeConfig {
    pub url: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListsConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid console configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page size options must not be empty")]
    NoPageSizes,
}

/// Build-time overrides, `None` when the variable was not set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub api_origin: Option<&'a str>,
    pub api_key: Option<&'a str>,
    pub static_origin: Option<&'a str>,
    pub realtime_url: Option<&'a str>,
}

impl Overrides<'static> {
    pub fn from_build_env() -> Self {
        Self {
            api_origin: option_env!("ADMIN_API_ORIGIN"),
            api_key: option_env!("ADMIN_API_KEY"),
            static_origin: option_env!("ADMIN_STATIC_ORIGIN"),
            realtime_url: option_env!("ADMIN_REALTIME_URL"),
        }
    }
}

impl AdminConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: AdminConfig = toml::from_str(text)?;
        if config.lists.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: Overrides<'_>) -> Self {
        let apply = |target: &mut String, value: Option<&str>, is_url: bool| {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                *target = if is_url {
                    value.trim_end_matches('/').to_string()
                } else {
                    value.to_string()
                };
            }
        };
        apply(&mut self.api.origin, overrides.api_origin, true);
        apply(&mut self.api.api_key, overrides.api_key, false);
        apply(&mut self.static_files.origin, overrides.static_origin, true);
        apply(&mut self.realtime.url, overrides.realtime_url, true);
        self
    }

    /// Embedded defaults plus build-time overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::parse(DEFAULT_CONFIG)?.with_overrides(Overrides::from_build_env()))
    }

    /// Page size to start with; falls back to the first option when the
    /// default is not one of them.
    pub fn initial_page_size(&self) -> u32 {
        let lists = &self.lists;
        if lists.page_size_options.contains(&lists.default_page_size) {
            lists.default_page_size
        } else {
            lists.page_size_options.first().copied().unwrap_or(10)
        }
    }
}

static CONFIG: Lazy<AdminConfig> = Lazy::new(|| match AdminConfig::load() {
    Ok(config) => config,
    Err(e) => {
        log::error!("{e}; falling back to built-in defaults");
        AdminConfig {
            api: ApiConfig {
                origin: String::new(),
                api_key: String::new(),
                prefix: "/api".into(),
            },
            static_files: StaticFilesConfig {
                origin: String::new(),
                prefix: "/static".into(),
            },
            realtime: RealtimeConfig {
                url: String::new(),
                enabled: false,
            },
            lists: ListsConfig {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50, 100],
            },
        }
    }
});

pub fn config() -> &'static AdminConfig {
    &CONFIG
}
