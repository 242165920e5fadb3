//! User-facing configuration keys stored in the settings database.

use std::fmt;
use std::str::FromStr;

use dashboard_lib::DEFAULT_BASE_URL;
use dashboard_lib::view::Pagination;

use crate::error::CliError;
use crate::settings::SettingsProvider;

/// A key accepted by `config get|set|unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    BaseUrl,
    PageSize,
}

impl Setting {
    pub const ALL: [Setting; 2] = [Setting::BaseUrl, Setting::PageSize];

    pub fn key(self) -> &'static str {
        match self {
            Setting::BaseUrl => "api.base_url",
            Setting::PageSize => "table.page_size",
        }
    }

    pub fn default_value(self) -> String {
        match self {
            Setting::BaseUrl => DEFAULT_BASE_URL.to_string(),
            Setting::PageSize => Pagination::DEFAULT_PAGE_SIZE.to_string(),
        }
    }

    /// Checks and normalizes a value before it is stored.
    pub fn validate(self, value: &str) -> Result<String, CliError> {
        let value = value.trim();
        match self {
            Setting::BaseUrl => {
                if value.starts_with("http://") || value.starts_with("https://") {
                    Ok(value.trim_end_matches('/').to_string())
                } else {
                    Err(self.invalid("expected an http:// or https:// URL"))
                }
            }
            Setting::PageSize => match value.parse::<usize>() {
                Ok(size) if size > 0 => Ok(size.to_string()),
                _ => Err(self.invalid("expected a positive whole number")),
            },
        }
    }

    fn invalid(self, message: &str) -> CliError {
        CliError::InvalidSetting {
            key: self.key(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Setting {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setting::ALL
            .into_iter()
            .find(|setting| setting.key() == s.trim())
            .ok_or_else(|| CliError::UnknownSetting(s.to_string()))
    }
}

/// Effective configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub page_size: usize,
}

impl Config {
    /// Reads stored settings, falling back to defaults.
    ///
    /// A stored value that no longer validates is ignored with a warning.
    pub async fn load(settings: &SettingsProvider) -> Result<Self, CliError> {
        Ok(Self {
            base_url: stored(settings, Setting::BaseUrl).await?,
            page_size: stored(settings, Setting::PageSize)
                .await?
                .parse()
                .unwrap_or(Pagination::DEFAULT_PAGE_SIZE),
        })
    }
}

async fn stored(settings: &SettingsProvider, setting: Setting) -> Result<String, CliError> {
    let Some(raw) = settings.get::<String>(setting.key()).await? else {
        return Ok(setting.default_value());
    };
    match setting.validate(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!("Ignoring stored {}: {}", setting, e);
            Ok(setting.default_value())
        }
    }
}
