use chrono::FixedOffset;

use crate::error::{config::ConfigError, AppError};

/// Default display timezone offset in hours (UTC+7).
const DEFAULT_TZ_OFFSET_HOURS: i32 = 7;

pub struct Config {
    pub database_url: String,

    pub bot_token: String,

    /// Wall-clock offset used when rendering times and checking
    /// operating hours.
    pub tz_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let tz_offset_hours = match std::env::var("TZ_OFFSET_HOURS") {
            Ok(raw) => raw
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidEnvVar("TZ_OFFSET_HOURS".to_string(), raw))?,
            Err(_) => DEFAULT_TZ_OFFSET_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bot_token: std::env::var("BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?,
            tz_offset_hours,
        })
    }

    /// The configured offset as a chrono `FixedOffset`.
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.tz_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(DEFAULT_TZ_OFFSET_HOURS * 3600).unwrap())
    }
}
