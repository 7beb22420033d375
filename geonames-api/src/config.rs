use std::{path::PathBuf, str::FromStr, time::Duration};

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use strum::{Display, EnumString};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub search: SearchSettings,
    pub database: DatabaseSettings,
    pub geoip: GeoIpSettings,
    pub limits: LimitSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    pub url: String,
    pub cities_index: String,
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub timeout_secs: Option<u64>,
}

impl SearchSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GeoIpSettings {
    pub database_path: PathBuf,
}

/// Bounds for the `limit` query parameter of `/city`.
#[serde_as]
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct LimitSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub default_limit: usize,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_limit: usize,
}

impl LimitSettings {
    /// Missing or unparsable values fall back to the default, everything else
    /// is clamped to `1..=max_limit`.
    pub fn normalize(&self, raw: Option<&str>) -> usize {
        let max_limit = self.max_limit.max(1);
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(self.default_limit)
            .clamp(1, max_limit)
    }
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("GEONAMES")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
