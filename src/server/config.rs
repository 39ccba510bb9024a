use std::str::FromStr;

use rust_decimal::Decimal;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::pricing::DEFAULT_TAKEAWAY_SURCHARGE_CENTS,
};

const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_API_PREFIX: &str = "/api/orders";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub http_port: u16,

    /// Mount point of the order routes, normalized to `/segment` form or empty for root.
    pub api_prefix: String,

    pub takeaway_surcharge: Decimal,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            http_port: parse_or(&lookup, "HTTP_PORT", DEFAULT_HTTP_PORT)?,
            api_prefix: normalize_prefix(
                &lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
            ),
            takeaway_surcharge: parse_or(
                &lookup,
                "TAKEAWAY_SURCHARGE",
                Decimal::new(DEFAULT_TAKEAWAY_SURCHARGE_CENTS, 2),
            )?,
            db_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

/// `api/orders/` becomes `/api/orders`; `/` and the empty string mount at the root.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
