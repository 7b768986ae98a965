
use crate::{Error, Result};
use axum::http::HeaderValue;
use std::{env, net::SocketAddr, str::FromStr, sync::OnceLock, time::Duration};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
pub struct Config {
    pub LISTEN_ADDR: SocketAddr,
    pub CORS_ORIGIN: HeaderValue,
    pub DB_MAX_CONNECTIONS: u32,
    pub DB_ACQUIRE_TIMEOUT: Duration,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            LISTEN_ADDR: get_env_parse("SERVICE_LISTEN_ADDR", "127.0.0.1:8000")?,
            CORS_ORIGIN: get_env_parse("SERVICE_CORS_ORIGIN", "http://localhost:4200")?,
            DB_MAX_CONNECTIONS: get_env_parse("SERVICE_DB_MAX_CONNECTIONS", "5")?,
            DB_ACQUIRE_TIMEOUT: Duration::from_secs(
                get_env_parse("SERVICE_DB_ACQUIRE_TIMEOUT_SEC", "5")?
            ),
        })
    }
}

fn get_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigMissingEnv(name))
}

fn get_env_or(name: &'static str, default: &str) -> Result<String> {
    match get_env(name) {
        Err(Error::ConfigMissingEnv(_)) => Ok(default.to_string()),
        other => other,
    }
}

fn get_env_parse<T: FromStr>(name: &'static str, default: &str) -> Result<T> {
    get_env_or(name, default)?
        .parse::<T>()
        .map_err(|_| Error::ConfigWrongFormat(name))
}
