// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use tera::Tera;

use crate::{
    services::{ApiService, HttpApiService},
    views,
};

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub server_addr: String,
    pub api_timeout: Duration,
}

impl Config {
    // Lee el .env (si existe) y las variables de entorno
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        let api_timeout_secs = match env::var("API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("API_TIMEOUT_SECS inválido: '{raw}'"))?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            server_addr,
            api_timeout: Duration::from_secs(api_timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn ApiService>,
    pub tera: Arc<Tera>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let api = HttpApiService::new(&config.api_base_url, config.api_timeout)
            .context("No se pudo crear el cliente HTTP")?;
        let tera = views::load_templates().context("No se pudieron cargar las plantillas")?;

        tracing::info!("✅ Backend configurado en {}", config.api_base_url);

        Ok(Self {
            config,
            api: Arc::new(api),
            tera: Arc::new(tera),
        })
    }

    /// Estado con una API arbitraria (para pruebas de los handlers).
    #[cfg(test)]
    pub fn with_api(config: Config, api: Arc<dyn ApiService>) -> anyhow::Result<Self> {
        let tera = views::load_templates()?;
        Ok(Self { config, api, tera: Arc::new(tera) })
    }
}
