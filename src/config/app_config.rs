//! config/app_config.rs
//! Configuración de la app leída desde variables de entorno (y .env).

use anyhow::{ensure, Context, Result};
use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_USER_AGENT: &str = "github-repo-service";

/// Parámetros del cliente hacia la API de GitHub.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub base_url: String,
    pub api_version: String,
    pub user_agent: String,
    /// Token opcional (sube el rate limit de GitHub).
    pub token: Option<String>,
    pub timeout: Duration,
    /// Cuántas peticiones de branches se lanzan a la vez por request.
    pub branch_concurrency: usize,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            api_version: DEFAULT_GITHUB_API_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            branch_concurrency: 8,
        }
    }
}

impl GitHubConfig {
    /// Útil en tests: apunta el cliente a un servidor mock.
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        GitHubConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub github: GitHubConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Lee la configuración del entorno real del proceso.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una función de búsqueda inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Un 0 aquí rompe el cliente o el servidor: se rechaza al arrancar
        let timeout_secs = parse_positive_or(&get, "GITHUB_TIMEOUT_SECS", 30)?;
        let branch_concurrency = parse_positive_or(
            &get,
            "BRANCH_FETCH_CONCURRENCY",
            defaults.github.branch_concurrency as u64,
        )? as usize;

        let github = GitHubConfig {
            base_url: get("GITHUB_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.github.base_url),
            api_version: get("GITHUB_API_VERSION").unwrap_or(defaults.github.api_version),
            user_agent: get("GITHUB_USER_AGENT").unwrap_or(defaults.github.user_agent),
            token: get("GITHUB_TOKEN"),
            timeout: Duration::from_secs(timeout_secs),
            branch_concurrency,
        };

        let workers = match get("SERVER_WORKERS") {
            Some(_) => Some(parse_positive_or(&get, "SERVER_WORKERS", 1)? as usize),
            None => None,
        };

        let server = ServerConfig {
            host: get("SERVER_HOST").unwrap_or(defaults.server.host),
            port: parse_or(&get, "SERVER_PORT", defaults.server.port)?,
            workers,
        };

        Ok(AppConfig { github, server })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} inválido: '{}'", key, raw)),
        None => Ok(default),
    }
}

fn parse_positive_or<G>(get: &G, key: &str, default: u64) -> Result<u64>
where
    G: Fn(&str) -> Option<String>,
{
    let value: u64 = parse_or(get, key, default)?;
    ensure!(value > 0, "{} debe ser mayor que 0", key);
    Ok(value)
}
