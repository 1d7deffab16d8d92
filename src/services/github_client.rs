//! services/github_client.rs
//! Cliente HTTP hacia la API REST de GitHub.

use anyhow::{Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::config::app_config::GitHubConfig;
use crate::errors::GitHubError;
use crate::models::github_model::{GitHubBranch, GitHubRepo};

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

#[derive(Clone, Debug)]
pub struct GitHubClient {
    http_client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(&config.api_version)
                .context("Versión de API de GitHub inválida")?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("User-Agent inválido")?,
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("GITHUB_TOKEN contiene caracteres inválidos")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("No se pudo construir el cliente HTTP de GitHub")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /users/{username}/repos
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        let path = format!("/users/{}/repos", urlencoding::encode(username));

        match self.get_json::<Vec<GitHubRepo>>(&path).await {
            Err(GitHubError::Upstream { status: 404, .. }) => {
                log::info!("Usuario de GitHub no encontrado: {}", username);
                Err(GitHubError::UserNotFound(username.to_string()))
            }
            Err(e) => {
                log::warn!("Fallo llamando a GitHub: GET {} -> {}", path, e);
                Err(e)
            }
            ok => ok,
        }
    }

    /// GET /repos/{owner}/{repo}/branches
    pub async fn get_repo_branches(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<GitHubBranch>, GitHubError> {
        let path = format!(
            "/repos/{}/{}/branches",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );

        self.get_json::<Vec<GitHubBranch>>(&path)
            .await
            .inspect_err(|e| log::warn!("Fallo llamando a GitHub: GET {} -> {}", path, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let resp = self.http_client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        if status == StatusCode::NO_CONTENT {
            return Err(GitHubError::InvalidResponse(format!(
                "body vacío en {}",
                path
            )));
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| GitHubError::InvalidResponse(format!("{} ({})", path, e)))
    }
}
