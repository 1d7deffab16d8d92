//! models/github_model.rs
//! Payloads tal como los devuelve la API de GitHub.
//! Solo se mapean los campos que usamos; el resto se ignora.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
}

/// Elemento de `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    pub owner: GitHubOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
}

/// Elemento de `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubBranch {
    pub name: String,
    pub commit: GitHubCommit,
}
