//! services/repository_service.rs
//! Lógica de negocio: repositorios (no forks) de un usuario con sus branches.

use futures_util::{stream, StreamExt, TryStreamExt};

use crate::errors::GitHubError;
use crate::models::github_model::GitHubRepo;
use crate::models::repository_model::RepositoryResponse;
use crate::services::github_client::GitHubClient;

#[derive(Clone, Debug)]
pub struct RepositoryService {
    github_client: GitHubClient,
    branch_concurrency: usize,
}

impl RepositoryService {
    pub fn new(github_client: GitHubClient, branch_concurrency: usize) -> Self {
        Self {
            github_client,
            branch_concurrency: branch_concurrency.max(1),
        }
    }

    /// Lista los repositorios propios (`fork == false`) del usuario.
    ///
    /// Las branches de cada repositorio se piden en paralelo (como mucho
    /// `branch_concurrency` a la vez). El orden de salida es el mismo que
    /// devuelve GitHub. Si falla una sola llamada, falla todo el request.
    pub async fn get_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositoryResponse>, GitHubError> {
        log::info!("Obteniendo repositorios para username={}", username);

        let repos = self.github_client.get_user_repos(username).await?;
        let own_repos: Vec<GitHubRepo> = repos.into_iter().filter(|r| !r.fork).collect();

        log::info!(
            "username={} tiene {} repositorios propios; pidiendo branches...",
            username,
            own_repos.len()
        );

        stream::iter(own_repos)
            .map(|repo| self.to_repository_response(repo))
            .buffered(self.branch_concurrency)
            .try_collect()
            .await
    }

    async fn to_repository_response(
        &self,
        repo: GitHubRepo,
    ) -> Result<RepositoryResponse, GitHubError> {
        // Las branches se piden con el login del owner, no con el username recibido
        let branches = self
            .github_client
            .get_repo_branches(&repo.owner.login, &repo.name)
            .await?;

        Ok(RepositoryResponse::from_repo(repo, branches))
    }
}
