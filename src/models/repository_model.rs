//! models/repository_model.rs
//! Respuestas que expone nuestra API.

use serde::Serialize;

use crate::models::github_model::{GitHubBranch, GitHubRepo};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub name: String,
    pub last_commit_sha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryResponse {
    pub repository_name: String,
    pub owner_login: String,
    pub branches: Vec<BranchResponse>,
}

/// Cuerpo de error común a todos los endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl From<GitHubBranch> for BranchResponse {
    fn from(branch: GitHubBranch) -> Self {
        BranchResponse {
            name: branch.name,
            last_commit_sha: branch.commit.sha,
        }
    }
}

impl RepositoryResponse {
    pub fn from_repo(repo: GitHubRepo, branches: Vec<GitHubBranch>) -> Self {
        RepositoryResponse {
            repository_name: repo.name,
            owner_login: repo.owner.login,
            branches: branches.into_iter().map(BranchResponse::from).collect(),
        }
    }
}
