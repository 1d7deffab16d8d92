//! errors.rs
//! Errores del dominio y su traducción a respuestas HTTP.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::repository_model::ErrorResponse;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("GitHub API returned status {status} for {path}")]
    Upstream { status: u16, path: String },

    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid GitHub response: {0}")]
    InvalidResponse(String),
}

impl ResponseError for GitHubError {
    fn status_code(&self) -> StatusCode {
        match self {
            GitHubError::UserNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        })
    }
}
