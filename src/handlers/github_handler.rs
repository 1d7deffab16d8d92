//! handlers/github_handler.rs
use actix_web::{web, HttpResponse};

use crate::errors::GitHubError;
use crate::models::repository_model::ErrorResponse;
use crate::services::repository_service::RepositoryService;

/// GET /api/github/{username}/repositories
pub async fn get_repositories_endpoint(
    repository_service: web::Data<RepositoryService>,
    path: web::Path<String>,
) -> Result<HttpResponse, GitHubError> {
    let username = path.into_inner();

    let repositories = repository_service
        .get_user_repositories(&username)
        .await
        .inspect_err(|e| {
            // el 404 de usuario ya queda registrado en el cliente
            if !matches!(e, GitHubError::UserNotFound(_)) {
                log::error!("Error listando repositorios de '{}': {}", username, e);
            }
        })?;

    Ok(HttpResponse::Ok().json(repositories))
}

/// Cualquier ruta no registrada
pub async fn not_found_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        status: 404,
        message: "Not found".to_string(),
    })
}
