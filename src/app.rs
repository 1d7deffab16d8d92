//! app.rs
use crate::handlers::github_handler;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(web::scope("/github").route(
            "/{username}/repositories",
            web::get().to(github_handler::get_repositories_endpoint),
        )),
    )
    .default_service(web::route().to(github_handler::not_found_endpoint));
}
