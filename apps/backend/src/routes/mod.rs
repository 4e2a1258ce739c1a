use actix_web::web;

pub mod annotate;
pub mod health;
pub mod kinds;
pub mod posts;

/// Registers every route. Shared by `main.rs` and the integration tests so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(kinds::configure_routes)
        .configure(posts::configure_routes)
        .configure(annotate::configure_routes);
}
