//! Server-rendered slide deck viewer.
//!
//! Decks and slide templates are JSON documents under a content directory.
//! Each request rebuilds the [`viewer::Viewer`] from the position saved in the
//! session, applies one navigation step and renders the result.

pub mod config;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod library;
pub mod markup;
pub mod models;
pub mod session;
pub mod templates_structs;
pub mod viewer;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App, Error, HttpResponse,
    body::MessageBody,
    cookie::Key,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web,
};

use crate::config::AppConfig;
use crate::library::Library;

/// Register the viewer page, navigation forms and the JSON API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::viewer_handlers::index))
        .route("/nav", web::post().to(handlers::viewer_handlers::nav))
        .route("/jump", web::post().to(handlers::viewer_handlers::jump))
        .service(web::scope("/api/v1").configure(handlers::api_v1::configure));
}

/// Build the full application: session cookies, request logging, static
/// assets and every route.
pub fn build_app(
    config: AppConfig,
    library: web::Data<Library>,
    secret_key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), secret_key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

    App::new()
        .wrap(session_mw)
        .wrap(middleware::Logger::default())
        .app_data(library)
        .service(actix_files::Files::new("/static", config.static_dir))
        .configure(configure)
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            let html = include_str!("../templates/errors/404.html");
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }))
}
