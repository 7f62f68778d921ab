use actix_web::{HttpServer, cookie::Key, web};

use deckview::config::AppConfig;
use deckview::library::Library;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    if !config.content_dir.is_dir() {
        log::warn!(
            "Content directory {} does not exist; every deck will fail to load",
            config.content_dir.display()
        );
    }

    // Session encryption key, loaded from SESSION_KEY for view positions that survive restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (positions lost on restart)");
            Key::generate()
        }
    };

    let library = web::Data::new(Library::from_config(&config));

    log::info!(
        "Serving decks from {} at http://{}",
        config.content_dir.display(),
        config.bind_addr
    );

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || deckview::build_app(config.clone(), library.clone(), secret_key.clone()))
        .bind(bind_addr)?
        .run()
        .await
}
