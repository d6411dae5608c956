use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod recados;

use config::Config;
use recados::RecadoStore;

pub struct AppState {
    pub store: Arc<RecadoStore>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Recado backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Data file: {}", config.data_file.display());
    log::info!("Recovery mode: {:?}", config.recovery_mode);

    let store = Arc::new(RecadoStore::new(
        config.data_file.clone(),
        config.recovery_mode,
    ));

    // Serve the admin frontend only if the public dir exists
    let public_dir = if config.public_dir.is_dir() {
        Some(config.public_dir.clone())
    } else {
        log::warn!(
            "Public dir not found at {} - static file serving disabled",
            config.public_dir.display()
        );
        None
    };

    log::info!("Starting recado backend on port {}", port);

    HttpServer::new(move || {
        // Open CORS: the frontend may be hosted on a separate origin
        // (e.g. GitHub Pages) and calls the API cross-site.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::auth::config)
            .configure(controllers::recados::config);

        if let Some(ref dir) = public_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
