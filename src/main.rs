use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use directory_service::config::Config;
use directory_service::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let store = web::Data::new(db::create_store(config.data_file.as_deref())?);

    info!("Servidor escuchando en {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(directory_service::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
