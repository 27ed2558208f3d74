use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use qrg::config::AppConfig;
use qrg::routes::init_routes;
use qrg::state::app_state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()?;
    let bind = (config.bind_addr.clone(), config.port);
    info!(
        "Starting qrg on {}:{} (short links under {})",
        bind.0, bind.1, config.host
    );

    let app_state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let cors = app_state
            .config
            .cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
