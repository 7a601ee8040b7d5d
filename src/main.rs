use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use trivia_server::{app_state::AppState, auth::JwtService, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting trivia server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::generate_trivia)
            .service(handlers::get_quota)
            .service(handlers::submit_answer)
            .service(handlers::toggle_favorite)
            .service(handlers::favorite_status)
            .service(handlers::list_favorites)
            .service(handlers::list_history)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
