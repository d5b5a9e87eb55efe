use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use quizwordz::config::AppConfig;
use quizwordz::middleware::cors::cors_middleware;
use quizwordz::middleware::request_trace::RequestTrace;
use quizwordz::middleware::trace_span::TraceSpan;
use quizwordz::routes;
use quizwordz::state::{AppState, SecurityConfig};
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let words = match config.load_word_list() {
        Ok(words) => words,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    if let Some(words) = &words {
        info!(words = words.len(), "Secret words restricted to word list");
    }

    let app_state = AppState::in_memory(SecurityConfig::new(config.api_key.clone()), words);
    let data = web::Data::new(app_state);
    let origins = Arc::new(config.cors_allowed_origins.clone());
    let json_limit = config.max_json_payload_size;

    info!(host = %config.host, port = config.port, "Starting quizwordz backend");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(routes::json_config(json_limit))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
