#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use quizwordz::domain::WordList;
use quizwordz::middleware::{RequestTrace, TraceSpan};
use quizwordz::routes;
use quizwordz::state::{AppState, SecurityConfig};
use serde_json::Value;

pub const API_KEY: &str = "integration-test-key";

#[ctor::ctor]
fn init_logging() {
    quizwordz_test_support::logging::init();
}

pub fn app_state(words: Option<WordList>) -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(SecurityConfig::new(API_KEY), words))
}

/// The production route table and middleware, without CORS.
pub async fn test_app(
    state: web::Data<AppState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(state)
            .app_data(routes::json_config(64 * 1024))
            .configure(routes::configure),
    )
    .await
}

pub fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .insert_header(("x-api-key", API_KEY))
}

pub fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("x-api-key", API_KEY))
        .set_json(body)
}
