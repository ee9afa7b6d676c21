use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing, Router,
};
use folio_core_pages_contracts::PageService;

use super::internal_server_error;

pub fn router(service: Arc<impl PageService>) -> Router<()> {
    Router::new()
        .route("/", routing::get(home))
        .route("/assets/style.css", routing::get(style))
        .route("/assets/contact.js", routing::get(script))
        .fallback(not_found)
        .with_state(service)
}

async fn home(service: State<Arc<impl PageService>>) -> Response {
    match service.render_home() {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn not_found(service: State<Arc<impl PageService>>) -> Response {
    match service.render_not_found() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        folio_assets::STYLE_CSS,
    )
        .into_response()
}

async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        folio_assets::CONTACT_JS,
    )
        .into_response()
}
