//! HTTP endpoints.
//!
//! - `/`        : index page linking to the telemetry path
//! - `/healthz` : liveness
//! - telemetry path (default `/metrics`) : one collection cycle, Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use unbound_exporter_core::exposition;

use crate::app_state::AppState;
use crate::obs::metrics::{RESULT_FAILURE, RESULT_SUCCESS};

pub const CONTENT_TYPE_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n\
         <head><title>Unbound Exporter</title></head>\n\
         <body>\n\
         <h1>Unbound exporter</h1>\n\
         <p><a href='{}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n",
        state.cfg().web.telemetry_path
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let collection = match state.collector().collect().await {
        Ok(c) => c,
        Err(e) => {
            state.metrics().record_scrape(RESULT_FAILURE);
            tracing::error!(code = e.code().as_str(), error = %e, "scrape failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("{}: {}\n", e.code().as_str(), e),
            )
                .into_response();
        }
    };

    state.metrics().record_scrape(RESULT_SUCCESS);
    state.metrics().record_parse_failures(collection.malformed_lines);

    let mut body = String::new();
    exposition::render_into(&collection.metrics, &mut body);
    state.metrics().render(&mut body);

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)], body).into_response()
}
