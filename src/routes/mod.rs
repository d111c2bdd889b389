//! JSON endpoints under `/api/v1`.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::forms::sales_query::SalesQueryForm;
use crate::services::ServiceError;

pub mod api;
pub mod settings;

/// Registers every endpoint under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(api::status)
            .service(api::list_sales)
            .service(api::metrics)
            .service(api::dashboard)
            .service(api::analytics)
            .service(api::reps)
            .service(api::rep_detail)
            .service(api::refresh)
            .service(settings::change_password)
            .service(settings::merge_reps),
    );
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Maps a service failure to its status code and a `{"error": ...}` body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::Form(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Remote(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = err.to_string();
    HttpResponse::build(status).json(ErrorBody { error: &message })
}

/// Decodes the shared view query, answering 400 when it is malformed.
fn query_form(req: &HttpRequest) -> Result<SalesQueryForm, HttpResponse> {
    SalesQueryForm::from_query(req.query_string()).map_err(|err| {
        log::warn!("Rejected query {:?}: {err}", req.query_string());
        error_response(&ServiceError::from(err))
    })
}

/// Wall-clock time used to anchor relative ranges.
fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
