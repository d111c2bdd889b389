use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::feed::SalesFeed;
use crate::routes::{error_response, local_now, query_form};
use crate::services::reps as reps_service;
use crate::services::sales as sales_service;
use crate::services::{ServiceError, ServiceResult};

fn respond<T: Serialize>(result: ServiceResult<T>, action: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err @ ServiceError::Internal(_)) => {
            log::error!("Failed to {action}: {err}");
            error_response(&err)
        }
        Err(err) => error_response(&err),
    }
}

#[get("/status")]
pub async fn status(feed: web::Data<SalesFeed>) -> impl Responder {
    HttpResponse::Ok().json(sales_service::load_status(feed.get_ref()))
}

#[get("/sales")]
pub async fn list_sales(req: HttpRequest, feed: web::Data<SalesFeed>) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        sales_service::list_sales(feed.get_ref(), form, local_now()),
        "list sales",
    )
}

#[get("/metrics")]
pub async fn metrics(req: HttpRequest, feed: web::Data<SalesFeed>) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        sales_service::load_metrics(feed.get_ref(), form, local_now()),
        "compute metrics",
    )
}

#[get("/dashboard")]
pub async fn dashboard(req: HttpRequest, feed: web::Data<SalesFeed>) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        sales_service::load_dashboard(feed.get_ref(), form, local_now()),
        "build dashboard",
    )
}

#[get("/analytics")]
pub async fn analytics(req: HttpRequest, feed: web::Data<SalesFeed>) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        sales_service::load_analytics(feed.get_ref(), form, local_now()),
        "build analytics",
    )
}

#[get("/reps")]
pub async fn reps(req: HttpRequest, feed: web::Data<SalesFeed>) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        reps_service::load_leaderboard(feed.get_ref(), form, local_now()),
        "rank reps",
    )
}

#[get("/reps/{name}")]
pub async fn rep_detail(
    name: web::Path<String>,
    req: HttpRequest,
    feed: web::Data<SalesFeed>,
) -> impl Responder {
    let form = match query_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };
    respond(
        reps_service::load_rep_detail(feed.get_ref(), &name, form, local_now()),
        "load rep detail",
    )
}

#[post("/refresh")]
pub async fn refresh(feed: web::Data<SalesFeed>) -> impl Responder {
    respond(
        sales_service::refresh_feed(feed.get_ref()).await,
        "refresh sales data",
    )
}
