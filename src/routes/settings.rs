use actix_web::{HttpResponse, Responder, post, web};

use crate::feed::SalesFeed;
use crate::forms::settings::{ChangePasswordForm, MergeRepsForm};
use crate::routes::error_response;
use crate::services::settings as settings_service;
use crate::settings_client::SettingsGateway;

#[post("/settings/password")]
pub async fn change_password(
    gateway: web::Data<dyn SettingsGateway>,
    web::Json(form): web::Json<ChangePasswordForm>,
) -> impl Responder {
    match settings_service::change_password(gateway.get_ref(), form).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::warn!("Password change rejected: {err}");
            error_response(&err)
        }
    }
}

#[post("/settings/merge-reps")]
pub async fn merge_reps(
    gateway: web::Data<dyn SettingsGateway>,
    feed: web::Data<SalesFeed>,
    web::Json(form): web::Json<MergeRepsForm>,
) -> impl Responder {
    match settings_service::merge_reps(gateway.get_ref(), feed.get_ref(), form).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::warn!("Rep merge rejected: {err}");
            error_response(&err)
        }
    }
}
