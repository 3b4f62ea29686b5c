use crate::{handlers::method_not_allowed, serialize::health::HealthRes};
use actix_web::{web, HttpResponse};
use chrono::Utc;

/// Liveness only; never touches the database.
async fn request_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthRes::ok(Utc::now()))
}

async fn reject_method() -> HttpResponse {
    method_not_allowed("GET")
}

pub fn route(conf: &mut web::ServiceConfig) {
    conf.service(
        web::resource("/health")
            .route(web::get().to(request_health))
            .default_service(web::to(reject_method)),
    );
}
