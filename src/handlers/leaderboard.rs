use crate::{
    handlers::method_not_allowed,
    serialize::{error::AppError, leaderboard::LeaderboardQuery},
    services::leaderboard::{parse_limit, LeaderboardSrv},
};
use actix_web::{http::Method, web, HttpRequest, HttpResponse};

async fn request_leaderboard(
    leaderboard_srv: web::Data<LeaderboardSrv>,
    http_req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query = LeaderboardQuery::from_query_string(http_req.query_string());
    let limit = parse_limit(query.limit.as_deref());

    match leaderboard_srv.get_leaderboard(limit).await {
        Ok(res) => Ok(HttpResponse::Ok().json(res)),
        Err(err) => Err(err),
    }
}

// CORS headers come from the app-wide default headers.
async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn reject_method() -> HttpResponse {
    method_not_allowed("GET, OPTIONS")
}

pub fn route(conf: &mut web::ServiceConfig) {
    conf.service(
        web::resource("/api/leaderboard")
            .route(web::get().to(request_leaderboard))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(reject_method)),
    );
}
