use actix_web::{
    http::header::{self, ContentType},
    HttpResponse,
};

pub mod health;
pub mod leaderboard;

/// Plain-text 405 shared by every route's fallback.
pub(crate) fn method_not_allowed(allow: &'static str) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, allow))
        .content_type(ContentType::plaintext())
        .body("method not allowed")
}
