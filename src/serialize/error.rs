use std::fmt;

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};

/// Body sent for every 5xx; the real cause only goes to the log.
pub const INTERNAL_SERVER_ERROR_BODY: &str = "internal server error";

#[derive(Debug, Clone)]
pub struct AppError {
    pub code: u16,
    pub message: String,
}

impl AppError {
    pub fn new(code: u16) -> Self {
        AppError {
            code,
            message: String::new(),
        }
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_owned();
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status.is_server_error() {
            log::error!("{}", self.message);
            INTERNAL_SERVER_ERROR_BODY.to_owned()
        } else {
            self.message.clone()
        };

        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(body)
    }
}
