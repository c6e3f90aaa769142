use std::error::Error;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("url is required")]
    MissingUrl,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Failed to fetch URL: {}", error_chain(.0))]
    Fetch(#[from] reqwest::Error),
    #[error("Extraction worker unavailable")]
    Worker(#[from] BlockingError),
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for ExtractError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExtractError::MissingUrl | ExtractError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ExtractError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ExtractError::Worker(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}
