use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is missing")]
    Missing,
    #[error("Authorization header is not a single bearer credential")]
    Malformed,
    #[error("Invalid API token")]
    Invalid,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Can't download the feed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Can't download the feed: upstream answered {0}")]
    Status(reqwest::StatusCode),
    #[error("Feed body is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed feed document: {0}")]
    Xml(#[from] quick_xml::de::DeError),
    #[error("Feed contains no rate entries")]
    NoRates,
    #[error("Invalid rate {rate:?} for {currency}")]
    Rate { currency: String, rate: String },
    #[error("Invalid currency code {0:?}")]
    Currency(String),
    #[error("Invalid feed date {0:?}")]
    Date(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_TOKEN is not configured")]
    MissingTokenHash,
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Every failure a request can end in. Mapped to a coarse status at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Fetch(_) | AppError::Parse(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = status.canonical_reason().unwrap_or("Error");

        HttpResponse::build(status)
            .insert_header(ContentType::plaintext())
            .body(body)
    }
}
