use actix_web::{HttpRequest, HttpResponse, http::header, web};

use crate::error::{AppError, AuthError, ConfigError};
use crate::feed::{self, FeedSnapshot};
use crate::fetcher::FeedFetcher;
use crate::token::TokenVerifier;

const BEARER_PREFIX: &str = "Bearer ";

/// Shared, immutable per-process state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub verifier: TokenVerifier,
    pub fetcher: FeedFetcher,
}

impl AppState {
    pub fn new(verifier: TokenVerifier, fetcher: FeedFetcher) -> Self {
        Self { verifier, fetcher }
    }

    async fn snapshot(&self, req: &HttpRequest) -> Result<FeedSnapshot, AppError> {
        if !self.verifier.is_configured() {
            return Err(ConfigError::MissingTokenHash.into());
        }

        let token = bearer_token(req)?;
        if !self.verifier.verify(Some(token)) {
            log::warn!("Invalid API token from {}", peer(req));
            return Err(AuthError::Invalid.into());
        }

        let text = self.fetcher.fetch().await?;
        Ok(feed::normalize(&text)?)
    }
}

/// Serves today's rates on any path and method.
pub async fn rates(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.snapshot(&req).await {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(snapshot)),
        Err(e) => {
            match &e {
                AppError::Auth(_) => {}
                AppError::Config(e) => log::error!("Configuration error: {}", e),
                AppError::Fetch(_) | AppError::Parse(_) => {
                    log::error!("Error processing request: {}", e)
                }
            }
            Err(e)
        }
    }
}

/// The credential after `Bearer `. A repeated header is treated as malformed.
fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let mut values = req.headers().get_all(header::AUTHORIZATION);
    let value = values.next().ok_or(AuthError::Missing)?;
    if values.next().is_some() {
        return Err(AuthError::Malformed);
    }

    value
        .to_str()
        .map_err(|_| AuthError::Malformed)?
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::Malformed)
}

fn peer(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown peer".to_string())
}
