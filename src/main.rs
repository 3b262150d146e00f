use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, Result};
use env_logger::Env;

use eurofx::config::Settings;
use eurofx::fetcher::FeedFetcher;
use eurofx::handler::{self, AppState};
use eurofx::token::{self, TokenVerifier};

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    if let Some(cmd) = args.next() {
        return match (cmd.as_str(), args.next()) {
            ("hash", Some(token)) => {
                println!("{}", token::hash_token(&token));
                Ok(())
            }
            _ => Err(anyhow::anyhow!("Usage: eurofx [hash <token>]")),
        };
    }

    let settings = Settings::from_env()?;
    if settings.api_token_hash.is_none() {
        log::warn!("API_TOKEN is not set, every request will fail with 500");
    }

    let fetcher = FeedFetcher::new(settings.feed_url.clone(), settings.feed_timeout)
        .context("Can't build HTTP client")?;
    let state = web::Data::new(AppState::new(
        TokenVerifier::new(settings.api_token_hash.clone()),
        fetcher,
    ));

    let addr = (settings.bind_addr.as_str(), settings.port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .default_service(web::to(handler::rates))
    })
    .bind(addr)
    .with_context(|| format!("Can't bind {}:{}", settings.bind_addr, settings.port))?;

    log::info!(
        "Server running at http://{}:{}/ (feed: {})",
        settings.bind_addr,
        settings.port,
        settings.feed_url
    );

    server.run().await?;

    Ok(())
}
