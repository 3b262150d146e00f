pub mod config;
pub mod error;
pub mod eurofxref;
pub mod feed;
pub mod fetcher;
pub mod handler;
pub mod token;

pub use feed::FeedSnapshot;
pub use handler::AppState;
