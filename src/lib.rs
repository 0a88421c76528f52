//! Next-game stat projections for NBA players from basketball-reference.com.

pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod pipeline;
pub mod scrape;

pub use error::AppError;
pub use pipeline::StatProjector;
