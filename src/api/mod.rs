// HTTP adapter: axum routes over core::dispatch.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use router::{create_router, serve, serve_listener};
