//! HTTP request handlers.

pub mod root_handler;
pub mod user_handler;

pub use root_handler::root_routes;
pub use user_handler::user_routes;
