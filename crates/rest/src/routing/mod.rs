//! Route configuration.

pub mod intake_routes;

pub use intake_routes::create_routes;
