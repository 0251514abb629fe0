// server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export routing configuration for main.rs and the test harness.
pub use routes::configure_app_routes;
