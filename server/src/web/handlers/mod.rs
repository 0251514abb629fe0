// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod category_handlers;
pub mod product_handlers;
pub mod sitemap_handler;
