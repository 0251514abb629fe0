// server/src/web/routes.rs

use actix_web::web;

// Liveness probe; deliberately does not touch the data store.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::scope("/api")
        // Health Check Route
        .route("/health", web::get().to(health_check_handler))
        // Product Routes. `/featured` is registered before `/{product_id}`
        // so it is matched as a literal segment, not an identifier.
        .service(
          web::scope("/products")
            .route(
              "",
              web::get().to(crate::web::handlers::product_handlers::list_products_handler),
            )
            .route(
              "/featured",
              web::get().to(crate::web::handlers::product_handlers::featured_products_handler),
            )
            .route(
              "/{product_id}",
              web::get().to(crate::web::handlers::product_handlers::get_product_handler),
            ),
        )
        // Category Routes
        .service(
          web::scope("/categories")
            .route(
              "",
              web::get().to(crate::web::handlers::category_handlers::list_categories_handler),
            )
            .route(
              "/{path}/products",
              web::get().to(crate::web::handlers::category_handlers::category_products_handler),
            ),
        ),
    )
    // Sitemap lives at the root, outside the JSON API scope.
    .route(
      "/sitemap.xml",
      web::get().to(crate::web::handlers::sitemap_handler::sitemap_handler),
    );
}
