use actix_web::{middleware::from_fn, web};

use crate::{handlers, middleware::auth_middleware};

/// Registers every route. Everything under `/products` is gated by
/// [`auth_middleware`]; the remaining routes are public.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::issue_token)
        .service(handlers::status)
        .service(handlers::index)
        .service(handlers::static_asset)
        .service(
            web::scope("/products")
                .wrap(from_fn(auth_middleware))
                .service(handlers::list_products)
                .service(handlers::add_feedback),
        );
}
