use actix_web::{get, http::header::ContentType, post, web, HttpResponse};

use crate::{auth_token::TokenClaims, error::Result, state::AppState};

pub const PRODUCT_NOT_FOUND: &str = "Product Not Found";

#[get("")]
pub async fn list_products(
    state: web::Data<AppState>,
    claims: web::ReqData<TokenClaims>,
) -> Result<HttpResponse> {
    let payload = serde_json::to_string(state.catalog.list())?;

    log::debug!(
        "Listed {} products for '{}'",
        state.catalog.len(),
        claims.name
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(payload))
}

/// Feedback is not stored; a known slug echoes the product back.
#[post("/{slug}/feedback")]
pub async fn add_feedback(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse> {
    let slug = slug.into_inner();

    let product = match state.catalog.find_by_slug(&slug) {
        Ok(product) => product,
        Err(err) => {
            log::debug!("{}", err);
            return Ok(HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(PRODUCT_NOT_FOUND));
        }
    };

    log::debug!("Feedback accepted for product {} ({})", product.id, slug);
    let payload = serde_json::to_string(product)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(payload))
}
