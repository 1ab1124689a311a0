use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::{
    error::{ApiError, Result},
    state::AppState,
};

#[get("/get-token")]
pub async fn issue_token(state: web::Data<AppState>) -> Result<HttpResponse> {
    let token = state
        .tokens
        .issue(&state.token_subject)
        .map_err(ApiError::Token)?;

    log::info!("Issued bearer token for '{}'", state.token_subject);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(token))
}
