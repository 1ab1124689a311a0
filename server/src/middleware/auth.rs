use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, HttpMessage, ResponseError,
};

use crate::{
    auth_token::{bearer_token, TokenClaims, TokenError},
    error::ApiError,
    state::AppState,
};

/// Gates a scope behind a valid bearer token. Verified claims are stored in
/// request extensions for handlers to read through `web::ReqData<TokenClaims>`.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    match authorize(&req) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        Err(err) => {
            match &err {
                ApiError::Unauthorized(kind) => {
                    log::warn!("Rejected {} {}: {}", req.method(), req.path(), kind)
                }
                other => log::error!("Auth check failed for {}: {}", req.path(), other),
            }
            let response = err.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

fn authorize(req: &ServiceRequest) -> Result<TokenClaims, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("App state not available".to_string()))?;

    let header_value = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| ApiError::Unauthorized(TokenError::MalformedToken))?,
        ),
        None => None,
    };
    let token = bearer_token(header_value).map_err(ApiError::Unauthorized)?;

    state.tokens.verify(token).map_err(ApiError::Unauthorized)
}
