use actix_web::{get, http::header::ContentType, HttpResponse};

pub const STATUS_MESSAGE: &str = "API is up and running";

#[get("/status")]
pub async fn status() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(STATUS_MESSAGE)
}
