use actix_web::{get, http::header::ContentType, web, HttpResponse};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::{
    error::{ApiError, Result},
    state::AppState,
};

const INDEX_FILE: &str = "index.html";

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_file(state.views_dir.join(INDEX_FILE)).await
}

#[get("/static/{path:.*}")]
pub async fn static_asset(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match resolve(&state.static_dir, &path) {
        Some(file) => serve_file(file).await,
        None => {
            log::debug!("Refusing static path '{}'", path.as_str());
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// Joins a request path onto `root`, refusing anything that could leave it.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path);
    let mut resolved = root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if resolved == root {
        return None;
    }
    Some(resolved)
}

pub fn content_type_for(path: &Path) -> ContentType {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let mime = match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    };

    match mime.parse() {
        Ok(mime) => ContentType(mime),
        Err(_) => ContentType::octet_stream(),
    }
}

async fn serve_file(path: PathBuf) -> Result<HttpResponse> {
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Ok(HttpResponse::NotFound().finish()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(HttpResponse::NotFound().finish())
        }
        Err(err) => return Err(read_error(&path, err)),
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| read_error(&path, err))?;

    Ok(HttpResponse::Ok()
        .content_type(content_type_for(&path))
        .body(bytes))
}

fn read_error(path: &Path, err: std::io::Error) -> ApiError {
    ApiError::Internal(format!("Failed to read {}: {}", path.display(), err))
}
