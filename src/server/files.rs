//! Static file handler.
//!
//! Every request, whatever its method, is a read of `./<path>` under the
//! served root. Success streams the whole file with status 200; any failure
//! answers 404 with a JSON error body.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Uri},
    response::Response,
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{debug, error};
use vidserve_common::Error;

use super::error::AppError;
use super::resolve::{decode_request_path, resolve_within};
use super::AppContext;

/// Serve the file named by the request path.
pub async fn serve_file(
    State(ctx): State<AppContext>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    match open_requested(&ctx, &method, uri.path()).await {
        Ok((file, len)) => {
            let mut response = Response::new(Body::from_stream(ReaderStream::new(file)));
            response
                .headers_mut()
                .insert(header::CONTENT_LENGTH, HeaderValue::from(len));
            Ok(response)
        }
        Err(e) => {
            error!(
                method = %method,
                uri = %uri,
                code = e.code(),
                error = %e,
                "Failed to serve request"
            );
            Err(AppError::new(e))
        }
    }
}

/// Decode, resolve and open the requested file, returning it with its size.
async fn open_requested(
    ctx: &AppContext,
    method: &Method,
    raw_path: &str,
) -> vidserve_common::Result<(File, u64)> {
    let request_path = decode_request_path(raw_path)?;
    debug!(method = %method, path = %request_path, "REQ");

    let target = resolve_within(&ctx.root, &request_path)?;

    // Symlinks may point anywhere; containment is checked on the real path.
    let canonical = tokio::fs::canonicalize(&target)
        .await
        .map_err(|e| Error::read(request_path.as_str(), e))?;
    if !canonical.starts_with(&*ctx.root) {
        return Err(Error::OutsideRoot(request_path));
    }

    let file = File::open(&canonical)
        .await
        .map_err(|e| Error::read(request_path.as_str(), e))?;
    let metadata = file
        .metadata()
        .await
        .map_err(|e| Error::read(request_path.as_str(), e))?;

    if metadata.is_dir() {
        return Err(Error::IsDirectory(request_path));
    }

    Ok((file, metadata.len()))
}
