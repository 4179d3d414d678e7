//! File routes.
//!
//! # Design Decisions
//! - Whole files are buffered; no streaming or ranges
//! - Only binary bodies (url-encoded content type) may be written
//! - A lost create race is reported the same way as a pre-existing file

use std::io;

use crate::error::Error;
use crate::http::{Body, Response, StatusCode};
use crate::storage::FileStore;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// `GET /files/{name}`.
pub fn read_file(store: &dyn FileStore, name: &str) -> Result<Response, Error> {
    if !store.is_file(name) {
        return Ok(Response::text(
            StatusCode::BAD_REQUEST,
            format!("Error: no file by the name of \"{}\"", name),
        ));
    }

    let contents = store.read(name)?;
    Ok(Response::builder(StatusCode::OK)
        .content_type(OCTET_STREAM)
        .content_length(contents.len())
        .body(contents)
        .build())
}

/// `POST /files/{name}`.
pub fn create_file(store: &dyn FileStore, name: &str, body: Option<&Body>) -> Result<Response, Error> {
    let contents = match body {
        Some(Body::Binary(bytes)) => bytes,
        _ => {
            return Ok(Response::text(
                StatusCode::BAD_REQUEST,
                "Error: body of HTTP request is in wrong format",
            ))
        }
    };

    if store.exists(name) {
        return Ok(already_exists(name));
    }

    match store.create(name, contents) {
        Ok(()) => Ok(Response::builder(StatusCode::CREATED).content_length(0).build()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(file = %name, "Lost create race");
            Ok(already_exists(name))
        }
        Err(e) => Err(e.into()),
    }
}

fn already_exists(name: &str) -> Response {
    Response::text(
        StatusCode::BAD_REQUEST,
        format!("Error: file by the name of \"{}\" already exists", name),
    )
}
