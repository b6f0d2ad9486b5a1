//! Request bodies for the quiz endpoints.
//!
//! Reads the payload through actix's `Bytes` extractor, so the size cap is the
//! app's `PayloadConfig`, then decodes with serde. Any failure becomes a
//! problem+json 400; the error response picks up the request's trace id.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::web::{self, Bytes};
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Largest body accepted. Bulk question loads are the big ones.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Payload config registered at the app root.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(MAX_BODY_BYTES)
}

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = Bytes::from_request(req, payload);
        let path = req.path().to_owned();

        Box::pin(async move {
            let bytes = body.await.map_err(|e| {
                debug!(%path, error = %e, "request body rejected");
                AppError::bad_request(ErrorCode::BadRequest, format!("Unreadable request body: {e}"))
            })?;
            decode(&bytes).map(JsonBody).inspect_err(|e| {
                debug!(%path, size = bytes.len(), error = %e, "JSON body rejected");
            })
        })
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::BadRequest,
            "Request body is empty",
        ));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        let detail = match e.classify() {
            Category::Data => format!("Body does not match the expected fields: {e}"),
            Category::Eof => "Body ends before the JSON document does".to_string(),
            Category::Syntax | Category::Io => format!(
                "Body is not valid JSON (line {}, column {})",
                e.line(),
                e.column()
            ),
        };
        AppError::bad_request(ErrorCode::BadRequest, detail)
    })
}
