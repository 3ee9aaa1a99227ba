//! Request Extractors
//!
//! JSON body extraction whose rejections are reported through [`AppError`].

use axum::extract::FromRequest;

use crate::utils::error::AppError;

/// `axum::Json` with failures (malformed JSON, missing fields, wrong content
/// type) rendered as the standard JSON error body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
