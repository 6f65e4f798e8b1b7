//! Terminal error stage. Every downstream fault becomes the same generic 500;
//! the detail only goes to the log.

use crate::constants::message;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic;
use thiserror::Error;
use tracing::error;

thread_local! {
    static LAST_PANIC: RefCell<Option<PanicSite>> = const { RefCell::new(None) };
}

/// Where the most recent panic on this thread happened.
#[derive(Debug)]
pub(crate) struct PanicSite {
    pub(crate) location: String,
    pub(crate) backtrace: String,
}

#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// Error type for handlers mounted under the business prefixes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Unexpected(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    pub fn internal<S: Into<String>>(detail: S) -> Self {
        Self::Internal(detail.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, detail = ?self, "request failed");
        fault_response()
    }
}

pub fn fault_response() -> Response {
    message_response(StatusCode::INTERNAL_SERVER_ERROR, message::FAULT)
}

pub fn not_found_response() -> Response {
    message_response(StatusCode::NOT_FOUND, message::NOT_FOUND)
}

/// Records the location and backtrace of every panic so [`panic_response`]
/// can log them. The previous hook still runs.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        let site = PanicSite {
            location,
            backtrace: Backtrace::capture().to_string(),
        };
        LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(site));
        previous(info);
    }));
}

pub(crate) fn take_panic_site() -> Option<PanicSite> {
    LAST_PANIC.with(|slot| slot.borrow_mut().take())
}

/// Converts a payload caught by the panic layer into the generic fault.
///
/// The panic layer catches on the thread that panicked, so the site recorded
/// by [`install_panic_hook`] belongs to this payload.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else {
        "non-string panic payload"
    };

    match take_panic_site() {
        Some(site) => error!(
            panic = detail,
            location = %site.location,
            backtrace = %site.backtrace,
            "handler panicked"
        ),
        None => error!(
            panic = detail,
            backtrace = %Backtrace::capture(),
            "handler panicked"
        ),
    }
    fault_response()
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
