//! Expense Tracker is a web app for recording income and expenses and keeping
//! an eye on the running balance.
//!
//! This library provides the transaction model and a REST API that directly
//! serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{http::StatusCode, response::Response};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod expenses;
pub mod form_controller;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
pub mod storage;
pub mod tracker;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use storage::create_storage_table as initialize_db;

use crate::alert::Alert;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction text was empty or only whitespace.
    #[error("Enter a description for the transaction")]
    EmptyText,

    /// The amount was empty or zero.
    ///
    /// A transaction must either earn or spend money.
    #[error("Enter a non-zero amount")]
    ZeroAmount,

    /// The amount could not be parsed as a number.
    #[error("\"{0}\" is not a number")]
    InvalidAmount(String),

    /// The amount parsed as NaN or infinity.
    #[error("\"{0}\" is not a finite number")]
    NonFiniteAmount(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Reading or writing the storage file failed.
    #[error("file storage error: {0}")]
    FileError(String),

    /// An error occurred while serializing the transaction list as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The persisted transaction list is not valid JSON or has the wrong shape.
    #[error("could not deserialize JSON: {0}")]
    JSONDeserializationError(String),

    /// Could not acquire the lock on a storage backend.
    #[error("could not acquire the storage lock")]
    StorageLockError,

    /// Could not acquire the lock on the shared tracker.
    #[error("could not acquire the tracker lock")]
    TrackerLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::TrackerLockError => Alert::Error {
                message: "Something went wrong".to_owned(),
                details: "The expense tracker is unavailable. Restart the server and try again."
                    .to_owned(),
            }
            .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                }
                .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
