//! Defines the endpoint for loading a transaction into the form for editing.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    expenses::{TrackerState, redirect_to_tracker},
    transaction::TransactionId,
};

/// A route handler that starts editing the transaction with `transaction_id`.
///
/// Editing a transaction that no longer exists leaves the form as it is.
pub async fn edit_transaction_endpoint(
    State(state): State<TrackerState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut tracker = match state.lock() {
        Ok(tracker) => tracker,
        Err(error) => return error.into_alert_response(),
    };

    if tracker.edit(transaction_id) {
        tracing::debug!("Editing transaction {transaction_id}");
    }

    redirect_to_tracker()
}
