//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    expenses::{TrackerState, redirect_to_tracker},
    transaction::TransactionId,
};

/// A route handler for deleting a transaction, redirects to the tracker page.
///
/// Deleting a transaction that does not exist is not an error, so repeated
/// clicks on the same button are harmless.
pub async fn delete_transaction_endpoint(
    State(state): State<TrackerState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut tracker = match state.lock() {
        Ok(tracker) => tracker,
        Err(error) => return error.into_alert_response(),
    };

    if tracker.delete(transaction_id) {
        tracing::info!("Deleted transaction {transaction_id}");
    } else {
        tracing::debug!("Transaction {transaction_id} was already deleted");
    }

    redirect_to_tracker()
}
