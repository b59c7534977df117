//! Defines the endpoint for abandoning an edit.

use axum::{extract::State, response::Response};

use crate::expenses::{TrackerState, redirect_to_tracker};

/// A route handler that clears the form and stops editing.
pub async fn cancel_edit_endpoint(State(state): State<TrackerState>) -> Response {
    let mut tracker = match state.lock() {
        Ok(tracker) => tracker,
        Err(error) => return error.into_alert_response(),
    };

    tracker.cancel();

    redirect_to_tracker()
}
