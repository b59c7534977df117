//! The expense tracker page and the endpoints behind its buttons.
//!
//! Every endpoint works on the single [ExpenseTracker] held in the app state
//! and, on success, tells htmx to reload the page so the balance, form and
//! history are rendered from the new state.

mod cancel_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod page;
mod submit_endpoint;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, tracker::ExpenseTracker};

pub use cancel_endpoint::cancel_edit_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use page::get_expenses_page;
pub use submit_endpoint::submit_transaction_endpoint;

/// The state needed by the expense tracker page and endpoints.
#[derive(Debug, Clone)]
pub struct TrackerState {
    /// The expense tracker session.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl FromRef<AppState> for TrackerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

impl TrackerState {
    fn lock(&self) -> Result<MutexGuard<'_, ExpenseTracker>, Error> {
        self.tracker.lock().map_err(|error| {
            tracing::error!("could not acquire tracker lock: {error}");
            Error::TrackerLockError
        })
    }
}

/// Tell htmx to reload the expense tracker page.
fn redirect_to_tracker() -> Response {
    (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
}
