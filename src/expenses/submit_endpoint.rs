//! Defines the endpoint for submitting the add/update transaction form.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
// Must use axum_extra's Form since it copes with missing fields in a way
// that axum::Form does not.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    Error,
    expenses::{TrackerState, form::transaction_form_view, redirect_to_tracker},
    form_controller::Submitted,
};

/// The raw form data for a transaction.
///
/// Both fields are kept as text so that invalid input can be shown back to
/// the user as they typed it.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// Text describing the transaction.
    #[serde(default)]
    pub text: String,
    /// The signed amount, positive for income and negative for an expense.
    #[serde(default)]
    pub amount: String,
}

/// A route handler for the transaction form.
///
/// Adds a new transaction, or updates the one being edited, and redirects to
/// the tracker page. Invalid input re-renders the form with an error message.
pub async fn submit_transaction_endpoint(
    State(state): State<TrackerState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut tracker = match state.lock() {
        Ok(tracker) => tracker,
        Err(error) => return error.into_alert_response(),
    };

    tracker.set_draft(&form.text, &form.amount);

    match tracker.submit() {
        Ok(Submitted::Added(transaction)) => {
            tracing::info!("Added transaction {}", transaction.id);
            redirect_to_tracker()
        }
        Ok(Submitted::Updated(id)) => {
            tracing::info!("Updated transaction {id}");
            redirect_to_tracker()
        }
        Err(
            error @ (Error::EmptyText
            | Error::ZeroAmount
            | Error::InvalidAmount(_)
            | Error::NonFiniteAmount(_)),
        ) => {
            tracing::debug!("Rejected transaction form: {error}");
            let error_message = error.to_string();

            Html(transaction_form_view(tracker.form(), Some(&error_message)).into_string())
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;

    use crate::{
        endpoints,
        expenses::{TrackerState, submit_transaction_endpoint, submit_endpoint::TransactionForm},
        storage::{MemoryStorage, Storage},
        test_utils::{
            assert_form_error_message, assert_form_input_with_value,
            assert_form_submit_button_with_text, assert_hx_redirect, assert_valid_html,
            get_test_state, must_get_form, parse_html_fragment,
        },
        transaction::{Transaction, deserialize_transactions},
    };

    fn tracker_state() -> (TrackerState, MemoryStorage) {
        let (state, storage) = get_test_state();

        (
            TrackerState {
                tracker: state.tracker,
            },
            storage,
        )
    }

    fn form(text: &str, amount: &str) -> Form<TransactionForm> {
        Form(TransactionForm {
            text: text.to_owned(),
            amount: amount.to_owned(),
        })
    }

    #[tokio::test]
    async fn can_add_transaction() {
        let (state, storage) = tracker_state();

        let response =
            submit_transaction_endpoint(State(state.clone()), form("Coffee", "-4.5")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);
        let tracker = state.tracker.lock().unwrap();
        assert_eq!(
            tracker.transactions(),
            [Transaction {
                id: 1,
                text: "Coffee".to_owned(),
                amount: -4.5
            }]
        );
        assert_eq!(tracker.form().draft_text(), "");

        let saved = storage.load().unwrap().expect("want transactions saved");
        assert_eq!(
            deserialize_transactions(&saved).unwrap(),
            tracker.transactions()
        );
    }

    #[tokio::test]
    async fn updates_transaction_being_edited() {
        let (state, _) = tracker_state();
        let id = {
            let mut tracker = state.tracker.lock().unwrap();
            let id = tracker.add("Coffee", -4.0).id;
            tracker.edit(id);
            id
        };

        let response =
            submit_transaction_endpoint(State(state.clone()), form("Coffee beans", "-12.3")).await;

        assert_hx_redirect(&response, endpoints::ROOT);
        let tracker = state.tracker.lock().unwrap();
        assert_eq!(
            tracker.find_by_id(id),
            Some(&Transaction {
                id,
                text: "Coffee beans".to_owned(),
                amount: -12.3
            })
        );
        assert_eq!(tracker.transactions().len(), 1);
        assert!(!tracker.is_editing());
    }

    #[tokio::test]
    async fn empty_text_renders_form_with_error() {
        let (state, _) = tracker_state();

        let response = submit_transaction_endpoint(State(state.clone()), form("   ", "10")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form_element = must_get_form(&html);
        assert_form_error_message(&form_element, "Enter a description for the transaction");
        assert_form_input_with_value(&form_element, "amount", "number", "10");
        assert_form_submit_button_with_text(&form_element, "Add Transaction");
        assert!(state.tracker.lock().unwrap().transactions().is_empty());
    }

    #[tokio::test]
    async fn zero_amount_renders_form_with_error() {
        let (state, storage) = tracker_state();

        let response = submit_transaction_endpoint(State(state.clone()), form("Gift", "0")).await;

        let html = parse_html_fragment(response).await;
        let form_element = must_get_form(&html);
        assert_form_error_message(&form_element, "Enter a non-zero amount");
        assert_form_input_with_value(&form_element, "text", "text", "Gift");
        assert!(state.tracker.lock().unwrap().transactions().is_empty());
        assert_eq!(storage.load(), Ok(None));
    }

    #[tokio::test]
    async fn invalid_edit_keeps_editing() {
        let (state, _) = tracker_state();
        {
            let mut tracker = state.tracker.lock().unwrap();
            let id = tracker.add("Coffee", -4.0).id;
            tracker.edit(id);
        }

        let response =
            submit_transaction_endpoint(State(state.clone()), form("Coffee", "abc")).await;

        let html = parse_html_fragment(response).await;
        let form_element = must_get_form(&html);
        assert_form_error_message(&form_element, "\"abc\" is not a number");
        assert_form_submit_button_with_text(&form_element, "Update Transaction");
        let tracker = state.tracker.lock().unwrap();
        assert!(tracker.is_editing());
        assert_eq!(tracker.transactions()[0].amount, -4.0);
    }
}
