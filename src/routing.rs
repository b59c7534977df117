//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState, endpoints,
    expenses::{
        cancel_edit_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_expenses_page, submit_transaction_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(submit_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(
            endpoints::EDIT_TRANSACTION,
            post(edit_transaction_endpoint),
        )
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint));

    pages
        .merge(api)
        .fallback(get_404_not_found)
        .with_state(state)
}
