//! Renders the expense tracker page: balance summary, form and history.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    expenses::{TrackerState, form::transaction_form_view},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency,
        format_signed_amount,
    },
    tracker::ExpenseTracker,
    transaction::{Totals, Transaction},
};

/// Display the balance, the transaction form and the transaction history.
pub async fn get_expenses_page(State(state): State<TrackerState>) -> Response {
    let tracker = match state.lock() {
        Ok(tracker) => tracker,
        Err(error) => return error.into_alert_response(),
    };

    Html(expenses_view(&tracker).into_string()).into_response()
}

fn expenses_view(tracker: &ExpenseTracker) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="bg-white dark:bg-gray-800 shadow-2xl rounded-2xl w-full max-w-md p-6"
            {
                h1 class="text-2xl font-bold text-center mb-4" { "Expense Tracker" }

                (balance_summary_view(&tracker.totals()))

                (transaction_form_view(tracker.form(), None))

                (history_view(tracker.transactions()))
            }
        }
    };

    base("Expense Tracker", &content)
}

fn balance_summary_view(totals: &Totals) -> Markup {
    html! {
        section class="bg-indigo-50 dark:bg-gray-700 rounded-xl p-4 mb-6 text-center"
        {
            h2 class="text-lg font-semibold mb-1" { "Your Balance" }
            p id="balance-total" class="text-2xl font-bold text-indigo-700 dark:text-indigo-300"
            {
                (format_currency(totals.balance))
            }

            div class="flex justify-between mt-4 gap-4"
            {
                div class="bg-gray-200 dark:bg-gray-600 p-3 rounded-xl flex-1"
                {
                    h3 class="text-sm font-semibold" { "Income" }
                    p id="income-total" class="text-lg font-bold" { (format_currency(totals.income)) }
                }

                div class="bg-gray-200 dark:bg-gray-600 p-3 rounded-xl flex-1"
                {
                    h3 class="text-sm font-semibold" { "Expense" }
                    p id="expense-total" class="text-lg font-bold"
                    {
                        (format_currency(totals.expense_magnitude()))
                    }
                }
            }
        }
    }
}

fn history_view(transactions: &[Transaction]) -> Markup {
    html! {
        h3 class="text-lg font-semibold mb-2" { "History" }

        @if transactions.is_empty() {
            p id="history-empty" class="text-gray-500 text-center" { "No transactions yet." }
        } @else {
            ul id="history" class="space-y-2 max-h-60 overflow-y-auto"
            {
                @for transaction in transactions {
                    (history_row_view(transaction))
                }
            }
        }
    }
}

fn history_row_view(transaction: &Transaction) -> Markup {
    let (row_style, amount_style) = if transaction.is_income() {
        (
            "border-gray-500 bg-gray-50 dark:bg-gray-700",
            "text-gray-600 dark:text-gray-300",
        )
    } else {
        (
            "border-red-500 bg-red-50 dark:bg-gray-700",
            "text-red-600 dark:text-red-400",
        )
    };

    html! {
        li
            data-transaction-id=(transaction.id)
            class={ "flex justify-between items-center p-3 rounded-xl border-l-4 " (row_style) }
        {
            span class="font-medium" { (transaction.text) }

            div class="flex justify-center space-x-3"
            {
                span class={ "font-bold " (amount_style) } { (format_signed_amount(transaction.amount)) }

                button
                    type="button"
                    hx-post=(format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id))
                    class=(BUTTON_LINK_STYLE)
                {
                    "Edit"
                }

                button
                    type="button"
                    hx-delete=(format_endpoint(endpoints::TRANSACTION, transaction.id))
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
