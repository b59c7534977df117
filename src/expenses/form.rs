use maud::{Markup, html};

use crate::{
    endpoints,
    form_controller::FormController,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, BUTTON_UPDATE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
};

/// Render the add/update transaction form from the drafts in `form`.
///
/// `error_message` is shown under the inputs when the last submit was
/// rejected.
pub(super) fn transaction_form_view(form: &FormController, error_message: Option<&str>) -> Markup {
    let is_editing = form.is_editing();
    let (submit_label, submit_style) = if is_editing {
        ("Update Transaction", BUTTON_UPDATE_STYLE)
    } else {
        ("Add Transaction", BUTTON_PRIMARY_STYLE)
    };

    html! {
        form
            id="transaction-form"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-3 mb-6"
        {
            div
            {
                label
                    for="text"
                    class=(FORM_LABEL_STYLE)
                {
                    "Text"
                }

                input
                    name="text"
                    id="text"
                    type="text"
                    placeholder="Enter text..."
                    required
                    autofocus
                    value=(form.draft_text())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="any"
                    placeholder="Enter amount (+income, -expense)"
                    required
                    value=(form.draft_amount())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(error_message) = error_message {
                p class="text-red-600 dark:text-red-400" { (error_message) }
            }

            button type="submit" class=(submit_style) { (submit_label) }

            @if is_editing {
                button
                    type="button"
                    hx-post=(endpoints::CANCEL_EDIT)
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Cancel Edit"
                }
            }
        }
    }
}
