//! The transaction form: draft input, validation and the add/edit state machine.

use crate::{
    Error,
    transaction::{Transaction, TransactionId, TransactionStore},
};

/// Whether the form creates a new transaction or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Submitting the form adds a new transaction.
    #[default]
    Composing,
    /// Submitting the form updates the transaction with this ID.
    Editing(TransactionId),
}

/// What a successful [FormController::submit] did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    /// A new transaction was added.
    Added(Transaction),
    /// The transaction with this ID was updated, or was already gone.
    Updated(TransactionId),
}

/// Text and amount that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// The trimmed, non-empty text.
    pub text: String,
    /// A finite, non-zero amount.
    pub amount: f64,
}

/// Check the raw form input.
///
/// `text` must contain something other than whitespace and `amount` must
/// parse to a finite, non-zero number. Surrounding whitespace is ignored and
/// an empty amount counts as zero.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyText] if `text` is blank,
/// - [Error::ZeroAmount] if `amount` is empty or zero,
/// - [Error::InvalidAmount] if `amount` is not a number,
/// - or [Error::NonFiniteAmount] if `amount` is NaN or infinite.
pub fn validate(text: &str, amount: &str) -> Result<ValidatedInput, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }

    let raw_amount = amount.trim();
    if raw_amount.is_empty() {
        return Err(Error::ZeroAmount);
    }

    let amount: f64 = raw_amount
        .parse()
        .map_err(|_| Error::InvalidAmount(raw_amount.to_owned()))?;

    if !amount.is_finite() {
        return Err(Error::NonFiniteAmount(raw_amount.to_owned()));
    }

    if amount == 0.0 {
        return Err(Error::ZeroAmount);
    }

    Ok(ValidatedInput {
        text: text.to_owned(),
        amount,
    })
}

/// Holds what the user has typed into the transaction form and whether they
/// are editing an existing transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    state: FormState,
    draft_text: String,
    draft_amount: String,
}

impl FormController {
    /// Create an empty form in the [FormState::Composing] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state of the form.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The ID of the transaction being edited, if any.
    pub fn edit_id(&self) -> Option<TransactionId> {
        match self.state {
            FormState::Composing => None,
            FormState::Editing(id) => Some(id),
        }
    }

    /// Whether the form is editing an existing transaction.
    pub fn is_editing(&self) -> bool {
        self.edit_id().is_some()
    }

    /// The text as typed by the user.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// The amount as typed by the user, before parsing.
    pub fn draft_amount(&self) -> &str {
        &self.draft_amount
    }

    /// Record the latest user input without validating it.
    pub fn set_draft(&mut self, text: &str, amount: &str) {
        self.draft_text = text.to_owned();
        self.draft_amount = amount.to_owned();
    }

    /// Validate the draft and add or update a transaction in `store`.
    ///
    /// On success the draft is cleared and the form goes back to
    /// [FormState::Composing].
    ///
    /// # Errors
    /// Returns the validation error from [validate]. The form state, the draft
    /// and the store are left untouched.
    pub fn submit(&mut self, store: &mut TransactionStore) -> Result<Submitted, Error> {
        let input = validate(&self.draft_text, &self.draft_amount)?;

        let submitted = match self.state {
            FormState::Composing => Submitted::Added(store.add(&input.text, input.amount)),
            FormState::Editing(id) => {
                if !store.update(id, &input.text, input.amount) {
                    tracing::warn!("Transaction {id} was removed while it was being edited");
                }

                Submitted::Updated(id)
            }
        };

        self.clear();

        Ok(submitted)
    }

    /// Start editing the transaction with `id`, copying its text and amount
    /// into the draft.
    ///
    /// Returns `false` and leaves the form as is if `store` has no such
    /// transaction.
    pub fn edit(&mut self, id: TransactionId, store: &TransactionStore) -> bool {
        let Some(transaction) = store.find_by_id(id) else {
            tracing::debug!("Cannot edit missing transaction {id}");
            return false;
        };

        self.draft_text = transaction.text.clone();
        self.draft_amount = transaction.amount.to_string();
        self.state = FormState::Editing(id);

        true
    }

    /// Discard the draft and stop editing. The store is not touched.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.state = FormState::Composing;
        self.draft_text.clear();
        self.draft_amount.clear();
    }
}

#[cfg(test)]
mod validation_tests {
    use crate::{Error, form_controller::validate};

    #[test]
    fn accepts_valid_input() {
        let input = validate("  Coffee ", " -4.5 ").unwrap();

        assert_eq!(input.text, "Coffee");
        assert_eq!(input.amount, -4.5);
    }

    #[test]
    fn accepts_exponent_notation() {
        assert_eq!(validate("Bonus", "1e3").unwrap().amount, 1000.0);
    }

    #[test]
    fn rejects_bad_input() {
        let cases = [
            ("", "10", Error::EmptyText),
            ("   ", "10", Error::EmptyText),
            ("Coffee", "", Error::ZeroAmount),
            ("Coffee", "0", Error::ZeroAmount),
            ("Coffee", "-0.0", Error::ZeroAmount),
            ("Coffee", "abc", Error::InvalidAmount("abc".to_owned())),
            ("Coffee", "NaN", Error::NonFiniteAmount("NaN".to_owned())),
            ("Coffee", "inf", Error::NonFiniteAmount("inf".to_owned())),
        ];

        for (text, amount, want) in cases {
            assert_eq!(
                validate(text, amount),
                Err(want),
                "text {text:?}, amount {amount:?}"
            );
        }
    }
}
