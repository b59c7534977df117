//! The expense tracker session shared by the route handlers.

use crate::{
    Error,
    form_controller::{FormController, Submitted},
    transaction::{Totals, Transaction, TransactionId, TransactionStore, aggregate},
};

/// The transaction list together with the transaction form.
///
/// This is everything the pages need: the list, its totals, the form state
/// and the operations on them.
#[derive(Debug)]
pub struct ExpenseTracker {
    store: TransactionStore,
    form: FormController,
}

impl ExpenseTracker {
    /// Create a tracker around `store` with an empty form.
    pub fn new(store: TransactionStore) -> Self {
        Self {
            store,
            form: FormController::new(),
        }
    }

    /// The transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.list()
    }

    /// The income, expense and balance totals of the current list.
    pub fn totals(&self) -> Totals {
        aggregate(self.store.list())
    }

    /// The transaction form.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Whether the form is editing an existing transaction.
    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    /// Find the transaction with `id`.
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.find_by_id(id)
    }

    /// Add a transaction directly, bypassing the form.
    ///
    /// The caller must have validated `text` and `amount`.
    pub fn add(&mut self, text: &str, amount: f64) -> Transaction {
        self.store.add(text, amount)
    }

    /// Update a transaction directly, bypassing the form.
    pub fn update(&mut self, id: TransactionId, text: &str, amount: f64) -> bool {
        self.store.update(id, text, amount)
    }

    /// Delete the transaction with `id`.
    ///
    /// If the form was editing that transaction, the edit is cancelled.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let deleted = self.store.delete(id);

        if self.form.edit_id() == Some(id) {
            self.form.cancel();
        }

        deleted
    }

    /// Record the latest form input.
    pub fn set_draft(&mut self, text: &str, amount: &str) {
        self.form.set_draft(text, amount);
    }

    /// Submit the form, see [FormController::submit].
    ///
    /// # Errors
    /// Returns a validation error if the draft is invalid.
    pub fn submit(&mut self) -> Result<Submitted, Error> {
        self.form.submit(&mut self.store)
    }

    /// Start editing the transaction with `id`, see [FormController::edit].
    pub fn edit(&mut self, id: TransactionId) -> bool {
        self.form.edit(id, &self.store)
    }

    /// Stop editing and clear the form.
    pub fn cancel(&mut self) {
        self.form.cancel();
    }
}
