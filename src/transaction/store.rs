//! The in-memory transaction list and its synchronisation with storage.

use std::collections::HashSet;

use crate::{
    Error,
    storage::Storage,
    transaction::{
        Transaction, TransactionId, core::free_id, deserialize_transactions,
        serialize_transactions,
    },
};

/// Controls whether an empty transaction list is written to storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistPolicy {
    /// Write after every mutation, including when the list becomes empty.
    #[default]
    Always,
    /// Skip the write when the list is empty.
    ///
    /// Deleting the last transaction then leaves the previous list in storage
    /// and it reappears on the next start. Kept for compatibility with data
    /// written by the browser version of the app.
    SkipEmpty,
}

/// Owns the ordered list of transactions.
///
/// The list order is insertion order. Every mutation writes the whole list to
/// the [Storage] backend. Write failures are logged and otherwise ignored: the
/// in-memory list stays the source of truth for the running session.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    /// `None` once the counter has run past [TransactionId::MAX].
    next_id: Option<TransactionId>,
    storage: Box<dyn Storage>,
    policy: PersistPolicy,
}

impl std::fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("next_id", &self.next_id)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl TransactionStore {
    /// Create an empty store that writes to `storage`.
    ///
    /// Nothing is read from `storage`, use [TransactionStore::open] to
    /// rehydrate a previous session.
    pub fn new(storage: impl Storage + 'static, policy: PersistPolicy) -> Self {
        Self {
            transactions: Vec::new(),
            next_id: Some(1),
            storage: Box::new(storage),
            policy,
        }
    }

    /// Create a store and load the transactions previously saved in `storage`.
    ///
    /// If the saved data cannot be read or parsed the error is logged and the
    /// store starts empty.
    pub fn open(storage: impl Storage + 'static, policy: PersistPolicy) -> Self {
        let mut store = Self::new(storage, policy);

        let raw = match store.storage.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No saved transactions found, starting with an empty list");
                return store;
            }
            Err(error) => {
                tracing::error!("Could not read saved transactions: {error}");
                return store;
            }
        };

        match store.load(&raw) {
            Ok(()) => tracing::info!("Loaded {} saved transactions", store.transactions.len()),
            Err(error) => tracing::error!("Could not parse saved transactions: {error}"),
        }

        store
    }

    /// Replace the list with the transactions serialized in `raw`.
    ///
    /// This does not write to storage.
    ///
    /// # Errors
    /// Returns an [Error::JSONDeserializationError] if `raw` is not a valid
    /// transaction list. The current list is left untouched in that case.
    pub fn load(&mut self, raw: &str) -> Result<(), Error> {
        let transactions = deserialize_transactions(raw)?;

        let loaded_next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .map_or(Some(1), |max_id| max_id.checked_add(1));
        self.next_id = match (loaded_next_id, self.next_id) {
            (Some(loaded), Some(current)) => Some(loaded.max(current)),
            _ => None,
        };
        self.transactions = transactions;

        Ok(())
    }

    /// The transactions in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Find the transaction with `id`.
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Append a new transaction to the end of the list and persist the list.
    ///
    /// The caller is responsible for validating `text` and `amount`.
    pub fn add(&mut self, text: &str, amount: f64) -> Transaction {
        let transaction = Transaction {
            id: self.allocate_id(),
            text: text.to_owned(),
            amount,
        };
        self.transactions.push(transaction.clone());

        tracing::debug!("Added transaction {}", transaction.id);
        self.persist_or_log();

        transaction
    }

    /// Replace the text and amount of the transaction with `id`.
    ///
    /// The transaction keeps its ID and position. Returns `false` without
    /// touching storage if there is no such transaction.
    pub fn update(&mut self, id: TransactionId, text: &str, amount: f64) -> bool {
        let Some(transaction) = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        else {
            tracing::debug!("Ignoring update of missing transaction {id}");
            return false;
        };

        transaction.text = text.to_owned();
        transaction.amount = amount;

        tracing::debug!("Updated transaction {id}");
        self.persist_or_log();

        true
    }

    /// Remove the transaction with `id`, keeping the order of the others.
    ///
    /// Returns `false` without touching storage if there is no such
    /// transaction.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            tracing::debug!("Ignoring delete of missing transaction {id}");
            return false;
        };

        self.transactions.remove(index);

        tracing::debug!("Deleted transaction {id}");
        self.persist_or_log();

        true
    }

    /// Write the list to storage.
    ///
    /// With [PersistPolicy::SkipEmpty] an empty list is not written.
    ///
    /// # Errors
    /// Returns an error if the list could not be serialized or the storage
    /// backend failed.
    pub fn persist(&mut self) -> Result<(), Error> {
        if self.policy == PersistPolicy::SkipEmpty && self.transactions.is_empty() {
            tracing::debug!("Skipping write of empty transaction list");
            return Ok(());
        }

        let blob = serialize_transactions(&self.transactions)?;
        self.storage.save(&blob)
    }

    /// Take the next ID from the counter.
    ///
    /// Saved data may hold IDs up to [TransactionId::MAX]. Once the counter
    /// overflows, or lands on an ID that is in use, the smallest free ID is
    /// used instead.
    fn allocate_id(&mut self) -> TransactionId {
        let id = match self.next_id {
            Some(id) if self.find_by_id(id).is_none() => id,
            candidate => {
                let taken: HashSet<TransactionId> = self
                    .transactions
                    .iter()
                    .map(|transaction| transaction.id)
                    .collect();
                let id = free_id(candidate, &taken);
                tracing::warn!("Next transaction ID is unavailable, using free ID {id}");
                id
            }
        };

        self.next_id = id.checked_add(1);

        id
    }

    fn persist_or_log(&mut self) {
        if let Err(error) = self.persist() {
            tracing::error!("Could not save transactions: {error}");
        }
    }
}
