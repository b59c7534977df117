//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{
    storage::Storage,
    tracker::ExpenseTracker,
    transaction::{PersistPolicy, TransactionStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expense tracker session shared by all requests.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl AppState {
    /// Create a new [AppState] and load any transactions saved in `storage`.
    ///
    /// Loading happens here, before the router is built, so no request can
    /// change the list before the saved data is in place.
    pub fn new(storage: impl Storage + 'static, persist_policy: PersistPolicy) -> Self {
        let store = TransactionStore::open(storage, persist_policy);

        Self::from_tracker(ExpenseTracker::new(store))
    }

    /// Create a new [AppState] around an existing tracker.
    pub fn from_tracker(tracker: ExpenseTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
