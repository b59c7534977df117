//! Defines the core data model for transactions and its persisted JSON format.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created through [TransactionStore::add](crate::transaction::TransactionStore::add),
/// which assigns the ID. The text is non-empty once trimmed and the amount is
/// a finite, non-zero number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text label describing what the transaction was for.
    pub text: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    ///
    /// # Examples
    /// - `5000.00` - Salary
    /// - `-4.50` - Coffee
    /// - `-1200.00` - Rent payment
    pub amount: f64,
}

impl Transaction {
    /// Whether the transaction is income, i.e. has a positive amount.
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

/// A transaction as it appears in persisted data.
///
/// Every field is optional so that blobs written by older or newer versions
/// of the app still load.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredTransaction {
    id: Option<TransactionId>,
    text: Option<String>,
    amount: Option<f64>,
}

/// Serialize `transactions` as a JSON array of `{id, text, amount}` objects.
///
/// # Errors
/// Returns an [Error::JSONSerializationError] if serde fails to encode the list.
pub fn serialize_transactions(transactions: &[Transaction]) -> Result<String, Error> {
    serde_json::to_string(transactions)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))
}

/// Parse a JSON array of transactions from persisted data.
///
/// Entries without usable text or amount are dropped, as are entries whose ID
/// duplicates an earlier entry. Entries without an ID are given IDs after the
/// largest ID in the blob. The order of the remaining entries is kept.
///
/// # Errors
/// Returns an [Error::JSONDeserializationError] if `raw` is not a JSON array
/// of objects.
pub fn deserialize_transactions(raw: &str) -> Result<Vec<Transaction>, Error> {
    let stored: Vec<StoredTransaction> = serde_json::from_str(raw)
        .map_err(|error| Error::JSONDeserializationError(error.to_string()))?;

    let mut taken_ids: HashSet<TransactionId> =
        stored.iter().filter_map(|entry| entry.id).collect();
    let mut next_id = taken_ids
        .iter()
        .max()
        .map_or(Some(1), |max_id| max_id.checked_add(1));
    let mut seen_ids = HashSet::with_capacity(stored.len());
    let mut transactions = Vec::with_capacity(stored.len());

    for (index, entry) in stored.into_iter().enumerate() {
        let text = entry.text.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            tracing::warn!("Dropping stored transaction #{index}: text is missing or empty");
            continue;
        }

        let amount = match entry.amount {
            Some(amount) if amount.is_finite() && amount != 0.0 => amount,
            amount => {
                tracing::warn!("Dropping stored transaction #{index}: invalid amount {amount:?}");
                continue;
            }
        };

        let id = match entry.id {
            Some(id) => id,
            None => {
                let id = free_id(next_id, &taken_ids);
                taken_ids.insert(id);
                next_id = id.checked_add(1);
                id
            }
        };

        if !seen_ids.insert(id) {
            tracing::warn!("Dropping stored transaction #{index}: duplicate ID {id}");
            continue;
        }

        transactions.push(Transaction {
            id,
            text: text.to_owned(),
            amount,
        });
    }

    Ok(transactions)
}

/// Get `candidate` if no transaction uses it yet, otherwise the smallest
/// positive ID not in `taken`.
///
/// `candidate` is `None` once the ID counter has run past [TransactionId::MAX].
pub(super) fn free_id(
    candidate: Option<TransactionId>,
    taken: &HashSet<TransactionId>,
) -> TransactionId {
    match candidate {
        Some(id) if !taken.contains(&id) => id,
        _ => (1..=TransactionId::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or(TransactionId::MIN),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod serialization_tests {
    use crate::{
        Error,
        transaction::{Transaction, deserialize_transactions, serialize_transactions},
    };

    fn transaction(id: i64, text: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            text: text.to_owned(),
            amount,
        }
    }

    #[test]
    fn serializes_fields_in_persisted_format() {
        let transactions = vec![transaction(1, "Salary", 5000.0)];

        let json = serialize_transactions(&transactions).unwrap();

        assert_eq!(json, r#"[{"id":1,"text":"Salary","amount":5000.0}]"#);
    }

    #[test]
    fn round_trip_preserves_list() {
        let want = vec![
            transaction(1, "Salary", 5000.0),
            transaction(2, "Rent", -1200.0),
            transaction(7, "Coffee", -4.5),
        ];

        let got = deserialize_transactions(&serialize_transactions(&want).unwrap()).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn loads_browser_data_with_integer_amounts() {
        let raw = r#"[{"id":1718000000000,"text":"Lunch","amount":-12},{"id":1718000000500,"text":"Pay","amount":300}]"#;

        let got = deserialize_transactions(raw).unwrap();

        assert_eq!(
            got,
            vec![
                transaction(1718000000000, "Lunch", -12.0),
                transaction(1718000000500, "Pay", 300.0),
            ]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = r#"[{"id":3,"text":"Gift","amount":20,"category":"misc"}]"#;

        let got = deserialize_transactions(raw).unwrap();

        assert_eq!(got, vec![transaction(3, "Gift", 20.0)]);
    }

    #[test]
    fn assigns_ids_to_entries_without_one() {
        let raw = r#"[{"id":5,"text":"A","amount":1},{"text":"B","amount":2},{"text":"C","amount":3}]"#;

        let got = deserialize_transactions(raw).unwrap();

        let ids: Vec<_> = got.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn drops_invalid_and_duplicate_entries() {
        let raw = r#"[
            {"id":1,"text":"Valid","amount":10},
            {"id":2,"text":"   ","amount":10},
            {"id":3,"amount":10},
            {"id":4,"text":"Zero","amount":0},
            {"id":5,"text":"No amount"},
            {"id":1,"text":"Duplicate","amount":10}
        ]"#;

        let got = deserialize_transactions(raw).unwrap();

        assert_eq!(got, vec![transaction(1, "Valid", 10.0)]);
    }

    #[test]
    fn trims_stored_text() {
        let raw = r#"[{"id":1,"text":"  Bus fare ","amount":-3}]"#;

        let got = deserialize_transactions(raw).unwrap();

        assert_eq!(got[0].text, "Bus fare");
    }

    #[test]
    fn rejects_malformed_json() {
        let result = deserialize_transactions("{not json");

        assert!(matches!(result, Err(Error::JSONDeserializationError(_))));
    }
}
