//! Calculates the income, expense and balance totals for a list of transactions.

use crate::transaction::Transaction;

/// The totals shown in the balance summary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of all positive amounts.
    pub income: f64,
    /// The sum of all negative amounts, this is zero or negative.
    pub expense: f64,
    /// `income + expense`.
    pub balance: f64,
}

impl Totals {
    /// The expense total as a positive number for display.
    pub fn expense_magnitude(&self) -> f64 {
        self.expense.abs()
    }
}

/// Sum `transactions` into income, expense and balance totals.
pub fn aggregate(transactions: &[Transaction]) -> Totals {
    let income: f64 = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .filter(|amount| *amount > 0.0)
        .sum();

    let expense: f64 = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .filter(|amount| *amount < 0.0)
        .sum();

    Totals {
        income,
        expense,
        balance: income + expense,
    }
}

#[cfg(test)]
mod tests {
    use crate::transaction::{Totals, Transaction, aggregate};

    fn transactions(amounts: &[f64]) -> Vec<Transaction> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| Transaction {
                id: i as i64 + 1,
                text: format!("Transaction {i}"),
                amount: *amount,
            })
            .collect()
    }

    #[test]
    fn empty_list_has_zero_totals() {
        assert_eq!(aggregate(&[]), Totals::default());
    }

    #[test]
    fn salary_and_rent() {
        let totals = aggregate(&transactions(&[5000.0, -1200.0]));

        assert_eq!(
            totals,
            Totals {
                income: 5000.0,
                expense: -1200.0,
                balance: 3800.0,
            }
        );
        assert_eq!(totals.expense_magnitude(), 1200.0);
    }

    #[test]
    fn totals_keep_their_signs() {
        let cases: [&[f64]; 4] = [
            &[1.5, 2.25, 3.0],
            &[-1.5, -2.25],
            &[10.0, -0.1, 0.2, -7.3],
            &[-4.5],
        ];

        for amounts in cases {
            let totals = aggregate(&transactions(amounts));

            assert!(totals.income >= 0.0, "income {} for {amounts:?}", totals.income);
            assert!(totals.expense <= 0.0, "expense {} for {amounts:?}", totals.expense);
            assert_eq!(totals.balance, totals.income + totals.expense);
        }
    }

    #[test]
    fn only_income_or_only_expense() {
        let income_only = aggregate(&transactions(&[20.0, 30.0]));
        assert_eq!(income_only.expense, 0.0);
        assert_eq!(income_only.balance, 50.0);

        let expense_only = aggregate(&transactions(&[-20.0, -30.0]));
        assert_eq!(expense_only.income, 0.0);
        assert_eq!(expense_only.balance, -50.0);
    }
}
