pub mod ui;

use contracts::domain::a014_transaction::aggregate::{Transaction, TransactionStatus};

use crate::shared::export::Exportable;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::resource::Resource;

/// Payment transactions; the console only lists and exports them.
pub struct Transactions;

impl Resource for Transactions {
    type Item = Transaction;

    const PATH: &'static str = "transaction";
    const TAB_KEY: &'static str = "a014_transaction";
    const TITLE: &'static str = "Transactions";

    fn item_id(item: &Transaction) -> String {
        item.id.clone()
    }
}

impl Exportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec![
            "Transaction",
            "Order",
            "Customer",
            "Amount",
            "Method",
            "Status",
            "Date",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.transaction_id.clone(),
            self.order_number.clone(),
            self.customer_name.clone(),
            format!("{:.2}", self.amount),
            self.payment_method.clone(),
            self.status.label().to_string(),
            self.created_at.as_deref().map(format_datetime).unwrap_or_default(),
        ]
    }
}

/// Sum of completed transactions.
pub fn settled_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.status == TransactionStatus::Completed)
        .map(|t| t.amount)
        .sum()
}

/// `settled_total` formatted for the list header.
pub fn settled_label(transactions: &[Transaction]) -> String {
    format!("Completed on this page: {}", format_money(settled_total(transactions)))
}
