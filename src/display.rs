/// Terminal rendering of transaction collections
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

use crate::transactions::Transactions;

pub const NO_TRANSACTIONS: &str = "No transactions";

pub fn transactions_table(transactions: &Transactions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Created",
            "Direction",
            "Amount",
            "Currency",
            "Balance",
            "Narrative",
        ]);

    for summary in transactions {
        table.add_row(vec![
            Cell::new(&summary.created),
            Cell::new(&summary.direction),
            Cell::new(summary.amount).set_alignment(CellAlignment::Right),
            Cell::new(&summary.currency),
            Cell::new(summary.balance).set_alignment(CellAlignment::Right),
            Cell::new(&summary.narrative),
        ]);
    }

    table
}

/// Table text, or a placeholder when there is nothing to show
pub fn render_transactions(transactions: Option<&Transactions>) -> String {
    match transactions {
        Some(transactions) if !transactions.is_empty() => {
            transactions_table(transactions).to_string()
        }
        _ => NO_TRANSACTIONS.to_string(),
    }
}
