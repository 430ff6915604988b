use crate::{Board, FilterCriteria, Stage, format_currency, visible};

use serde::Serialize;

/// Count and value of the visible cards in one column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub stage: Stage,
    pub title: &'static str,
    pub count: usize,
    pub total_amount: f64,
    pub total_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub columns: Vec<ColumnSummary>,
    pub total_count: usize,
    pub total_amount: f64,
    pub total_formatted: String,
}

impl BoardSummary {
    /// Summarize what the board shows under the given filters
    pub fn compute(board: &Board, filters: &FilterCriteria, search_query: &str) -> Self {
        let columns: Vec<ColumnSummary> = board
            .columns()
            .map(|column| {
                let deals = visible(&column.deal_ids, board.deals(), filters, search_query);
                let total_amount: f64 = deals.iter().map(|deal| deal.amount).sum();
                ColumnSummary {
                    stage: column.id,
                    title: column.title,
                    count: deals.len(),
                    total_amount,
                    total_formatted: format_currency(total_amount),
                }
            })
            .collect();

        let total_count = columns.iter().map(|c| c.count).sum();
        let total_amount: f64 = columns.iter().map(|c| c.total_amount).sum();

        Self {
            columns,
            total_count,
            total_amount,
            total_formatted: format_currency(total_amount),
        }
    }
}
