use super::model::RacketTable;

/// Headline metrics for a filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Size of the whole table, regardless of filters.
    pub total_count: usize,
    pub shown_count: usize,
    pub with_price_count: usize,
    pub without_price_count: usize,
    /// Mean of the present prices. `None` when nothing is shown or no shown
    /// racket has a price.
    pub avg_price: Option<f64>,
}

impl Summary {
    /// Compute metrics over the rackets at `indices`.
    pub fn compute(table: &RacketTable, indices: &[usize]) -> Self {
        let prices: Vec<f64> = indices
            .iter()
            .filter_map(|&i| table.get(i))
            .filter_map(|r| r.price)
            .collect();

        let avg_price = if prices.is_empty() {
            None
        } else {
            Some(prices.iter().sum::<f64>() / prices.len() as f64)
        };

        Self {
            total_count: table.len(),
            shown_count: indices.len(),
            with_price_count: prices.len(),
            without_price_count: indices.len() - prices.len(),
            avg_price,
        }
    }
}
