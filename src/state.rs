use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::{
    query, FilterSpec, LoadError, RacketTable, Rating, ResultView, SortDirective, ValueRange,
};

// ---------------------------------------------------------------------------
// Range selection behind a slider pair
// ---------------------------------------------------------------------------

/// A user-adjustable range inside an attribute's observed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<T> {
    pub bounds: ValueRange<T>,
    pub value: ValueRange<T>,
}

impl<T: PartialOrd + Copy> Selection<T> {
    /// Start out spanning the full bounds.
    pub fn full(bounds: ValueRange<T>) -> Self {
        Self {
            bounds,
            value: bounds,
        }
    }

    /// The range to filter by, or `None` while the selection spans the full bounds.
    pub fn narrowed(&self) -> Option<ValueRange<T>> {
        (self.value != self.bounds).then_some(self.value)
    }

    pub fn reset(&mut self) {
        self.value = self.bounds;
    }
}

/// How results are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (None until a file loads).
    pub table: Option<Arc<RacketTable>>,

    /// Slider selections for each rating.
    pub ratings: BTreeMap<Rating, Selection<i64>>,

    /// Price slider, in whole currency units. None when no racket has a price.
    pub price: Option<Selection<f64>>,

    pub include_missing_price: bool,

    pub name_search: String,

    pub sort: SortDirective,

    default_sort: SortDirective,

    /// Result of the current filters (cached).
    pub view: ResultView,

    pub view_mode: ViewMode,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SortDirective::default())
    }
}

impl AppState {
    pub fn new(default_sort: SortDirective) -> Self {
        Self {
            table: None,
            ratings: BTreeMap::new(),
            price: None,
            include_missing_price: true,
            name_search: String::new(),
            sort: default_sort,
            default_sort,
            view: ResultView::default(),
            view_mode: ViewMode::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded table, reset every control to its full bounds.
    pub fn set_table(&mut self, table: Arc<RacketTable>) {
        self.ratings = Rating::ALL
            .into_iter()
            .filter_map(|rating| {
                table
                    .rating_bounds(rating)
                    .map(|bounds| (rating, Selection::full(bounds)))
            })
            .collect();

        // Whole units so the slider never cuts off a fractional extreme.
        self.price = table
            .price_bounds()
            .map(|b| Selection::full(ValueRange::new(b.min.floor(), b.max.ceil())));

        self.table = Some(table);
        self.status_message = None;
        self.reset_filters();
    }

    /// Drop any table and surface the failure to the user.
    pub fn set_load_error(&mut self, err: &LoadError) {
        self.status_message = Some(match err {
            LoadError::NotFound { path } => {
                format!("Please provide {} to use this app", path.display())
            }
            other => format!("Error: {other}"),
        });
        self.table = None;
        self.ratings.clear();
        self.price = None;
        self.view = ResultView::default();
    }

    /// Current widget selections as an engine filter.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            ratings: self
                .ratings
                .iter()
                .filter_map(|(rating, sel)| sel.narrowed().map(|range| (*rating, range)))
                .collect(),
            price: self.price.and_then(|sel| sel.narrowed()),
            include_missing_price: self.include_missing_price,
            name_search: self.name_search.trim().to_string(),
        }
    }

    /// Recompute `view` after a filter or sort change.
    pub fn refresh(&mut self) {
        if let Some(table) = &self.table {
            self.view = query(table, &self.filter_spec(), self.sort);
        }
    }

    /// Put every control back to its default and recompute.
    pub fn reset_filters(&mut self) {
        self.ratings.values_mut().for_each(Selection::reset);
        if let Some(price) = &mut self.price {
            price.reset();
        }
        self.include_missing_price = true;
        self.name_search.clear();
        self.sort = self.default_sort;
        self.refresh();
    }

    /// Observed overall bounds, used to colour rating badges.
    pub fn overall_bounds(&self) -> Option<ValueRange<i64>> {
        self.ratings.get(&Rating::Overall).map(|sel| sel.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::racket;
    use crate::data::SortField;
    use std::path::PathBuf;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_table(Arc::new(RacketTable::from_rackets(vec![
            racket("A", 8, Some(100.0)),
            racket("B", 6, None),
            racket("C", 8, Some(50.5)),
        ])));
        state
    }

    #[test]
    fn untouched_controls_produce_identity_filter() {
        let state = loaded();
        assert_eq!(state.filter_spec(), FilterSpec::default());
        assert_eq!(state.view.indices, vec![0, 2, 1]);
        assert_eq!(state.view.summary.shown_count, 3);
    }

    #[test]
    fn price_slider_spans_whole_units() {
        let state = loaded();
        let price = state.price.unwrap();
        assert_eq!(price.bounds, ValueRange::new(50.0, 100.0));
    }

    #[test]
    fn narrowed_slider_becomes_a_range() {
        let mut state = loaded();
        state.ratings.get_mut(&Rating::Overall).unwrap().value = ValueRange::new(8, 8);
        state.sort = SortDirective::descending(SortField::Price);
        state.refresh();

        let spec = state.filter_spec();
        assert_eq!(spec.ratings.get(&Rating::Overall), Some(&ValueRange::new(8, 8)));
        assert_eq!(spec.price, None);
        assert_eq!(state.view.indices, vec![0, 2]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = loaded();
        state.name_search = "zzz".into();
        state.include_missing_price = false;
        state.refresh();
        assert!(state.view.is_empty());

        state.reset_filters();
        assert_eq!(state.filter_spec(), FilterSpec::default());
        assert_eq!(state.view.summary.shown_count, 3);
    }

    #[test]
    fn missing_file_message_and_no_table() {
        let mut state = loaded();
        state.set_load_error(&LoadError::NotFound {
            path: PathBuf::from("padel_data.csv"),
        });
        assert!(state.table.is_none());
        assert!(state.view.is_empty());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Please provide padel_data.csv to use this app")
        );
    }

    #[test]
    fn all_prices_missing_leaves_no_price_slider() {
        let mut state = AppState::default();
        state.set_table(Arc::new(RacketTable::from_rackets(vec![racket("A", 8, None)])));
        assert!(state.price.is_none());

        state.include_missing_price = false;
        state.refresh();
        assert!(state.view.is_empty());
    }
}
