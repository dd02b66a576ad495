use std::cmp::Ordering;

use super::filter::{filtered_indices, FilterSpec};
use super::model::{Racket, RacketTable, SortDirection, SortDirective, SortField};
use super::stats::Summary;

/// Filtered, sorted rows of a table plus their metrics.
///
/// Rows are indices into the table the view was computed from; the table itself
/// is never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    pub indices: Vec<usize>,
    pub summary: Summary,
}

impl ResultView {
    /// Rackets in result order.
    pub fn rackets<'a>(&'a self, table: &'a RacketTable) -> impl Iterator<Item = &'a Racket> + 'a {
        self.indices.iter().filter_map(move |&i| table.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Filter, then sort, then summarise.
pub fn query(table: &RacketTable, filters: &FilterSpec, sort: SortDirective) -> ResultView {
    let mut indices = filtered_indices(table, filters);
    sort_indices(table, &mut indices, sort);
    let summary = Summary::compute(table, &indices);
    log::debug!(
        "query: {} of {} rackets shown, sorted by {} {:?}",
        summary.shown_count,
        summary.total_count,
        sort.field,
        sort.direction
    );
    ResultView { indices, summary }
}

/// Stable sort; rackets missing the key always go last, in either direction.
pub fn sort_indices(table: &RacketTable, indices: &mut [usize], sort: SortDirective) {
    let rackets = table.rackets();
    indices.sort_by(|&a, &b| compare(&rackets[a], &rackets[b], sort));
}

fn compare(a: &Racket, b: &Racket, sort: SortDirective) -> Ordering {
    let ord = match sort.field {
        SortField::Name => match (a.name.as_deref(), b.name.as_deref()) {
            (Some(x), Some(y)) => x.cmp(y),
            (x, y) => return missing_last(x.is_some(), y.is_some()),
        },
        SortField::Price => match (a.price, b.price) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => return missing_last(x.is_some(), y.is_some()),
        },
        SortField::Rating(rating) => a.rating(rating).cmp(&b.rating(rating)),
    };
    match sort.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn missing_last(a_present: bool, b_present: bool) -> Ordering {
    match (a_present, b_present) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::racket;
    use crate::data::model::Rating;

    fn names(table: &RacketTable, view: &ResultView) -> Vec<String> {
        view.rackets(table)
            .map(|r| r.display_name().to_string())
            .collect()
    }

    fn abc() -> RacketTable {
        RacketTable::from_rackets(vec![
            racket("A", 8, Some(100.0)),
            racket("B", 6, None),
            racket("C", 8, Some(50.0)),
        ])
    }

    #[test]
    fn pinned_overall_then_price_descending() {
        let table = abc();
        let filters = FilterSpec::default().with_rating(Rating::Overall, 8, 8);
        let view = query(&table, &filters, SortDirective::descending(SortField::Price));
        assert_eq!(names(&table, &view), ["A", "C"]);
    }

    #[test]
    fn missing_price_sorts_last_ascending() {
        let table = abc();
        let view = query(
            &table,
            &FilterSpec::default(),
            SortDirective::ascending(SortField::Price),
        );
        assert_eq!(names(&table, &view), ["C", "A", "B"]);
    }

    #[test]
    fn missing_price_sorts_last_descending() {
        let table = abc();
        let view = query(
            &table,
            &FilterSpec::default(),
            SortDirective::descending(SortField::Price),
        );
        assert_eq!(names(&table, &view), ["A", "C", "B"]);
    }

    #[test]
    fn missing_name_sorts_last_both_directions() {
        let mut unnamed = racket("", 7, None);
        unnamed.name = None;
        let table = RacketTable::from_rackets(vec![
            unnamed,
            racket("beta", 5, None),
            racket("Alpha", 5, None),
        ]);

        let asc = query(&table, &FilterSpec::default(), SortDirective::ascending(SortField::Name));
        assert_eq!(asc.indices, vec![2, 1, 0]);

        let desc = query(&table, &FilterSpec::default(), SortDirective::descending(SortField::Name));
        assert_eq!(desc.indices, vec![1, 2, 0]);
    }

    #[test]
    fn equal_keys_keep_table_order() {
        let table = RacketTable::from_rackets(vec![
            racket("first", 7, Some(10.0)),
            racket("top", 9, Some(10.0)),
            racket("second", 7, Some(10.0)),
            racket("third", 7, None),
        ]);

        let view = query(
            &table,
            &FilterSpec::default(),
            SortDirective::descending(SortField::Rating(Rating::Overall)),
        );
        assert_eq!(names(&table, &view), ["top", "first", "second", "third"]);

        let view = query(&table, &FilterSpec::default(), SortDirective::ascending(SortField::Price));
        assert_eq!(names(&table, &view), ["first", "top", "second", "third"]);
    }

    #[test]
    fn identity_filter_returns_whole_table_in_order() {
        let rackets = (0..6)
            .map(|i| {
                let price = if i % 2 == 0 { Some(i as f64) } else { None };
                racket(&format!("R{i}"), 5, price)
            })
            .collect();
        let table = RacketTable::from_rackets(rackets);
        let mut filters = FilterSpec::default();
        for rating in Rating::ALL {
            let bounds = table.rating_bounds(rating).unwrap();
            filters = filters.with_rating(rating, bounds.min, bounds.max);
        }
        // Every racket shares the same power value, so stability alone decides.
        let view = query(&table, &filters, SortDirective::ascending(SortField::Rating(Rating::Power)));
        assert_eq!(view.indices, (0..6).collect::<Vec<_>>());
        assert_eq!(view.summary.shown_count, 6);
    }

    #[test]
    fn summary_reflects_filtered_rows_only() {
        let table = abc();
        let filters = FilterSpec::default().with_rating(Rating::Overall, 6, 6);
        let view = query(&table, &filters, SortDirective::default());
        assert_eq!(view.summary.total_count, 3);
        assert_eq!(view.summary.shown_count, 1);
        assert_eq!(view.summary.avg_price, None);
    }

    #[test]
    fn query_leaves_table_untouched() {
        let table = abc();
        let before = table.rackets().to_vec();
        let _ = query(&table, &FilterSpec::default(), SortDirective::ascending(SortField::Price));
        assert_eq!(table.rackets(), before.as_slice());
    }
}
