use std::collections::BTreeMap;

use super::model::{Racket, RacketTable, Rating, ValueRange};

// ---------------------------------------------------------------------------
// Filter specification: which rackets the user wants to see
// ---------------------------------------------------------------------------

/// Constraints combined with AND.
///
/// Absent ranges mean "no constraint". The front-end leaves a range out while
/// its slider still spans the attribute's full observed bounds, so an untouched
/// control never excludes a racket. A present range is always applied
/// literally, which lets a user pin a value exactly (e.g. overall `[8, 8]`).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Per-rating range; a rating absent from the map is unconstrained.
    pub ratings: BTreeMap<Rating, ValueRange<i64>>,
    /// Price range; `None` when unconstrained or no bounds could be computed.
    pub price: Option<ValueRange<f64>>,
    /// Whether rackets with an unknown price survive the price predicate.
    pub include_missing_price: bool,
    /// Case-insensitive substring of `name`; empty means no constraint.
    pub name_search: String,
}

impl Default for FilterSpec {
    /// The identity filter: every racket passes.
    fn default() -> Self {
        Self {
            ratings: BTreeMap::new(),
            price: None,
            include_missing_price: true,
            name_search: String::new(),
        }
    }
}

impl FilterSpec {
    pub fn with_rating(mut self, rating: Rating, min: i64, max: i64) -> Self {
        self.ratings.insert(rating, ValueRange::new(min, max));
        self
    }

    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price = Some(ValueRange::new(min, max));
        self
    }

    pub fn with_missing_price(mut self, include: bool) -> Self {
        self.include_missing_price = include;
        self
    }

    pub fn with_name_search(mut self, pattern: impl Into<String>) -> Self {
        self.name_search = pattern.into();
        self
    }

    /// Whether a racket passes every predicate.
    pub fn matches(&self, racket: &Racket) -> bool {
        self.ratings_match(racket) && self.price_matches(racket) && self.name_matches(racket)
    }

    fn ratings_match(&self, racket: &Racket) -> bool {
        self.ratings
            .iter()
            .all(|(rating, range)| range.contains(racket.rating(*rating)))
    }

    fn price_matches(&self, racket: &Racket) -> bool {
        match (self.price, racket.price) {
            (Some(range), Some(price)) => range.contains(price),
            (Some(_), None) => self.include_missing_price,
            (None, Some(_)) => true,
            (None, None) => self.include_missing_price,
        }
    }

    fn name_matches(&self, racket: &Racket) -> bool {
        if self.name_search.is_empty() {
            return true;
        }
        // Unnamed rackets fail closed.
        let Some(name) = racket.name.as_deref() else {
            return false;
        };
        name.to_lowercase()
            .contains(&self.name_search.to_lowercase())
    }
}

/// Return indices of rackets that pass all active filters, in table order.
pub fn filtered_indices(table: &RacketTable, filters: &FilterSpec) -> Vec<usize> {
    table
        .rackets()
        .iter()
        .enumerate()
        .filter(|(_, racket)| filters.matches(racket))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::racket;

    fn table() -> RacketTable {
        let mut unnamed = racket("", 7, Some(120.0));
        unnamed.name = None;
        let mut power_house = racket("ProMax X2", 9, Some(300.0));
        power_house.power = 10;
        RacketTable::from_rackets(vec![
            racket("Bullpadel Vertex", 8, Some(180.0)),
            racket("Nox AT10", 6, None),
            power_house,
            unnamed,
            racket("Head Delta", 8, Some(90.0)),
        ])
    }

    #[test]
    fn default_spec_passes_everything() {
        let table = table();
        assert_eq!(filtered_indices(&table, &FilterSpec::default()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn full_bounds_ranges_are_a_no_op() {
        let table = table();
        let mut spec = FilterSpec::default();
        for rating in Rating::ALL {
            let bounds = table.rating_bounds(rating).unwrap();
            spec = spec.with_rating(rating, bounds.min, bounds.max);
        }
        let price = table.price_bounds().unwrap();
        let spec = spec.with_price(price.min, price.max);
        assert_eq!(filtered_indices(&table, &spec), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rating_range_is_inclusive() {
        let table = table();
        let spec = FilterSpec::default().with_rating(Rating::Overall, 8, 9);
        assert_eq!(filtered_indices(&table, &spec), vec![0, 2, 4]);

        let spec = FilterSpec::default().with_rating(Rating::Power, 10, 10);
        assert_eq!(filtered_indices(&table, &spec), vec![2]);
    }

    #[test]
    fn missing_price_follows_include_flag_under_a_range() {
        let table = table();
        let spec = FilterSpec::default().with_price(100.0, 200.0);
        assert_eq!(filtered_indices(&table, &spec), vec![0, 1, 3]);

        let spec = spec.with_missing_price(false);
        assert_eq!(filtered_indices(&table, &spec), vec![0, 3]);

        // Bounds never matter for the missing-price racket.
        let spec = FilterSpec::default().with_price(1_000.0, 2_000.0);
        assert_eq!(filtered_indices(&table, &spec), vec![1]);
    }

    #[test]
    fn missing_price_excluded_without_range_when_flag_off() {
        let table = table();
        let spec = FilterSpec::default().with_missing_price(false);
        assert_eq!(filtered_indices(&table, &spec), vec![0, 2, 3, 4]);
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let table = table();
        let spec = FilterSpec::default().with_name_search("pro");
        assert_eq!(filtered_indices(&table, &spec), vec![2]);

        let spec = FilterSpec::default().with_name_search("DELTA");
        assert_eq!(filtered_indices(&table, &spec), vec![4]);
    }

    #[test]
    fn unnamed_racket_never_matches_a_search() {
        let table = table();
        // Every named racket contains "a"; the unnamed one must still be dropped.
        let spec = FilterSpec::default().with_name_search("a");
        assert!(!filtered_indices(&table, &spec).contains(&3));
    }

    #[test]
    fn inverted_range_yields_empty_result() {
        let table = table();
        let spec = FilterSpec::default().with_rating(Rating::Overall, 9, 6);
        assert!(filtered_indices(&table, &spec).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let table = table();
        let spec = FilterSpec::default()
            .with_rating(Rating::Overall, 8, 8)
            .with_price(50.0, 150.0)
            .with_name_search("head");
        assert_eq!(filtered_indices(&table, &spec), vec![4]);
    }
}
