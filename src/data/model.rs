use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rating – the six integer attributes every racket carries
// ---------------------------------------------------------------------------

/// One of the integer rating columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Overall,
    Power,
    Control,
    Rebound,
    Omgang,
    Sweetspot,
}

impl Rating {
    /// All ratings in column order.
    pub const ALL: [Rating; 6] = [
        Rating::Overall,
        Rating::Power,
        Rating::Control,
        Rating::Rebound,
        Rating::Omgang,
        Rating::Sweetspot,
    ];

    /// Column name as it appears in the source file.
    pub fn column(self) -> &'static str {
        match self {
            Rating::Overall => "overall",
            Rating::Power => "power",
            Rating::Control => "control",
            Rating::Rebound => "rebound",
            Rating::Omgang => "omgang",
            Rating::Sweetspot => "sweetspot",
        }
    }

    /// Human-readable label for widgets and cards.
    pub fn label(self) -> &'static str {
        match self {
            Rating::Overall => "Overall",
            Rating::Power => "Power",
            Rating::Control => "Control",
            Rating::Rebound => "Rebound",
            Rating::Omgang => "Omgang",
            Rating::Sweetspot => "Sweet Spot",
        }
    }
}

// ---------------------------------------------------------------------------
// Racket – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Racket {
    /// Display name. Not unique; `None` when the source cell was empty.
    pub name: Option<String>,
    pub overall: i64,
    pub power: i64,
    pub control: i64,
    pub rebound: i64,
    pub omgang: i64,
    pub sweetspot: i64,
    /// Price in whole currency units; `None` means "price unknown", never zero.
    pub price: Option<f64>,
}

impl Racket {
    /// Value of an integer rating column.
    pub fn rating(&self, rating: Rating) -> i64 {
        match rating {
            Rating::Overall => self.overall,
            Rating::Power => self.power,
            Rating::Control => self.control,
            Rating::Rebound => self.rebound,
            Rating::Omgang => self.omgang,
            Rating::Sweetspot => self.sweetspot,
        }
    }

    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }

    /// Name for display; missing names render as an empty string.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// ValueRange – inclusive [min, max]
// ---------------------------------------------------------------------------

/// Inclusive range. An inverted range (`min > max`) is legal and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Widen the range so it also covers `value`.
    fn extend(self, value: T) -> Self {
        Self {
            min: if value < self.min { value } else { self.min },
            max: if value > self.max { value } else { self.max },
        }
    }
}

impl<T: fmt::Display> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// SortField / SortDirection / SortDirective
// ---------------------------------------------------------------------------

/// Attribute a result can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Price,
    #[serde(untagged)]
    Rating(Rating),
}

impl SortField {
    /// Options in the order the sort selector lists them.
    pub const ALL: [SortField; 8] = [
        SortField::Rating(Rating::Overall),
        SortField::Price,
        SortField::Rating(Rating::Power),
        SortField::Rating(Rating::Control),
        SortField::Rating(Rating::Rebound),
        SortField::Rating(Rating::Omgang),
        SortField::Rating(Rating::Sweetspot),
        SortField::Name,
    ];

    pub fn column(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Rating(r) => r.column(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.column().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort field: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

/// Which attribute to order by and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl Default for SortDirective {
    /// Best overall rating first.
    fn default() -> Self {
        Self::descending(SortField::Rating(Rating::Overall))
    }
}

// ---------------------------------------------------------------------------
// RacketTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full catalog, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RacketTable {
    rackets: Vec<Racket>,
}

impl RacketTable {
    pub fn from_rackets(rackets: Vec<Racket>) -> Self {
        Self { rackets }
    }

    pub fn rackets(&self) -> &[Racket] {
        &self.rackets
    }

    pub fn get(&self, index: usize) -> Option<&Racket> {
        self.rackets.get(index)
    }

    /// Number of rackets.
    pub fn len(&self) -> usize {
        self.rackets.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rackets.is_empty()
    }

    /// Observed `[min, max]` of a rating, `None` for an empty table.
    pub fn rating_bounds(&self, rating: Rating) -> Option<ValueRange<i64>> {
        self.rackets
            .iter()
            .map(|r| r.rating(rating))
            .fold(None, |acc: Option<ValueRange<i64>>, v| {
                Some(acc.map_or(ValueRange::new(v, v), |range| range.extend(v)))
            })
    }

    /// Observed `[min, max]` of present prices, `None` when no racket has one.
    pub fn price_bounds(&self) -> Option<ValueRange<f64>> {
        self.rackets
            .iter()
            .filter_map(|r| r.price)
            .fold(None, |acc: Option<ValueRange<f64>>, v| {
                Some(acc.map_or(ValueRange::new(v, v), |range| range.extend(v)))
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn racket(name: &str, overall: i64, price: Option<f64>) -> Racket {
        Racket {
            name: Some(name.to_string()),
            overall,
            power: 5,
            control: 5,
            rebound: 5,
            omgang: 5,
            sweetspot: 5,
            price,
        }
    }

    #[test]
    fn bounds_cover_observed_values() {
        let mut strong = racket("Strong", 9, Some(250.0));
        strong.power = 10;
        let table = RacketTable::from_rackets(vec![
            racket("A", 6, None),
            strong,
            racket("C", 7, Some(80.0)),
        ]);

        assert_eq!(table.rating_bounds(Rating::Overall), Some(ValueRange::new(6, 9)));
        assert_eq!(table.rating_bounds(Rating::Power), Some(ValueRange::new(5, 10)));
        assert_eq!(table.price_bounds(), Some(ValueRange::new(80.0, 250.0)));
    }

    #[test]
    fn price_bounds_absent_when_every_price_missing() {
        let table = RacketTable::from_rackets(vec![racket("A", 6, None), racket("B", 7, None)]);
        assert_eq!(table.price_bounds(), None);
        assert!(RacketTable::default().rating_bounds(Rating::Overall).is_none());
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = ValueRange::new(9, 3);
        assert!(!(0..=12).any(|v| range.contains(v)));
        assert!(ValueRange::new(8, 8).contains(8));
    }

    #[test]
    fn sort_field_parses_column_names() {
        assert_eq!("price".parse::<SortField>(), Ok(SortField::Price));
        assert_eq!(
            "SweetSpot".parse::<SortField>(),
            Ok(SortField::Rating(Rating::Sweetspot))
        );
        assert!("weight".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_directive_deserializes_short_direction_names() {
        let directive: SortDirective =
            serde_json::from_str(r#"{"field": "power", "direction": "asc"}"#).unwrap();
        assert_eq!(directive, SortDirective::ascending(SortField::Rating(Rating::Power)));

        let directive: SortDirective =
            serde_json::from_str(r#"{"field": "name", "direction": "descending"}"#).unwrap();
        assert_eq!(directive, SortDirective::descending(SortField::Name));
    }
}
