/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  padel_data.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RacketTable   (cache: once per process)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ RacketTable  │  Vec<Racket>, observed bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  filter → sort → summarise → ResultView
///   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
pub mod stats;

pub use error::LoadError;
pub use filter::FilterSpec;
pub use model::{Racket, RacketTable, Rating, SortDirection, SortDirective, SortField, ValueRange};
pub use query::{query, ResultView};
pub use stats::Summary;
