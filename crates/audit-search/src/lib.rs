//! # audit-search
//!
//! Text search and predicate filtering over inventory records.
//!
//! - [`SearchIndex`]: fuzzy + prefix term index over name, id, category, and
//!   subcategory, with per-field boosts
//! - [`filter`]: order-preserving application of [`audit_core::FilterCriteria`]
//! - [`query`]: composition of the two (search first, then filter)

pub mod error;
pub mod filter;
pub mod index;
pub mod query;
mod tokenize;

pub use error::SearchError;
pub use filter::{apply_filters, matches, set_criterion};
pub use index::{IndexField, ScoredMatch, SearchIndex, search};
pub use query::search_records;
