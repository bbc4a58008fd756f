//! # Recipe Filtering
//!
//! Translates raw search query parameters into SQL conditions. Every
//! parameter is optional and contributes at most one predicate; predicates
//! combine with AND.
//!
//! ## Query Parameter Examples
//!
//! ```rust,ignore
//! // Case-insensitive title substring
//! GET /recipes/search?title=cake
//!
//! // Exact cuisine
//! GET /recipes/search?cuisine=Italian
//!
//! // Numeric comparisons: <, <=, >, >=, = followed by an unsigned integer
//! GET /recipes/search?rating=>=4
//! GET /recipes/search?total_time=<60
//!
//! // Comparison on the number leading a text value ("389 kcal")
//! GET /recipes/search?calories=<=400
//!
//! // Combined with AND, paginated
//! GET /recipes/search?cuisine=Thai&rating=>=4&page=2&limit=15
//! ```
//!
//! A comparison value that does not match `^(<=|>=|<|>|=)(\d+)$` is dropped
//! rather than rejected: `rating=>=4.5` applies no rating filter at all.
//!
//! ## Main Components
//!
//! - [`parse_comparison`]: comparison string to [`FilterPredicate`]
//! - [`DerivedField`]: numeric values computed per row from text columns
//! - [`build_filters`] / [`build_condition`]: parameters to a combined condition

pub mod comparison;
pub mod derived;
pub mod search;

pub use comparison::{ComparisonOperator, FilterPredicate, parse_comparison};
pub use derived::{DerivedField, leading_integer};
pub use search::{NumericField, RecipeFilter, build_condition, build_filters};
