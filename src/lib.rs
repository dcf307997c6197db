//! `sequence-ops` provides eager, single-pass `map`, `filter` and `reduce` over borrowed slices.
//!
//! The primary entrypoints live in [`processing`]. Each operation comes in an element-only and an
//! index-aware form, plus a fallible `try_` form whose callback returns `Result`.
//!
//! ## Guarantees
//!
//! - The input slice is only borrowed; it is never resized, reordered or mutated.
//! - Output order always follows input order.
//! - Callbacks run exactly once per element, in ascending index order.
//! - Index-aware callbacks receive the element's position in the *input* slice. For
//!   [`processing::filter_indexed`] this is the position before filtering.
//! - [`processing::reduce`] starts from `Default::default()`, so an empty slice yields the
//!   default accumulator rather than an error.
//! - A failing callback (panic or `Err`) ends the call with no partial output.
//!
//! ## Quick example
//!
//! ```rust
//! use sequence_ops::processing::{filter, map, reduce};
//!
//! let values = vec![3_i32, 8, 1, 6];
//! let big = filter(&values, |v| *v > 2);
//! let doubled = map(&big, |v| v * 2);
//! let sum: i32 = reduce(&doubled, |acc, v| acc + v);
//!
//! assert_eq!(doubled, vec![6, 16, 12]);
//! assert_eq!(sum, 34);
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the sequence operations
//! - [`types`]: the [`types::Person`] record used by the demonstration
//! - [`demo`]: the bar-queue pipeline composing the operations (also shipped as the `bar-queue`
//!   binary)
//! - [`observability`]: stage observer hooks for the demonstration pipeline
//! - [`error`]: error types used by the demonstration

pub mod demo;
pub mod error;
pub mod observability;
pub mod processing;
pub mod types;

pub use error::{DemoError, DemoResult};
