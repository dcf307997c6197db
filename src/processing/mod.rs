//! Eager, single-pass sequence operations.
//!
//! Every operation borrows its input slice, never mutates it, and returns freshly allocated
//! output. Callbacks run exactly once per element in ascending index order.
//!
//! Currently implemented:
//!
//! - [`map()`] / [`map_indexed()`]: one output element per input element
//! - [`filter()`] / [`filter_indexed()`]: keep elements matching a predicate
//! - [`reduce()`]: fold into a default-initialized accumulator
//!
//! Each has a `try_` twin whose callback returns `Result`; the first error is handed back to the
//! caller as-is and no partial output is returned.
//!
//! ## Example: filter → filter (indexed) → map (indexed)
//!
//! ```rust
//! use sequence_ops::processing::{filter, filter_indexed, map_indexed, reduce};
//!
//! let ages = vec![22_i64, 21, 21, 24, 18, 21];
//!
//! let adults = filter(&ages, |age| *age >= 21);
//! let every_other = filter_indexed(&adults, |_, idx| idx % 2 == 0);
//! let labels = map_indexed(&every_other, |age, idx| format!("{}:{age}", idx + 1));
//! assert_eq!(labels, vec!["1:22", "2:21", "3:21"]);
//!
//! let total: i64 = reduce(&ages, |acc, age| acc + age);
//! assert_eq!(total, 127);
//! ```

pub mod filter;
pub mod map;
pub mod reduce;

pub use filter::{filter, filter_indexed, try_filter, try_filter_indexed};
pub use map::{map, map_indexed, try_map, try_map_indexed};
pub use reduce::{reduce, try_reduce};
