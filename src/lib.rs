//! # Keysort
//!
//! `keysort` orders a sequence by a key derived from each element, without
//! mutating the source sequence.
//!
//! The motivating shape is "sort the same list twice, by two different keys":
//! the source is borrowed, keys are projected by a caller-supplied closure, and
//! every sort allocates its own output. The sort is **stable** — elements whose
//! keys compare equal keep their relative input order — so repeated sorts of
//! pre-sorted or tied data are deterministic.
//!
//! ## Key Features
//!
//! - **Copy-on-sort**: the input slice is never touched; each call returns a
//!   freshly allocated, sorted `Vec`.
//! - **Keys as first-class functions**: any `FnMut(&T) -> K` with `K: Ord`
//!   works; elements themselves never need to be comparable.
//! - **Single extraction per element**: keys are computed once up front, not
//!   once per comparison, so expensive projections stay O(n).
//! - **Fail-fast fallible keys**: [`try_sorted_by`] aborts on the first
//!   extractor error and never yields a partially sorted result.
//!
//! ## Usage
//!
//! ### Closure keys
//!
//! ```rust
//! use keysort::keyed;
//!
//! #[derive(Clone)]
//! struct Car {
//!     brand: &'static str,
//!     model: &'static str,
//!     price: u64,
//! }
//!
//! let cars = vec![
//!     Car { brand: "citroen", model: "ds3", price: 500050 },
//!     Car { brand: "citroen", model: "ds4", price: 400050 },
//!     Car { brand: "citroen", model: "ds5", price: 300050 },
//! ];
//!
//! let by_model = keyed(&cars).by(|car| car.model);
//! let by_price = keyed(&cars).by(|car| car.price);
//!
//! assert_eq!(by_model[0].model, "ds3");
//! assert_eq!(by_price[0].model, "ds5");
//! ```
//!
//! ### Natural keys
//!
//! Types with one obvious ordering can implement [`SortKey`] instead of
//! passing the same closure at every call site.
//!
//! ```rust
//! use keysort::{sorted, SortKey};
//!
//! #[derive(Clone)]
//! struct Author {
//!     name: String,
//!     year: i32,
//! }
//!
//! impl SortKey for Author {
//!     type Key = i32;
//!
//!     fn sort_key(&self) -> i32 {
//!         self.year
//!     }
//! }
//!
//! let authors = vec![
//!     Author { name: "Orwell".to_string(), year: 1949 },
//!     Author { name: "Shelley".to_string(), year: 1818 },
//! ];
//!
//! let chronological = sorted(&authors);
//! assert_eq!(chronological[0].name, "Shelley");
//! ```
//!
//! ## Performance Characteristics
//!
//! - O(n log n) comparisons via the standard stable sort, run over a decorated
//!   `(key, index)` vector.
//! - One key extraction per element, in input order.
//! - Memory overhead: the decorated vector plus the cloned output. Use
//!   [`sort_indices_by`] to get the permutation alone when cloning elements is
//!   unwanted.
//!
//! Keys must provide a consistent total order (`K: Ord`). Floating-point keys
//! need a caller-supplied total-order wrapper such as `f64::total_cmp` behind a
//! newtype.

pub mod algo;
pub mod core;
pub use algo::{
    sort_indices_by, sorted, sorted_by, sorted_by_desc, try_sort_indices_by, try_sorted_by,
};
pub use core::{Keyed, SortKey, keyed};

pub mod prelude {
    pub use crate::algo::{
        sort_indices_by, sorted, sorted_by, sorted_by_desc, try_sort_indices_by, try_sorted_by,
    };
    pub use crate::core::{Keyed, SortKey, keyed};
}
