//! Core traits and types for Keysort.
//!
//! This module defines:
//! - [`SortKey`]: the trait users implement for types with a natural sort key.
//! - [`Keyed`]: a transient, borrowing handle for the fluent `keyed(&xs).by(..)`
//!   call shape.

/// A type with an intrinsic sort key.
///
/// Implementing `SortKey` lets a type be sorted through [`crate::sorted`]
/// without repeating the same key closure at every call site. The key is
/// returned by value and must carry a total order (`Ord`); it is extracted
/// once per element per sort.
///
/// # Examples
///
/// ```
/// use keysort::core::SortKey;
///
/// struct Reading {
///     sensor: String,
///     micros: u64,
/// }
///
/// impl SortKey for Reading {
///     type Key = u64;
///
///     fn sort_key(&self) -> u64 {
///         self.micros
///     }
/// }
/// ```
pub trait SortKey {
    /// The derived key this type is ordered by.
    type Key: Ord;

    /// Projects the sort key out of `self`.
    fn sort_key(&self) -> Self::Key;
}

macro_rules! identity_sort_key {
    ($($t:ty),*) => {
        $(
            impl SortKey for $t {
                type Key = $t;

                fn sort_key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

// Scalars are their own key.
identity_sort_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char
);

// Strings clone into their key; prefer a closure key (`keyed(..).by(|s| ..)`)
// when the allocation matters.
impl SortKey for String {
    type Key = String;

    fn sort_key(&self) -> String {
        self.clone()
    }
}

/// A transient, borrowing sorter over a slice of `T`.
///
/// Created by [`keyed`]; holds the borrow only for the duration of the call
/// chain and produces a new `Vec` on every sort, so one source can be sorted
/// several times under different keys:
///
/// ```
/// use keysort::keyed;
///
/// let words = ["consequences", "happiness", "knowledge"];
///
/// let alphabetical = keyed(&words).by(|w| *w);
/// let shortest_first = keyed(&words).by(|w| w.len());
///
/// assert_eq!(alphabetical[0], "consequences");
/// assert_eq!(shortest_first[0], "happiness");
/// assert_eq!(words[0], "consequences"); // source untouched
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Keyed<'a, T> {
    items: &'a [T],
}

/// Wraps a slice for keyed sorting.
pub fn keyed<T>(items: &[T]) -> Keyed<'_, T> {
    Keyed { items }
}

impl<'a, T: Clone> Keyed<'a, T> {
    /// Returns a new `Vec` sorted ascending by `key_of`. Stable.
    pub fn by<K, F>(self, key_of: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        crate::algo::sorted_by(self.items, key_of)
    }

    /// Returns a new `Vec` sorted descending by `key_of`. Stable: elements
    /// with equal keys keep their input order.
    pub fn by_desc<K, F>(self, key_of: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        crate::algo::sorted_by_desc(self.items, key_of)
    }

    /// Fallible rendition of [`Keyed::by`]: the first extractor error aborts
    /// the sort and is returned as-is, with no partial result.
    pub fn try_by<K, E, F>(self, key_of: F) -> Result<Vec<T>, E>
    where
        K: Ord,
        F: FnMut(&T) -> Result<K, E>,
    {
        crate::algo::try_sorted_by(self.items, key_of)
    }
}

impl<'a, T> Keyed<'a, T> {
    /// Returns the stable ascending permutation of indices, without cloning
    /// any element.
    pub fn indices_by<K, F>(self, key_of: F) -> Vec<usize>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        crate::algo::sort_indices_by(self.items, key_of)
    }
}
