//! Sorting entry points (decorate-sort-undecorate over a derived key).
//!
//! Every function here follows the same plan:
//! 1. Extract one key per element, in input order, into a `(key, index)`
//!    vector (the decoration).
//! 2. Stable-sort the decoration by key alone, so index ties keep input order.
//! 3. Either hand back the index permutation, or gather cloned elements
//!    through it into a fresh output `Vec`.
//!
//! The input slice is never mutated; callers can keep sorting one source under
//! different keys.

use crate::core::SortKey;
use std::cmp::Reverse;
use std::convert::Infallible;

/// Computes the stable ascending permutation of `items` under `key_of`.
///
/// Returns a `Vec<usize>` such that
/// `key_of(&items[indices[i]]) <= key_of(&items[indices[i + 1]])` for every
/// adjacent pair, with equal keys keeping their input order. The elements are
/// only ever passed to `key_of`; nothing is cloned or moved.
///
/// # Examples
///
/// ```
/// use keysort::sort_indices_by;
///
/// let data = ["banana", "apple", "cherry"];
/// let indices = sort_indices_by(&data, |s| *s);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn sort_indices_by<T, K, F>(items: &[T], mut key_of: F) -> Vec<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    match try_sort_indices_by(items, |item| Ok::<K, Infallible>(key_of(item))) {
        Ok(indices) => indices,
        Err(infallible) => match infallible {},
    }
}

/// Fallible rendition of [`sort_indices_by`].
///
/// Keys are extracted in input order; the first `Err` from `key_of` aborts the
/// whole sort and is returned unchanged. No ordering work happens before every
/// extraction has succeeded, so there is never a partially sorted result.
///
/// An empty slice returns an empty permutation without invoking `key_of`.
pub fn try_sort_indices_by<T, K, E, F>(items: &[T], mut key_of: F) -> Result<Vec<usize>, E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    if items.is_empty() {
        return Ok(vec![]);
    }

    let mut decorated: Vec<(K, usize)> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        decorated.push((key_of(item)?, index));
    }

    // Stable sort on the key alone; the carried index is payload, not a
    // tiebreaker, so equal keys keep input order.
    decorated.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(decorated.into_iter().map(|(_, index)| index).collect())
}

/// Sorts `items` ascending by `key_of` into a new `Vec`.
///
/// The input slice is left untouched (copy-on-sort); elements are cloned into
/// the output in sorted order. Stable, O(n log n) comparisons, one key
/// extraction per element.
///
/// # Examples
///
/// ```
/// use keysort::sorted_by;
///
/// let words = vec!["This", "is", "getting", "better"];
/// let by_len = sorted_by(&words, |w| w.len());
///
/// assert_eq!(by_len, vec!["is", "This", "better", "getting"]);
/// assert_eq!(words[0], "This");
/// ```
pub fn sorted_by<T, K, F>(items: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    gather(items, sort_indices_by(items, key_of))
}

/// Sorts `items` descending by `key_of` into a new `Vec`.
///
/// Stable in the same sense as [`sorted_by`]: elements with equal keys keep
/// their relative input order rather than being reversed.
///
/// # Examples
///
/// ```
/// use keysort::sorted_by_desc;
///
/// let words = vec!["This", "is", "getting", "better"];
/// let longest_first = sorted_by_desc(&words, |w| w.len());
///
/// assert_eq!(longest_first[0], "getting");
/// ```
pub fn sorted_by_desc<T, K, F>(items: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sorted_by(items, |item| Reverse(key_of(item)))
}

/// Fallible rendition of [`sorted_by`]: fail-fast on the first extractor
/// error, no partial output.
///
/// # Examples
///
/// ```
/// use keysort::try_sorted_by;
///
/// let numerals = vec!["12", "3", "oops", "7"];
/// let result: Result<Vec<&str>, _> = try_sorted_by(&numerals, |s| s.parse::<u32>());
///
/// assert!(result.is_err());
/// ```
pub fn try_sorted_by<T, K, E, F>(items: &[T], key_of: F) -> Result<Vec<T>, E>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    Ok(gather(items, try_sort_indices_by(items, key_of)?))
}

/// Sorts `items` ascending by their natural key ([`SortKey`]).
///
/// # Examples
///
/// ```
/// use keysort::sorted;
///
/// let primes = vec![11u32, 2, 7, 3, 5];
/// assert_eq!(sorted(&primes), vec![2, 3, 5, 7, 11]);
/// ```
pub fn sorted<T>(items: &[T]) -> Vec<T>
where
    T: SortKey + Clone,
{
    sorted_by(items, |item| item.sort_key())
}

/// Clones elements out of `items` in permutation order.
fn gather<T: Clone>(items: &[T], indices: Vec<usize>) -> Vec<T> {
    indices.into_iter().map(|index| items[index].clone()).collect()
}
