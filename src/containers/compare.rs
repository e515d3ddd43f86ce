//! Equality and ordering adapters shared by the containers
//!
//! Value-based operations (`remove`, `contains`, `index_of`, `compact`) use
//! `PartialEq` as the structural default; every ordering-based operation takes
//! an explicit 3-way comparator.

use std::cmp::Ordering;

/// Predicate matching items structurally equal to `value`
#[inline]
pub fn eq_to<E: PartialEq>(value: &E) -> impl Fn(&E) -> bool + '_ {
    move |item| item == value
}

/// Which end of the order `extremum_by` looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Smallest element
    Min,
    /// Largest element
    Max,
}

/// Return the first extremal element of `iter` under `cmp`.
///
/// When several elements compare equal to the extremum the earliest one wins,
/// for both `Min` and `Max`.
pub fn extremum_by<'a, E, I, F>(iter: I, mut cmp: F, want: Extremum) -> Option<&'a E>
where
    I: IntoIterator<Item = &'a E>,
    F: FnMut(&E, &E) -> Ordering,
{
    let replace_on = match want {
        Extremum::Min => Ordering::Less,
        Extremum::Max => Ordering::Greater,
    };

    let mut iter = iter.into_iter();
    let mut best = iter.next()?;
    for item in iter {
        if cmp(item, best) == replace_on {
            best = item;
        }
    }
    Some(best)
}
