use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt};

pub mod macros;

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Vertex indices are stored in whatever width the host format uses (usually `u16`), but all
/// bookkeeping happens in `usize`; this is the bridge between the two.
pub trait ArrayIndex: PrimInt + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static {
    /// Convert a `usize` position into this index type.
    ///
    /// Truncates if `index` doesn't fit; callers only ever shrink index spaces, so this doesn't
    /// come up in practice.
    fn from_index(index: usize) -> Self;

    /// Widen this index to a `usize` position.
    #[inline]
    fn to_index(self) -> usize {
        AsPrimitive::<usize>::as_(self)
    }
}

impl<P> ArrayIndex for P
where
    P: PrimInt + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static,
    usize: AsPrimitive<P>,
{
    #[inline]
    fn from_index(index: usize) -> Self {
        index.as_()
    }
}
