use std::ops::{Index, IndexMut};

use meshmend_common::ArrayIndex;

pub mod attribute;

/// Three corners of a face, as indices into a vertex set.
///
/// Corners wind counter-clockwise when viewed from the front.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<Idx = u16>(pub [Idx; 3]);

// triangles are written back to hosts as packed index triples
static_assertions::const_assert_eq!(std::mem::size_of::<Triangle<u16>>(), 6);
static_assertions::const_assert_eq!(std::mem::size_of::<Triangle<u32>>(), 12);

impl<Idx: ArrayIndex> Triangle<Idx> {
    #[inline]
    pub fn new(a: Idx, b: Idx, c: Idx) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn corners(&self) -> &[Idx; 3] {
        &self.0
    }

    #[inline]
    pub fn corners_mut(&mut self) -> &mut [Idx; 3] {
        &mut self.0
    }

    /// Reverse the winding order of `self`.
    #[inline]
    pub fn flip(&mut self) {
        self.0.swap(1, 2);
    }

    /// Whether two or more corners of `self` share a vertex, i.e. the face has no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.0;
        a == b || b == c || c == a
    }

    /// Whether `self` and `other` describe the same face with the same winding; that is, whether
    /// one is a rotation of the other.
    pub fn same_face(&self, other: &Self) -> bool {
        let [a, b, c] = self.0;
        let r = other.0;
        (r == [a, b, c]) || (r == [c, a, b]) || (r == [b, c, a])
    }
}

impl<Idx> Index<usize> for Triangle<Idx> {
    type Output = Idx;

    #[inline]
    fn index(&self, corner: usize) -> &Self::Output {
        &self.0[corner]
    }
}

impl<Idx> IndexMut<usize> for Triangle<Idx> {
    #[inline]
    fn index_mut(&mut self, corner: usize) -> &mut Self::Output {
        &mut self.0[corner]
    }
}

impl<Idx> From<[Idx; 3]> for Triangle<Idx> {
    #[inline]
    fn from(corners: [Idx; 3]) -> Self {
        Self(corners)
    }
}

/// A triangle strip: each vertex after the second forms a face with the two before it.
pub type Strip<Idx = u16> = Vec<Idx>;
