//! Rewriting index-referencing structures through an old→new vertex mapping.

use bitvec::slice::BitSlice;
use hedron::{
    primitive::{Strip, Triangle},
    skin::BoneWeights,
};
use meshmend_common::ArrayIndex;

/// A partial function from old vertex indices to new vertex indices.
///
/// An old index with no entry denotes a vertex which was removed (or merged into another).
///
/// # Invariants
///
/// * Every old index is `< self.domain_len()`; lookups outside the domain have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap<Idx> {
    targets: Vec<Option<Idx>>,
}

impl<Idx: ArrayIndex> IndexMap<Idx> {
    /// Construct a mapping over `0..domain_len` with no entries.
    pub fn empty(domain_len: usize) -> Self {
        Self {
            targets: vec![None; domain_len],
        }
    }

    /// Construct a mapping which assigns consecutive new indices to each kept old index, in
    /// ascending order of old index; the first kept index maps to 0, the next to 1, etc.
    pub fn from_keep(keep: &BitSlice) -> Self {
        let mut next = 0;
        let targets = keep
            .iter()
            .by_vals()
            .map(|kept| {
                kept.then(|| {
                    let new = Idx::from_index(next);
                    next += 1;
                    new
                })
            })
            .collect();
        Self { targets }
    }

    /// Map `old` to `new`, returning the previous entry for `old`.
    ///
    /// # Panics
    ///
    /// * `old` >= `self.domain_len()`
    pub fn insert(&mut self, old: usize, new: Idx) -> Option<Idx> {
        self.targets[old].replace(new)
    }

    /// The new index of `old`, if it has one.
    #[inline]
    pub fn get(&self, old: Idx) -> Option<Idx> {
        self.targets.get(old.to_index()).copied().flatten()
    }

    /// The size of the old index space this mapping covers.
    #[inline]
    pub fn domain_len(&self) -> usize {
        self.targets.len()
    }

    /// The number of old indices with an entry.
    pub fn len(&self) -> usize {
        self.targets.iter().filter(|t| t.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.iter().all(Option::is_none)
    }

    /// Iterate through `(old, new)` pairs in ascending order of old index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Idx)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(old, new)| new.map(|new| (old, new)))
    }

    /// Rewrite each mapped corner of each triangle in place. Unmapped corners are left as-is.
    ///
    /// Returns the number of corners changed.
    pub fn remap_triangles(&self, triangles: &mut [Triangle<Idx>]) -> usize {
        triangles
            .iter_mut()
            .flat_map(|t| t.corners_mut().iter_mut())
            .map(|i| self.remap_one(i))
            .filter(|&changed| changed)
            .count()
    }

    /// Rewrite each mapped element of each strip in place. Unmapped elements are left as-is.
    ///
    /// Returns the number of elements changed.
    pub fn remap_strips(&self, strips: &mut [Strip<Idx>]) -> usize {
        strips
            .iter_mut()
            .flat_map(|s| s.iter_mut())
            .map(|i| self.remap_one(i))
            .filter(|&changed| changed)
            .count()
    }

    /// Rewrite the vertex index of every weight in place, dropping weights whose vertex has no
    /// entry.
    ///
    /// Returns the number of weights dropped.
    pub fn remap_bones(&self, bones: &mut [BoneWeights<Idx>]) -> usize {
        let mut dropped = 0;
        for bone in bones {
            let before = bone.weights.len();
            bone.weights.retain_mut(|w| match self.get(w.index) {
                Some(new) => {
                    w.index = new;
                    true
                }
                None => false,
            });
            dropped += before - bone.weights.len();
        }
        dropped
    }

    #[inline]
    fn remap_one(&self, i: &mut Idx) -> bool {
        match self.get(*i) {
            Some(new) if new != *i => {
                *i = new;
                true
            }
            _ => false,
        }
    }
}
