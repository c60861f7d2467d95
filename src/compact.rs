//! Shrinking a vertex set down to a subset of its vertices.

use bitvec::slice::BitSlice;
use hedron::primitive::attribute::AttributeArrays;
use meshmend_common::ArrayIndex;

use crate::{remap::IndexMap, Error, Extent, Result};

/// The result of [compact]: the surviving vertices and where each one went.
#[derive(Debug, Clone, PartialEq)]
pub struct Compaction<Idx> {
    /// The kept vertices, in their original relative order.
    pub arrays: AttributeArrays,
    /// Maps each kept old index to its new index; dropped indices have no entry.
    pub map: IndexMap<Idx>,
}

impl<Idx: ArrayIndex> Compaction<Idx> {
    /// The number of vertices dropped.
    pub fn removed(&self) -> usize {
        self.map.domain_len() - self.arrays.len()
    }
}

/// Remove every vertex not in `keep` from every array of `arrays`.
///
/// Bit `i` of `keep` decides the fate of vertex `i`. New indices are assigned consecutively in
/// ascending order of old index.
///
/// # Errors
///
/// Validation happens before anything is copied, so on failure nothing has been produced.
///
/// * [`SizeMismatch`](Error::SizeMismatch) if any co-array disagrees with the position array in
///   length, or if `keep` doesn't cover exactly the vertex set.
pub fn compact<Idx: ArrayIndex>(
    arrays: &AttributeArrays,
    keep: &BitSlice,
) -> Result<Compaction<Idx>> {
    arrays.validate()?;
    if keep.len() != arrays.len() {
        return Err(Error::SizeMismatch {
            array: Extent::Selection,
            expected: arrays.len(),
            found: keep.len(),
        });
    }

    let kept = AttributeArrays {
        positions: retain(&arrays.positions, keep),
        normals: retain(&arrays.normals, keep),
        colors: retain(&arrays.colors, keep),
        texcoords: arrays
            .texcoords
            .iter()
            .map(|uv| retain(uv, keep))
            .collect(),
    };
    tracing::trace!(
        before = arrays.len(),
        after = kept.len(),
        "compacted vertex arrays"
    );
    Ok(Compaction {
        arrays: kept,
        map: IndexMap::from_keep(keep),
    })
}

/// Copy out the kept entries of a single array. Absent (empty) arrays stay absent.
fn retain<T: Clone>(items: &[T], keep: &BitSlice) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    keep.iter_ones().map(|i| items[i].clone()).collect()
}
