//! Detecting which vertices are actually referenced by a mesh's faces.

use bitvec::vec::BitVec;
use hedron::primitive::{Strip, Triangle};
use meshmend_common::ArrayIndex;

use crate::{Error, Result};

/// Determine which of `vertex_count` vertices are referenced by any triangle corner or strip
/// element. Bit `i` of the result is set ⟺ vertex `i` is used.
///
/// # Errors
///
/// * [`IndexOutOfRange`](Error::IndexOutOfRange) if any reference is `>= vertex_count`.
pub fn used_vertices<Idx: ArrayIndex>(
    triangles: &[Triangle<Idx>],
    strips: &[Strip<Idx>],
    vertex_count: usize,
) -> Result<BitVec> {
    let mut used = BitVec::repeat(false, vertex_count);
    let references = triangles
        .iter()
        .flat_map(|t| t.corners().iter())
        .chain(strips.iter().flatten());
    for &i in references {
        let index = i.to_index();
        if index >= vertex_count {
            return Err(Error::IndexOutOfRange {
                index,
                len: vertex_count,
            });
        }
        used.set(index, true);
    }
    Ok(used)
}
