//! Detecting vertices which are exact copies of one another.

use hedron::primitive::attribute::AttributeArrays;
use meshmend_common::ArrayIndex;

use crate::{remap::IndexMap, Result};

/// Map every duplicate vertex to its canonical representative.
///
/// Vertices `a < b` are duplicates iff position, normal (if present), color (if present), and
/// every UV set are exactly equal. The canonical representative of a group of duplicates is
/// always its lowest index; canonical vertices themselves have no entry in the result.
///
/// Comparison is pairwise, so this is `O(n²)` in the number of vertices.
///
/// # Errors
///
/// * [`SizeMismatch`](crate::Error::SizeMismatch) if any co-array disagrees with the position
///   array in length.
pub fn find_duplicates<Idx: ArrayIndex>(arrays: &AttributeArrays) -> Result<IndexMap<Idx>> {
    arrays.validate()?;
    let mut map = IndexMap::empty(arrays.len());
    for b in 1..arrays.len() {
        // scanning upwards means the first match is the lowest; since exact equality is
        // transitive that's also the canonical vertex of b's whole group
        if let Some(a) = (0..b).find(|&a| arrays.same_vertex(a, b)) {
            map.insert(b, Idx::from_index(a));
        }
    }
    tracing::debug!(
        vertices = arrays.len(),
        duplicates = map.len(),
        "scanned for duplicate vertices"
    );
    Ok(map)
}
