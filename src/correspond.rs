//! Reconstructing vertex correspondence between two independently ordered vertex sets.
//!
//! The only thing the two sets are assumed to agree on is texture coordinates, so those are
//! the matching key: each target vertex takes the first unclaimed candidate with (nearly) the
//! same UV. This is greedy and depends on scan order; it is not an optimal assignment, and
//! vertices on UV seams can end up swapped or unmatched.

use bitvec::vec::BitVec;
use hedron::{
    primitive::attribute::{Normal, Position, Texcoord},
    PackedVertex,
};

use crate::{Error, Extent, Result};

/// Largest per-axis UV difference (exclusive) at which two vertices are considered the same.
pub const UV_TOLERANCE: f32 = 1e-5;

/// A single vertex in the textual interchange format.
///
/// ```json
/// [{"vertex": [0.0, 1.0, 2.0], "normal": [0.0, 0.0, 1.0], "uv": [0.5, 0.5]}]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VertexRecord {
    pub vertex: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<Normal>,
    pub uv: Texcoord,
}

impl VertexRecord {
    /// Describe a packed vertex, including its normal only if `with_normal`.
    pub fn from_packed(v: &PackedVertex, with_normal: bool) -> Self {
        Self {
            vertex: v.vertex,
            normal: with_normal.then_some(v.normal),
            uv: v.uv,
        }
    }
}

/// Parse an array of [VertexRecords](VertexRecord).
///
/// # Errors
///
/// * [`Records`](Error::Records) if `text` isn't a JSON array of records.
pub fn parse_records(text: &str) -> Result<Vec<VertexRecord>> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize records as a JSON array.
pub fn write_records(records: &[VertexRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// For each target vertex, the index of the candidate it was matched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    matches: Vec<Option<usize>>,
}

impl Correspondence {
    /// Match each target UV, in order, to the first not-yet-claimed candidate UV lying within
    /// `tolerance` on both axes. A claimed candidate can't be matched again.
    pub fn by_uv(targets: &[Texcoord], candidates: &[Texcoord], tolerance: f32) -> Self {
        let mut claimed: BitVec = BitVec::repeat(false, candidates.len());
        let matches = targets
            .iter()
            .map(|t| {
                let j = claimed
                    .iter_zeros()
                    .find(|&j| uv_close(t, &candidates[j], tolerance))?;
                claimed.set(j, true);
                Some(j)
            })
            .collect();
        Self { matches }
    }

    /// The candidate matched with target vertex `target`, if any.
    #[inline]
    pub fn get(&self, target: usize) -> Option<usize> {
        self.matches.get(target).copied().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The number of target vertices which found a match.
    pub fn matched(&self) -> usize {
        self.matches.iter().filter(|m| m.is_some()).count()
    }

    /// Iterate through the target vertices which found no match.
    pub fn unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.is_none().then_some(i))
    }
}

#[inline]
fn uv_close(a: &Texcoord, b: &Texcoord, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// A target vertex left untouched because no candidate matched it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unmatched {
    pub index: usize,
    pub position: Position,
}

/// Summary of a [transplant], for an operator to review.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    pub total: usize,
    pub matched: usize,
    pub unmatched: Vec<Unmatched>,
}

impl MatchReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "modified {} out of {} vertices", self.matched, self.total)?;
        if !self.is_complete() {
            write!(
                f,
                "; couldn't match {}, needs manual fixing:",
                self.unmatched.len()
            )?;
            for Unmatched { index, position: p } in &self.unmatched {
                write!(f, "\n  {index} ({}, {}, {})", p.x, p.y, p.z)?;
            }
        }
        Ok(())
    }
}

/// Copy positions from `candidates` into `target` wherever their UVs correspond.
///
/// UVs of `target` are never written; they're the matching key. Normals are copied only when
/// `copy_normals` is set and the matched record carries one. Unmatched target vertices keep their
/// position and are listed in the returned report.
///
/// # Errors
///
/// * [`SizeMismatch`](Error::SizeMismatch) if `candidates` and `target` differ in length; checked
///   before anything is written.
pub fn transplant(
    target: &mut [PackedVertex],
    candidates: &[VertexRecord],
    copy_normals: bool,
) -> Result<MatchReport> {
    if candidates.len() != target.len() {
        return Err(Error::SizeMismatch {
            array: Extent::Records,
            expected: target.len(),
            found: candidates.len(),
        });
    }

    let target_uvs: Vec<Texcoord> = target.iter().map(|v| v.uv).collect();
    let candidate_uvs: Vec<Texcoord> = candidates.iter().map(|r| r.uv).collect();
    let corr = Correspondence::by_uv(&target_uvs, &candidate_uvs, UV_TOLERANCE);

    let mut report = MatchReport {
        total: target.len(),
        ..Default::default()
    };
    for (i, v) in target.iter_mut().enumerate() {
        match corr.get(i) {
            Some(j) => {
                let record = &candidates[j];
                tracing::trace!(target = i, candidate = j, "match found");
                v.vertex = record.vertex;
                if let (true, Some(n)) = (copy_normals, record.normal) {
                    v.normal = n;
                }
                report.matched += 1;
            }
            None => {
                tracing::trace!(target = i, "match not found, vertex not modified");
                report.unmatched.push(Unmatched {
                    index: i,
                    position: v.vertex,
                })
            }
        }
    }
    Ok(report)
}
