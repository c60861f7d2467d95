use std::collections::HashSet;

use hedron::primitive::Triangle;
use meshmend_common::ArrayIndex;

use super::{selected_geometry, Context, Notice};
use crate::{host::MeshHost, Error, Result};

pub(super) fn applies<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_geometry(host, selection)
        .is_some_and(|(_, data)| host.triangles(data).is_ok_and(|t| !t.is_empty()))
}

pub(super) fn flip_faces<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let (_, data) = selected_geometry(host, selection).ok_or(Error::EmptyInput)?;
    let mut triangles = host.triangles(data)?;
    if triangles.is_empty() {
        return Err(Error::EmptyInput);
    }
    triangles.iter_mut().for_each(|t| t.flip());
    let count = triangles.len();
    host.set_triangles(data, triangles)?;
    Ok(vec![Notice::FlippedFaces { triangles: count }])
}

/// Remove triangles without area, then triangles describing the same face with the same winding
/// as an earlier one. Triangles with opposite winding are distinct faces and are kept.
pub(super) fn prune_triangles<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let (_, data) = selected_geometry(host, selection).ok_or(Error::EmptyInput)?;
    let triangles = host.triangles(data)?;
    if triangles.is_empty() {
        return Err(Error::EmptyInput);
    }

    let before = triangles.len();
    let mut kept: Vec<_> = triangles.into_iter().filter(|t| !t.is_degenerate()).collect();
    let degenerate = before - kept.len();

    let mut seen = HashSet::with_capacity(kept.len());
    kept.retain(|t| seen.insert(rotated_to_min(t)));
    let duplicate = before - degenerate - kept.len();

    if degenerate + duplicate == 0 {
        return Ok(vec![Notice::NothingToDo]);
    }
    host.set_triangles(data, kept)?;
    Ok(vec![Notice::RemovedTriangles {
        degenerate,
        duplicate,
    }])
}

/// Rotate the corners of `t` so the smallest index comes first; two triangles are the
/// [same face](Triangle::same_face) iff this agrees for both.
fn rotated_to_min<Idx: ArrayIndex>(t: &Triangle<Idx>) -> [Idx; 3] {
    let [a, b, c] = *t.corners();
    if a <= b && a <= c {
        [a, b, c]
    } else if b <= c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}
