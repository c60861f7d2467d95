//! Removing vertices from separately stored geometry, keeping everything that indexes into it
//! consistent.

use super::{checked_attributes, selected_geometry, Context, Notice};
use crate::{
    compact::{compact, Compaction},
    dedup::find_duplicates,
    host::MeshHost,
    skin::invalidate_partition,
    usage::used_vertices,
    Error, Result,
};

pub(super) fn applies<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_geometry(host, selection).is_some()
}

pub(super) fn remove_unused<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let (shape, data) = selected_geometry(host, selection).ok_or(Error::EmptyInput)?;
    strip_vertices(host, shape, data, false)
}

pub(super) fn remove_duplicates<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let (shape, data) = selected_geometry(host, selection).ok_or(Error::EmptyInput)?;
    strip_vertices(host, shape, data, true)
}

/// Remove every vertex of `data` which no face or strip references, optionally merging duplicate
/// vertices first so that they become unreferenced.
///
/// Everything is read and checked before the first write, so an error leaves the host untouched.
fn strip_vertices<H: MeshHost>(
    host: &mut H,
    shape: Option<H::Handle>,
    data: H::Handle,
    merge_duplicates: bool,
) -> Result<Vec<Notice<H::Handle>>> {
    let arrays = checked_attributes(host, data)?;

    let mut triangles = host.triangles(data)?;
    let mut strips = host.strips(data)?;
    let skin_data = shape
        .and_then(|s| host.skin_instance(s))
        .and_then(|i| host.skin_data(i));
    let mut bones = match skin_data {
        Some(d) => host.bones(d)?,
        None => Vec::new(),
    };

    let mut notices = Vec::new();
    if merge_duplicates {
        // out-of-range references must be caught before they're rewritten into valid ones
        used_vertices(&triangles, &strips, arrays.len())?;
        let duplicates = find_duplicates::<H::Index>(&arrays)?;
        if !duplicates.is_empty() {
            duplicates.remap_triangles(&mut triangles);
            duplicates.remap_strips(&mut strips);
            notices.push(Notice::MergedVertices {
                merged: duplicates.len(),
            });
        }
    }

    let used = used_vertices(&triangles, &strips, arrays.len())?;
    if used.all() {
        return Ok(vec![Notice::NothingToDo]);
    }

    let compaction: Compaction<H::Index> = compact(&arrays, &used)?;
    let removed = compaction.removed();
    let Compaction { arrays, map } = compaction;
    map.remap_triangles(&mut triangles);
    map.remap_strips(&mut strips);
    let dropped = map.remap_bones(&mut bones);
    if skin_data.is_some() {
        host.check_bones(&bones)?;
    }

    notices.push(Notice::RemovedVertices {
        removed,
        remaining: arrays.len(),
    });
    host.set_attributes(data, arrays)?;
    host.set_triangles(data, triangles)?;
    host.set_strips(data, strips)?;
    if let Some(d) = skin_data {
        host.set_bones(d, bones)?;
        if dropped > 0 {
            notices.push(Notice::PrunedWeights { dropped });
        }
    }
    if let Some(partition) = shape
        .map(|s| invalidate_partition(host, s))
        .transpose()?
        .flatten()
    {
        notices.push(Notice::PartitionRemoved { partition });
    }
    Ok(notices)
}
