use hedron::BlockKind;

use super::{selected_geometry, selected_kind, Context, Notice};
use crate::{
    host::MeshHost,
    spatial::{BoundingSphere, BoundsMode},
    Error, Result,
};

pub(super) const CENTER_MODES: &[&str] = &["Auto", "Centroid", "Bounding Box Center"];

pub(super) fn applies_geometry<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_geometry(host, selection).is_some()
}

pub(super) fn applies_packed<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_kind(host, selection, &[BlockKind::PackedShape]).is_some()
}

pub(super) fn applies_batch<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selection.is_none() && host.is_batch_target()
}

pub(super) fn update_center_radius<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    ctx: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let (_, data) = selected_geometry(host, selection).ok_or(Error::EmptyInput)?;
    let mode = match ctx.mode {
        0 if host.uses_legacy_bounds(data)? => BoundsMode::BoxCenter,
        0 | 1 => BoundsMode::Centroid,
        _ => BoundsMode::BoxCenter,
    };
    let positions = host.attributes(data)?.positions;
    let bounds = BoundingSphere::from_points(&positions, mode).ok_or(Error::EmptyInput)?;
    host.set_bounds(data, bounds)?;
    Ok(vec![updated(data, bounds)])
}

pub(super) fn update_bounds<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let block = selected_kind(host, selection, &[BlockKind::PackedShape]).ok_or(Error::EmptyInput)?;
    update_packed(host, block).map(|n| vec![n])
}

/// Update the bounds of every packed shape, skipping those without vertices.
pub(super) fn update_all_bounds<H: MeshHost>(
    host: &mut H,
    _: Option<H::Handle>,
    _: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let targets: Vec<_> = host
        .blocks()
        .into_iter()
        .filter(|&b| host.kind(b) == Some(BlockKind::PackedShape))
        .collect();
    let mut notices = Vec::with_capacity(targets.len());
    for block in targets {
        match update_packed(host, block) {
            Ok(notice) => notices.push(notice),
            Err(Error::EmptyInput) => tracing::debug!(%block, "no vertices, skipping"),
            Err(e) => return Err(e),
        }
    }
    if notices.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(notices)
}

fn update_packed<H: MeshHost>(host: &mut H, block: H::Handle) -> Result<Notice<H::Handle>> {
    let positions: Vec<_> = host
        .packed_vertices(block)?
        .iter()
        .map(|v| v.vertex)
        .collect();
    let bounds =
        BoundingSphere::from_points(&positions, BoundsMode::Centroid).ok_or(Error::EmptyInput)?;
    host.set_bounds(block, bounds)?;
    Ok(updated(block, bounds))
}

fn updated<Hd>(block: Hd, bounds: BoundingSphere<f32>) -> Notice<Hd> {
    Notice::BoundsUpdated {
        block,
        center: bounds.center,
        radius: bounds.radius,
    }
}
