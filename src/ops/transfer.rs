//! Moving vertex data between packed vertex blocks of different documents via the clipboard.

use hedron::BlockKind;

use super::{selected_kind, Context, Notice};
use crate::{
    correspond::{parse_records, transplant, write_records, VertexRecord},
    host::MeshHost,
    Error, Result,
};

const PACKED: &[BlockKind] = &[BlockKind::SkinPartition, BlockKind::PackedShape];

pub(super) fn applies<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_kind(host, selection, PACKED).is_some()
}

pub(super) fn copy_vertex_data<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    ctx: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let block = selected_kind(host, selection, PACKED).ok_or(Error::EmptyInput)?;
    let packed = host.packed_vertices(block)?;
    if packed.is_empty() {
        return Err(Error::EmptyInput);
    }
    let with_normals = host.packed_normals(block)?;
    let records: Vec<_> = packed
        .iter()
        .map(|v| VertexRecord::from_packed(v, with_normals))
        .collect();
    ctx.clipboard.publish_text(write_records(&records)?)?;
    Ok(vec![Notice::CopiedVertices {
        vertices: records.len(),
    }])
}

/// Match clipboard records to the selected block's vertices by UV and take their positions,
/// and their normals too if both sides have them.
pub(super) fn paste_vertex_data<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    ctx: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let block = selected_kind(host, selection, PACKED).ok_or(Error::EmptyInput)?;
    let text = ctx.clipboard.read_text()?.ok_or(Error::EmptyClipboard)?;
    let records = parse_records(&text)?;
    let mut packed = host.packed_vertices(block)?;
    if packed.is_empty() {
        return Err(Error::EmptyInput);
    }
    let copy_normals = host.packed_normals(block)? && records.iter().all(|r| r.normal.is_some());

    let report = transplant(&mut packed, &records, copy_normals)?;
    host.set_packed_vertices(block, packed)?;
    Ok(vec![Notice::Transplanted(report)])
}
