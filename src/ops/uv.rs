use hedron::{primitive::attribute::Texcoord, BlockKind};

use super::{checked_attributes, selected_geometry, selected_kind, Context, Notice};
use crate::{host::MeshHost, Error, Result};

pub(super) const FLIP_MODES: &[&str] = &["S = 1.0 - S", "T = 1.0 - T", "S <=> T"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flip {
    S,
    T,
    Swap,
}

impl Flip {
    fn from_mode(mode: usize) -> Self {
        match mode {
            0 => Flip::S,
            1 => Flip::T,
            _ => Flip::Swap,
        }
    }

    #[inline]
    fn apply(self, uv: &mut Texcoord) {
        match self {
            Flip::S => uv.x = 1.0 - uv.x,
            Flip::T => uv.y = 1.0 - uv.y,
            Flip::Swap => *uv = Texcoord::new(uv.y, uv.x),
        }
    }
}

pub(super) fn applies<H: MeshHost>(host: &H, selection: Option<H::Handle>) -> bool {
    selected_geometry(host, selection).is_some()
        || selected_kind(host, selection, &[BlockKind::PackedShape]).is_some()
}

pub(super) fn flip_uv<H: MeshHost>(
    host: &mut H,
    selection: Option<H::Handle>,
    ctx: &mut Context<'_>,
) -> Result<Vec<Notice<H::Handle>>> {
    let flip = Flip::from_mode(ctx.mode);
    let vertices = if let Some((_, data)) = selected_geometry(host, selection) {
        let arrays = checked_attributes(host, data)?;
        if arrays.texcoords.iter().all(Vec::is_empty) {
            return Err(Error::EmptyInput);
        }
        let vertices = arrays.len();
        let mut texcoords = arrays.texcoords;
        texcoords.iter_mut().flatten().for_each(|uv| flip.apply(uv));
        host.set_texcoords(data, texcoords)?;
        vertices
    } else {
        let block =
            selected_kind(host, selection, &[BlockKind::PackedShape]).ok_or(Error::EmptyInput)?;
        let mut packed = host.packed_vertices(block)?;
        if packed.is_empty() {
            return Err(Error::EmptyInput);
        }
        packed.iter_mut().for_each(|v| flip.apply(&mut v.uv));
        let vertices = packed.len();
        host.set_packed_vertices(block, packed)?;
        vertices
    };
    Ok(vec![Notice::FlippedUvs { vertices }])
}
