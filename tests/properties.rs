use hedron::{
    primitive::{
        attribute::{AttributeArrays, Normal, Position, Texcoord},
        Strip, Triangle,
    },
    skin::{BoneWeights, VertexWeight},
    PackedVertex,
};
use meshmend::{
    compact::compact,
    correspond::{transplant, VertexRecord},
    dedup::find_duplicates,
    spatial::{Aabb, BoundingSphere, BoundsMode},
    usage::used_vertices,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Coordinates drawn from a tiny grid, so that duplicate vertices are common.
fn coord(g: &mut Gen) -> f32 {
    (u8::arbitrary(g) % 3) as f32
}

fn index(g: &mut Gen, n: usize) -> u16 {
    (usize::arbitrary(g) % n) as u16
}

/// A small, internally consistent mesh: every face, strip, and weight refers to a real vertex.
#[derive(Debug, Clone)]
struct Mesh {
    arrays: AttributeArrays,
    triangles: Vec<Triangle<u16>>,
    strips: Vec<Strip<u16>>,
    bones: Vec<BoneWeights<u16>>,
}

impl Arbitrary for Mesh {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 12;
        let mut arrays = AttributeArrays::from_positions(
            (0..n)
                .map(|_| Position::new(coord(g), coord(g), coord(g)))
                .collect::<Vec<_>>(),
        );
        if bool::arbitrary(g) {
            arrays.normals = (0..n).map(|_| Normal::new(0.0, 0.0, coord(g))).collect();
        }
        for _ in 0..usize::arbitrary(g) % 3 {
            arrays
                .texcoords
                .push((0..n).map(|_| Texcoord::new(coord(g), coord(g))).collect());
        }
        let triangles = (0..usize::arbitrary(g) % 8)
            .map(|_| Triangle::new(index(g, n), index(g, n), index(g, n)))
            .collect();
        let strips = (0..usize::arbitrary(g) % 3)
            .map(|_| (0..usize::arbitrary(g) % 6).map(|_| index(g, n)).collect())
            .collect();
        let bones = (0..usize::arbitrary(g) % 3)
            .map(|_| {
                (0..n)
                    .filter(|_| bool::arbitrary(g))
                    .map(|i| VertexWeight::new(i as u16, 0.5))
                    .collect()
            })
            .collect();
        Self {
            arrays,
            triangles,
            strips,
            bones,
        }
    }
}

#[quickcheck]
fn compaction_preserves_referenced_vertices(mesh: Mesh) -> bool {
    let used = used_vertices(&mesh.triangles, &mesh.strips, mesh.arrays.len()).unwrap();
    let c = compact::<u16>(&mesh.arrays, &used).unwrap();
    let mut triangles = mesh.triangles.clone();
    let mut strips = mesh.strips.clone();
    c.map.remap_triangles(&mut triangles);
    c.map.remap_strips(&mut strips);

    let old_refs = mesh
        .triangles
        .iter()
        .flat_map(|t| *t.corners())
        .chain(mesh.strips.iter().flatten().copied());
    let new_refs = triangles
        .iter()
        .flat_map(|t| *t.corners())
        .chain(strips.iter().flatten().copied());
    old_refs.zip(new_refs).all(|(old, new)| {
        (new as usize) < c.arrays.len()
            && c.arrays.positions[new as usize] == mesh.arrays.positions[old as usize]
    })
}

#[quickcheck]
fn compaction_keeps_exactly_the_used_vertices(mesh: Mesh) -> bool {
    let used = used_vertices(&mesh.triangles, &mesh.strips, mesh.arrays.len()).unwrap();
    let c = compact::<u16>(&mesh.arrays, &used).unwrap();
    c.arrays.len() == used.count_ones()
        && c.arrays.validate().is_ok()
        && (0..mesh.arrays.len()).all(|i| c.map.get(i as u16).is_some() == used[i])
        && c.removed() == used.count_zeros()
}

#[quickcheck]
fn duplicates_resolve_to_lowest_index(mesh: Mesh) -> bool {
    let map = find_duplicates::<u16>(&mesh.arrays).unwrap();
    let a = &mesh.arrays;
    let canonical_is_lowest = (0..a.len()).all(|b| {
        let lowest = (0..b).find(|&i| a.same_vertex(i, b));
        map.get(b as u16) == lowest.map(|i| i as u16)
    });
    let canonical_is_unmapped = map.iter().all(|(_, canon)| map.get(canon).is_none());
    canonical_is_lowest && canonical_is_unmapped
}

#[quickcheck]
fn merged_duplicates_are_never_used(mesh: Mesh) -> bool {
    let map = find_duplicates::<u16>(&mesh.arrays).unwrap();
    let mut triangles = mesh.triangles.clone();
    let mut strips = mesh.strips.clone();
    map.remap_triangles(&mut triangles);
    map.remap_strips(&mut strips);
    let used = used_vertices(&triangles, &strips, mesh.arrays.len()).unwrap();
    let merged_unused = map.iter().all(|(dup, _)| !used[dup]);
    merged_unused
}

#[quickcheck]
fn weights_of_removed_vertices_are_dropped(mesh: Mesh) -> bool {
    let used = used_vertices(&mesh.triangles, &mesh.strips, mesh.arrays.len()).unwrap();
    let c = compact::<u16>(&mesh.arrays, &used).unwrap();
    let mut bones = mesh.bones.clone();
    let dropped = c.map.remap_bones(&mut bones);

    let expected_dropped: usize = mesh
        .bones
        .iter()
        .flat_map(|b| &b.weights)
        .filter(|w| !used[w.index as usize])
        .count();
    dropped == expected_dropped
        && bones.iter().zip(&mesh.bones).all(|(new, old)| {
            new.vertex_count() == old.weights.iter().filter(|w| used[w.index as usize]).count()
                && new
                    .weights
                    .iter()
                    .all(|w| (w.index as usize) < c.arrays.len())
        })
}

#[quickcheck]
fn bounds_are_stable(mesh: Mesh, box_center: bool) -> bool {
    let mode = if box_center {
        BoundsMode::BoxCenter
    } else {
        BoundsMode::Centroid
    };
    let points = &mesh.arrays.positions;
    let first = BoundingSphere::from_points(points, mode).unwrap();
    let second = BoundingSphere::from_points(points, mode).unwrap();
    let aabb = Aabb::from_points(points).unwrap();
    first == second
        && aabb.contains(&first.center)
        && points
            .iter()
            .all(|p| (p - first.center).norm() <= first.radius + 1e-4)
}

/// A vertex set with distinct UVs, and the order in which to shuffle it.
#[derive(Debug, Clone)]
struct Shuffled {
    vertices: Vec<PackedVertex>,
    order: Vec<usize>,
}

impl Arbitrary for Shuffled {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 32;
        let vertices = (0..n)
            .map(|i| {
                PackedVertex::new(
                    Position::new(coord(g), coord(g), coord(g)),
                    Texcoord::new((i % 8) as f32 / 8.0, (i / 8) as f32 / 8.0),
                )
            })
            .collect();
        let keys: Vec<u32> = (0..n).map(|_| u32::arbitrary(g)).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| keys[i]);
        Self { vertices, order }
    }
}

#[quickcheck]
fn permuted_records_match_completely(s: Shuffled) -> bool {
    let candidates: Vec<_> = s
        .order
        .iter()
        .map(|&i| VertexRecord::from_packed(&s.vertices[i], false))
        .collect();
    let mut target: Vec<_> = s
        .vertices
        .iter()
        .map(|v| PackedVertex::new(Position::origin(), v.uv))
        .collect();
    let report = transplant(&mut target, &candidates, false).unwrap();
    report.is_complete()
        && report.matched == s.vertices.len()
        && target
            .iter()
            .zip(&s.vertices)
            .all(|(t, v)| t.vertex == v.vertex && t.uv == v.uv)
}
