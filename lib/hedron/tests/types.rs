use hedron::{
    primitive::{
        attribute::{AttributeArrays, AttributeError, AttributeUsage, Position, Texcoord},
        Triangle,
    },
    skin::{SkinData, SkinInstance},
    Block, BlockId, BlockKind, Document, DocumentError, GeometryData, Header, Shape,
};

fn points(n: usize) -> Vec<Position> {
    (0..n).map(|i| Position::new(i as f32, 0.0, 0.0)).collect()
}

/// Ensure that triangles can be built over any unsigned index type
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn triangle_index() {
    let _8 = Triangle::<u8>::new(0, 1, 2);
    let _16 = Triangle::<u16>::new(0, 1, 2);
    let _32 = Triangle::<u32>::new(0, 1, 2);
    let _size = Triangle::<usize>::new(0, 1, 2);
}

#[test]
fn triangle_faces() {
    let mut t = Triangle::<u16>::new(0, 1, 2);
    assert!(t.same_face(&Triangle::new(1, 2, 0)));
    assert!(t.same_face(&Triangle::new(2, 0, 1)));
    assert!(!t.same_face(&Triangle::new(0, 2, 1)));
    t.flip();
    assert_eq!(t, Triangle::new(0, 2, 1));
    assert!(Triangle::<u16>::new(3, 3, 1).is_degenerate());
    assert!(!t.is_degenerate());
}

#[test]
fn attribute_lengths() {
    let mut arrays = AttributeArrays::from_positions(points(4));
    assert!(arrays.validate().is_ok());

    arrays.texcoords.push(vec![Texcoord::origin(); 4]);
    arrays.texcoords.push(vec![Texcoord::origin(); 3]);
    match arrays.validate() {
        Err(AttributeError::Length {
            usage,
            expected,
            found,
        }) => {
            assert_eq!(usage, AttributeUsage::Texcoord(1));
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
        }
        other => panic!("expected a length error, got {other:?}"),
    }
}

#[test]
fn absent_channels_are_not_compared() {
    let arrays = AttributeArrays::from_positions(vec![
        Position::new(1.0, 2.0, 3.0),
        Position::new(0.0, 0.0, 0.0),
        Position::new(1.0, 2.0, 3.0),
    ]);
    assert!(arrays.same_vertex(0, 2));
    assert!(!arrays.same_vertex(0, 1));
}

#[test]
fn empty_uv_sets_are_absent() {
    let mut arrays = AttributeArrays::from_positions(vec![Position::origin(); 3]);
    arrays.texcoords = vec![
        Vec::new(),
        vec![Texcoord::new(0.0, 1.0), Texcoord::new(0.5, 0.5), Texcoord::new(0.0, 1.0)],
        Vec::new(),
    ];
    assert!(arrays.validate().is_ok());
    assert!(arrays.same_vertex(0, 2));
    assert!(!arrays.same_vertex(0, 1));

    arrays.texcoords[2] = vec![Texcoord::origin(); 2];
    assert!(matches!(
        arrays.validate(),
        Err(AttributeError::Length {
            usage: AttributeUsage::Texcoord(2),
            found: 2,
            ..
        })
    ));
}

#[test]
fn removed_blocks_stop_resolving() {
    let mut doc = Document::new(Header::default());
    let data = doc.push(GeometryData::new(points(3), vec![Triangle::new(0, 1, 2)]).unwrap());
    let shape = doc.push(Shape {
        name: "body".into(),
        data: Some(data),
        skin_instance: None,
    });
    assert_eq!(doc.owner_of(data), Some(shape));
    assert_eq!(doc.kind(shape), Some(BlockKind::Shape));

    assert!(matches!(doc.remove(data), Some(Block::Geometry(_))));
    assert_eq!(doc.resolve(doc.shape(shape).unwrap().data), None);
    assert_eq!(doc.len(), 1);
    // handles of other blocks are untouched
    assert_eq!(doc.ids().collect::<Vec<_>>(), vec![shape]);
    assert!(doc.remove(data).is_none());
}

#[test]
fn declared_count_is_never_truncated() {
    let geom = GeometryData::new(points(u16::MAX as usize), vec![]).unwrap();
    assert_eq!(geom.num_vertices, u16::MAX);
    assert!(matches!(
        GeometryData::new(points(u16::MAX as usize + 1), vec![]),
        Err(DocumentError::Overflow {
            field: "num_vertices",
            len: 65536
        })
    ));
}

#[test]
fn typed_access() {
    let mut doc = Document::default();
    let data = doc.push(SkinData::default());
    let inst = doc.push(SkinInstance {
        data: Some(data),
        partition: None,
    });
    assert!(doc.skin_instance(inst).is_ok());
    assert!(matches!(
        doc.skin_instance(data),
        Err(DocumentError::WrongKind {
            expected: BlockKind::SkinInstance,
            found: BlockKind::SkinData,
            ..
        })
    ));
    assert!(matches!(
        doc.geometry(BlockId(40)),
        Err(DocumentError::MissingBlock(BlockId(40)))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn document_json() {
    let mut doc = Document::new(Header {
        version: 0x14020007,
        user_version: 12,
        user_version_2: 83,
    });
    doc.push(GeometryData::new(points(3), vec![Triangle::new(0, 1, 2)]).unwrap());
    let text = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(back, doc);
}
