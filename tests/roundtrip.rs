use cutout::{
    json::ExportOptions, Command, Document, Keyframe, Matrix, Rect, Rotation, Sprite, Symbol,
    Tween,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct ArbDocument(Document);

fn small_len(g: &mut Gen) -> usize {
    usize::arbitrary(g) % 4
}

fn float(g: &mut Gen) -> f32 {
    // quarter steps keep the values exact in every encoding
    f32::from(i16::arbitrary(g)) / 4.0
}

fn option<T>(g: &mut Gen, f: impl FnOnce(&mut Gen) -> T) -> Option<T> {
    if bool::arbitrary(g) {
        Some(f(g))
    } else {
        None
    }
}

fn matrix(g: &mut Gen) -> Matrix {
    Matrix {
        sx: float(g),
        shy: float(g),
        tx: float(g),
        shx: float(g),
        sy: float(g),
        ty: float(g),
    }
}

fn tween(g: &mut Gen) -> Tween {
    Tween {
        tween: bool::arbitrary(g),
        rotate_direction: Rotation::from_code(u8::arbitrary(g) % 4),
        rotate_times: u32::arbitrary(g),
    }
}

fn keyframe(g: &mut Gen) -> Keyframe {
    Keyframe {
        cmd: Command::from_code(u8::arbitrary(g) % 5),
        index: 0,
        duration: u32::arbitrary(g),
        character: option(g, String::arbitrary),
        matrix: option(g, matrix),
        name: option(g, String::arbitrary),
        tween: option(g, tween),
    }
}

fn rect(g: &mut Gen) -> Rect {
    Rect {
        x: i32::arbitrary(g),
        y: i32::arbitrary(g),
        w: u32::arbitrary(g),
        h: u32::arbitrary(g),
    }
}

fn sprite(g: &mut Gen) -> Sprite {
    Sprite {
        frame: rect(g),
        sprite: rect(g),
        ..Sprite::default()
    }
}

fn sprites(g: &mut Gen) -> Vec<Sprite> {
    (0..small_len(g)).map(|_| sprite(g)).collect()
}

fn symbol(g: &mut Gen) -> Symbol {
    let labels: BTreeMap<String, u32> = BTreeMap::arbitrary(g);
    let objects: Vec<Vec<Keyframe>> = (0..small_len(g))
        .map(|_| (0..small_len(g)).map(|_| keyframe(g)).collect())
        .collect();

    Symbol {
        duration: u32::arbitrary(g),
        fps: u32::arbitrary(g),
        labels,
        objects,
    }
}

fn named<T>(g: &mut Gen, f: impl Fn(&mut Gen) -> T) -> BTreeMap<String, T> {
    (0..small_len(g))
        .map(|_| (String::arbitrary(g), f(g)))
        .collect()
}

impl Arbitrary for ArbDocument {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbDocument(Document {
            scenes: named(g, symbol),
            animations: named(g, symbol),
            parts: named(g, sprites),
        })
    }
}

#[quickcheck]
fn text_and_binary_exports_decode_to_the_same_document(doc: ArbDocument) -> bool {
    let doc = doc.0;
    let json = doc.to_json(ExportOptions::default()).unwrap();
    let mpack = doc.to_mpack().unwrap();

    let from_json = Document::from_json_slice(&json).unwrap();
    let from_mpack = Document::from_mpack_slice(&mpack).unwrap();
    from_json == doc && from_mpack == doc
}
