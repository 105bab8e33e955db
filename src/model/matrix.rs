use crate::schema::{Schema, Slot};
use crate::{Decode, Encode, Error, TextValue, ValueReader};

/// 2D affine transform
///
/// Encoded as the array `[sy, shx, shy, sx, ty, tx]`. A short array only
/// overwrites the leading fields; the rest stay at the identity.
///
/// ```
/// use cutout::{Decode, Matrix, TextValue};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = TextValue::from_slice(b"[1, 2, 3]")?;
/// let matrix = Matrix::decode(&tree)?;
/// assert_eq!((matrix.sy, matrix.shx, matrix.shy), (1.0, 2.0, 3.0));
/// assert_eq!((matrix.sx, matrix.ty, matrix.tx), (1.0, 0.0, 0.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub sx: f32,
    pub shy: f32,
    pub tx: f32,
    pub shx: f32,
    pub sy: f32,
    pub ty: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        sx: 1.0,
        shy: 0.0,
        tx: 0.0,
        shx: 0.0,
        sy: 1.0,
        ty: 0.0,
    };
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

static MATRIX_SLOTS: [Slot<Matrix>; 6] = [
    Slot::Float {
        get: |m: &Matrix| m.sy,
        set: |m: &mut Matrix, v: f32| m.sy = v,
    },
    Slot::Float {
        get: |m: &Matrix| m.shx,
        set: |m: &mut Matrix, v: f32| m.shx = v,
    },
    Slot::Float {
        get: |m: &Matrix| m.shy,
        set: |m: &mut Matrix, v: f32| m.shy = v,
    },
    Slot::Float {
        get: |m: &Matrix| m.sx,
        set: |m: &mut Matrix, v: f32| m.sx = v,
    },
    Slot::Float {
        get: |m: &Matrix| m.ty,
        set: |m: &mut Matrix, v: f32| m.ty = v,
    },
    Slot::Float {
        get: |m: &Matrix| m.tx,
        set: |m: &mut Matrix, v: f32| m.tx = v,
    },
];

static MATRIX: Schema<Matrix> = Schema::new(&MATRIX_SLOTS);

impl Decode for Matrix {
    fn decode_into<'a, V: ValueReader<'a>>(&mut self, value: V) -> Result<(), Error> {
        MATRIX.decode_into(self, value)
    }
}

impl Encode for Matrix {
    fn encode(&self) -> TextValue {
        MATRIX.encode(self)
    }
}
