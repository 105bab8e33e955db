/*!

Decoder for 2D cutout animation documents.

A document holds named scenes and animations built from keyframe tracks, and
the sprite atlas entries the keyframes draw from. The same document can be
stored as JSON text or as MessagePack, and both decode to identical values.

## Features

- ✔ Two formats: JSON (`.json`) and MessagePack (`.mpack`)
- ✔ One decoder: every entity is decoded once against [`ValueReader`], which both parse trees implement
- ✔ Compact: matrices, tweens, and sprites are positional arrays that may be truncated
- ✔ Forgiving: unknown members and unknown enum names are ignored rather than rejected
- ✔ Round trip: documents can be exported back to either format

## Quick Start

```rust
use cutout::{Command, Document, Rotation};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let data = br#"{
    "animations": {
        "wave": {
            "duration": 24,
            "fps": 24,
            "labels": {"start": 0},
            "objects": [[
                {"cmd": "place", "character": "arm", "matrix": [1, 0, 0, 1, 10, 20]},
                {"cmd": "move", "duration": 12, "tween": [true, "cw", 1]}
            ]]
        }
    }
}"#;

let doc = Document::from_json_slice(data)?;
let wave = &doc.animations["wave"];
assert_eq!(wave.label_index("start"), Some(0));

let track = &wave.objects[0];
assert_eq!(track[0].cmd, Command::Place);
assert_eq!(track[0].matrix.map(|m| m.tx), Some(20.0));
assert_eq!(track[1].tween.map(|t| t.rotate_direction), Some(Rotation::Cw));
# Ok(())
# }
```

## Binary Parsing

The MessagePack encoding is the same logical tree. Decoding it goes through
the same entity decoders, so the result is indistinguishable from decoding
the JSON.

```rust
use cutout::Document;

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let doc = Document::from_json_slice(br#"{"parts": {"arm": [[16, 8]]}}"#)?;
let data = doc.to_mpack()?;
assert_eq!(Document::from_mpack_slice(&data)?, doc);
# Ok(())
# }
```

[`Document::open`] picks the format from the file extension and fails with
[`ErrorKind::UnsupportedFormat`] before reading anything when the extension
is neither `.json` nor `.mpack`.

## One Level Lower

Each entity implements [`Decode`], so any fragment can be decoded on its own
from either tree:

```rust
use cutout::{Decode, Matrix, TextValue};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let tree = TextValue::from_slice(b"[10, 20, 30, 40, 50, 60]")?;
let m = Matrix::decode(&tree)?;
assert_eq!((m.sy, m.shx, m.shy, m.sx, m.ty, m.tx), (10.0, 20.0, 30.0, 40.0, 50.0, 60.0));
# Ok(())
# }
```

*/

pub mod binary;
mod decode;
mod encode;
mod errors;
mod field;
mod format;
mod intern;
pub mod json;
mod model;
mod schema;
pub mod text;
mod value;

pub use self::decode::Decode;
pub use self::encode::Encode;
pub use self::errors::*;
pub use self::format::Format;
pub use self::intern::{Command, Rotation};
pub use self::model::*;
pub use self::text::TextValue;
pub use self::value::{ValueKind, ValueReader};
