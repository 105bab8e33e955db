//! Convert a document between the JSON and msgpack encodings.
//!
//! The input is decoded and the decoded document is written in the format
//! of the output's extension, so unknown members and duplicate keys of the
//! input are dropped along the way.
//!
//! ```text
//! cutout-convert dragon.json dragon.mpack
//! ```

use cutout::{Document, Format};
use std::error;

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        std::process::exit(1);
    }

    let output_format = Format::detect(&args[2])?;
    let doc = Document::open(&args[1])?;
    let data = doc.to_vec(output_format)?;
    std::fs::write(&args[2], data)?;

    log::info!(
        "wrote {} scenes, {} animations, {} parts to {}",
        doc.scenes.len(),
        doc.animations.len(),
        doc.parts.len(),
        args[2]
    );

    Ok(())
}
