//! Print a document as JSON for inspection.
//!
//! By default the raw parse tree of the file is printed, exactly as it was
//! read (duplicate keys and unknown members included). With `--document` the
//! file is decoded first and the decoded document is printed instead.
//!
//! ```text
//! cutout-dump dragon.mpack
//! cutout-dump --document dragon.json
//! ```

use cutout::{binary, json::ExportOptions, Document, Encode, Error, Format, TextValue};
use std::error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let (decode, file_path) = match args.as_slice() {
        [_, path] => (false, path),
        [_, flag, path] if flag == "--document" => (true, path),
        _ => {
            eprintln!("Usage: {} [--document] <file.json|file.mpack>", args[0]);
            std::process::exit(1);
        }
    };

    let tree = if decode {
        Document::open(file_path)?.encode()
    } else {
        raw_tree(file_path)?
    };

    let mut stdout = io::stdout().lock();
    ExportOptions::new()
        .with_prettyprint(true)
        .to_writer(&mut stdout, &tree)?;
    writeln!(stdout)?;
    Ok(())
}

fn raw_tree(path: &str) -> Result<TextValue, Error> {
    let format = Format::detect(path)?;
    let data = std::fs::read(path)?;
    match format {
        Format::Json => TextValue::from_slice(&data),
        Format::Mpack => binary::from_slice(&data).map(|x| binary::to_text(&x)),
    }
}
