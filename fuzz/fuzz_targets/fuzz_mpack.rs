#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = cutout::Document::from_mpack_slice(data) {
        let _ = doc.to_mpack();
    }
});
