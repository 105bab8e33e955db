#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = cutout::Document::from_json_slice(data) {
        let _ = doc.to_json(cutout::json::ExportOptions::default());
    }
});
