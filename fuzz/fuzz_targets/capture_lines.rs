#![no_main]

use libfuzzer_sys::fuzz_target;
use saltrun_core::{FixtureRecord, ValidatorExit, split_lines};

fuzz_target!(|data: &[u8]| {
    // Captures are decoded lossily, so any byte sequence must survive splitting and rendering
    let text = String::from_utf8_lossy(data);
    let lines = split_lines(&text);
    assert_eq!(lines.concat(), text);

    let record = FixtureRecord::new("fuzz.xml", lines.clone(), lines, ValidatorExit::Code(0));
    let rendered = record.to_string();
    assert!(!rendered.contains('\n'));
});
