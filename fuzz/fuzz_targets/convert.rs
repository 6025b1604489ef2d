#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tree) = steambb::markdown::parse_bytes(data) {
        let first = steambb::bbcode::emit(&tree);
        let second = steambb::bbcode::emit(&tree);

        // Rendering is pure
        assert_eq!(first.value, second.value, "rendering is not deterministic");
        assert_eq!(first.warnings, second.warnings);
    }
});
