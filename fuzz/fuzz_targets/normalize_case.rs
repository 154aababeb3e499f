#![no_main]
use libfuzzer_sys::fuzz_target;
use name_splitter::{is_pascal_case, normalize_case};

fuzz_target!(|word: &str| {
    let once = normalize_case(word);
    assert_eq!(once, normalize_case(&once));
    if is_pascal_case(word) {
        assert_eq!(word, once);
    }
});
