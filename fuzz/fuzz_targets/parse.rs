#![no_main]
use libfuzzer_sys::fuzz_target;
use name_splitter::{Assignment, Config};

fuzz_target!(|data: (&str, bool, bool)| {
    let (name, overwrite, multi_word_particles) = data;
    let assignment = if overwrite {
        Assignment::Overwrite
    } else {
        Assignment::Accumulate
    };
    let config = Config::default()
        .with_assignment(assignment)
        .with_multi_word_particles(multi_word_particles);

    let parsed = config.parse(name);
    assert_eq!(parsed, config.parse(name));
    let _ = parsed.to_string();
});
