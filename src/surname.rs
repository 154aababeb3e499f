use smallvec::SmallVec;

static NOBILIARY_PARTICLES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/nobiliary_particles.rs"));

static NOBILIARY_PARTICLE_PHRASES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/nobiliary_particle_phrases.rs"));

const MAX_PARTICLE_WORDS: usize = include!(concat!(env!("OUT_DIR"), "/max_particle_words.rs"));

/// A single word that marks the start of a compound surname ("von", "de").
pub fn is_compound_marker(word: &str) -> bool {
    NOBILIARY_PARTICLES.contains(&*word.to_lowercase())
}

/// How many of the leading `words` form a nobiliary particle, or zero if
/// they don't start with one.
///
/// With `multi_word`, the longest matching window is preferred, so "de la"
/// counts as two words rather than just "de".
pub fn particle_len(words: &[&str], multi_word: bool) -> usize {
    if multi_word {
        let longest = MAX_PARTICLE_WORDS.min(words.len());
        for len in (2..=longest).rev() {
            let phrase = words[..len]
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<SmallVec<[String; 2]>>()
                .join(" ");
            if NOBILIARY_PARTICLE_PHRASES.contains(&*phrase) {
                return len;
            }
        }
    }

    match words.first() {
        Some(word) if is_compound_marker(word) => 1,
        _ => 0,
    }
}
