use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LexiconData {
    honorific_prefixes: HashMap<String, String>,
    suffixes: Vec<String>,
    nobiliary_particles: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/lexicon_data.json")?;
    let lexicon: LexiconData = serde_json::from_str(&json)?;

    write_map(
        &output.join("honorific_prefixes.rs"),
        &lexicon.honorific_prefixes,
        |v| format!("\"{}\"", v),
    )?;

    // Suffixes are matched case-sensitively, so store them verbatim
    write_set(&output.join("suffixes.rs"), &lexicon.suffixes)?;

    // Particles are matched against lowercased input. Single words and
    // space-joined multi-word entries go in separate sets, since only windows
    // of adjacent words can match the latter
    let particles = lexicon
        .nobiliary_particles
        .iter()
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
        .collect::<Vec<_>>();
    let (phrases, words): (Vec<String>, Vec<String>) =
        particles.into_iter().partition(|p| p.contains(' '));
    write_set(&output.join("nobiliary_particles.rs"), &words)?;
    write_set(&output.join("nobiliary_particle_phrases.rs"), &phrases)?;

    let max_particle_words = phrases
        .iter()
        .map(|p| p.split(' ').count())
        .max()
        .unwrap_or(1);
    fs::write(
        output.join("max_particle_words.rs"),
        format!("{}", max_particle_words),
    )?;

    Ok(())
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
