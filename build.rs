//! Embeds `data/words.txt` as the default dictionary.
//!
//! Emits `DICTIONARY` and `DICTIONARY_COUNT` into `$OUT_DIR/dictionary.rs`,
//! keeping only five-letter alphabetic entries, lowercased, first occurrence wins.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

const SOURCE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");
    println!("cargo:rerun-if-changed=data/letter_frequency.tsv");

    let raw = fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("cannot read {SOURCE}: {e}"));
    let words = normalise(&raw);

    let mut code = String::new();
    let count = words.len();
    writeln!(code, "/// Default five-letter dictionary ({count} words)").unwrap();
    code.push_str("pub const DICTIONARY: &[&str] = &[\n");
    for word in &words {
        writeln!(code, "    {word:?},").unwrap();
    }
    code.push_str("];\n\n");
    writeln!(code, "/// Number of words in [`DICTIONARY`]").unwrap();
    writeln!(code, "pub const DICTIONARY_COUNT: usize = {count};").unwrap();

    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("dictionary.rs");
    fs::write(&out, code).unwrap_or_else(|e| panic!("cannot write {}: {e}", out.display()));
}

fn normalise(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.lines()
        .filter_map(|line| line.split([',', ' ', '\t']).next())
        .map(|field| field.trim().to_lowercase())
        .filter(|word| word.len() == 5)
        .filter(|word| word.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
