//! Embedded data
//!
//! The dictionary is generated at build time from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// English letter frequencies as a `letter\tpercent` table
pub const LETTER_FREQUENCY: &str = include_str!("../../data/letter_frequency.tsv");
