//! Dictionaries and letter tables
//!
//! The default dictionary and letter-frequency table are compiled into the
//! binary; [`loader`] reads and merges external word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, LETTER_FREQUENCY};
