//! Phoneme decoding for Aheui
//!
//! Splits precomposed Hangul syllables into lead, vowel and tail phonemes.

mod decoder;
mod phoneme;

pub use decoder::{decode, decode_line, SYLLABLE_BASE, SYLLABLE_COUNT};
pub use phoneme::{Cell, Heading, Lead, Syllable, Tail, Value, Vowel};
