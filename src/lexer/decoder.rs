use super::phoneme::{Cell, Lead, Syllable, Tail, Vowel};

/// First codepoint of the precomposed Hangul syllable block (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Number of precomposed syllables (가 through 힣)
pub const SYLLABLE_COUNT: u32 = 11_172;

const TAILS: u32 = Tail::ALL.len() as u32;
const VOWELS: u32 = Vowel::ALL.len() as u32;

/// Decodes one codepoint into a grid cell.
///
/// Anything outside the syllable block, whitespace included, is a blank cell.
pub fn decode(c: char) -> Cell {
    let code = c as u32;
    if !(SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code) {
        return Cell::Blank;
    }

    let offset = code - SYLLABLE_BASE;
    let tail = offset % TAILS;
    let vowel = (offset / TAILS) % VOWELS;
    let lead = offset / TAILS / VOWELS;

    match (
        Lead::from_index(lead as usize),
        Vowel::from_index(vowel as usize),
        Tail::from_index(tail as usize),
    ) {
        (Some(lead), Some(vowel), Some(tail)) => Cell::Syllable(Syllable::new(lead, vowel, tail)),
        _ => Cell::Blank,
    }
}

/// Decodes every codepoint of `line`, one cell per character
pub fn decode_line(line: &str) -> Vec<Cell> {
    line.chars().map(decode).collect()
}
