use serde::Serialize;
use std::fmt;

/// Integer type held by every storage and produced by every instruction
pub type Value = i64;

/// Lead consonant (초성) of a syllable. Selects the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Lead {
    /// ㄱ
    Giyeok,
    /// ㄲ
    SsangGiyeok,
    /// ㄴ - divide
    Nieun,
    /// ㄷ - add
    Digeut,
    /// ㄸ - multiply
    SsangDigeut,
    /// ㄹ - modulo
    Rieul,
    /// ㅁ - pop and output
    Mieum,
    /// ㅂ - push
    Bieup,
    /// ㅃ - duplicate
    SsangBieup,
    /// ㅅ - select storage
    Siot,
    /// ㅆ - move value
    SsangSiot,
    /// ㅇ - no operation
    Ieung,
    /// ㅈ - compare
    Jieut,
    /// ㅉ
    SsangJieut,
    /// ㅊ - branch if zero
    Chieut,
    /// ㅋ
    Kieuk,
    /// ㅌ - subtract
    Tieut,
    /// ㅍ - swap
    Pieup,
    /// ㅎ - terminate
    Hieut,
}

impl Lead {
    /// All leads in Unicode composition order
    pub const ALL: [Lead; 19] = [
        Lead::Giyeok,
        Lead::SsangGiyeok,
        Lead::Nieun,
        Lead::Digeut,
        Lead::SsangDigeut,
        Lead::Rieul,
        Lead::Mieum,
        Lead::Bieup,
        Lead::SsangBieup,
        Lead::Siot,
        Lead::SsangSiot,
        Lead::Ieung,
        Lead::Jieut,
        Lead::SsangJieut,
        Lead::Chieut,
        Lead::Kieuk,
        Lead::Tieut,
        Lead::Pieup,
        Lead::Hieut,
    ];

    const JAMO: [char; 19] = [
        'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
        'ㅌ', 'ㅍ', 'ㅎ',
    ];

    /// Looks up a lead by its composition index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Composition index of this lead
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compatibility jamo for display
    pub fn jamo(self) -> char {
        Self::JAMO[self.index()]
    }
}

/// How a vowel changes the cursor's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Replace the velocity outright
    Velocity {
        /// Horizontal component
        dx: Value,
        /// Vertical component
        dy: Value,
    },
    /// Negate `dy` when moving vertically (ㅡ)
    ReflectVertical,
    /// Negate `dx` when moving horizontally (ㅣ)
    ReflectHorizontal,
    /// Negate both components (ㅢ)
    Reverse,
    /// Leave the velocity alone
    Keep,
}

/// Vowel (중성) of a syllable. Selects the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Vowel {
    /// ㅏ - east
    A,
    /// ㅐ
    Ae,
    /// ㅑ - east, two cells
    Ya,
    /// ㅒ
    Yae,
    /// ㅓ - west
    Eo,
    /// ㅔ
    E,
    /// ㅕ - west, two cells
    Yeo,
    /// ㅖ
    Ye,
    /// ㅗ - north
    O,
    /// ㅘ
    Wa,
    /// ㅙ
    Wae,
    /// ㅚ
    Oe,
    /// ㅛ - north, two cells
    Yo,
    /// ㅜ - south
    U,
    /// ㅝ
    Wo,
    /// ㅞ
    We,
    /// ㅟ
    Wi,
    /// ㅠ - south, two cells
    Yu,
    /// ㅡ - vertical bounce
    Eu,
    /// ㅢ - full bounce
    Ui,
    /// ㅣ - horizontal bounce
    I,
}

impl Vowel {
    /// All vowels in Unicode composition order
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    const JAMO: [char; 21] = [
        'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
        'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
    ];

    /// Looks up a vowel by its composition index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Composition index of this vowel
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compatibility jamo for display
    pub fn jamo(self) -> char {
        Self::JAMO[self.index()]
    }

    /// Velocity change this vowel applies before its syllable executes
    pub fn heading(self) -> Heading {
        match self {
            Vowel::A => Heading::Velocity { dx: 1, dy: 0 },
            Vowel::Eo => Heading::Velocity { dx: -1, dy: 0 },
            Vowel::U => Heading::Velocity { dx: 0, dy: 1 },
            Vowel::O => Heading::Velocity { dx: 0, dy: -1 },
            Vowel::Ya => Heading::Velocity { dx: 2, dy: 0 },
            Vowel::Yeo => Heading::Velocity { dx: -2, dy: 0 },
            Vowel::Yu => Heading::Velocity { dx: 0, dy: 2 },
            Vowel::Yo => Heading::Velocity { dx: 0, dy: -2 },
            Vowel::Eu => Heading::ReflectVertical,
            Vowel::I => Heading::ReflectHorizontal,
            Vowel::Ui => Heading::Reverse,
            Vowel::Ae
            | Vowel::Yae
            | Vowel::E
            | Vowel::Ye
            | Vowel::Wa
            | Vowel::Wae
            | Vowel::Oe
            | Vowel::Wo
            | Vowel::We
            | Vowel::Wi => Heading::Keep,
        }
    }
}

/// Trailing consonant (종성) of a syllable, including the empty tail.
/// Selects a storage, an I/O mode or an immediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Tail {
    /// No trailing consonant
    None,
    /// ㄱ
    Giyeok,
    /// ㄲ
    SsangGiyeok,
    /// ㄳ
    GiyeokSiot,
    /// ㄴ
    Nieun,
    /// ㄵ
    NieunJieut,
    /// ㄶ
    NieunHieut,
    /// ㄷ
    Digeut,
    /// ㄹ
    Rieul,
    /// ㄺ
    RieulGiyeok,
    /// ㄻ
    RieulMieum,
    /// ㄼ
    RieulBieup,
    /// ㄽ
    RieulSiot,
    /// ㄾ
    RieulTieut,
    /// ㄿ
    RieulPieup,
    /// ㅀ
    RieulHieut,
    /// ㅁ
    Mieum,
    /// ㅂ
    Bieup,
    /// ㅄ
    BieupSiot,
    /// ㅅ
    Siot,
    /// ㅆ
    SsangSiot,
    /// ㅇ - the queue; numeric I/O
    Ieung,
    /// ㅈ
    Jieut,
    /// ㅊ
    Chieut,
    /// ㅋ
    Kieuk,
    /// ㅌ
    Tieut,
    /// ㅍ
    Pieup,
    /// ㅎ - the pipe; character I/O
    Hieut,
}

impl Tail {
    /// All tails in Unicode composition order, `None` first
    pub const ALL: [Tail; 28] = [
        Tail::None,
        Tail::Giyeok,
        Tail::SsangGiyeok,
        Tail::GiyeokSiot,
        Tail::Nieun,
        Tail::NieunJieut,
        Tail::NieunHieut,
        Tail::Digeut,
        Tail::Rieul,
        Tail::RieulGiyeok,
        Tail::RieulMieum,
        Tail::RieulBieup,
        Tail::RieulSiot,
        Tail::RieulTieut,
        Tail::RieulPieup,
        Tail::RieulHieut,
        Tail::Mieum,
        Tail::Bieup,
        Tail::BieupSiot,
        Tail::Siot,
        Tail::SsangSiot,
        Tail::Ieung,
        Tail::Jieut,
        Tail::Chieut,
        Tail::Kieuk,
        Tail::Tieut,
        Tail::Pieup,
        Tail::Hieut,
    ];

    const JAMO: [char; 28] = [
        ' ', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
        'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    ];

    /// Looks up a tail by its composition index (0 is `None`)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Composition index of this tail
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compatibility jamo for display; the empty tail renders as a space
    pub fn jamo(self) -> char {
        Self::JAMO[self.index()]
    }

    /// Immediate value pushed by `ㅂ` with this tail: the jamo's stroke count.
    ///
    /// ㅇ and ㅎ select input instead, so they carry no immediate.
    pub fn stroke_count(self) -> Value {
        match self {
            Tail::None | Tail::Ieung | Tail::Hieut => 0,
            Tail::Giyeok | Tail::Nieun | Tail::Siot => 2,
            Tail::Digeut | Tail::Jieut | Tail::Kieuk => 3,
            Tail::Mieum
            | Tail::Bieup
            | Tail::Chieut
            | Tail::Tieut
            | Tail::Pieup
            | Tail::SsangGiyeok
            | Tail::GiyeokSiot
            | Tail::SsangSiot => 4,
            Tail::Rieul | Tail::NieunJieut | Tail::NieunHieut => 5,
            Tail::BieupSiot => 6,
            Tail::RieulGiyeok | Tail::RieulSiot => 7,
            Tail::RieulHieut => 8,
            Tail::RieulMieum | Tail::RieulBieup | Tail::RieulTieut | Tail::RieulPieup => 9,
        }
    }
}

/// A fully decoded syllable block: one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    /// Operation selector
    pub lead: Lead,
    /// Direction selector
    pub vowel: Vowel,
    /// Addressing mode or immediate selector
    pub tail: Tail,
}

impl Syllable {
    /// Creates a syllable from its three phonemes
    pub fn new(lead: Lead, vowel: Vowel, tail: Tail) -> Self {
        Syllable { lead, vowel, tail }
    }

    /// Recomposes the precomposed Hangul codepoint
    pub fn to_char(self) -> char {
        let offset = (self.lead.index() * Vowel::ALL.len() + self.vowel.index()) * Tail::ALL.len()
            + self.tail.index();
        char::from_u32(super::SYLLABLE_BASE + offset as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Cell {
    /// Not a Hangul syllable: executes as a no-op
    #[default]
    Blank,
    /// A complete instruction
    Syllable(Syllable),
}

impl Cell {
    /// True when the cell carries both a lead and a vowel
    pub fn is_complete(&self) -> bool {
        matches!(self, Cell::Syllable(_))
    }

    /// The instruction in this cell, if any
    pub fn syllable(&self) -> Option<Syllable> {
        match self {
            Cell::Syllable(s) => Some(*s),
            Cell::Blank => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Syllable(s) => write!(f, "{}", s),
            Cell::Blank => write!(f, "\u{3000}"),
        }
    }
}
