//! Tonal pitch classes on the line of fifths.
//!
//! Natural notes sit at F=13, C=14, G=15, D=16, A=17, E=18, B=19. Stepping by
//! one moves a fifth, stepping by seven adds one sharp.

use crate::error::{TuningError, TuningResult};
use crate::types::letter::NoteLetter;

/// Anything that carries a tonal pitch class
pub trait TonalPitchClass {
    fn tpc1(&self) -> i32;
}

impl TonalPitchClass for i32 {
    fn tpc1(&self) -> i32 {
        *self
    }
}

/// Tonal pitch class of C natural
const NATURAL_C: i32 = 14;

/// Classify a tonal pitch class into its note letter
///
/// `%` truncates toward zero, so negative classes give negative residues;
/// both forms of each residue map to the same letter.
pub fn note_letter(tpc: i32) -> TuningResult<NoteLetter> {
    let residue = tpc % 7;
    match residue {
        0 => Ok(NoteLetter::C),
        2 | -5 => Ok(NoteLetter::D),
        4 | -3 => Ok(NoteLetter::E),
        6 | -1 => Ok(NoteLetter::F),
        1 | -6 => Ok(NoteLetter::G),
        3 | -4 => Ok(NoteLetter::A),
        5 | -2 => Ok(NoteLetter::B),
        _ => Err(TuningError::InvalidTonalPitchClass { tpc, residue }),
    }
}

/// Accidental level: 0 for naturals, +1 per sharp, -1 per flat
///
/// Computed in `i64`; the result always fits in `i32`.
pub fn accidental(tpc: i32) -> i32 {
    ((i64::from(tpc) + 1).div_euclid(7) - 2) as i32
}

/// Tonal pitch class for a letter carrying `accidental` sharps (negative for flats)
pub fn tpc_from_parts(letter: NoteLetter, accidental: i32) -> i32 {
    NATURAL_C + letter.fifths_from_c() + 7 * accidental
}
