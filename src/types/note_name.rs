use std::fmt;
use std::str::FromStr;

use crate::error::TuningError;
use crate::types::letter::NoteLetter;
use crate::types::tpc::{tpc_from_parts, TonalPitchClass};

/// Spelled note without octave, e.g. "F#" or "Bb"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName {
    pub letter: NoteLetter,
    pub accidental: i32,
}

impl NoteName {
    pub fn new(letter: NoteLetter, accidental: i32) -> Self {
        Self { letter, accidental }
    }
}

impl TonalPitchClass for NoteName {
    fn tpc1(&self) -> i32 {
        tpc_from_parts(self.letter, self.accidental)
    }
}

impl FromStr for NoteName {
    type Err = TuningError;

    /// Parse a note name
    /// Examples: "c" -> C, "F#" -> F sharp, "ebb" -> E double flat, "Gx" -> G double sharp
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TuningError::InvalidNoteName(s.to_string());

        let mut chars = s.trim().chars();
        let letter_char = chars.next().ok_or_else(invalid)?;
        let letter: NoteLetter = letter_char
            .to_ascii_uppercase()
            .to_string()
            .parse()
            .map_err(|_| invalid())?;

        let mut accidental = 0;
        for ch in chars {
            match ch {
                '#' | 's' => accidental += 1,
                'x' => accidental += 2,
                'b' => accidental -= 1,
                _ => return Err(invalid()),
            }
        }

        Ok(Self::new(letter, accidental))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let symbol = if self.accidental < 0 { "b" } else { "#" };
        for _ in 0..self.accidental.unsigned_abs() {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}
