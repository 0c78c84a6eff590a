use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TuningError;

/// Natural note letter, ignoring accidental and octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum NoteLetter {
    C,
    D,
    E,
    F,
    G,
    #[default]
    A,
    B,
}

impl NoteLetter {
    pub const ALL: [NoteLetter; 7] = [
        NoteLetter::C,
        NoteLetter::D,
        NoteLetter::E,
        NoteLetter::F,
        NoteLetter::G,
        NoteLetter::A,
        NoteLetter::B,
    ];

    /// Signed distance from C in fifths
    pub const fn fifths_from_c(self) -> i32 {
        match self {
            NoteLetter::C => 0,
            NoteLetter::D => 2,
            NoteLetter::E => 4,
            NoteLetter::F => -1,
            NoteLetter::G => 1,
            NoteLetter::A => 3,
            NoteLetter::B => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NoteLetter::C => "C",
            NoteLetter::D => "D",
            NoteLetter::E => "E",
            NoteLetter::F => "F",
            NoteLetter::G => "G",
            NoteLetter::A => "A",
            NoteLetter::B => "B",
        }
    }
}

impl fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteLetter {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(NoteLetter::C),
            "D" => Ok(NoteLetter::D),
            "E" => Ok(NoteLetter::E),
            "F" => Ok(NoteLetter::F),
            "G" => Ok(NoteLetter::G),
            "A" => Ok(NoteLetter::A),
            "B" => Ok(NoteLetter::B),
            other => Err(TuningError::UnknownNoteLetter(other.to_string())),
        }
    }
}

impl TryFrom<String> for NoteLetter {
    type Error = TuningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NoteLetter> for String {
    fn from(letter: NoteLetter) -> Self {
        letter.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a() {
        assert_eq!(NoteLetter::default(), NoteLetter::A);
    }

    #[test]
    fn test_fifths_table() {
        let table: Vec<i32> = NoteLetter::ALL.iter().map(|l| l.fifths_from_c()).collect();
        assert_eq!(table, vec![0, 2, 4, -1, 1, 3, 5]);
    }

    #[test]
    fn test_parse_roundtrips_display() {
        for letter in NoteLetter::ALL {
            assert_eq!(letter.to_string().parse::<NoteLetter>(), Ok(letter));
        }
    }

    #[test]
    fn test_parse_unknown_letter() {
        assert_eq!(
            "H".parse::<NoteLetter>(),
            Err(TuningError::UnknownNoteLetter("H".to_string()))
        );
        assert!("c".parse::<NoteLetter>().is_err());
        assert!("".parse::<NoteLetter>().is_err());
        assert_eq!(
            " G ".parse::<NoteLetter>(),
            Err(TuningError::UnknownNoteLetter(" G ".to_string()))
        );
    }

    #[test]
    fn test_serde_as_letter() {
        let letter: NoteLetter = serde_yaml::from_str("E").unwrap();
        assert_eq!(letter, NoteLetter::E);
        assert!(serde_yaml::from_str::<NoteLetter>("X").is_err());
        assert_eq!(serde_yaml::to_string(&NoteLetter::F).unwrap().trim(), "F");
    }
}
