use thiserror::Error;

/// Result type for tuning calculations
pub type TuningResult<T> = Result<T, TuningError>;

/// Contract violations raised by the tuning calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuningError {
    /// Letter outside C, D, E, F, G, A, B
    #[error("unknown note letter: '{0}'")]
    UnknownNoteLetter(String),

    /// `tpc % 7` landed outside the residue table
    #[error("invalid tonal pitch class {tpc} (residue {residue})")]
    InvalidTonalPitchClass { tpc: i32, residue: i32 },

    /// Note name that could not be parsed into a letter and accidental
    #[error("invalid note name: '{0}'")]
    InvalidNoteName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TuningError::UnknownNoteLetter("H".to_string());
        assert_eq!(err.to_string(), "unknown note letter: 'H'");

        let err = TuningError::InvalidTonalPitchClass { tpc: 9, residue: 9 };
        assert_eq!(err.to_string(), "invalid tonal pitch class 9 (residue 9)");
    }
}
