//! Tuning offsets for regular temperaments.
//!
//! A temperament is described by how far its fifth deviates from the 700 cent
//! fifth of 12EDO. Every note is then shifted by that deviation once for each
//! step it sits away from the reference note on the line of fifths.

pub mod config;
pub mod error;
pub mod tuning;
pub mod types;

pub use error::{TuningError, TuningResult};
pub use tuning::constants::{
    DEFAULT_FIFTH, JUST_FIFTH, LARGEST_DIATONIC_FIFTH, SMALLEST_DIATONIC_FIFTH, SYNTONIC_COMMA,
};
pub use tuning::{
    circle_of_fifths_distance, circle_of_fifths_distance_str, circle_of_fifths_tuning_offset,
    tuning_offset,
};
pub use types::{NoteLetter, NoteName, TonalPitchClass};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
