use crate::error::TuningResult;
use crate::types::letter::NoteLetter;
use crate::types::tpc::{accidental, note_letter, TonalPitchClass};

/// Distance between two letters on the circle of fifths
pub fn circle_of_fifths_distance(a: NoteLetter, b: NoteLetter) -> i32 {
    a.fifths_from_c() - b.fifths_from_c()
}

/// Same as [`circle_of_fifths_distance`] for letters given as strings
pub fn circle_of_fifths_distance_str(a: &str, b: &str) -> TuningResult<i32> {
    Ok(circle_of_fifths_distance(a.parse()?, b.parse()?))
}

/// Cents needed to retune `note` from 12EDO to a temperament whose fifth
/// deviates from 700 cents by `fifth_deviation`, keeping `reference` fixed
pub fn circle_of_fifths_tuning_offset<N>(
    note: &N,
    fifth_deviation: f64,
    reference: NoteLetter,
) -> TuningResult<f64>
where
    N: TonalPitchClass + ?Sized,
{
    let tpc = note.tpc1();
    let letter = note_letter(tpc)?;
    let mut offset = -f64::from(circle_of_fifths_distance(letter, reference)) * fifth_deviation;

    // An accidental is seven fifths away from its natural
    let accidental = accidental(tpc);
    offset -= f64::from(accidental) * 7.0 * fifth_deviation;

    log::trace!(
        "tpc {} -> {} accidental {} offset {:.3} cents (ref {})",
        tpc,
        letter,
        accidental,
        offset,
        reference
    );

    Ok(offset)
}

/// Tuning offset relative to the default reference note A
pub fn tuning_offset<N>(note: &N, fifth_deviation: f64) -> TuningResult<f64>
where
    N: TonalPitchClass + ?Sized,
{
    circle_of_fifths_tuning_offset(note, fifth_deviation, NoteLetter::default())
}
