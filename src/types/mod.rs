pub mod letter;
pub mod note_name;
pub mod tpc;

pub use letter::NoteLetter;
pub use note_name::NoteName;
pub use tpc::TonalPitchClass;
