pub mod constants;
pub mod offset;

pub use offset::{
    circle_of_fifths_distance, circle_of_fifths_distance_str, circle_of_fifths_tuning_offset,
    tuning_offset,
};
