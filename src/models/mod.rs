mod entry;
mod grade;
mod unit;

pub use entry::{DrinkInput, ScoreEntry};
pub use grade::{Grade, GradeColor};
pub use unit::VolumeUnit;
