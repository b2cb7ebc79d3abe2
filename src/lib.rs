pub mod batch;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scorer;
pub mod state;

pub use error::{AlcError, Result, ValidationError};
pub use models::{DrinkInput, Grade, GradeColor, ScoreEntry, VolumeUnit};
pub use scorer::{evaluate, grade_for_score, Outcome};
pub use state::{History, Session};
