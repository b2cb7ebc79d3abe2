pub mod calculations;
pub mod constants;

pub use calculations::{
    compute_score, evaluate, grade_for_score, is_well_formed_price, parse_number, validate,
    volume_to_ml, Outcome, ValidatedInput,
};
pub use constants::*;
