use crate::models::Grade;

/// Milliliters per milliliter.
pub const ML_PER_ML: f64 = 1.0;

/// Milliliters per US fluid ounce.
pub const ML_PER_OUNCE: f64 = 29.5735;

/// Milliliters per shot (1.5 fl oz).
pub const ML_PER_SHOT: f64 = 44.3603;

/// Number of superseded results kept in history.
pub const HISTORY_CAPACITY: usize = 4;

/// Prices are dollars with at most two decimal places.
pub const PRICE_PATTERN: &str = r"^\d*\.?\d{0,2}$";

/// Grade thresholds, highest first. A score takes the first grade whose
/// lower bound it reaches; anything below the last bound is `F`.
pub const GRADE_THRESHOLDS: &[(i64, Grade)] = &[
    (1800, Grade::Implausible),
    (1300, Grade::APlus),
    (1000, Grade::A),
    (850, Grade::AMinus),
    (700, Grade::BPlus),
    (600, Grade::B),
    (500, Grade::BMinus),
    (400, Grade::CPlus),
    (300, Grade::C),
    (200, Grade::CMinus),
    (100, Grade::D),
];

/// Grade for scores under every threshold.
pub const FLOOR_GRADE: Grade = Grade::F;
