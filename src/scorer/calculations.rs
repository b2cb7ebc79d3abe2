use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{DrinkInput, Grade, ScoreEntry, VolumeUnit};
use crate::scorer::constants::{FLOOR_GRADE, GRADE_THRESHOLDS, PRICE_PATTERN};

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRICE_PATTERN).expect("price pattern is a valid regex"));

/// Parsed, validated form values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub alcohol: f64,
    pub volume: f64,
    pub quantity: f64,
    pub price: f64,
}

/// Everything a successful submission produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub entry: ScoreEntry,
    pub volume_ml: f64,
}

/// Parse a form field as a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are not numbers here.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether the price string looks like dollars and cents.
pub fn is_well_formed_price(raw: &str) -> bool {
    PRICE_RE.is_match(raw)
}

/// Run the four checks in order; the first failure wins.
pub fn validate(input: &DrinkInput) -> Result<ValidatedInput, ValidationError> {
    if input.fields().iter().any(|f| f.is_empty()) {
        return Err(ValidationError::MissingField);
    }

    let [alcohol, volume, quantity, price] = input.fields().map(parse_number);
    let (Some(alcohol), Some(volume), Some(quantity), Some(price)) =
        (alcohol, volume, quantity, price)
    else {
        return Err(ValidationError::NonNumericInput);
    };

    if !is_well_formed_price(&input.price) {
        return Err(ValidationError::MalformedPrice);
    }

    if price == 0.0 {
        return Err(ValidationError::ZeroPrice);
    }

    Ok(ValidatedInput {
        alcohol,
        volume,
        quantity,
        price,
    })
}

/// Convert a volume in `unit` to milliliters.
#[inline]
pub fn volume_to_ml(volume: f64, unit: VolumeUnit) -> f64 {
    volume * unit.factor()
}

/// Alcohol-volume per dollar, rounded half away from zero.
///
/// `None` when the inputs overflow: a product of finite inputs can still be
/// infinite or NaN, or too large for an `i64`. `price` must be nonzero;
/// `validate` guarantees it.
pub fn compute_score(alcohol: f64, volume_ml: f64, quantity: f64, price: f64) -> Option<i64> {
    let raw = (alcohol * volume_ml * quantity / price).round();
    if raw.is_finite() && raw.abs() < i64::MAX as f64 {
        Some(raw as i64)
    } else {
        None
    }
}

/// Map a score onto the grade table.
pub fn grade_for_score(score: i64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, grade)| *grade)
        .unwrap_or(FLOOR_GRADE)
}

/// Validate raw form input and score it. Pure: touches no session state.
pub fn evaluate(input: &DrinkInput, unit: VolumeUnit) -> Result<Outcome, ValidationError> {
    let v = validate(input)?;
    let volume_ml = volume_to_ml(v.volume, unit);
    let score = compute_score(v.alcohol, volume_ml, v.quantity, v.price)
        .ok_or(ValidationError::NonNumericInput)?;
    let grade = grade_for_score(score);

    log::debug!(
        "scored {}% x {} {} x {} @ ${} -> {} ({})",
        v.alcohol,
        v.volume,
        unit,
        v.quantity,
        v.price,
        score,
        grade
    );

    Ok(Outcome {
        entry: ScoreEntry::new(grade, score),
        volume_ml,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn input(alcohol: &str, volume: &str, quantity: &str, price: &str) -> DrinkInput {
        DrinkInput::new(alcohol, volume, quantity, price)
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("4.99"), Some(4.99));
        assert_eq!(parse_number(" 12 "), Some(12.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_price_pattern() {
        assert!(is_well_formed_price("4.99"));
        assert!(is_well_formed_price("5"));
        assert!(is_well_formed_price("5."));
        assert!(is_well_formed_price(".5"));
        assert!(!is_well_formed_price("4.999"));
        assert!(!is_well_formed_price("-4"));
        assert!(!is_well_formed_price(" 4"));
        assert!(!is_well_formed_price("1e2"));
    }

    #[test]
    fn test_validation_order() {
        // Empty beats non-numeric.
        assert_eq!(
            validate(&input("", "abc", "1", "4.99")),
            Err(ValidationError::MissingField)
        );
        // Non-numeric beats malformed price.
        assert_eq!(
            validate(&input("5", "abc", "1", "4.999")),
            Err(ValidationError::NonNumericInput)
        );
        assert_eq!(
            validate(&input("5", "355", "1", "4.999")),
            Err(ValidationError::MalformedPrice)
        );
        assert_eq!(
            validate(&input("5", "355", "1", "0")),
            Err(ValidationError::ZeroPrice)
        );
        assert_eq!(
            validate(&input("5", "355", "1", "0.00")),
            Err(ValidationError::ZeroPrice)
        );
    }

    #[test]
    fn test_volume_conversion() {
        assert_float_absolute_eq!(volume_to_ml(355.0, VolumeUnit::Milliliter), 355.0, 1e-9);
        assert_float_absolute_eq!(volume_to_ml(12.0, VolumeUnit::Ounce), 354.882, 1e-9);
        assert_float_absolute_eq!(volume_to_ml(2.0, VolumeUnit::Shot), 88.7206, 1e-9);
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(compute_score(5.0, 1.0, 1.0, 2.0), Some(3));
        assert_eq!(compute_score(1.0, 7.0, 1.0, 2.0), Some(4));
        assert_eq!(compute_score(1.0, 1.0, 1.0, 4.0), Some(0));
    }

    #[test]
    fn test_overflowing_score_is_none() {
        assert_eq!(compute_score(1e308, 1e308, 1.0, 1.0), None);
        assert_eq!(compute_score(0.0, f64::INFINITY, 1.0, 1.0), None);
        assert_eq!(compute_score(1e10, 1e10, 1.0, 1.0), None);
    }

    #[test]
    fn test_evaluate_rejects_overflow() {
        assert_eq!(
            evaluate(&input("1e308", "1e308", "1", "1"), VolumeUnit::Milliliter),
            Err(ValidationError::NonNumericInput)
        );
        // Finite volume that only overflows once converted to mL.
        assert_eq!(
            evaluate(&input("0", "1e308", "1", "1"), VolumeUnit::Ounce),
            Err(ValidationError::NonNumericInput)
        );
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for_score(100_000), Grade::Implausible);
        assert_eq!(grade_for_score(1800), Grade::Implausible);
        assert_eq!(grade_for_score(1799), Grade::APlus);
        assert_eq!(grade_for_score(1300), Grade::APlus);
        assert_eq!(grade_for_score(1299), Grade::A);
        assert_eq!(grade_for_score(1000), Grade::A);
        assert_eq!(grade_for_score(999), Grade::AMinus);
        assert_eq!(grade_for_score(850), Grade::AMinus);
        assert_eq!(grade_for_score(849), Grade::BPlus);
        assert_eq!(grade_for_score(700), Grade::BPlus);
        assert_eq!(grade_for_score(699), Grade::B);
        assert_eq!(grade_for_score(600), Grade::B);
        assert_eq!(grade_for_score(599), Grade::BMinus);
        assert_eq!(grade_for_score(500), Grade::BMinus);
        assert_eq!(grade_for_score(499), Grade::CPlus);
        assert_eq!(grade_for_score(400), Grade::CPlus);
        assert_eq!(grade_for_score(399), Grade::C);
        assert_eq!(grade_for_score(300), Grade::C);
        assert_eq!(grade_for_score(299), Grade::CMinus);
        assert_eq!(grade_for_score(200), Grade::CMinus);
        assert_eq!(grade_for_score(199), Grade::D);
        assert_eq!(grade_for_score(100), Grade::D);
        assert_eq!(grade_for_score(99), Grade::F);
        assert_eq!(grade_for_score(0), Grade::F);
        assert_eq!(grade_for_score(-5), Grade::F);
    }

    #[test]
    fn test_evaluate_can_of_beer() {
        let outcome = evaluate(&input("5", "355", "1", "4.99"), VolumeUnit::Milliliter).unwrap();
        assert_eq!(outcome.entry, ScoreEntry::new(Grade::C, 356));
        assert_float_absolute_eq!(outcome.volume_ml, 355.0, 1e-9);
    }

    #[test]
    fn test_evaluate_in_ounces() {
        let outcome = evaluate(&input("5", "12", "1", "4.99"), VolumeUnit::Ounce).unwrap();
        assert_float_absolute_eq!(outcome.volume_ml, 354.882, 1e-9);
        // 5 * 354.882 / 4.99 = 355.59...
        assert_eq!(outcome.entry.score, 356);
    }
}
