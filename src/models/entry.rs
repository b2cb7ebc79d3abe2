use serde::Serialize;

use crate::models::Grade;

/// A computed result: what the screen shows, and what history archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub grade: Grade,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(grade: Grade, score: i64) -> Self {
        Self { grade, score }
    }
}

/// The four raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkInput {
    pub alcohol: String,
    pub volume: String,
    pub quantity: String,
    pub price: String,
}

impl DrinkInput {
    pub fn new(
        alcohol: impl Into<String>,
        volume: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            alcohol: alcohol.into(),
            volume: volume.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Fields in validation order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.alcohol, &self.volume, &self.quantity, &self.price]
    }
}
