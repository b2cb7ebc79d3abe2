use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{DrinkInput, ScoreEntry, VolumeUnit};
use crate::scorer::{evaluate, Outcome};
use crate::state::History;

/// Everything one app session remembers: the displayed result and what it replaced.
///
/// Updates never mutate in place. `submit` hands back a new `Session`, so a
/// rejected submission leaves the caller holding the old one untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    current: Option<ScoreEntry>,
    history: History,
}

impl Session {
    /// Fresh session: nothing displayed, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The result on screen, if any submission has succeeded yet.
    pub fn current(&self) -> Option<&ScoreEntry> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Score `input` and return the session that results from showing it.
    ///
    /// Also returns the outcome so callers can show details (like the
    /// converted volume) that the session itself doesn't keep.
    pub fn submit(
        &self,
        input: &DrinkInput,
        unit: VolumeUnit,
    ) -> Result<(Session, Outcome), ValidationError> {
        match evaluate(input, unit) {
            Ok(outcome) => Ok((self.with_result(outcome.entry), outcome)),
            Err(e) => {
                log::info!("Rejected submission: {}", e);
                Err(e)
            }
        }
    }

    /// The session after `entry` replaces the current result.
    ///
    /// The previous result, if any, moves to the front of history.
    pub fn with_result(&self, entry: ScoreEntry) -> Session {
        let mut history = self.history.clone();
        if let Some(previous) = self.current {
            if let Some(evicted) = history.push(previous) {
                log::info!(
                    "History full, dropped {} (score: {})",
                    evicted.grade,
                    evicted.score
                );
            }
        }

        Session {
            current: Some(entry),
            history,
        }
    }
}
