use std::fmt;

use serde::Serialize;

/// Letter grade bucketed from a score. Higher scores mean cheaper alcohol.
///
/// `Implausible` sits above `APlus`: a score that high almost always means a
/// typo in one of the inputs, so it is reported as a remark rather than a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "wow. check for errors.")]
    Implausible,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// Display color for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeColor {
    Good,
    Poor,
}

impl GradeColor {
    /// Color as shown by the mobile app.
    pub fn css(self) -> &'static str {
        match self {
            GradeColor::Good => "#00BD1E",
            GradeColor::Poor => "red",
        }
    }
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::Implausible => "wow. check for errors.",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Whether the score is beyond anything a real purchase produces.
    #[inline]
    pub fn is_anomaly(self) -> bool {
        self == Grade::Implausible
    }

    pub fn color(self) -> GradeColor {
        match self {
            Grade::APlus | Grade::A | Grade::AMinus | Grade::BPlus | Grade::B => GradeColor::Good,
            _ => GradeColor::Poor,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
