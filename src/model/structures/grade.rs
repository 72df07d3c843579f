use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Letter grade derived from a bucket score fraction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Grade {
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    #[strum(serialize = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    #[strum(serialize = "D+")]
    DPlus,
    D,
    #[serde(rename = "D-")]
    #[strum(serialize = "D-")]
    DMinus,
    F,
    /// Crew that were not ranked
    #[serde(rename = "?")]
    #[strum(serialize = "?")]
    Unranked
}

/// Lower bounds (inclusive) for each grade, best first
const GRADE_THRESHOLDS: [(f64, Grade); 12] = [
    (0.97, Grade::APlus),
    (0.93, Grade::A),
    (0.90, Grade::AMinus),
    (0.87, Grade::BPlus),
    (0.83, Grade::B),
    (0.80, Grade::BMinus),
    (0.77, Grade::CPlus),
    (0.73, Grade::C),
    (0.70, Grade::CMinus),
    (0.67, Grade::DPlus),
    (0.63, Grade::D),
    (0.60, Grade::DMinus)
];

impl Grade {
    /// Monotonic mapping from a 0-1 fraction to a letter grade
    pub fn from_fraction(value: f64) -> Grade {
        if !value.is_finite() {
            return Grade::Unranked;
        }

        GRADE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}
