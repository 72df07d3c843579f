use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

/// The six crew skills. Declaration order is used as the tie-break
/// when a skill order has to be derived from equal core values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr)]
pub enum Skill {
    #[serde(rename = "command_skill")]
    #[strum(serialize = "command_skill")]
    Command,
    #[serde(rename = "science_skill")]
    #[strum(serialize = "science_skill")]
    Science,
    #[serde(rename = "security_skill")]
    #[strum(serialize = "security_skill")]
    Security,
    #[serde(rename = "engineering_skill")]
    #[strum(serialize = "engineering_skill")]
    Engineering,
    #[serde(rename = "diplomacy_skill")]
    #[strum(serialize = "diplomacy_skill")]
    Diplomacy,
    #[serde(rename = "medicine_skill")]
    #[strum(serialize = "medicine_skill")]
    Medicine
}

/// Base value of a single skill: the core value used for voyages and
/// shuttles, and the proficiency range used for gauntlet rolls.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BaseSkill {
    pub core: f64,
    pub range_min: f64,
    pub range_max: f64
}

impl BaseSkill {
    pub fn new(core: f64, range_min: f64, range_max: f64) -> BaseSkill {
        BaseSkill {
            core,
            range_min,
            range_max
        }
    }

    /// Mean proficiency roll
    pub fn average_proficiency(&self) -> f64 {
        (self.range_min + self.range_max) / 2.0
    }

    /// Expected voyage contribution of this skill
    pub fn voyage_value(&self) -> f64 {
        self.core + self.average_proficiency()
    }

    pub fn is_finite(&self) -> bool {
        self.core.is_finite() && self.range_min.is_finite() && self.range_max.is_finite()
    }
}
