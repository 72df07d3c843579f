use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter};

/// Maximum star rating of a crew member. This is the key used to
/// partition the roster into rarity buckets.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
#[repr(u8)]
pub enum Rarity {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    SuperRare = 4,
    Legendary = 5
}

impl TryFrom<i32> for Rarity {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Rarity::Common),
            2 => Ok(Rarity::Uncommon),
            3 => Ok(Rarity::Rare),
            4 => Ok(Rarity::SuperRare),
            5 => Ok(Rarity::Legendary),
            _ => Err(())
        }
    }
}

impl Rarity {
    pub fn stars(&self) -> u8 {
        *self as u8
    }
}
