use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an item is currently in the fridge or on the shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Have,
    Need,
}

impl Presence {
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Have => "have",
            Presence::Need => "need",
        }
    }

    pub fn other(self) -> Presence {
        match self {
            Presence::Have => Presence::Need,
            Presence::Need => Presence::Have,
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "have" => Ok(Presence::Have),
            "need" => Ok(Presence::Need),
            other => Err(format!("unknown presence '{other}' (use have|need)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FridgeItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default = "default_presence")]
    pub presence: Presence,
}

impl FridgeItem {
    pub fn new(id: u64, name: impl Into<String>, presence: Presence) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            presence,
        }
    }
}

fn default_presence() -> Presence {
    Presence::Have
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/item.rs"]
mod tests;
