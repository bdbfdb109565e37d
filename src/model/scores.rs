use serde::Serialize;

use crate::model::item::{FridgeItem, ItemId, Presence};

/// Scoring rule that produced a similarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Suffix,
    Edit,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Suffix => "suffix",
            MatchKind::Edit => "edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    pub id: ItemId,
    pub name: String,
    pub presence: Presence,
    pub score: f32,
    pub kind: MatchKind,
}

impl ScoredMatch {
    pub fn from_item(item: &FridgeItem, score: f32, kind: MatchKind) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            presence: item.presence,
            score,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub query: String,
    pub presence: Option<Presence>,
    pub same_name_other_presence: Vec<FridgeItem>,
    pub similar: Vec<ScoredMatch>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.same_name_other_presence.is_empty() && self.similar.is_empty()
    }
}
