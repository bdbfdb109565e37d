use crate::model::item::{ItemId, Presence};
use crate::model::scores::Suggestions;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_normalize::NameIndex;
use crate::pipeline::stage3_rank::{MatchError, rank_indexed};

/// Suggestions shown while adding or editing an item named `query`.
///
/// `presence` is the presence the item is being saved with; when set, items
/// with the same name on the other list are reported separately.
pub fn suggest(
    index: &NameIndex,
    query: &str,
    presence: Option<Presence>,
    exclude: Option<ItemId>,
    profile: &ScoringProfile,
) -> Result<Suggestions, MatchError> {
    let similar = rank_indexed(index, query, exclude, profile)?;
    let same_name_other_presence = match presence {
        Some(p) => index.same_name(query, p, exclude),
        None => Vec::new(),
    };

    tracing::info!(
        query = query.trim(),
        catalog = index.len(),
        same_name = same_name_other_presence.len(),
        similar = similar.len(),
        "suggestions ready"
    );

    Ok(Suggestions {
        query: query.trim().to_string(),
        presence,
        same_name_other_presence,
        similar,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_suggest.rs"]
mod tests;
