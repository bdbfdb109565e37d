use thiserror::Error;

use crate::model::item::{FridgeItem, ItemId};
use crate::model::scores::ScoredMatch;
use crate::model::thresholds::{RankOrder, ScoringProfile};
use crate::pipeline::stage1_normalize::{NameIndex, normalize_name};
use crate::pipeline::stage2_score::score_normalized;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("query name is blank")]
    BlankQuery,
}

/// Scores every candidate against `query`, drops those under the cutoff,
/// orders them per `profile.rank_order` and keeps `profile.max_results`.
pub fn rank_similar(
    query: &str,
    candidates: &[FridgeItem],
    exclude: Option<ItemId>,
    profile: &ScoringProfile,
) -> Result<Vec<ScoredMatch>, MatchError> {
    let query = normalize_name(query);
    if query.is_empty() {
        return Err(MatchError::BlankQuery);
    }
    let pairs = candidates
        .iter()
        .map(|item| (item, normalize_name(&item.name)))
        .collect::<Vec<_>>();
    Ok(rank_normalized(
        &query,
        pairs.iter().map(|(item, name)| (*item, name.as_str())),
        exclude,
        profile,
    ))
}

pub fn rank_indexed(
    index: &NameIndex,
    query: &str,
    exclude: Option<ItemId>,
    profile: &ScoringProfile,
) -> Result<Vec<ScoredMatch>, MatchError> {
    let query = normalize_name(query);
    if query.is_empty() {
        return Err(MatchError::BlankQuery);
    }
    Ok(rank_normalized(
        &query,
        index
            .entries()
            .iter()
            .map(|e| (&e.item, e.normalized.as_str())),
        exclude,
        profile,
    ))
}

fn rank_normalized<'a>(
    query: &str,
    candidates: impl Iterator<Item = (&'a FridgeItem, &'a str)>,
    exclude: Option<ItemId>,
    profile: &ScoringProfile,
) -> Vec<ScoredMatch> {
    let mut scored = Vec::new();
    let mut considered = 0usize;
    for (item, name) in candidates {
        if Some(item.id) == exclude {
            continue;
        }
        considered += 1;
        let (score, kind) = score_normalized(query, name, profile);
        if score < profile.cutoff {
            continue;
        }
        scored.push(ScoredMatch::from_item(item, score, kind));
    }

    // Stable sorts: ties keep catalog order.
    match profile.rank_order {
        RankOrder::Legacy => scored.sort_by(|a, b| a.score.total_cmp(&b.score)),
        RankOrder::BestFirst => scored.sort_by(|a, b| b.score.total_cmp(&a.score)),
    }
    let above_cutoff = scored.len();
    scored.truncate(profile.max_results);

    tracing::debug!(
        query,
        considered,
        above_cutoff,
        kept = scored.len(),
        "ranked similar items"
    );
    scored
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
