//! Similar-item name matching for FridgeFriend item catalogs.
//!
//! Scoring runs in fixed stages: names are normalized and indexed, each
//! candidate is scored against the query (exact, prefix, suffix, then a
//! weighted edit-distance ratio), results under the cutoff are dropped and
//! the rest are ordered and truncated.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::AppError;
pub use model::item::{FridgeItem, ItemId, Presence};
pub use model::scores::{MatchKind, ScoredMatch, Suggestions};
pub use model::thresholds::{RankOrder, ScoringProfile};
pub use pipeline::stage1_normalize::{NameIndex, normalize_name};
pub use pipeline::stage2_score::{edit_distance, levenshtein_ratio, score_pair, similarity};
pub use pipeline::stage3_rank::{MatchError, rank_similar};
pub use pipeline::stage4_suggest::suggest;
