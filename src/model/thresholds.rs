use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order applied before truncating to `max_results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankOrder {
    /// Ascending by score: keeps the least similar entries above the cutoff.
    Legacy,
    /// Descending by score.
    BestFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringProfile {
    pub exact_score: f32,
    pub prefix_score: f32,
    pub suffix_score: f32,
    pub substitution_cost: usize,
    pub indel_cost: usize,
    pub cutoff: f32,
    pub max_results: usize,
    pub rank_order: RankOrder,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// Partial profile as read from disk; unset fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverrides {
    pub exact_score: Option<f32>,
    pub prefix_score: Option<f32>,
    pub suffix_score: Option<f32>,
    pub substitution_cost: Option<usize>,
    pub indel_cost: Option<usize>,
    pub cutoff: Option<f32>,
    pub max_results: Option<usize>,
    pub rank_order: Option<RankOrder>,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            exact_score: 1.0,
            prefix_score: 0.75,
            suffix_score: 0.5,
            substitution_cost: 2,
            indel_cost: 1,
            cutoff: 0.45,
            max_results: 6,
            rank_order: RankOrder::Legacy,
        }
    }

    pub fn best_first_v1() -> Self {
        let mut base = Self::default_v1();
        base.rank_order = RankOrder::BestFirst;
        base
    }

    pub fn apply(&mut self, overrides: &ProfileOverrides) {
        if let Some(v) = overrides.exact_score {
            self.exact_score = v;
        }
        if let Some(v) = overrides.prefix_score {
            self.prefix_score = v;
        }
        if let Some(v) = overrides.suffix_score {
            self.suffix_score = v;
        }
        if let Some(v) = overrides.substitution_cost {
            self.substitution_cost = v;
        }
        if let Some(v) = overrides.indel_cost {
            self.indel_cost = v;
        }
        if let Some(v) = overrides.cutoff {
            self.cutoff = v;
        }
        if let Some(v) = overrides.max_results {
            self.max_results = v;
        }
        if let Some(v) = overrides.rank_order {
            self.rank_order = v;
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let unit = |name: &str, v: f32| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ProfileError::Invalid(format!(
                    "{name} must be within [0, 1], got {v}"
                )))
            }
        };
        unit("exact_score", self.exact_score)?;
        unit("prefix_score", self.prefix_score)?;
        unit("suffix_score", self.suffix_score)?;
        unit("cutoff", self.cutoff)?;
        if self.max_results == 0 {
            return Err(ProfileError::Invalid(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.indel_cost == 0 || self.substitution_cost == 0 {
            return Err(ProfileError::Invalid(
                "edit costs must be at least 1".to_string(),
            ));
        }
        // Keeps the edit ratio within [0, 1].
        if self.substitution_cost > 2 * self.indel_cost {
            return Err(ProfileError::Invalid(format!(
                "substitution_cost ({}) must not exceed twice indel_cost ({})",
                self.substitution_cost, self.indel_cost
            )));
        }
        Ok(())
    }
}

pub fn load_overrides(path: &Path) -> Result<ProfileOverrides, ProfileError> {
    let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
