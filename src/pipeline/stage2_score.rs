use crate::model::scores::MatchKind;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_normalize::normalize_name;

/// Weighted edit distance over chars: insert/delete cost `indel_cost`,
/// substitution `substitution_cost`.
pub fn edit_distance(a: &str, b: &str, profile: &ScoringProfile) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let indel = profile.indel_cost;
    let sub = profile.substitution_cost;

    if a.is_empty() {
        return b.len() * indel;
    }
    if b.is_empty() {
        return a.len() * indel;
    }

    let mut prev: Vec<usize> = (0..=b.len()).map(|j| j * indel).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i * indel;
        for j in 1..=b.len() {
            let replace = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                prev[j - 1] + sub
            };
            curr[j] = replace.min(prev[j] + indel).min(curr[j - 1] + indel);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `(total - distance) / total`, where `total` is the cost of deleting
/// all of `a` and inserting all of `b`.
pub fn levenshtein_ratio(a: &str, b: &str, profile: &ScoringProfile) -> f32 {
    let total = (a.chars().count() + b.chars().count()) * profile.indel_cost;
    if total == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b, profile).min(total);
    (total - distance) as f32 / total as f32
}

/// Scores two names that are already normalized.
pub fn score_normalized(query: &str, candidate: &str, profile: &ScoringProfile) -> (f32, MatchKind) {
    if candidate == query {
        (profile.exact_score, MatchKind::Exact)
    } else if candidate.starts_with(query) {
        (profile.prefix_score, MatchKind::Prefix)
    } else if candidate.ends_with(query) {
        (profile.suffix_score, MatchKind::Suffix)
    } else {
        (levenshtein_ratio(query, candidate, profile), MatchKind::Edit)
    }
}

pub fn score_pair(query: &str, candidate: &str, profile: &ScoringProfile) -> (f32, MatchKind) {
    score_normalized(&normalize_name(query), &normalize_name(candidate), profile)
}

/// Similarity of `candidate` to `query` under the default profile.
///
/// Not symmetric: the prefix and suffix rules test `candidate` against `query`.
pub fn similarity(query: &str, candidate: &str) -> f32 {
    score_pair(query, candidate, &ScoringProfile::default_v1()).0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
